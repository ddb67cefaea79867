use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub mod expense {
    use super::*;

    /// Request body for creating or updating an expense.
    ///
    /// `id` is ignored on create. On update it is only used when the path
    /// does not carry one. `title` is required by both, but an update checks
    /// it only after the target expense has been found.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpensePayload {
        #[serde(default)]
        pub id: Option<i64>,
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub amount: Option<f64>,
        #[serde(default)]
        pub category: Option<String>,
        /// Calendar date, `YYYY-MM-DD`.
        #[serde(default)]
        pub date: Option<NaiveDate>,
        #[serde(default)]
        pub note: Option<String>,
    }

    /// A persisted expense as returned by the API.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseView {
        pub id: i64,
        pub title: String,
        pub amount: Option<f64>,
        pub category: Option<String>,
        pub date: Option<NaiveDate>,
        pub note: Option<String>,
        /// RFC3339 timestamp of when the expense was first built.
        pub created_at: DateTime<Utc>,
    }
}

#[cfg(test)]
mod tests {
    use super::expense::*;

    #[test]
    fn payload_accepts_minimal_body() {
        let payload: ExpensePayload = serde_json::from_str(r#"{"title":"Coffee"}"#).unwrap();
        assert_eq!(payload.title.as_deref(), Some("Coffee"));
        assert_eq!(payload.id, None);
        assert_eq!(payload.amount, None);
        assert_eq!(payload.date, None);
    }

    #[test]
    fn payload_accepts_empty_body() {
        let payload: ExpensePayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, ExpensePayload::default());
    }

    #[test]
    fn payload_ignores_client_created_at() {
        let payload: ExpensePayload = serde_json::from_str(
            r#"{"id":7,"title":"Rent","amount":950.5,"date":"2024-01-02","createdAt":"2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(payload.id, Some(7));
        assert_eq!(payload.amount, Some(950.5));
        assert_eq!(payload.date.map(|d| d.to_string()).as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn view_serializes_camel_case() {
        let view = ExpenseView {
            id: 1,
            title: "Coffee".to_string(),
            amount: Some(3.5),
            category: None,
            date: None,
            note: None,
            created_at: chrono::DateTime::from_timestamp(0, 0).unwrap(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
        assert!(json["note"].is_null());
    }
}
