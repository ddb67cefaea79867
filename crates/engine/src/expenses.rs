//! The module contains `Expense` struct and its implementation.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};

use crate::{EngineError, ResultEngine};

/// A single spending record.
///
/// `id` is `None` until the expense has been stored. `created_at` is stamped
/// when the value is built and never changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: Option<i64>,
    pub title: String,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        title: String,
        amount: Option<f64>,
        category: Option<String>,
        date: Option<NaiveDate>,
        note: Option<String>,
    ) -> Self {
        Self {
            id: None,
            title,
            amount,
            category,
            date,
            note,
            created_at: Utc::now(),
        }
    }

    /// Overwrite every editable field with the candidate's value.
    ///
    /// Fields missing from the candidate become `None` here as well; `id` and
    /// `created_at` are left untouched.
    pub fn apply_update(&mut self, candidate: Expense) {
        self.title = candidate.title;
        self.amount = candidate.amount;
        self.category = candidate.category;
        self.date = candidate.date;
        self.note = candidate.note;
    }
}

/// Fields supplied by a caller to create or update an expense.
///
/// Unlike [`Expense`] the title may be missing; it is only checked once the
/// target of an update has been resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseDraft {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub note: Option<String>,
}

impl ExpenseDraft {
    /// Build an [`Expense`] stamped now, carrying the draft's id.
    pub fn into_expense(self) -> ResultEngine<Expense> {
        let title = self
            .title
            .ok_or_else(|| EngineError::MissingField("title".to_string()))?;
        let mut expense = Expense::new(title, self.amount, self.category, self.date, self.note);
        expense.id = self.id;
        Ok(expense)
    }
}

impl From<Expense> for ExpenseDraft {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            title: Some(expense.title),
            amount: expense.amount,
            category: expense.category,
            date: expense.date,
            note: expense.note,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Expense> for ActiveModel {
    fn from(expense: &Expense) -> Self {
        Self {
            id: match expense.id {
                Some(id) => ActiveValue::Set(id),
                None => ActiveValue::NotSet,
            },
            title: ActiveValue::Set(expense.title.clone()),
            amount: ActiveValue::Set(expense.amount),
            category: ActiveValue::Set(expense.category.clone()),
            date: ActiveValue::Set(expense.date),
            note: ActiveValue::Set(expense.note.clone()),
            created_at: ActiveValue::Set(expense.created_at),
        }
    }
}

impl From<Model> for Expense {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            amount: model.amount,
            category: model.category,
            date: model.date,
            note: model.note,
            created_at: model.created_at,
        }
    }
}
