use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{COLLECTION, router, run_with_listener, spawn_with_listener};

mod expenses;
mod server;

pub mod types {
    pub mod expense {
        pub use api_types::expense::{ExpensePayload, ExpenseView};
        pub use engine::Expense;
    }
}

/// Error returned by the expense handlers.
///
/// Missing records and malformed update requests answer with an empty body;
/// only server faults carry a JSON error message.
#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    Internal(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::MissingId | EngineError::MissingField(_) => StatusCode::BAD_REQUEST,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn internal_error(detail: &str) -> axum::response::Response {
    tracing::error!("{detail}");
    let error = "internal server error".to_string();
    (StatusCode::INTERNAL_SERVER_ERROR, Json(Error { error })).into_response()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ServerError::Engine(EngineError::Database(db_err)) => {
                internal_error(&format!("database error: {db_err}"))
            }
            ServerError::Engine(err) => {
                tracing::debug!("request rejected: {err}");
                status_for_engine_error(&err).into_response()
            }
            ServerError::Internal(detail) => internal_error(&detail),
        }
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
