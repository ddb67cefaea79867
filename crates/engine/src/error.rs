//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when the requested expense does not exist.
//! - [`MissingId`] thrown when an update names no expense to change.
//! - [`MissingField`] thrown when a required field is absent.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`MissingId`]: EngineError::MissingId
//!  [`MissingField`]: EngineError::MissingField
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("no expense id in path or payload")]
    MissingId,
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::MissingId, Self::MissingId) => true,
            (Self::MissingField(a), Self::MissingField(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
