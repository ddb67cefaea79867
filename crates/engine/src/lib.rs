//! Storage and request handling for expenses.
//!
//! [`ExpenseStore`] persists [`Expense`] records; [`Engine`] exposes the
//! list/get/create/update/delete operations on top of it.

pub use error::EngineError;
pub use expenses::{Expense, ExpenseDraft};
pub use ops::{Engine, EngineBuilder};
pub use store::ExpenseStore;

mod error;
pub mod expenses;
mod ops;
mod store;

type ResultEngine<T> = Result<T, EngineError>;
