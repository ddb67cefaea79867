//! Keyed storage for expenses.

use sea_orm::{ConnectionTrait, prelude::*};

use crate::{Expense, ResultEngine, expenses};

/// Durable storage for [`Expense`] records, keyed by id.
///
/// The store borrows either a pooled connection or an open transaction, so
/// the caller decides the transactional scope. No validation happens here.
pub struct ExpenseStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ExpenseStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Every stored expense. Order is unspecified.
    pub async fn find_all(&self) -> ResultEngine<Vec<Expense>> {
        let models = expenses::Entity::find().all(self.conn).await?;
        Ok(models.into_iter().map(Expense::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> ResultEngine<Option<Expense>> {
        let model = expenses::Entity::find_by_id(id).one(self.conn).await?;
        Ok(model.map(Expense::from))
    }

    /// Persist `expense` and return the stored row.
    ///
    /// Without an id a fresh one is assigned. With an id the matching row is
    /// replaced, or inserted under that id when absent.
    pub async fn save(&self, expense: &Expense) -> ResultEngine<Expense> {
        let active = expenses::ActiveModel::from(expense);
        let exists = match expense.id {
            Some(id) => self.exists_by_id(id).await?,
            None => false,
        };
        let model = if exists {
            active.update(self.conn).await?
        } else {
            active.insert(self.conn).await?
        };
        Ok(Expense::from(model))
    }

    /// Remove the row with `id`. Missing rows are not an error.
    pub async fn delete_by_id(&self, id: i64) -> ResultEngine<()> {
        expenses::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(())
    }

    pub async fn exists_by_id(&self, id: i64) -> ResultEngine<bool> {
        Ok(expenses::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .is_some())
    }
}
