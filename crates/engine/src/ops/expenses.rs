use sea_orm::TransactionTrait;

use crate::{EngineError, Expense, ExpenseDraft, ExpenseStore, ResultEngine};

use super::{Engine, with_tx};

fn not_found(id: i64) -> EngineError {
    EngineError::KeyNotFound(format!("expense {id}"))
}

impl Engine {
    /// Return every stored expense, unfiltered and in no particular order.
    pub async fn list_expenses(&self) -> ResultEngine<Vec<Expense>> {
        ExpenseStore::new(&self.database).find_all().await
    }

    /// Return the expense with `id`.
    pub async fn expense(&self, id: i64) -> ResultEngine<Expense> {
        ExpenseStore::new(&self.database)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Store `draft` as a new record.
    ///
    /// Any id carried by the caller is discarded first, so a create never
    /// overwrites an existing record.
    pub async fn create_expense(&self, draft: impl Into<ExpenseDraft>) -> ResultEngine<Expense> {
        let mut expense = draft.into().into_expense()?;
        expense.id = None;
        ExpenseStore::new(&self.database).save(&expense).await
    }

    /// Overwrite the editable fields of an existing expense.
    ///
    /// The target is `target` when given, otherwise the draft's own id. A
    /// missing target is reported before a missing record, and both before
    /// any field of the draft is looked at. Every editable field is
    /// replaced, so a `None` in the draft clears the stored value.
    pub async fn update_expense(
        &self,
        target: Option<i64>,
        draft: impl Into<ExpenseDraft>,
    ) -> ResultEngine<Expense> {
        let draft = draft.into();
        let id = target.or(draft.id).ok_or(EngineError::MissingId)?;
        with_tx!(self, |db_tx| {
            let store = ExpenseStore::new(&db_tx);
            let mut existing = store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
            existing.apply_update(draft.into_expense()?);
            store.save(&existing).await
        })
    }

    /// Delete the expense with `id`.
    pub async fn delete_expense(&self, id: i64) -> ResultEngine<()> {
        with_tx!(self, |db_tx| {
            let store = ExpenseStore::new(&db_tx);
            if !store.exists_by_id(id).await? {
                return Err(not_found(id));
            }
            store.delete_by_id(id).await
        })
    }
}
