//! Validated write path for expense records.

use tracing::info;

use crate::core::clock::Clock;
use crate::domain::{ExpenseDraft, ExpenseId};
use crate::errors::Result;
use crate::storage::ExpenseStore;

/// Provides the validated add flow for expense records.
pub struct ExpenseService;

impl ExpenseService {
    /// Validates a draft against the store's category list and the current
    /// day, then hands it to the store. Nothing reaches the store when
    /// validation fails, and a store failure leaves no partial record.
    pub fn add<S: ExpenseStore + ?Sized>(
        store: &S,
        clock: &dyn Clock,
        draft: ExpenseDraft,
    ) -> Result<ExpenseId> {
        let categories = store.list_categories();
        let expense = draft.validate(&categories, clock.today())?;
        let id = store.insert(expense)?;
        info!(expense_id = id, "expense recorded");
        Ok(id)
    }
}
