//! Ties the write path to summary recomputation.

use std::sync::Arc;

use crate::core::clock::Clock;
use crate::core::coordinator::SummaryHandle;
use crate::core::fingerprint::Fingerprint;
use crate::core::services::expense_service::ExpenseService;
use crate::domain::{ExpenseDraft, ExpenseId};
use crate::errors::Result;
use crate::storage::ExpenseStore;

/// Application-facing entry point for recording expenses.
///
/// Adding an expense validates, writes through the store, then notifies
/// the summary coordinator with the collection's new fingerprint so stale
/// aggregates are recomputed before the next read. A failed write sends
/// no notification and leaves published aggregates untouched.
pub struct ExpenseBook<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    summaries: SummaryHandle,
}

impl<S: ExpenseStore> ExpenseBook<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>, summaries: SummaryHandle) -> Self {
        Self {
            store,
            clock,
            summaries,
        }
    }

    /// Records a new expense and triggers summary recomputation.
    pub fn add_expense(&self, draft: ExpenseDraft) -> Result<ExpenseId> {
        let id = ExpenseService::add(self.store.as_ref(), self.clock.as_ref(), draft)?;
        let fingerprint = Fingerprint::of(&self.store.list_all());
        self.summaries.notify_changed(fingerprint);
        Ok(id)
    }
}
