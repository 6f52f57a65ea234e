//! Cheap change detection over the expense collection.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::domain::Expense;

/// Number of most-recently-added expenses sampled into the fingerprint.
const SAMPLE_WINDOW: usize = 10;

/// Non-cryptographic summary of the expense collection, used to decide
/// whether cached aggregates are stale without comparing every record.
///
/// Folds the record count with the id, amount, and timestamp of the last
/// [`SAMPLE_WINDOW`] records in listed order. Appends and bulk reloads are
/// detected; an edit outside the sampled tail is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Computes the fingerprint of the collection as listed by the store.
    pub fn of(expenses: &[Expense]) -> Self {
        let mut hasher = DefaultHasher::new();
        expenses.len().hash(&mut hasher);
        let tail = expenses.len().saturating_sub(SAMPLE_WINDOW);
        for expense in &expenses[tail..] {
            expense.id.hash(&mut hasher);
            expense.amount.to_bits().hash(&mut hasher);
            expense.date.and_utc().timestamp().hash(&mut hasher);
        }
        Fingerprint(hasher.finish())
    }
}
