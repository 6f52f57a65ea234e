//! In-memory reference backend for tests, benches, and embedders that
//! bring their own durable substrate.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{Category, Expense, ExpenseId};
use crate::errors::Result;
use crate::storage::ExpenseStore;

/// Expense store backed by process memory.
///
/// Appends are atomic at record granularity: a concurrent reader observes
/// the collection before or after an insert, never between.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    expenses: Vec<Expense>,
    categories: Vec<Category>,
    next_id: ExpenseId,
}

impl MemoryStore {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                expenses: Vec::new(),
                categories,
                next_id: 0,
            }),
        }
    }

    /// Replaces the category list, e.g. after upstream settings changes.
    pub fn set_categories(&self, categories: Vec<Category>) {
        self.lock().categories = categories;
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ExpenseStore for MemoryStore {
    fn insert(&self, mut expense: Expense) -> Result<ExpenseId> {
        let mut inner = self.lock();
        inner.next_id += 1;
        expense.id = inner.next_id;
        let id = expense.id;
        inner.expenses.push(expense);
        Ok(id)
    }

    fn list_all(&self) -> Vec<Expense> {
        self.lock().expenses.clone()
    }

    fn list_categories(&self) -> Vec<Category> {
        self.lock().categories.clone()
    }
}
