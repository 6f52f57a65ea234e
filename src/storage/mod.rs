pub mod memory;

use std::collections::HashSet;

use crate::domain::{Category, Expense, ExpenseId};
use crate::errors::Result;

pub use memory::MemoryStore;

/// Abstraction over the persistence substrate that owns expense records.
///
/// The store assigns identity: `insert` returns the id given to the
/// record. `list_all` carries no ordering contract, though backends are
/// expected to list in insertion order so change detection can sample the
/// most recent records. `list_categories` includes hidden categories so
/// historical records keep resolving.
pub trait ExpenseStore: Send + Sync {
    fn insert(&self, expense: Expense) -> Result<ExpenseId>;
    fn list_all(&self) -> Vec<Expense>;
    fn list_categories(&self) -> Vec<Category>;
}

/// Reports expenses whose category no longer exists in the category list.
///
/// A dangling reference is a data-quality note, not an error: the amount
/// still counts toward daily totals but drops out of category totals.
pub fn store_warnings(expenses: &[Expense], categories: &[Category]) -> Vec<String> {
    let known: HashSet<_> = categories.iter().map(|category| category.id).collect();
    let mut warnings = Vec::new();
    for expense in expenses {
        if !known.contains(&expense.category_id) {
            warnings.push(format!(
                "expense {} references unknown category {}",
                expense.id, expense.category_id
            ));
        }
    }
    warnings
}
