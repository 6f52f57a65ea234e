//! Expense and category domain models and their invariants.

pub mod category;
pub mod expense;
pub mod month;

pub use category::{category_color, category_icon, Category};
pub use expense::{Expense, ExpenseDraft};
pub use month::{day_key, MonthKey};

/// Identity assigned by the store on insert; `0` until persisted.
pub type ExpenseId = i64;

pub type CategoryId = i64;

pub type UserId = i64;

/// Single-user scope today; records carry the owner for forward
/// compatibility.
pub const DEFAULT_USER_ID: UserId = 1;
