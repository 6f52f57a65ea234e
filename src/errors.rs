use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::CategoryId;

/// Error type covering the write boundary and the storage substrate.
///
/// Aggregation itself has no failure mode: given any well-formed expense
/// and category collection it produces a result.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Date {0} is in the future")]
    FutureDate(NaiveDate),
    #[error("Category {0} is not available for new expenses")]
    CategoryNotVisible(CategoryId),
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ExpenseError>;
