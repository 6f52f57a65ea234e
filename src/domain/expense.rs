use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, CategoryId, ExpenseId, UserId, DEFAULT_USER_ID};
use crate::errors::{ExpenseError, Result};

/// Upper bound accepted for a single expense amount.
pub const MAX_AMOUNT: f64 = 99_999_999_999.0;

/// Maximum note length in characters after trimming.
pub const NOTE_LIMIT: usize = 100;

/// A persisted expense record.
///
/// Identity lives in `id` alone: two values with the same id compare equal
/// and hash identically even when other fields differ. Containers keyed by
/// expense therefore must not be relied on to preserve field values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub amount: f64,
    pub date: NaiveDateTime,
    pub note: String,
    pub category_id: CategoryId,
    pub user_id: UserId,
}

impl PartialEq for Expense {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Expense {}

impl Hash for Expense {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Expense {
    /// Calendar day of the expense. Time-of-day is stored but carries no
    /// meaning for aggregation.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }
}

/// A not-yet-persisted expense as captured from user input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub date: NaiveDateTime,
    pub note: String,
    pub category_id: CategoryId,
    pub user_id: UserId,
}

impl ExpenseDraft {
    pub fn new(
        amount: f64,
        date: NaiveDateTime,
        note: impl Into<String>,
        category_id: CategoryId,
    ) -> Self {
        Self {
            amount,
            date,
            note: note.into(),
            category_id,
            user_id: DEFAULT_USER_ID,
        }
    }

    /// Checks the draft against the write-boundary invariants and produces
    /// the record handed to the store, id still unset.
    ///
    /// The category check runs against the currently visible entries of
    /// `categories`; hidden ones are not offered for new expenses.
    pub fn validate(self, categories: &[Category], today: NaiveDate) -> Result<Expense> {
        if !(self.amount > 0.0 && self.amount <= MAX_AMOUNT) {
            return Err(ExpenseError::InvalidAmount(self.amount.to_string()));
        }
        if self.date.date() > today {
            return Err(ExpenseError::FutureDate(self.date.date()));
        }
        if !categories
            .iter()
            .any(|category| category.visible && category.id == self.category_id)
        {
            return Err(ExpenseError::CategoryNotVisible(self.category_id));
        }
        Ok(Expense {
            id: 0,
            amount: self.amount,
            date: self.date,
            note: shape_note(&self.note),
            category_id: self.category_id,
            user_id: self.user_id,
        })
    }
}

/// Trims surrounding whitespace and silently cuts the note to its first
/// [`NOTE_LIMIT`] characters. Over-long notes are shaped, never rejected.
pub fn shape_note(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.chars().count() <= NOTE_LIMIT {
        trimmed.to_string()
    } else {
        trimmed.chars().take(NOTE_LIMIT).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::domain::Category;
    use crate::errors::ExpenseError;

    fn categories() -> Vec<Category> {
        vec![
            Category::new(1, "Food", "utensils", "#e53935"),
            Category::new(2, "Hobby", "gamepad", "#8e24aa").hidden(),
        ]
    }

    fn draft(amount: f64) -> ExpenseDraft {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        ExpenseDraft::new(amount, date, "lunch", 1)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
    }

    #[test]
    fn accepts_amount_at_upper_bound() {
        let expense = draft(MAX_AMOUNT).validate(&categories(), today()).unwrap();
        assert_eq!(expense.amount, MAX_AMOUNT);
        assert_eq!(expense.id, 0);
        assert_eq!(expense.user_id, DEFAULT_USER_ID);
    }

    #[test]
    fn rejects_non_positive_amounts() {
        for amount in [0.0, -1.0, f64::NAN] {
            let result = draft(amount).validate(&categories(), today());
            assert!(matches!(result, Err(ExpenseError::InvalidAmount(_))));
        }
    }

    #[test]
    fn rejects_amount_above_upper_bound() {
        let result = draft(MAX_AMOUNT + 1.0).validate(&categories(), today());
        assert!(matches!(result, Err(ExpenseError::InvalidAmount(_))));
    }

    #[test]
    fn accepts_expense_dated_today() {
        let date = today().and_hms_opt(23, 59, 0).unwrap();
        let draft = ExpenseDraft::new(100.0, date, "", 1);
        assert!(draft.validate(&categories(), today()).is_ok());
    }

    #[test]
    fn rejects_future_date() {
        let tomorrow = today().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap();
        let draft = ExpenseDraft::new(100.0, tomorrow, "", 1);
        let result = draft.validate(&categories(), today());
        assert!(matches!(result, Err(ExpenseError::FutureDate(_))));
    }

    #[test]
    fn rejects_hidden_category() {
        let date = today().and_hms_opt(8, 0, 0).unwrap();
        let draft = ExpenseDraft::new(100.0, date, "", 2);
        let result = draft.validate(&categories(), today());
        assert!(matches!(result, Err(ExpenseError::CategoryNotVisible(2))));
    }

    #[test]
    fn rejects_unknown_category() {
        let date = today().and_hms_opt(8, 0, 0).unwrap();
        let draft = ExpenseDraft::new(100.0, date, "", 99);
        let result = draft.validate(&categories(), today());
        assert!(matches!(result, Err(ExpenseError::CategoryNotVisible(99))));
    }

    #[test]
    fn note_is_trimmed_and_truncated_to_one_hundred_chars() {
        let long = format!("  {}  ", "x".repeat(150));
        let expense = ExpenseDraft::new(100.0, draft(1.0).date, long, 1)
            .validate(&categories(), today())
            .unwrap();
        assert_eq!(expense.note.chars().count(), 100);
        assert_eq!(expense.note, "x".repeat(100));
    }

    #[test]
    fn note_truncation_respects_character_boundaries() {
        let long = "é".repeat(150);
        assert_eq!(shape_note(&long), "é".repeat(100));
    }

    #[test]
    fn short_note_passes_unchanged() {
        assert_eq!(shape_note(" coffee "), "coffee");
    }

    #[test]
    fn equality_and_hash_use_id_alone() {
        let a = draft(100.0).validate(&categories(), today()).unwrap();
        let mut b = a.clone();
        b.id = 7;
        b.amount = 999.0;
        let mut c = a.clone();
        c.id = 7;

        assert_eq!(b, c);
        assert_ne!(a, b);

        let set: HashSet<Expense> = [b, c].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
