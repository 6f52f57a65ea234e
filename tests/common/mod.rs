#![allow(dead_code)]

use chrono::NaiveDate;
use kakeibo_core::domain::{Category, Expense, DEFAULT_USER_ID};

/// Category fixture with neutral presentation tags.
pub fn category(id: i64, name: &str) -> Category {
    Category::new(id, name, "tag", "#9e9e9e")
}

pub fn expense(id: i64, amount: f64, y: i32, m: u32, d: u32, category_id: i64) -> Expense {
    Expense {
        id,
        amount,
        date: NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
        note: String::new(),
        category_id,
        user_id: DEFAULT_USER_ID,
    }
}

/// The two-category reference configuration used across scenarios.
pub fn spec_categories() -> Vec<Category> {
    vec![category(1, "Food"), category(2, "Fun")]
}

/// Reference records decoded from their wire shape, covering two months.
pub fn spec_expenses() -> Vec<Expense> {
    serde_json::from_str(
        r#"[
            {"id": 1, "amount": 1000.0, "date": "2025-07-01T09:30:00",
             "note": "", "category_id": 1, "user_id": 1},
            {"id": 2, "amount": 500.0, "date": "2025-07-01T18:00:00",
             "note": "", "category_id": 2, "user_id": 1},
            {"id": 3, "amount": 2000.0, "date": "2025-08-01T12:00:00",
             "note": "", "category_id": 1, "user_id": 1}
        ]"#,
    )
    .expect("fixture expenses decode")
}
