//! Pure reductions from the expense collection to per-month summaries.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;
use tracing::warn;

use crate::domain::{day_key, Category, CategoryId, Expense, MonthKey};

/// One row of the dense per-category summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category_id: CategoryId,
    pub name: String,
    pub amount: f64,
}

/// Daily totals surface published to presentation.
///
/// Sparse: days without expenses have no key. The map is ordered by day
/// key, which orders it by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    pub by_day: BTreeMap<String, f64>,
    pub is_computing: bool,
}

/// Category totals surface published to presentation.
///
/// Dense: one row per known category, descending by amount, ties in
/// category-list order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryTotals {
    pub rows: Vec<CategoryRow>,
    pub grand_total: f64,
}

/// Month-scoped reductions over the full record set.
pub struct SummaryService;

impl SummaryService {
    /// Restricts the collection to the expenses of the target month.
    /// All grouping operates on this subset.
    pub fn filter_month(expenses: &[Expense], month: MonthKey) -> Vec<Expense> {
        expenses
            .iter()
            .filter(|expense| month.contains(expense.day()))
            .cloned()
            .collect()
    }

    /// Groups month expenses by day key and sums amounts per day.
    pub fn daily_totals(month_expenses: &[Expense]) -> BTreeMap<String, f64> {
        let mut by_day = BTreeMap::new();
        for expense in month_expenses {
            *by_day.entry(day_key(expense.day())).or_insert(0.0) += expense.amount;
        }
        by_day
    }

    /// Sums month expenses per category, one row per known category.
    ///
    /// The category list drives the iteration, so zero-total categories
    /// get a row and equal totals keep their list order under the stable
    /// descending sort. An expense pointing at an id missing from the
    /// list contributes to no row; it is logged and skipped here but
    /// still counts in [`SummaryService::daily_totals`].
    pub fn category_totals(month_expenses: &[Expense], categories: &[Category]) -> CategoryTotals {
        let known: HashSet<CategoryId> = categories.iter().map(|category| category.id).collect();
        let mut sums: HashMap<CategoryId, f64> = HashMap::new();
        for expense in month_expenses {
            if known.contains(&expense.category_id) {
                *sums.entry(expense.category_id).or_insert(0.0) += expense.amount;
            } else {
                warn!(
                    expense_id = expense.id,
                    category_id = expense.category_id,
                    "expense references a category missing from the category list; \
                     amount excluded from category totals"
                );
            }
        }

        let mut rows: Vec<CategoryRow> = categories
            .iter()
            .map(|category| CategoryRow {
                category_id: category.id,
                name: category.name.clone(),
                amount: sums.get(&category.id).copied().unwrap_or(0.0),
            })
            .collect();
        // Vec::sort_by is stable; ties keep category-list order.
        rows.sort_by(|a, b| b.amount.total_cmp(&a.amount));

        let grand_total = rows.iter().map(|row| row.amount).sum();
        CategoryTotals { rows, grand_total }
    }
}
