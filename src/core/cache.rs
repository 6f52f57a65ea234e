//! Month-scoped caching of filtered expenses and computed aggregates.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::core::fingerprint::Fingerprint;
use crate::core::services::summary_service::{CategoryTotals, SummaryService};
use crate::domain::{Category, Expense, MonthKey};

/// Aggregates of one month, computed from one fingerprint of the
/// collection. Both surfaces come from the same computation, so they are
/// mutually consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSnapshot {
    pub month: MonthKey,
    pub by_day: BTreeMap<String, f64>,
    pub categories: CategoryTotals,
}

/// Cached state for a summary surface: the filtered month expenses and
/// the aggregates computed from them.
///
/// Both layers key on the selected calendar month and the collection
/// fingerprint; either changing invalidates them. Staleness is resolved
/// eagerly inside [`SummaryCache::refresh`]: a caller never receives a
/// snapshot for an outdated fingerprint or another month.
#[derive(Debug, Default)]
pub struct SummaryCache {
    filtered: Option<FilteredMonth>,
    aggregate: Option<AggregateEntry>,
}

#[derive(Debug)]
struct FilteredMonth {
    month: MonthKey,
    fingerprint: Fingerprint,
    expenses: Vec<Expense>,
}

#[derive(Debug)]
struct AggregateEntry {
    fingerprint: Fingerprint,
    snapshot: MonthSnapshot,
}

impl SummaryCache {
    /// Fingerprint of the currently held snapshot, if any.
    pub fn fingerprint(&self) -> Option<Fingerprint> {
        self.aggregate.as_ref().map(|entry| entry.fingerprint)
    }

    /// Month of the currently held snapshot, if any.
    pub fn month(&self) -> Option<MonthKey> {
        self.aggregate.as_ref().map(|entry| entry.snapshot.month)
    }

    /// Returns the snapshot for `month` at the collection's current
    /// fingerprint, recomputing whatever turned stale.
    pub fn refresh(
        &mut self,
        month: MonthKey,
        expenses: &[Expense],
        categories: &[Category],
    ) -> &MonthSnapshot {
        let fingerprint = Fingerprint::of(expenses);

        let hit = self
            .aggregate
            .as_ref()
            .is_some_and(|entry| entry.snapshot.month == month && entry.fingerprint == fingerprint);

        if hit {
            debug!(%month, "aggregate cache hit");
        } else {
            let snapshot = self.rebuild(month, fingerprint, expenses, categories);
            self.aggregate = Some(AggregateEntry {
                fingerprint,
                snapshot,
            });
        }

        match &self.aggregate {
            Some(entry) => &entry.snapshot,
            None => unreachable!("aggregate entry was just ensured"),
        }
    }

    fn rebuild(
        &mut self,
        month: MonthKey,
        fingerprint: Fingerprint,
        expenses: &[Expense],
        categories: &[Category],
    ) -> MonthSnapshot {
        let reusable = self
            .filtered
            .as_ref()
            .is_some_and(|entry| entry.month == month && entry.fingerprint == fingerprint);
        if !reusable {
            debug!(%month, "month filter cache miss, refiltering");
            self.filtered = Some(FilteredMonth {
                month,
                fingerprint,
                expenses: SummaryService::filter_month(expenses, month),
            });
        }
        let month_expenses = self
            .filtered
            .as_ref()
            .map(|entry| entry.expenses.as_slice())
            .unwrap_or(&[]);

        MonthSnapshot {
            month,
            by_day: SummaryService::daily_totals(month_expenses),
            categories: SummaryService::category_totals(month_expenses, categories),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{Category, Expense, DEFAULT_USER_ID};

    fn expense(id: i64, amount: f64, m: u32, d: u32) -> Expense {
        Expense {
            id,
            amount,
            date: NaiveDate::from_ymd_opt(2025, m, d)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            note: String::new(),
            category_id: 1,
            user_id: DEFAULT_USER_ID,
        }
    }

    fn categories() -> Vec<Category> {
        vec![Category::new(1, "Food", "utensils", "#e53935")]
    }

    fn month(m: u32) -> MonthKey {
        MonthKey::new(2025, m).unwrap()
    }

    #[test]
    fn repeated_refresh_returns_identical_snapshot() {
        let expenses = vec![expense(1, 1000.0, 7, 1)];
        let mut cache = SummaryCache::default();
        let first = cache.refresh(month(7), &expenses, &categories()).clone();
        let second = cache.refresh(month(7), &expenses, &categories()).clone();
        assert_eq!(first, second);
        assert_eq!(cache.fingerprint(), Some(Fingerprint::of(&expenses)));
    }

    #[test]
    fn month_change_never_reuses_previous_month_aggregates() {
        let expenses = vec![expense(1, 1000.0, 7, 1)];
        let mut cache = SummaryCache::default();

        let july = cache.refresh(month(7), &expenses, &categories()).clone();
        assert_eq!(july.by_day["2025-07-01"], 1000.0);

        let august = cache.refresh(month(8), &expenses, &categories()).clone();
        assert_eq!(august.month, month(8));
        assert!(august.by_day.is_empty());
        assert_eq!(cache.month(), Some(month(8)));
    }

    #[test]
    fn data_change_invalidates_aggregates() {
        let mut expenses = vec![expense(1, 1000.0, 7, 1)];
        let mut cache = SummaryCache::default();
        cache.refresh(month(7), &expenses, &categories());

        expenses.push(expense(2, 500.0, 7, 2));
        let updated = cache.refresh(month(7), &expenses, &categories()).clone();
        assert_eq!(updated.by_day.len(), 2);
        assert_eq!(updated.categories.grand_total, 1500.0);
    }

    #[test]
    fn snapshot_surfaces_are_mutually_consistent() {
        let expenses = vec![
            expense(1, 1000.0, 7, 1),
            expense(2, 500.0, 7, 15),
            expense(3, 2000.0, 8, 1),
        ];
        let mut cache = SummaryCache::default();
        let snapshot = cache.refresh(month(7), &expenses, &categories());
        let daily_sum: f64 = snapshot.by_day.values().sum();
        assert_eq!(daily_sum, snapshot.categories.grand_total);
    }
}
