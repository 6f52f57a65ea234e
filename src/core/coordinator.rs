//! Orchestrates recomputation and publication of month summaries.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task;
use tracing::{debug, error, info};

use crate::core::cache::{MonthSnapshot, SummaryCache};
use crate::core::fingerprint::Fingerprint;
use crate::core::services::summary_service::{CategoryTotals, DailyTotals};
use crate::domain::MonthKey;
use crate::storage::ExpenseStore;

/// Change notification consumed by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryEvent {
    /// The user selected another calendar month.
    MonthSelected(MonthKey),
    /// The expense collection changed; carries the new fingerprint.
    DataChanged(Fingerprint),
    /// Explicit refresh request from the presentation layer.
    Refresh,
}

/// Presentation-side handle: sends events, observes published totals.
#[derive(Debug, Clone)]
pub struct SummaryHandle {
    events: mpsc::UnboundedSender<SummaryEvent>,
    daily: watch::Receiver<DailyTotals>,
    categories: watch::Receiver<CategoryTotals>,
}

impl SummaryHandle {
    pub fn select_month(&self, month: MonthKey) {
        self.send(SummaryEvent::MonthSelected(month));
    }

    pub fn notify_changed(&self, fingerprint: Fingerprint) {
        self.send(SummaryEvent::DataChanged(fingerprint));
    }

    pub fn refresh(&self) {
        self.send(SummaryEvent::Refresh);
    }

    /// Watch channel carrying the daily totals surface.
    pub fn daily(&self) -> watch::Receiver<DailyTotals> {
        self.daily.clone()
    }

    /// Watch channel carrying the category totals surface.
    pub fn categories(&self) -> watch::Receiver<CategoryTotals> {
        self.categories.clone()
    }

    fn send(&self, event: SummaryEvent) {
        if let Err(err) = self.events.send(event) {
            debug!(event = ?err.0, "summary coordinator is gone, dropping event");
        }
    }
}

/// Recomputes month summaries off the interactive thread and publishes
/// them to watch channels.
///
/// One instance owns the cache state for its surfaces. At most one
/// recomputation is in flight; events arriving meanwhile queue behind it
/// and the month/fingerprint guards then collapse redundant requests into
/// no-ops. A published snapshot always belongs to the currently selected
/// month, and both surfaces always publish from the same snapshot, so no
/// partial aggregates are observable.
pub struct SummaryCoordinator<S> {
    store: Arc<S>,
    month: MonthKey,
    cache: SummaryCache,
    events: mpsc::UnboundedReceiver<SummaryEvent>,
    daily_tx: watch::Sender<DailyTotals>,
    category_tx: watch::Sender<CategoryTotals>,
}

impl<S: ExpenseStore + 'static> SummaryCoordinator<S> {
    /// Builds a coordinator over the given store, starting at `month`.
    pub fn new(store: Arc<S>, month: MonthKey) -> (Self, SummaryHandle) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (daily_tx, daily_rx) = watch::channel(DailyTotals {
            by_day: BTreeMap::new(),
            is_computing: true,
        });
        let (category_tx, category_rx) = watch::channel(CategoryTotals::default());
        let coordinator = Self {
            store,
            month,
            cache: SummaryCache::default(),
            events: events_rx,
            daily_tx,
            category_tx,
        };
        let handle = SummaryHandle {
            events: events_tx,
            daily: daily_rx,
            categories: category_rx,
        };
        (coordinator, handle)
    }

    /// Runs until every handle is dropped. Publishes an initial snapshot,
    /// then reacts to incoming events.
    pub async fn run(mut self) {
        self.recompute().await;
        while let Some(event) = self.events.recv().await {
            match event {
                SummaryEvent::MonthSelected(month) if month != self.month => {
                    info!(%month, "month selection changed");
                    self.month = month;
                    self.recompute().await;
                }
                SummaryEvent::MonthSelected(_) => {}
                SummaryEvent::DataChanged(fingerprint)
                    if self.cache.fingerprint() == Some(fingerprint) =>
                {
                    debug!("collection fingerprint unchanged, skipping recompute");
                }
                SummaryEvent::DataChanged(_) | SummaryEvent::Refresh => self.recompute().await,
            }
        }
    }

    async fn recompute(&mut self) {
        self.daily_tx
            .send_modify(|totals| totals.is_computing = true);

        let month = self.month;
        let store = Arc::clone(&self.store);
        let mut cache = std::mem::take(&mut self.cache);
        let computed = task::spawn_blocking(move || {
            let expenses = store.list_all();
            let categories = store.list_categories();
            let snapshot = cache.refresh(month, &expenses, &categories).clone();
            (cache, snapshot)
        })
        .await;

        match computed {
            Ok((cache, snapshot)) => {
                self.cache = cache;
                self.publish(snapshot);
            }
            Err(err) => {
                error!(%err, "summary recomputation task failed");
                self.daily_tx
                    .send_modify(|totals| totals.is_computing = false);
            }
        }
    }

    fn publish(&self, snapshot: MonthSnapshot) {
        debug!(
            month = %snapshot.month,
            days = snapshot.by_day.len(),
            "publishing month summary"
        );
        self.daily_tx.send_replace(DailyTotals {
            by_day: snapshot.by_day,
            is_computing: false,
        });
        self.category_tx.send_replace(snapshot.categories);
    }
}
