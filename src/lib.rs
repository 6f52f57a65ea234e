#![doc(test(attr(deny(warnings))))]

//! Kakeibo Core provides the aggregation engine behind a personal expense
//! tracker: the expense and category domain model, month-scoped daily and
//! category totals, cheap change detection, and the coordinator that keeps
//! published summaries in step with mutations and month selection.

pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Kakeibo Core tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("kakeibo_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
