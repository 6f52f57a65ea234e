use chrono::{Local, NaiveDate};

/// Clock abstracts the current calendar day so validation stays
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Current local calendar day.
    fn today(&self) -> NaiveDate;
}

/// Real-time clock backed by the system local time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
