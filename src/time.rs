use chrono::{DateTime, NaiveDate, Utc};

/// Clock abstracts access to the current timestamp so ledger computations
/// remain deterministic in tests. Every reconciliation entry point takes an
/// explicit as-of date; callers derive it from a `Clock` rather than reading
/// the wall clock inside the core.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
