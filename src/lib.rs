#![doc(test(attr(deny(warnings))))]

//! Rental Core offers the rent ledger reconciliation primitives that power
//! property-management dashboards: month-by-month ledger reconstruction,
//! quarterly/annual aggregation, and roster-level tenant summaries.

pub mod errors;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod tenancy;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Rental Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
