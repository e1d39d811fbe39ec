//! Rent ledger reconciliation: billing period expansion, payment
//! classification, carry-forward balances, aggregation, and roster
//! projections.

pub mod aggregate;
pub mod billing_period;
pub mod builder;
pub mod summary;

pub use aggregate::{aggregate, Granularity, PeriodStatus, PeriodSummary};
pub use billing_period::{periods_between, BillingPeriod};
pub use builder::{build_ledger, LedgerEntry, LedgerSummary, PaymentStatus, RentLedger};
pub use summary::{project_summary, TenantStanding, TenantSummary};
