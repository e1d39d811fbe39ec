use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    errors::LedgerError,
    tenancy::{Receipt, Tenant},
};

use super::billing_period::{periods_between, BillingPeriod};

/// Classification of a single billing period's payment position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Missing,
    Partial,
    Paid,
    PaidOver,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Missing => "Missing",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::PaidOver => "Paid (Over)",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One reconciled month of the rent ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub period: BillingPeriod,
    pub base_rent: f64,
    pub paid: f64,
    /// This period's shortfall, zero when fully paid or overpaid.
    pub arrears: f64,
    /// This period's overpayment, zero otherwise.
    pub credit: f64,
    /// Cumulative arrears minus cumulative credit up to and including this
    /// period, floored at zero.
    pub running_net_balance: f64,
    pub status: PaymentStatus,
}

/// Whole-ledger totals, netted only at read time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerSummary {
    pub total_arrears: f64,
    pub total_credit: f64,
    pub net_balance: f64,
}

/// Full reconciliation result for one tenant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentLedger {
    pub entries: Vec<LedgerEntry>,
    pub totals: LedgerSummary,
}

#[derive(Debug, Clone, Copy, Default)]
struct Carry {
    arrears: f64,
    credit: f64,
}

impl Carry {
    fn net(&self) -> f64 {
        (self.arrears - self.credit).max(0.0)
    }
}

/// Reconstructs the month-by-month rent ledger from lease inception through
/// the `as_of` month, inclusive.
///
/// Receipts must already be filtered to this tenant; a foreign `tenant_id`
/// is rejected instead of silently skipped so collaborator bugs surface
/// early. Arrears and credit accumulate independently across the timeline:
/// later credit lowers the running net balance but never rewrites an earlier
/// period's recorded status or arrears.
pub fn build_ledger(
    tenant: &Tenant,
    receipts: &[Receipt],
    as_of: NaiveDate,
) -> Result<RentLedger, LedgerError> {
    let paid_by_period = sum_receipts(tenant, receipts)?;
    let periods = periods_between(tenant.lease_start(as_of), as_of);

    let entries: Vec<LedgerEntry> = periods
        .into_iter()
        .scan(Carry::default(), |carry, period| {
            let base_rent = tenant.rent;
            let paid = paid_by_period.get(&period.key()).copied().unwrap_or(0.0);
            let (status, arrears, credit) = classify(base_rent, paid);
            carry.arrears += arrears;
            carry.credit += credit;
            Some(LedgerEntry {
                period,
                base_rent,
                paid,
                arrears,
                credit,
                running_net_balance: carry.net(),
                status,
            })
        })
        .collect();

    let totals = totals_of(&entries);
    Ok(RentLedger { entries, totals })
}

/// Sums receipt amounts per billing period key. All receipts sharing a
/// period key contribute additively to that period's paid total.
fn sum_receipts(tenant: &Tenant, receipts: &[Receipt]) -> Result<HashMap<String, f64>, LedgerError> {
    let mut merged: HashMap<String, f64> = HashMap::new();
    for receipt in receipts {
        if receipt.tenant_id != tenant.id {
            return Err(LedgerError::ForeignReceipt {
                receipt: receipt.id,
                expected: tenant.id,
                found: receipt.tenant_id,
            });
        }
        *merged.entry(receipt.period_key.clone()).or_insert(0.0) += receipt.amount;
    }
    Ok(merged)
}

fn classify(base_rent: f64, paid: f64) -> (PaymentStatus, f64, f64) {
    if paid == 0.0 {
        (PaymentStatus::Missing, base_rent, 0.0)
    } else if paid < base_rent {
        (PaymentStatus::Partial, base_rent - paid, 0.0)
    } else if paid == base_rent {
        (PaymentStatus::Paid, 0.0, 0.0)
    } else {
        (PaymentStatus::PaidOver, 0.0, paid - base_rent)
    }
}

fn totals_of(entries: &[LedgerEntry]) -> LedgerSummary {
    let total_arrears: f64 = entries.iter().map(|entry| entry.arrears).sum();
    let total_credit: f64 = entries.iter().map(|entry| entry.credit).sum();
    LedgerSummary {
        total_arrears,
        total_credit,
        net_balance: (total_arrears - total_credit).max(0.0),
    }
}
