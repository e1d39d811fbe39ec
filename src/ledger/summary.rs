use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::LedgerError,
    tenancy::{Receipt, Tenant},
};

use super::builder::build_ledger;

/// Roster-level payment standing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TenantStanding {
    UpToDate,
    HasArrears,
}

impl TenantStanding {
    pub fn label(&self) -> &'static str {
        match self {
            TenantStanding::UpToDate => "Up to Date",
            TenantStanding::HasArrears => "Has Arrears",
        }
    }
}

impl fmt::Display for TenantStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Single-row snapshot of a tenant's payment position for roster views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TenantSummary {
    pub tenant_id: Uuid,
    pub tenant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub total_paid: f64,
    pub net_balance: f64,
    pub latest_paid_date: Option<NaiveDate>,
    pub standing: TenantStanding,
}

/// Reduces a tenant's full ledger to a single roster row.
///
/// The most recent payment is found by comparing paid dates rather than
/// trusting input order, so callers may supply receipts in any order.
pub fn project_summary(
    tenant: &Tenant,
    receipts: &[Receipt],
    as_of: NaiveDate,
) -> Result<TenantSummary, LedgerError> {
    let ledger = build_ledger(tenant, receipts, as_of)?;
    let net_balance = ledger.totals.net_balance;
    let standing = if net_balance == 0.0 {
        TenantStanding::UpToDate
    } else {
        TenantStanding::HasArrears
    };
    Ok(TenantSummary {
        tenant_id: tenant.id,
        tenant_name: tenant.name.clone(),
        unit: tenant.unit.clone(),
        total_paid: receipts.iter().map(|receipt| receipt.amount).sum(),
        net_balance,
        latest_paid_date: receipts.iter().map(|receipt| receipt.paid_date).max(),
        standing,
    })
}
