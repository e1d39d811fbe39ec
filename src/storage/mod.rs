//! JSON snapshot persistence for roster and payment records.
//!
//! The hosted store remains the source of truth; this module only reads and
//! writes the consistent point-in-time snapshots the ledger core consumes.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::LedgerError,
    tenancy::{Receipt, Tenant},
};

/// Consistent point-in-time view of the roster and payments stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub tenants: Vec<Tenant>,
    #[serde(default)]
    pub receipts: Vec<Receipt>,
}

impl DashboardSnapshot {
    /// Receipts recorded against the given tenant, in store order. This is
    /// the pre-filtering step the ledger builder's caller contract requires.
    pub fn receipts_for(&self, tenant_id: Uuid) -> Vec<Receipt> {
        self.receipts
            .iter()
            .filter(|receipt| receipt.tenant_id == tenant_id)
            .cloned()
            .collect()
    }
}

/// Writes the snapshot to disk atomically by staging to a temporary file.
pub fn save_snapshot(snapshot: &DashboardSnapshot, path: &Path) -> Result<(), LedgerError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a snapshot from disk, returning structured errors on failure.
pub fn load_snapshot(path: &Path) -> Result<DashboardSnapshot, LedgerError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
