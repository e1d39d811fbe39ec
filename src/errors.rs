use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Receipt {receipt} belongs to tenant {found}, expected {expected}")]
    ForeignReceipt {
        receipt: Uuid,
        expected: Uuid,
        found: Uuid,
    },
}
