use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded rent payment, owned by the payments collaborator.
///
/// Several receipts may settle the same billing period; the ledger builder
/// sums them before classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub tenant_id: Uuid,
    /// Billing period this payment settles, e.g. `"March 2024"`.
    pub period_key: String,
    pub amount: f64,
    pub paid_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl Receipt {
    pub fn new(
        tenant_id: Uuid,
        period_key: impl Into<String>,
        amount: f64,
        paid_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            period_key: period_key.into(),
            amount,
            paid_date,
            method: None,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}
