use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const LEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Roster record for a leased unit. Owned by the roster collaborator; the
/// ledger core only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Monthly base rent. Must be non-negative; zero marks a complimentary
    /// unit. Negative rent is a caller error and is not validated here.
    pub rent: f64,
    /// Lease-begin date as stored (`YYYY-MM-DD`). May be absent or malformed;
    /// the ledger builder then treats the lease as beginning in the as-of
    /// month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_begin: Option<String>,
}

impl Tenant {
    pub fn new(name: impl Into<String>, rent: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            unit: None,
            rent,
            lease_begin: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_lease_begin(mut self, date: NaiveDate) -> Self {
        self.lease_begin = Some(date.format(LEASE_DATE_FORMAT).to_string());
        self
    }

    /// Resolves the lease start date, failing open to `as_of` when the stored
    /// value is absent or does not parse.
    pub fn lease_start(&self, as_of: NaiveDate) -> NaiveDate {
        match self.lease_begin.as_deref() {
            None => as_of,
            Some(raw) => match NaiveDate::parse_from_str(raw, LEASE_DATE_FORMAT) {
                Ok(date) => date,
                Err(_) => {
                    tracing::warn!(
                        tenant = %self.id,
                        raw,
                        "unparseable lease begin date, treating lease as starting in as-of month"
                    );
                    as_of
                }
            },
        }
    }
}
