use std::fmt;

use serde::{Deserialize, Serialize};

use super::builder::{LedgerEntry, PaymentStatus};

/// Reporting cadence for aggregated ledger views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Granularity {
    Monthly,
    Quarterly,
    Annual,
}

/// Status of an aggregated reporting period.
///
/// Monthly rows keep the full four-way monthly classification; quarterly and
/// annual rollups only distinguish settled periods from periods still in
/// arrears. The asymmetry is deliberate: no aggregated "Paid (Over)" status
/// exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PeriodStatus {
    Missing,
    Partial,
    Paid,
    PaidOver,
    Arrears,
}

impl From<PaymentStatus> for PeriodStatus {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Missing => PeriodStatus::Missing,
            PaymentStatus::Partial => PeriodStatus::Partial,
            PaymentStatus::Paid => PeriodStatus::Paid,
            PaymentStatus::PaidOver => PeriodStatus::PaidOver,
        }
    }
}

impl PeriodStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PeriodStatus::Missing => "Missing",
            PeriodStatus::Partial => "Partial",
            PeriodStatus::Paid => "Paid",
            PeriodStatus::PaidOver => "Paid (Over)",
            PeriodStatus::Arrears => "Arrears",
        }
    }
}

impl fmt::Display for PeriodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of an aggregated report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodSummary {
    pub label: String,
    pub base_rent: f64,
    pub paid: f64,
    pub arrears: f64,
    pub credit: f64,
    pub net_balance: f64,
    pub status: PeriodStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GroupKey {
    year: i32,
    quarter: Option<u32>,
}

impl GroupKey {
    fn label(&self) -> String {
        match self.quarter {
            Some(quarter) => format!("Q{} {}", quarter, self.year),
            None => self.year.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    base_rent: f64,
    paid: f64,
    arrears: f64,
    credit: f64,
}

/// Regroups a monthly ledger into the requested reporting cadence.
///
/// Monthly passes entries through unchanged. Quarterly and annual rollups sum
/// `paid`, `arrears`, and `credit` period-locally (not from running balances)
/// and re-derive the net balance and status from those sums, so a full year
/// of groups conserves the year's monthly arrears exactly.
pub fn aggregate(entries: &[LedgerEntry], granularity: Granularity) -> Vec<PeriodSummary> {
    match granularity {
        Granularity::Monthly => entries.iter().map(monthly_row).collect(),
        Granularity::Quarterly => grouped(entries, |entry| GroupKey {
            year: entry.period.year,
            quarter: Some(entry.period.quarter()),
        }),
        Granularity::Annual => grouped(entries, |entry| GroupKey {
            year: entry.period.year,
            quarter: None,
        }),
    }
}

fn monthly_row(entry: &LedgerEntry) -> PeriodSummary {
    PeriodSummary {
        label: entry.period.key(),
        base_rent: entry.base_rent,
        paid: entry.paid,
        arrears: entry.arrears,
        credit: entry.credit,
        net_balance: entry.running_net_balance,
        status: entry.status.into(),
    }
}

// Groups are emitted in first-appearance order; the ledger is chronological,
// so groups are too.
fn grouped<K>(entries: &[LedgerEntry], key_of: K) -> Vec<PeriodSummary>
where
    K: Fn(&LedgerEntry) -> GroupKey,
{
    let mut groups: Vec<(GroupKey, Bucket)> = Vec::new();
    for entry in entries {
        let key = key_of(entry);
        let index = match groups.iter().position(|(existing, _)| *existing == key) {
            Some(index) => index,
            None => {
                groups.push((key, Bucket::default()));
                groups.len() - 1
            }
        };
        let bucket = &mut groups[index].1;
        bucket.base_rent += entry.base_rent;
        bucket.paid += entry.paid;
        bucket.arrears += entry.arrears;
        bucket.credit += entry.credit;
    }

    groups
        .into_iter()
        .map(|(key, bucket)| {
            let outstanding = bucket.arrears - bucket.credit;
            PeriodSummary {
                label: key.label(),
                base_rent: bucket.base_rent,
                paid: bucket.paid,
                arrears: bucket.arrears,
                credit: bucket.credit,
                net_balance: outstanding.max(0.0),
                status: if outstanding <= 0.0 {
                    PeriodStatus::Paid
                } else {
                    PeriodStatus::Arrears
                },
            }
        })
        .collect()
}
