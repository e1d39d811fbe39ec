//! Fixed-column tabular rendering of aggregated ledger rows, shared by the
//! detail view and the report exporter.

use crate::ledger::{LedgerSummary, PeriodSummary};

/// Column set of the exported payment report, in order.
pub const REPORT_COLUMNS: [&str; 7] = [
    "Period",
    "Base Rent",
    "Paid",
    "Arrears",
    "Credit",
    "Net Balance",
    "Status",
];

/// Renders one report row per aggregated period.
pub fn rows(summaries: &[PeriodSummary]) -> Vec<Vec<String>> {
    summaries
        .iter()
        .map(|summary| {
            vec![
                summary.label.clone(),
                format_amount(summary.base_rent),
                format_amount(summary.paid),
                format_amount(summary.arrears),
                format_amount(summary.credit),
                format_amount(summary.net_balance),
                summary.status.to_string(),
            ]
        })
        .collect()
}

/// Footer lines for the exported report totals block.
pub fn totals_block(totals: &LedgerSummary) -> Vec<String> {
    vec![
        format!("TOTAL ARREARS: {}", format_amount(totals.total_arrears)),
        format!("TOTAL CREDIT: {}", format_amount(totals.total_credit)),
        format!("NET BALANCE: {}", format_amount(totals.net_balance)),
    ]
}

/// Formats a monetary amount with thousands grouping, keeping cents only when
/// the value is fractional.
pub fn format_amount(value: f64) -> String {
    let magnitude = value.abs();
    let body = if magnitude.fract() < f64::EPSILON {
        format!("{:.0}", magnitude)
    } else {
        format!("{:.2}", magnitude)
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
