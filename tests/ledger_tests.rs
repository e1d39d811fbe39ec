use chrono::NaiveDate;
use rental_core::errors::LedgerError;
use rental_core::ledger::{build_ledger, PaymentStatus};
use rental_core::tenancy::{Receipt, Tenant};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_period_coverage_spans_lease_to_as_of() {
    let tenant = Tenant::new("W. Njeri", 12000.0).with_lease_begin(date(2022, 6, 15));
    let ledger = build_ledger(&tenant, &[], date(2024, 3, 10)).unwrap();

    // (2024*12 + 2) - (2022*12 + 5) + 1 months, contiguous and chronological.
    assert_eq!(ledger.entries.len(), 22);
    assert_eq!(ledger.entries[0].period.key(), "June 2022");
    assert_eq!(ledger.entries.last().unwrap().period.key(), "March 2024");
    for window in ledger.entries.windows(2) {
        let prev = window[0].period;
        let next = window[1].period;
        let prev_index = prev.year * 12 + prev.month0 as i32;
        let next_index = next.year * 12 + next.month0 as i32;
        assert_eq!(next_index, prev_index + 1);
    }
}

#[test]
fn test_lease_beginning_in_as_of_month_yields_single_entry() {
    let tenant = Tenant::new("W. Njeri", 12000.0).with_lease_begin(date(2024, 3, 1));
    let ledger = build_ledger(&tenant, &[], date(2024, 3, 28)).unwrap();

    assert_eq!(ledger.entries.len(), 1);
    assert_eq!(ledger.entries[0].period.key(), "March 2024");
    assert_eq!(ledger.entries[0].status, PaymentStatus::Missing);
}

#[test]
fn test_absent_lease_date_fails_open_to_as_of_month() {
    let tenant = Tenant::new("W. Njeri", 12000.0);
    let ledger = build_ledger(&tenant, &[], date(2024, 7, 4)).unwrap();

    assert_eq!(ledger.entries.len(), 1);
    assert_eq!(ledger.entries[0].period.key(), "July 2024");
}

#[test]
fn test_malformed_lease_date_fails_open_to_as_of_month() {
    let mut tenant = Tenant::new("W. Njeri", 12000.0);
    tenant.lease_begin = Some("03/2023".into());
    let ledger = build_ledger(&tenant, &[], date(2024, 7, 4)).unwrap();

    assert_eq!(ledger.entries.len(), 1);
    assert_eq!(ledger.entries[0].period.key(), "July 2024");
}

#[test]
fn test_receipts_for_same_period_merge_additively() {
    let tenant = Tenant::new("W. Njeri", 5000.0).with_lease_begin(date(2024, 4, 1));
    let receipts = vec![
        Receipt::new(tenant.id, "April 2024", 3000.0, date(2024, 4, 3)),
        Receipt::new(tenant.id, "April 2024", 2000.0, date(2024, 4, 20)),
    ];
    let ledger = build_ledger(&tenant, &receipts, date(2024, 4, 30)).unwrap();

    assert_eq!(ledger.entries.len(), 1);
    assert_eq!(ledger.entries[0].paid, 5000.0);
    assert_eq!(ledger.entries[0].status, PaymentStatus::Paid);
}

#[test]
fn test_classification_boundaries() {
    let tenant = Tenant::new("W. Njeri", 10000.0).with_lease_begin(date(2024, 1, 1));
    let receipts = vec![
        Receipt::new(tenant.id, "February 2024", 6000.0, date(2024, 2, 5)),
        Receipt::new(tenant.id, "March 2024", 10000.0, date(2024, 3, 5)),
        Receipt::new(tenant.id, "April 2024", 12000.0, date(2024, 4, 5)),
    ];
    let ledger = build_ledger(&tenant, &receipts, date(2024, 4, 15)).unwrap();
    assert_eq!(ledger.entries.len(), 4);

    let january = &ledger.entries[0];
    assert_eq!(january.status, PaymentStatus::Missing);
    assert_eq!(january.arrears, 10000.0);
    assert_eq!(january.credit, 0.0);

    let february = &ledger.entries[1];
    assert_eq!(february.status, PaymentStatus::Partial);
    assert_eq!(february.arrears, 4000.0);

    let march = &ledger.entries[2];
    assert_eq!(march.status, PaymentStatus::Paid);
    assert_eq!(march.arrears, 0.0);
    assert_eq!(march.credit, 0.0);

    let april = &ledger.entries[3];
    assert_eq!(april.status, PaymentStatus::PaidOver);
    assert_eq!(april.credit, 2000.0);
    assert_eq!(april.arrears, 0.0);
}

#[test]
fn test_later_credit_nets_balance_without_rewriting_history() {
    let tenant = Tenant::new("W. Njeri", 5000.0).with_lease_begin(date(2024, 1, 1));
    // Nothing in January, double payment in February.
    let receipts = vec![Receipt::new(
        tenant.id,
        "February 2024",
        10000.0,
        date(2024, 2, 2),
    )];
    let ledger = build_ledger(&tenant, &receipts, date(2024, 2, 20)).unwrap();

    let january = &ledger.entries[0];
    assert_eq!(january.status, PaymentStatus::Missing);
    assert_eq!(january.arrears, 5000.0);
    assert_eq!(january.running_net_balance, 5000.0);

    let february = &ledger.entries[1];
    assert_eq!(february.status, PaymentStatus::PaidOver);
    assert_eq!(february.credit, 5000.0);
    assert_eq!(february.running_net_balance, 0.0);

    // Totals track the two accumulators independently.
    assert_eq!(ledger.totals.total_arrears, 5000.0);
    assert_eq!(ledger.totals.total_credit, 5000.0);
    assert_eq!(ledger.totals.net_balance, 0.0);
}

#[test]
fn test_build_ledger_is_idempotent_for_fixed_as_of() {
    let tenant = Tenant::new("W. Njeri", 8000.0).with_lease_begin(date(2023, 9, 1));
    let receipts = vec![
        Receipt::new(tenant.id, "September 2023", 8000.0, date(2023, 9, 2)),
        Receipt::new(tenant.id, "November 2023", 4000.0, date(2023, 11, 28)),
    ];
    let as_of = date(2024, 1, 31);

    let first = build_ledger(&tenant, &receipts, as_of).unwrap();
    let second = build_ledger(&tenant, &receipts, as_of).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zero_rent_produces_zero_arrears_ledger() {
    let tenant = Tenant::new("Caretaker", 0.0).with_lease_begin(date(2024, 1, 1));
    let ledger = build_ledger(&tenant, &[], date(2024, 6, 1)).unwrap();

    assert_eq!(ledger.entries.len(), 6);
    assert!(ledger.entries.iter().all(|entry| entry.arrears == 0.0));
    assert_eq!(ledger.totals.net_balance, 0.0);
}

#[test]
fn test_foreign_receipt_is_rejected() {
    let tenant = Tenant::new("W. Njeri", 5000.0).with_lease_begin(date(2024, 1, 1));
    let stranger = Tenant::new("B. Kiptoo", 7000.0);
    let receipts = vec![Receipt::new(
        stranger.id,
        "January 2024",
        5000.0,
        date(2024, 1, 5),
    )];

    let result = build_ledger(&tenant, &receipts, date(2024, 1, 31));
    match result {
        Err(LedgerError::ForeignReceipt { expected, found, .. }) => {
            assert_eq!(expected, tenant.id);
            assert_eq!(found, stranger.id);
        }
        other => panic!("expected ForeignReceipt error, got {:?}", other),
    }
}

#[test]
fn test_end_to_end_scenario() {
    let tenant = Tenant::new("J. Mwangi", 15000.0).with_lease_begin(date(2024, 1, 1));
    let receipts = vec![
        Receipt::new(tenant.id, "January 2024", 15000.0, date(2024, 1, 4)),
        Receipt::new(tenant.id, "February 2024", 7500.0, date(2024, 2, 9)),
    ];
    let ledger = build_ledger(&tenant, &receipts, date(2024, 3, 15)).unwrap();

    assert_eq!(ledger.entries.len(), 3);

    let january = &ledger.entries[0];
    assert_eq!(january.status, PaymentStatus::Paid);
    assert_eq!(january.arrears, 0.0);

    let february = &ledger.entries[1];
    assert_eq!(february.status, PaymentStatus::Partial);
    assert_eq!(february.arrears, 7500.0);

    let march = &ledger.entries[2];
    assert_eq!(march.status, PaymentStatus::Missing);
    assert_eq!(march.arrears, 15000.0);

    assert_eq!(ledger.totals.total_arrears, 22500.0);
    assert_eq!(ledger.totals.total_credit, 0.0);
    assert_eq!(ledger.totals.net_balance, 22500.0);
}
