mod common;

use chrono::Duration;
use common::{sample_date, store_at};
use expense_core::analytics::{category_breakdown, monthly_trend, weekly_trend};
use expense_core::domain::TransactionDraft;

#[test]
fn breakdown_over_store_transactions_groups_expenses_only() {
    let mut store = store_at(2025, 6, 15);
    store.add_transaction(TransactionDraft::expense(
        "Groceries",
        85.5,
        "Food & Dining",
        sample_date(2025, 6, 10),
    ));
    store.add_transaction(TransactionDraft::expense(
        "Restaurant",
        32.0,
        "Food & Dining",
        sample_date(2025, 6, 12),
    ));
    store.add_transaction(TransactionDraft::expense(
        "Fuel",
        45.0,
        "Transportation",
        sample_date(2025, 6, 11),
    ));
    store.add_transaction(TransactionDraft::income(
        "Salary",
        3500.0,
        "Salary",
        sample_date(2025, 6, 1),
    ));

    let breakdown = category_breakdown(store.transactions());
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].name, "Food & Dining");
    assert_eq!(breakdown[0].value, 117.5);
    assert_eq!(breakdown[1].name, "Transportation");
    assert_eq!(breakdown[1].value, 45.0);
}

#[test]
fn twelve_month_trend_covers_a_full_year_oldest_first() {
    let mut store = store_at(2025, 6, 15);
    store.add_transaction(TransactionDraft::expense(
        "Old rent",
        900.0,
        "Bills & Utilities",
        sample_date(2024, 7, 1),
    ));
    store.add_transaction(TransactionDraft::income(
        "Salary",
        3500.0,
        "Salary",
        sample_date(2025, 6, 1),
    ));
    // Outside the trailing window.
    store.add_transaction(TransactionDraft::expense(
        "Too old",
        50.0,
        "Shopping",
        sample_date(2024, 5, 1),
    ));

    let trend = monthly_trend(store.transactions(), 12, sample_date(2025, 6, 15));
    assert_eq!(trend.len(), 12);
    assert_eq!((trend[0].year, trend[0].month), (2024, 7));
    assert_eq!((trend[11].year, trend[11].month), (2025, 6));
    assert_eq!(trend[0].expenses, 900.0);
    assert_eq!(trend[0].net, -900.0);
    assert_eq!(trend[11].income, 3500.0);
    let window_total: f64 = trend.iter().map(|m| m.expenses).sum();
    assert_eq!(window_total, 900.0);
}

#[test]
fn eight_week_trend_anchors_to_today() {
    let today = sample_date(2025, 6, 15);
    let mut store = store_at(2025, 6, 15);
    store.add_transaction(TransactionDraft::expense(
        "Recent",
        10.0,
        "Shopping",
        today,
    ));
    store.add_transaction(TransactionDraft::expense(
        "Five weeks back",
        20.0,
        "Shopping",
        today - Duration::days(35),
    ));

    let trend = weekly_trend(store.transactions(), 8, today);
    assert_eq!(trend.len(), 8);
    assert_eq!(trend[7].start, today);
    assert_eq!(trend[7].amount, 10.0);
    assert_eq!(trend[2].start, today - Duration::days(35));
    assert_eq!(trend[2].amount, 20.0);
}
