use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::domain::{Budget, BudgetPeriod, BudgetProgress, Transaction, TransactionKind};

/// Derives spend and alert state for every active budget, in collection order.
/// Inactive budgets are excluded entirely.
pub(crate) fn compute_progress(
    budgets: &[Budget],
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> Vec<BudgetProgress> {
    let today = now.date_naive();
    budgets
        .iter()
        .filter(|budget| budget.is_active)
        .map(|budget| progress_for(budget, transactions, now, today))
        .collect()
}

fn progress_for(
    budget: &Budget,
    transactions: &[Transaction],
    now: DateTime<Utc>,
    today: NaiveDate,
) -> BudgetProgress {
    let budget_amount = budget.limit();
    let spent_amount: f64 = transactions
        .iter()
        .filter(|txn| {
            txn.kind == TransactionKind::Expense
                && txn.category == budget.category_name
                && in_period(txn.date, budget.period, today)
        })
        .map(|txn| txn.amount)
        .sum();

    // Zero-limit budgets always read 0% used even with nonzero spend; the
    // over-budget flag still fires through the strict comparison below.
    let percentage_used = if budget_amount > 0.0 {
        spent_amount / budget_amount * 100.0
    } else {
        0.0
    };

    BudgetProgress {
        category_name: budget.category_name.clone(),
        budget_amount,
        spent_amount,
        remaining_amount: budget_amount - spent_amount,
        percentage_used,
        is_over_budget: spent_amount > budget_amount,
        days_left: days_left(budget.period, now, today),
    }
}

fn in_period(date: NaiveDate, period: BudgetPeriod, today: NaiveDate) -> bool {
    match period {
        BudgetPeriod::Monthly => date.month() == today.month() && date.year() == today.year(),
        BudgetPeriod::Yearly => date.year() == today.year(),
    }
}

/// Whole days remaining in the active period window. Today counts as already
/// elapsed for monthly budgets; yearly budgets round the distance to December
/// 31st up to whole days.
fn days_left(period: BudgetPeriod, now: DateTime<Utc>, today: NaiveDate) -> i64 {
    match period {
        BudgetPeriod::Monthly => (last_day_of_month(today) - today.day()) as i64,
        BudgetPeriod::Yearly => {
            let year_end = NaiveDate::from_ymd_opt(today.year(), 12, 31)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            let remaining = DateTime::<Utc>::from_naive_utc_and_offset(year_end, Utc) - now;
            (remaining.num_seconds() as f64 / 86_400.0).ceil() as i64
        }
    }
}

fn last_day_of_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    (first_of_next - Duration::days(1)).day()
}
