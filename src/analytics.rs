//! Derived view transforms consumed by the analytics screens.
//!
//! Pure functions over the transaction collection; nothing here is stored or
//! persisted. Callers pass the anchor date explicitly, usually
//! [`crate::time::Clock::today`].

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::domain::{Transaction, TransactionKind};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One slice of the category spending breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub value: f64,
}

/// Income, expenses, and net flow for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyFlow {
    pub year: i32,
    pub month: u32,
    pub label: &'static str,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

/// Expense total over one fixed 7-day window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySpend {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub amount: f64,
}

/// Groups expense transactions by category and sums their amounts.
///
/// Order follows each category's first occurrence in the collection; there is
/// no further tie-break for equal sums.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for txn in transactions
        .iter()
        .filter(|txn| txn.kind == TransactionKind::Expense)
    {
        match totals.iter_mut().find(|entry| entry.name == txn.category) {
            Some(entry) => entry.value += txn.amount,
            None => totals.push(CategoryTotal {
                name: txn.category.clone(),
                value: txn.amount,
            }),
        }
    }
    totals
}

/// Income, expense, and net flow per calendar month for the trailing `months`
/// months ending at `today`'s month, oldest first.
pub fn monthly_trend(
    transactions: &[Transaction],
    months: usize,
    today: NaiveDate,
) -> Vec<MonthlyFlow> {
    let mut points: Vec<MonthlyFlow> = (0..months)
        .map(|offset| {
            let (year, month) = shift_month(today.year(), today.month(), offset as i32);
            let mut income = 0.0;
            let mut expenses = 0.0;
            for txn in transactions {
                if txn.date.year() == year && txn.date.month() == month {
                    match txn.kind {
                        TransactionKind::Income => income += txn.amount,
                        TransactionKind::Expense => expenses += txn.amount,
                    }
                }
            }
            MonthlyFlow {
                year,
                month,
                label: MONTH_LABELS[(month - 1) as usize],
                income,
                expenses,
                net: income - expenses,
            }
        })
        .collect();
    points.reverse();
    points
}

/// Expense totals over `weeks` fixed 7-day windows anchored to `today`,
/// oldest first. Window `i` starts `today - 7i` days and spans seven days,
/// both ends inclusive.
pub fn weekly_trend(
    transactions: &[Transaction],
    weeks: usize,
    today: NaiveDate,
) -> Vec<WeeklySpend> {
    let mut points: Vec<WeeklySpend> = (0..weeks)
        .map(|offset| {
            let start = today - Duration::days(offset as i64 * 7);
            let end = start + Duration::days(6);
            let amount = transactions
                .iter()
                .filter(|txn| {
                    txn.kind == TransactionKind::Expense
                        && txn.date >= start
                        && txn.date <= end
                })
                .map(|txn| txn.amount)
                .sum();
            WeeklySpend { start, end, amount }
        })
        .collect();
    points.reverse();
    points
}

/// Walks `back` months before the given year/month pair.
fn shift_month(year: i32, month: u32, back: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 - back;
    (index.div_euclid(12), (index.rem_euclid(12) + 1) as u32)
}
