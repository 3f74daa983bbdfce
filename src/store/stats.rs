use chrono::{Datelike, NaiveDate};

use crate::domain::{LedgerStats, Transaction, TransactionKind};

/// Derives the statistics snapshot from the full transaction collection.
///
/// Monthly figures include exactly the transactions whose stored date shares
/// `today`'s calendar month and year. Matching is on the stored date as-is;
/// no timezone-normalized boundary is applied.
pub(crate) fn compute(transactions: &[Transaction], today: NaiveDate) -> LedgerStats {
    let mut stats = LedgerStats::default();
    for txn in transactions {
        let in_month = txn.date.month() == today.month() && txn.date.year() == today.year();
        match txn.kind {
            TransactionKind::Expense => {
                stats.total_expenses += txn.amount;
                if in_month {
                    stats.monthly_expenses += txn.amount;
                }
            }
            TransactionKind::Income => {
                stats.total_income += txn.amount;
                if in_month {
                    stats.monthly_income += txn.amount;
                }
            }
        }
    }
    stats.balance = stats.total_income - stats.total_expenses;
    stats
}
