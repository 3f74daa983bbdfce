#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use expense_core::store::ExpenseStore;
use expense_core::time::FixedClock;

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A store pinned to noon UTC on the given date, with no persistence attached.
pub fn store_at(y: i32, m: u32, d: u32) -> ExpenseStore {
    ExpenseStore::with_clock(Arc::new(FixedClock::at(y, m, d)))
}
