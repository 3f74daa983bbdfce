#![doc(test(attr(deny(warnings))))]

//! Expense Core offers the ledger, statistics, and budget-tracking primitives
//! that power a personal expense tracker UI.
//!
//! The crate is UI-agnostic: presentation layers construct an
//! [`store::ExpenseStore`], route every mutation through it, and render from
//! its derived snapshots.

pub mod analytics;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod time;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("expense_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Expense Core tracing initialized.");
    });
}
