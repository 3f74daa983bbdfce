//! Domain models for the expense ledger: transactions, categories, budgets,
//! and the derived-statistics shapes.

pub mod budget;
pub mod category;
pub mod stats;
pub mod transaction;

pub use budget::{Budget, BudgetDraft, BudgetPatch, BudgetPeriod, BudgetProgress};
pub use category::{Category, CategoryDraft};
pub use stats::LedgerStats;
pub use transaction::{Transaction, TransactionDraft, TransactionKind, TransactionPatch};
