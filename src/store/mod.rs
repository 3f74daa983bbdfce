//! The authoritative in-memory store: transaction ledger, category set,
//! budgets, and their derived state.
//!
//! Every write goes through [`ExpenseStore`]'s operations so that statistics,
//! budget progress, and the durable snapshot stay consistent with the owned
//! collections. Operations are total: update/delete against an unknown
//! identifier report `false` instead of failing, and persistence errors are
//! downgraded to warnings because the in-memory state stays authoritative.

mod budgets;
mod stats;

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{
    Budget, BudgetDraft, BudgetPatch, BudgetProgress, Category, CategoryDraft, LedgerStats,
    Transaction, TransactionDraft, TransactionPatch,
};
use crate::errors::StoreError;
use crate::storage::{StorageBackend, StoreSnapshot};
use crate::time::{Clock, SystemClock};

/// Single-writer state container for the whole tracker.
pub struct ExpenseStore {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    budgets: Vec<Budget>,
    stats: LedgerStats,
    progress: Vec<BudgetProgress>,
    clock: Arc<dyn Clock>,
    storage: Option<Box<dyn StorageBackend>>,
}

impl ExpenseStore {
    /// Creates an empty store seeded with the default categories, using the
    /// system clock and no persistence.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Like [`ExpenseStore::new`] but with an injected clock, so every
    /// temporal computation is deterministic under test.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let mut store = Self {
            transactions: Vec::new(),
            categories: Category::default_set(),
            budgets: Vec::new(),
            stats: LedgerStats::default(),
            progress: Vec::new(),
            clock,
            storage: None,
        };
        store.recompute_stats();
        store.recompute_budget_progress();
        store
    }

    /// Attaches a persistence backend; every later mutation snapshots through
    /// it.
    pub fn with_storage(mut self, storage: Box<dyn StorageBackend>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Restores the store from the persisted snapshot, seeding defaults when
    /// none exists. Derived state is always recomputed, never read from disk.
    pub fn load(
        storage: Box<dyn StorageBackend>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, StoreError> {
        let snapshot = storage.load()?;
        let mut store = Self::with_clock(clock);
        if let Some(snapshot) = snapshot {
            store.transactions = snapshot.transactions;
            store.categories = snapshot.categories;
            store.budgets = snapshot.budgets;
        }
        store.storage = Some(storage);
        store.recompute_stats();
        store.recompute_budget_progress();
        Ok(store)
    }

    // Transactions

    /// Appends a new transaction and returns its assigned identifier.
    ///
    /// No field validation happens here; required-field checks are a caller
    /// concern, so an empty title or a zero amount is accepted.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Uuid {
        let txn = Transaction::new(draft);
        let id = txn.id;
        debug!(%id, "transaction added");
        self.transactions.push(txn);
        self.after_ledger_mutation();
        id
    }

    /// Merges `patch` into the matching transaction. Returns `false` without
    /// touching any state when `id` is unknown.
    pub fn update_transaction(&mut self, id: Uuid, patch: TransactionPatch) -> bool {
        let Some(txn) = self.transactions.iter_mut().find(|txn| txn.id == id) else {
            debug!(%id, "update skipped, transaction not found");
            return false;
        };
        txn.apply(patch);
        self.after_ledger_mutation();
        true
    }

    /// Removes the matching transaction. Idempotent: deleting an absent id is
    /// a no-op that reports `false`.
    pub fn delete_transaction(&mut self, id: Uuid) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        if self.transactions.len() == before {
            debug!(%id, "delete skipped, transaction not found");
            return false;
        }
        self.after_ledger_mutation();
        true
    }

    // Categories

    /// Appends a category with a new identifier. Duplicate names are not
    /// rejected; name uniqueness is a UI convention.
    pub fn add_category(&mut self, draft: CategoryDraft) -> Uuid {
        let category = Category::new(draft.name, draft.color, draft.icon);
        let id = category.id;
        self.categories.push(category);
        self.persist();
        id
    }

    // Budgets

    /// Appends a budget and returns its assigned identifier.
    pub fn add_budget(&mut self, draft: BudgetDraft) -> Uuid {
        let budget = Budget::new(draft);
        let id = budget.id;
        debug!(%id, category = %budget.category_name, "budget added");
        self.budgets.push(budget);
        self.after_budget_mutation();
        id
    }

    /// Merges `patch` into the matching budget; `false` when `id` is unknown.
    pub fn update_budget(&mut self, id: Uuid, patch: BudgetPatch) -> bool {
        let Some(budget) = self.budgets.iter_mut().find(|budget| budget.id == id) else {
            debug!(%id, "update skipped, budget not found");
            return false;
        };
        budget.apply(patch);
        self.after_budget_mutation();
        true
    }

    /// Removes the matching budget; idempotent like transaction deletion.
    pub fn delete_budget(&mut self, id: Uuid) -> bool {
        let before = self.budgets.len();
        self.budgets.retain(|budget| budget.id != id);
        if self.budgets.len() == before {
            return false;
        }
        self.after_budget_mutation();
        true
    }

    // Derived state

    /// Rebuilds the statistics snapshot from the full transaction collection.
    /// The new snapshot replaces the old one in a single assignment.
    pub fn recompute_stats(&mut self) {
        self.stats = stats::compute(&self.transactions, self.clock.today());
    }

    /// Rebuilds spend and alert state for every active budget, in collection
    /// order. Always a full recompute; there is no incremental path.
    pub fn recompute_budget_progress(&mut self) {
        self.progress =
            budgets::compute_progress(&self.budgets, &self.transactions, self.clock.now());
    }

    // Reads

    /// The transaction collection, in insertion order. Callers sort by date
    /// descending for "recent" views.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn stats(&self) -> &LedgerStats {
        &self.stats
    }

    /// Progress entries for the active budgets, in budget collection order.
    pub fn budget_progress(&self) -> &[BudgetProgress] {
        &self.progress
    }

    /// The persistable view of the store: the three owned collections,
    /// derived state excluded.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            transactions: self.transactions.clone(),
            categories: self.categories.clone(),
            budgets: self.budgets.clone(),
        }
    }

    fn after_ledger_mutation(&mut self) {
        self.recompute_stats();
        self.recompute_budget_progress();
        self.persist();
    }

    fn after_budget_mutation(&mut self) {
        self.recompute_budget_progress();
        self.persist();
    }

    /// Snapshots current state through the attached backend. A failed write
    /// is logged and swallowed; the in-memory store stays authoritative.
    fn persist(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(err) = storage.save(&self.snapshot()) {
            warn!(error = %err, "failed to persist store snapshot");
        }
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::NaiveDate;

    fn fixed_store() -> ExpenseStore {
        ExpenseStore::with_clock(Arc::new(FixedClock::at(2025, 6, 15)))
    }

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    #[test]
    fn new_store_seeds_eight_categories() {
        let store = fixed_store();
        assert_eq!(store.categories().len(), 8);
        assert!(store.categories().iter().any(|c| c.name == "Food & Dining"));
    }

    #[test]
    fn update_unknown_transaction_reports_false() {
        let mut store = fixed_store();
        let touched = store.update_transaction(Uuid::new_v4(), TransactionPatch::default());
        assert!(!touched);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = fixed_store();
        let id = store.add_transaction(TransactionDraft::expense(
            "Coffee",
            4.5,
            "Food & Dining",
            sample_date(),
        ));
        assert!(store.delete_transaction(id));
        assert!(!store.delete_transaction(id));
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn partial_update_preserves_unspecified_fields() {
        let mut store = fixed_store();
        let id = store.add_transaction(
            TransactionDraft::expense("Groceries", 85.5, "Food & Dining", sample_date())
                .with_description("weekly run"),
        );

        let patch = TransactionPatch {
            amount: Some(90.0),
            ..TransactionPatch::default()
        };
        assert!(store.update_transaction(id, patch));

        let txn = &store.transactions()[0];
        assert_eq!(txn.title, "Groceries");
        assert_eq!(txn.amount, 90.0);
        assert_eq!(txn.description.as_deref(), Some("weekly run"));
    }

    #[test]
    fn duplicate_category_names_are_accepted() {
        let mut store = fixed_store();
        let first = store.add_category(CategoryDraft::new("Pets", "#000000", "Paw"));
        let second = store.add_category(CategoryDraft::new("Pets", "#ffffff", "Paw"));
        assert_ne!(first, second);
        assert_eq!(store.categories().len(), 10);
    }

    #[test]
    fn budget_update_and_delete_report_matches() {
        let mut store = fixed_store();
        let category_id = store.categories()[0].id;
        let id = store.add_budget(BudgetDraft::monthly(category_id, "Food & Dining", 100.0));

        let patch = BudgetPatch {
            monthly_limit: Some(150.0),
            ..BudgetPatch::default()
        };
        assert!(store.update_budget(id, patch));
        assert_eq!(store.budgets()[0].monthly_limit, 150.0);

        assert!(!store.update_budget(Uuid::new_v4(), BudgetPatch::default()));
        assert!(store.delete_budget(id));
        assert!(!store.delete_budget(id));
        assert!(store.budget_progress().is_empty());
    }
}
