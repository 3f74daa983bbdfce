use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single ledger entry.
///
/// `amount` is always a non-negative magnitude; its sign is implied by `kind`.
/// `category` references a [`super::Category`] by name, not by id; the store
/// does not enforce the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: TransactionKind,
}

impl Transaction {
    /// Materializes a draft into a record with a freshly assigned identifier.
    pub fn new(draft: TransactionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
            description: draft.description,
            kind: draft.kind,
        }
    }

    /// Merges the present fields of `patch` into this record. The identifier
    /// and absent fields are left untouched.
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
    }
}

/// Whether an entry spends money or brings it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

/// Every transaction field except the store-assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    pub kind: TransactionKind,
}

impl TransactionDraft {
    pub fn expense(
        title: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            category: category.into(),
            date,
            description: None,
            kind: TransactionKind::Expense,
        }
    }

    pub fn income(
        title: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind: TransactionKind::Income,
            ..Self::expense(title, amount, category, date)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Partial update for a transaction; absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub kind: Option<TransactionKind>,
}
