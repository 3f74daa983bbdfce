use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categorises ledger activity for budgeting and reporting.
///
/// Transactions and budgets reference categories by name, so the set only ever
/// grows; there is no delete or rename operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }

    /// The seed set every fresh store starts with.
    pub fn default_set() -> Vec<Category> {
        [
            ("Food & Dining", "#ef4444", "UtensilsCrossed"),
            ("Transportation", "#3b82f6", "Car"),
            ("Shopping", "#8b5cf6", "ShoppingBag"),
            ("Entertainment", "#f59e0b", "GameController2"),
            ("Bills & Utilities", "#06b6d4", "Receipt"),
            ("Healthcare", "#10b981", "Heart"),
            ("Salary", "#22c55e", "DollarSign"),
            ("Investment", "#84cc16", "TrendingUp"),
        ]
        .into_iter()
        .map(|(name, color, icon)| Category::new(name, color, icon))
        .collect()
    }
}

/// Category fields supplied by the caller; the identifier is store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl CategoryDraft {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }
}
