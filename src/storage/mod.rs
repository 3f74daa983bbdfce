pub mod json_backend;

use serde::{Deserialize, Serialize};

use crate::domain::{Budget, Category, Transaction};
use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Persisted state layout: the three owned collections. Derived statistics and
/// budget progress are excluded and rebuilt on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

/// Abstraction over persistence backends capable of storing the combined
/// store snapshot under the fixed store name.
pub trait StorageBackend: Send + Sync {
    /// Persists the snapshot, replacing any previous one.
    fn save(&self, snapshot: &StoreSnapshot) -> Result<()>;

    /// Loads the persisted snapshot, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<StoreSnapshot>>;
}

pub use json_backend::{JsonStorage, STORE_NAME};
