use thiserror::Error;

/// Error type that captures storage failures.
///
/// The store mutation API itself never returns errors; only the persistence
/// layer surfaces them, and the store downgrades those to warnings.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
