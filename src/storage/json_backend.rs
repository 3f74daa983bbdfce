use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use super::{Result, StorageBackend, StoreSnapshot};

/// Fixed key the combined store state is persisted under.
pub const STORE_NAME: &str = "expense-store";

const TMP_SUFFIX: &str = "tmp";
const HOME_ENV: &str = "EXPENSE_CORE_HOME";
const DEFAULT_DIR_NAME: &str = ".expense_core";

/// Stores the snapshot as a single pretty-printed JSON document in the
/// application data directory. Writes go through a temp file and rename so a
/// failed save never corrupts the previous snapshot.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    snapshot_file: PathBuf,
}

impl JsonStorage {
    /// Creates storage rooted at `root`, defaulting to the application data
    /// directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self {
            snapshot_file: root.join(format!("{}.json", STORE_NAME)),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_file
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, snapshot: &StoreSnapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp = tmp_path(&self.snapshot_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.snapshot_file)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<StoreSnapshot>> {
        if !self.snapshot_file.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.snapshot_file)?;
        Ok(Some(serde_json::from_str(&data)?))
    }
}

/// Returns the application-specific data directory, defaulting to
/// `~/.expense_core`. `EXPENSE_CORE_HOME` overrides it.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Transaction, TransactionDraft};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    fn sample_snapshot() -> StoreSnapshot {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        StoreSnapshot {
            transactions: vec![Transaction::new(TransactionDraft::expense(
                "Groceries",
                85.5,
                "Food & Dining",
                date,
            ))],
            categories: Vec::new(),
            budgets: Vec::new(),
        }
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let snapshot = sample_snapshot();
        storage.save(&snapshot).expect("save snapshot");
        let loaded = storage.load().expect("load snapshot").expect("some");
        assert_eq!(loaded.transactions, snapshot.transactions);
    }

    #[test]
    fn load_without_snapshot_returns_none() {
        let (storage, _guard) = storage_with_temp_dir();
        assert!(storage.load().expect("load").is_none());
    }

    #[test]
    fn snapshot_file_uses_the_fixed_store_name() {
        let (storage, _guard) = storage_with_temp_dir();
        let name = storage
            .snapshot_path()
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap();
        assert_eq!(name, "expense-store.json");
    }
}
