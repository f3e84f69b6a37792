use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use crate::atomic::write_json_atomic;
use crate::errors::{GenerationError, Result};
use crate::pool::CustomerPoolEntry;

pub const CUSTOMER_POOL_FILE: &str = "customer-id-pool.json";
pub const ACCOUNT_POOL_FILE: &str = "account-id-pool.json";

/// Durable snapshot target for the identity pools.
pub trait PoolStore: Send {
    fn load_customers(&self) -> Result<Vec<CustomerPoolEntry>>;
    fn save_customers(&self, entries: &[CustomerPoolEntry]) -> Result<()>;
    fn load_accounts(&self) -> Result<Vec<String>>;
    fn save_accounts(&self, accounts: &[String]) -> Result<()>;
}

/// Two JSON files in one directory.
#[derive(Debug, Clone)]
pub struct JsonFilePoolStore {
    dir: PathBuf,
}

impl JsonFilePoolStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn customers_path(&self) -> PathBuf {
        self.dir.join(CUSTOMER_POOL_FILE)
    }

    pub fn accounts_path(&self) -> PathBuf {
        self.dir.join(ACCOUNT_POOL_FILE)
    }
}

// Missing file is an empty pool; a malformed one is an error.
fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    match std::fs::read(path) {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
            GenerationError::Store(format!("malformed pool file '{}': {err}", path.display()))
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
        Err(err) => Err(err.into()),
    }
}

impl PoolStore for JsonFilePoolStore {
    fn load_customers(&self) -> Result<Vec<CustomerPoolEntry>> {
        read_json_or_default(&self.customers_path())
    }

    fn save_customers(&self, entries: &[CustomerPoolEntry]) -> Result<()> {
        write_json_atomic(&self.customers_path(), entries)
    }

    fn load_accounts(&self) -> Result<Vec<String>> {
        read_json_or_default(&self.accounts_path())
    }

    fn save_accounts(&self, accounts: &[String]) -> Result<()> {
        write_json_atomic(&self.accounts_path(), accounts)
    }
}

#[derive(Debug, Default)]
struct Snapshot {
    customers: Vec<CustomerPoolEntry>,
    accounts: Vec<String>,
}

/// In-process store. Clones share one snapshot, so a second pool loaded from
/// a clone sees what the first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryPoolStore {
    snapshot: Arc<Mutex<Snapshot>>,
}

impl MemoryPoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_snapshot<T>(&self, f: impl FnOnce(&mut Snapshot) -> T) -> Result<T> {
        let mut guard = self
            .snapshot
            .lock()
            .map_err(|_| GenerationError::Store("memory pool store poisoned".to_string()))?;
        Ok(f(&mut guard))
    }
}

impl PoolStore for MemoryPoolStore {
    fn load_customers(&self) -> Result<Vec<CustomerPoolEntry>> {
        self.with_snapshot(|snapshot| snapshot.customers.clone())
    }

    fn save_customers(&self, entries: &[CustomerPoolEntry]) -> Result<()> {
        self.with_snapshot(|snapshot| snapshot.customers = entries.to_vec())
    }

    fn load_accounts(&self) -> Result<Vec<String>> {
        self.with_snapshot(|snapshot| snapshot.accounts.clone())
    }

    fn save_accounts(&self, accounts: &[String]) -> Result<()> {
        self.with_snapshot(|snapshot| snapshot.accounts = accounts.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_load_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFilePoolStore::new(dir.path());
        assert!(store.load_customers().expect("customers").is_empty());
        assert!(store.load_accounts().expect("accounts").is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFilePoolStore::new(dir.path());
        std::fs::write(store.accounts_path(), b"{not json").expect("write");
        assert!(matches!(
            store.load_accounts(),
            Err(GenerationError::Store(_))
        ));
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryPoolStore::new();
        let other = store.clone();
        store
            .save_accounts(&["ACC-1".to_string()])
            .expect("save");
        assert_eq!(other.load_accounts().expect("load"), vec!["ACC-1"]);
    }
}
