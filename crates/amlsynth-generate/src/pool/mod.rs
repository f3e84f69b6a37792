//! Identity pools: customers keyed by id, accounts as a set.
//!
//! The in-memory containers are the source of truth during a run. Every
//! mutating call writes a full snapshot through the [`PoolStore`].

mod entry;
mod store;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use rand::{Rng, RngCore};
use tracing::debug;

pub use entry::{CustomerPoolEntry, account_id_of, customer_id_of};
pub use store::{
    ACCOUNT_POOL_FILE, CUSTOMER_POOL_FILE, JsonFilePoolStore, MemoryPoolStore, PoolStore,
};

use crate::errors::{GenerationError, PoolKind, Result};

pub struct IdentityPool {
    customers: BTreeMap<u64, CustomerPoolEntry>,
    accounts: BTreeSet<String>,
    store: Box<dyn PoolStore>,
}

impl std::fmt::Debug for IdentityPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityPool")
            .field("customers", &self.customers.len())
            .field("accounts", &self.accounts.len())
            .finish()
    }
}

impl IdentityPool {
    /// Empty pool backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self {
            customers: BTreeMap::new(),
            accounts: BTreeSet::new(),
            store: Box::new(MemoryPoolStore::new()),
        }
    }

    /// Load both pools from a store.
    pub fn load(store: impl PoolStore + 'static) -> Result<Self> {
        let customers = store
            .load_customers()?
            .into_iter()
            .map(|entry| (entry.customer_id, entry))
            .collect::<BTreeMap<_, _>>();
        let accounts = store.load_accounts()?.into_iter().collect::<BTreeSet<_>>();
        debug!(
            customers = customers.len(),
            accounts = accounts.len(),
            "identity pools loaded"
        );
        Ok(Self {
            customers,
            accounts,
            store: Box::new(store),
        })
    }

    /// Write both pools to the store.
    pub fn save(&self) -> Result<()> {
        self.save_customers()?;
        self.save_accounts()
    }

    fn save_customers(&self) -> Result<()> {
        let entries = self.customers.values().cloned().collect::<Vec<_>>();
        self.store.save_customers(&entries)
    }

    fn save_accounts(&self) -> Result<()> {
        let accounts = self.accounts.iter().cloned().collect::<Vec<_>>();
        self.store.save_accounts(&accounts)
    }

    /// Insert or replace one customer, keyed by id.
    pub fn upsert_customer(&mut self, entry: CustomerPoolEntry) -> Result<()> {
        self.customers.insert(entry.customer_id, entry);
        self.save_customers()
    }

    /// Insert or replace many customers with a single persist.
    pub fn upsert_customers(
        &mut self,
        entries: impl IntoIterator<Item = CustomerPoolEntry>,
    ) -> Result<usize> {
        let mut count = 0;
        for entry in entries {
            self.customers.insert(entry.customer_id, entry);
            count += 1;
        }
        self.save_customers()?;
        Ok(count)
    }

    /// Returns false when the account was already pooled.
    pub fn add_account(&mut self, account_id: impl Into<String>) -> Result<bool> {
        let added = self.accounts.insert(account_id.into());
        self.save_accounts()?;
        Ok(added)
    }

    /// Returns the number of accounts that were not pooled before.
    pub fn add_accounts<I, S>(&mut self, account_ids: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let added = account_ids
            .into_iter()
            .map(|id| self.accounts.insert(id.into()))
            .filter(|inserted| *inserted)
            .count();
        self.save_accounts()?;
        Ok(added)
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn has_customers(&self) -> bool {
        !self.customers.is_empty()
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    pub fn customer(&self, customer_id: u64) -> Option<&CustomerPoolEntry> {
        self.customers.get(&customer_id)
    }

    pub fn contains_account(&self, account_id: &str) -> bool {
        self.accounts.contains(account_id)
    }

    pub fn customers(&self) -> impl Iterator<Item = &CustomerPoolEntry> {
        self.customers.values()
    }

    pub fn accounts(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(String::as_str)
    }

    /// Uniform draw over pooled customers.
    pub fn draw_customer(&self, rng: &mut dyn RngCore) -> Result<&CustomerPoolEntry> {
        if self.customers.is_empty() {
            return Err(GenerationError::pool_exhausted(PoolKind::Customers));
        }
        let idx = rng.random_range(0..self.customers.len());
        let entry = self
            .customers
            .values()
            .nth(idx)
            .ok_or_else(|| GenerationError::pool_exhausted(PoolKind::Customers))?;
        debug!(pool = "customers", customer_id = entry.customer_id, "pool draw");
        Ok(entry)
    }

    /// Uniform draw over pooled accounts.
    pub fn draw_account(&self, rng: &mut dyn RngCore) -> Result<&str> {
        if self.accounts.is_empty() {
            return Err(GenerationError::pool_exhausted(PoolKind::Accounts));
        }
        let idx = rng.random_range(0..self.accounts.len());
        let account = self
            .accounts
            .iter()
            .nth(idx)
            .ok_or_else(|| GenerationError::pool_exhausted(PoolKind::Accounts))?;
        debug!(pool = "accounts", account_id = %account, "pool draw");
        Ok(account)
    }

    pub fn clear_customers(&mut self) -> Result<()> {
        self.customers.clear();
        self.save_customers()
    }

    pub fn clear_accounts(&mut self) -> Result<()> {
        self.accounts.clear();
        self.save_accounts()
    }
}

/// Pool handle for multi-threaded hosts. Each read-modify-persist sequence
/// runs under one lock.
#[derive(Debug, Clone)]
pub struct SharedIdentityPool {
    inner: Arc<Mutex<IdentityPool>>,
}

impl SharedIdentityPool {
    pub fn new(pool: IdentityPool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(pool)),
        }
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, IdentityPool>> {
        self.inner
            .lock()
            .map_err(|_| GenerationError::Store("identity pool lock poisoned".to_string()))
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut IdentityPool) -> Result<T>) -> Result<T> {
        let mut guard = self.lock()?;
        f(&mut guard)
    }
}
