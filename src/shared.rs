//! Shared Store
//!
//! Thread-safe handle around a single [`Store`].
//!
//! The store mutates its stack and table in place with no isolation between
//! callers, so the whole store sits behind one mutex. Each method holds the
//! lock for exactly one operation; use [`SharedStore::with`] when a sequence
//! of operations must not interleave with other callers.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::protocol::{Command, Response};
use crate::store::Store;

/// Cloneable, mutex-protected store handle
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    /// Create a handle around an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing store
    pub fn from_store(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run a closure with exclusive access to the store
    pub fn with<T>(&self, f: impl FnOnce(&mut Store) -> T) -> T {
        let mut store = self.inner.lock();
        f(&mut store)
    }

    /// Execute a command under the lock
    pub fn execute(&self, command: Command) -> Result<Response> {
        self.inner.lock().execute(command)
    }

    /// Get an owned copy of the effective value of a key
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key).map(str::to_string)
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.lock().set(key.into(), value.into());
    }

    pub fn unset(&self, key: impl Into<String>) {
        self.inner.lock().unset(key.into());
    }

    pub fn begin_transaction(&self) {
        self.inner.lock().begin_transaction();
    }

    pub fn rollback(&self) -> Result<()> {
        self.inner.lock().rollback()
    }

    pub fn commit_transactions(&self) {
        self.inner.lock().commit_transactions();
    }

    /// Number of open transactions
    pub fn depth(&self) -> usize {
        self.inner.lock().depth()
    }

    /// Take the store back out if this is the last handle
    pub fn try_into_inner(self) -> std::result::Result<Store, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner())
            .map_err(|inner| Self { inner })
    }
}
