//! Store Module
//!
//! The transaction engine that owns the Base Table and the transaction stack.
//!
//! ## Responsibilities
//! - Resolve reads across every open layer, newest first, then the Base Table
//! - Route writes to the Base Table or to the innermost transaction
//! - Open, roll back and commit nested transactions
//!
//! ## State Machine
//!
//! ```text
//!            begin                begin
//!   Idle ────────────▶ InTx(1) ────────────▶ InTx(n+1)
//!    ▲                  │  ▲                    │
//!    │     rollback     │  │      rollback      │
//!    └──────────────────┘  └────────────────────┘
//!    ▲
//!    │  commit (from any depth)
//!    └────────────────────────── InTx(n)
//! ```

use crate::error::{KvError, Result};
use crate::protocol::{Command, Response};
use crate::table::BaseTable;
use crate::transaction::Transaction;

/// In-memory store with nested transactions
///
/// ## Concurrency Model
///
/// Single actor, fully synchronous. Every operation runs to completion and
/// mutates in place, so `&mut self` is required for anything but reads. Wrap
/// the store in [`SharedStore`](crate::SharedStore) to share it between
/// threads.
///
/// "In a transaction" is derived from the stack, so the two can never
/// disagree.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Committed state
    table: BaseTable,

    /// Open transactions, oldest first
    transactions: Vec<Transaction>,
}

impl Store {
    /// Create an empty store in the idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers. `END` is session control and
    /// has no effect on the store.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        match command {
            Command::Get { key } => Ok(match self.get(&key) {
                Some(value) => Response::ok(Some(value.to_string())),
                None => Response::not_found(),
            }),
            Command::Set { key, value } => {
                self.set(key, value);
                Ok(Response::ok(None))
            }
            Command::Unset { key } => {
                self.unset(key);
                Ok(Response::ok(None))
            }
            Command::Begin => {
                self.begin_transaction();
                Ok(Response::ok(None))
            }
            Command::Rollback => {
                self.rollback()?;
                Ok(Response::ok(None))
            }
            Command::Commit => {
                self.commit_transactions();
                Ok(Response::ok(None))
            }
            Command::End => Ok(Response::ok(None)),
        }
    }

    /// Get the effective value of a key
    ///
    /// Search order:
    /// 1. Open transactions (newest to oldest), first layer touching the key wins
    /// 2. Base Table
    pub fn get(&self, key: &str) -> Option<&str> {
        for (depth, transaction) in self.transactions.iter().enumerate().rev() {
            if let Some(entry) = transaction.get(key) {
                tracing::trace!(key, depth = depth + 1, "resolved in transaction layer");
                return entry.as_value();
            }
        }

        self.table.get(key)
    }

    /// Set a key
    ///
    /// Goes straight to the Base Table when idle, otherwise to the innermost
    /// transaction only.
    pub fn set(&mut self, key: String, value: String) {
        tracing::trace!(key = %key, depth = self.depth(), "set");

        match self.transactions.last_mut() {
            Some(transaction) => transaction.write(key, value),
            None => self.table.put(key, value),
        }
    }

    /// Delete a key
    ///
    /// Removes from the Base Table when idle, otherwise records a tombstone in
    /// the innermost transaction so the key is removed at commit.
    pub fn unset(&mut self, key: String) {
        tracing::trace!(key = %key, depth = self.depth(), "unset");

        match self.transactions.last_mut() {
            Some(transaction) => transaction.delete(key),
            None => self.table.remove(&key),
        }
    }

    /// Open a new, empty transaction on top of the stack
    pub fn begin_transaction(&mut self) {
        self.transactions.push(Transaction::new());
        tracing::debug!(depth = self.depth(), "transaction begun");
    }

    /// Discard the innermost transaction
    ///
    /// Fails with [`KvError::InvalidRollback`] when idle; nothing is mutated
    /// in that case.
    pub fn rollback(&mut self) -> Result<()> {
        let Some(transaction) = self.transactions.pop() else {
            tracing::warn!("rollback requested with no open transaction");
            return Err(KvError::InvalidRollback);
        };

        tracing::debug!(
            depth = self.depth(),
            discarded_writes = transaction.write_count(),
            "transaction rolled back"
        );
        Ok(())
    }

    /// Commit every open transaction into the Base Table
    ///
    /// Layers are applied oldest to newest so the newest write to a key wins,
    /// matching read resolution. A no-op when idle.
    pub fn commit_transactions(&mut self) {
        if self.transactions.is_empty() {
            tracing::debug!("commit with no open transaction");
            return;
        }

        let layers = self.transactions.len();
        let mut applied = 0;
        for transaction in self.transactions.drain(..) {
            applied += transaction.apply_to(&mut self.table);
        }

        tracing::debug!(layers, applied, "transactions committed");
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Check if at least one transaction is open
    pub fn in_transaction(&self) -> bool {
        !self.transactions.is_empty()
    }

    /// Number of open transactions
    pub fn depth(&self) -> usize {
        self.transactions.len()
    }

    /// Read-only view of committed state
    pub fn table(&self) -> &BaseTable {
        &self.table
    }

    /// The innermost open transaction
    pub fn current_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }
}
