//! # StackKV
//!
//! An in-memory key-value store with nested transactions:
//! - Any number of transactions, stacked newest on top
//! - Reads see the most recent write across all open layers
//! - Rollback discards only the innermost transaction
//! - Commit flattens every open transaction into the Base Table
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Session (text commands)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command / Response
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Store                                │
//! │        get / set / unset / begin / rollback / commit         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Transaction │  commit  │ Base Table  │
//!   │   stack     │ ───────▶ │ (committed) │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use stackkv::Store;
//!
//! let mut store = Store::new();
//! store.set("a".to_string(), "10".to_string());
//! store.begin_transaction();
//! store.set("a".to_string(), "20".to_string());
//! assert_eq!(store.get("a"), Some("20"));
//! store.rollback().unwrap();
//! assert_eq!(store.get("a"), Some("10"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod table;
pub mod transaction;
pub mod protocol;
pub mod store;
pub mod shared;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KvError, Result};
pub use config::Config;
pub use store::Store;
pub use shared::SharedStore;
pub use session::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of StackKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
