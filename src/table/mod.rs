//! Base Table Module
//!
//! Committed state of the store.
//!
//! ## Responsibilities
//! - Hold every committed key/value pair
//! - Unconditional put, idempotent remove, pure lookup
//! - Ordered iteration for inspection
//!
//! ## Data Structure Choice
//! Using a plain BTreeMap:
//! - Absence is "key not in map"; no null values are ever stored
//! - Ordered keys make dumps and test assertions deterministic
//! - Locking is left to the caller (see `SharedStore`)

mod base;

pub use base::{BaseTable, BaseTableIter};
