//! Gatelog Storage - the line store capability contract.
//!
//! Every component that holds log lines speaks the same three-operation
//! contract, [`LineStore`]:
//!
//! - [`append`](LineStore::append) a line to the end
//! - [`list`](LineStore::list) every line in insertion order
//! - [`truncate`](LineStore::truncate) the store back to empty
//!
//! All three operations are total. There is no error type in this crate:
//! appending any string (including the empty one) succeeds, listing never
//! mutates, and truncating an empty store is a no-op.
//!
//! # Backends
//!
//! | Backend | Purpose |
//! |---------|---------|
//! | [`MemoryLineStore`] | Ordered in-memory storage, no persistence |
//!
//! Anything else that implements [`LineStore`] can stand in for a backend,
//! including the access proxy in `gatelog-proxy` and the recording double in
//! `gatelog-test`.
//!
//! # Example
//!
//! ```
//! use gatelog_storage::{LineStore, MemoryLineStore};
//!
//! let store = MemoryLineStore::new();
//! store.append("first");
//! store.append("second");
//! assert_eq!(store.list(), vec!["first", "second"]);
//!
//! store.truncate();
//! assert!(store.list().is_empty());
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod line;

pub use line::{LineStore, MemoryLineStore};
