//! Gatelog Test - shared test utilities.
//!
//! Test doubles and helpers used as a dev-dependency across the workspace.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! gatelog-test.workspace = true
//! ```
//!
//! ```rust
//! use gatelog_storage::LineStore;
//! use gatelog_test::{RecordingStore, StoreCall};
//!
//! let store = RecordingStore::new().with_list_response(vec!["a".into(), "b".into()]);
//! assert_eq!(store.list(), vec!["a", "b"]);
//! assert_eq!(store.calls(), vec![StoreCall::List]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod fixtures;
pub mod harness;
pub mod mocks;

pub use fixtures::*;
pub use harness::*;
pub use mocks::*;
