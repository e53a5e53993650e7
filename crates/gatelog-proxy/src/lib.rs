//! Gatelog Proxy - authentication gate in front of a line store.
//!
//! [`AccessProxy`] borrows any [`LineStore`](gatelog_storage::LineStore)
//! and forwards `append`, `list` and `truncate` to it only while its
//! session is authenticated. An unauthenticated session never reaches the
//! backing store: writes are dropped and reads come back empty. Neither
//! case is an error.
//!
//! # Session states
//!
//! | State | `append` | `list` | `truncate` |
//! |-------|----------|--------|------------|
//! | `Unauthenticated` (initial) | dropped | `[]` | no-op |
//! | `Authenticated` | forwarded | backing result | forwarded |
//!
//! [`login`](AccessProxy::login) accepts any username and password and
//! moves the session to `Authenticated`. [`logout`](AccessProxy::logout)
//! moves it back.
//!
//! # Example
//!
//! ```
//! use gatelog_proxy::AccessProxy;
//! use gatelog_storage::{LineStore, MemoryLineStore};
//!
//! let store = MemoryLineStore::new();
//! let mut proxy = AccessProxy::new(&store);
//!
//! proxy.append("ignored");
//! assert!(proxy.list().is_empty());
//! assert!(store.is_empty());
//!
//! proxy.login("user", "pass");
//! proxy.append("kept");
//! assert_eq!(proxy.list(), vec!["kept"]);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod proxy;
mod session;

pub use proxy::AccessProxy;
pub use session::SessionState;
