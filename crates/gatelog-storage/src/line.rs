//! Line store trait and the in-memory backend.
//!
//! The [`LineStore`] trait takes `&self` for every operation, including
//! the mutating ones. Implementations use interior mutability so a single
//! store can be shared by reference between its owner and any number of
//! proxies without handing out `&mut` access.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::trace;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Ordered, append-only collection of text lines.
///
/// Implementations must preserve insertion order, allow duplicates and
/// empty lines, and never rewrite an entry once appended.
pub trait LineStore: Send + Sync {
    /// Append a line to the end of the store.
    fn append(&self, line: &str);

    /// Return every stored line in the order it was appended.
    ///
    /// The returned vector is a copy; later appends do not affect it.
    fn list(&self) -> Vec<String>;

    /// Remove every stored line.
    ///
    /// Truncating an empty store is a no-op.
    fn truncate(&self);
}

impl<T: LineStore + ?Sized> LineStore for &T {
    fn append(&self, line: &str) {
        (**self).append(line);
    }

    fn list(&self) -> Vec<String> {
        (**self).list()
    }

    fn truncate(&self) {
        (**self).truncate();
    }
}

impl<T: LineStore + ?Sized> LineStore for Box<T> {
    fn append(&self, line: &str) {
        (**self).append(line);
    }

    fn list(&self) -> Vec<String> {
        (**self).list()
    }

    fn truncate(&self) {
        (**self).truncate();
    }
}

impl<T: LineStore + ?Sized> LineStore for Arc<T> {
    fn append(&self, line: &str) {
        (**self).append(line);
    }

    fn list(&self) -> Vec<String> {
        (**self).list()
    }

    fn truncate(&self) {
        (**self).truncate();
    }
}

// ---------------------------------------------------------------------------
// In-memory implementation
// ---------------------------------------------------------------------------

/// In-memory line store.
///
/// Lines live in a `Vec` behind an `RwLock`. A poisoned lock is recovered
/// rather than reported: the vector is only ever pushed to or cleared, so
/// it is never left half-written.
#[derive(Debug, Default)]
pub struct MemoryLineStore {
    entries: RwLock<Vec<String>>,
}

impl MemoryLineStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LineStore for MemoryLineStore {
    fn append(&self, line: &str) {
        let mut entries = self.write();
        entries.push(line.to_owned());
        trace!(len = entries.len(), "line appended");
    }

    fn list(&self) -> Vec<String> {
        self.read().clone()
    }

    fn truncate(&self) {
        let mut entries = self.write();
        let dropped = entries.len();
        entries.clear();
        trace!(dropped, "store truncated");
    }
}

impl From<Vec<String>> for MemoryLineStore {
    fn from(entries: Vec<String>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for MemoryLineStore {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from(iter.into_iter().map(Into::into).collect::<Vec<String>>())
    }
}
