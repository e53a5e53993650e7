//! Mock implementations for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use gatelog_storage::LineStore;

/// A single call observed by [`RecordingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    /// `append` with its argument.
    Append(String),
    /// `list`.
    List,
    /// `truncate`.
    Truncate,
}

/// Verifying test double for the [`LineStore`] contract.
///
/// Records every call it receives, in order. By default it behaves like a
/// plain in-memory store (appended lines come back from `list`). Queued
/// list responses take precedence over the recorded lines, one response
/// per `list` call, which lets a test script exactly what the backing
/// store returns.
///
/// Cloning shares the underlying state, so a test can keep a handle while
/// the original is borrowed elsewhere.
#[derive(Debug, Clone, Default)]
pub struct RecordingStore {
    /// Every call received, in order.
    calls: Arc<Mutex<Vec<StoreCall>>>,
    /// Lines kept when running as an in-memory store.
    entries: Arc<Mutex<Vec<String>>>,
    /// Scripted `list` responses.
    list_responses: Arc<Mutex<VecDeque<Vec<String>>>>,
}

impl RecordingStore {
    /// Create a new recording store with no scripted responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next unanswered `list` call.
    #[must_use]
    pub fn with_list_response(self, lines: Vec<String>) -> Self {
        self.queue_list_response(lines);
        self
    }

    /// Queue a response for the next unanswered `list` call.
    pub fn queue_list_response(&self, lines: Vec<String>) {
        if let Ok(mut guard) = self.list_responses.lock() {
            guard.push_back(lines);
        }
    }

    /// All calls received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Total number of calls received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|g| g.len()).unwrap_or_default()
    }

    /// Arguments of every `append` call, in order.
    #[must_use]
    pub fn appended(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                StoreCall::Append(line) => Some(line),
                StoreCall::List | StoreCall::Truncate => None,
            })
            .collect()
    }

    /// Number of `append` calls received.
    #[must_use]
    pub fn append_count(&self) -> usize {
        self.count(|call| matches!(call, StoreCall::Append(_)))
    }

    /// Number of `list` calls received.
    #[must_use]
    pub fn list_count(&self) -> usize {
        self.count(|call| matches!(call, StoreCall::List))
    }

    /// Number of `truncate` calls received.
    #[must_use]
    pub fn truncate_count(&self) -> usize {
        self.count(|call| matches!(call, StoreCall::Truncate))
    }

    /// Forget recorded calls. Stored lines and queued responses are kept.
    pub fn clear_calls(&self) {
        if let Ok(mut guard) = self.calls.lock() {
            guard.clear();
        }
    }

    fn count(&self, pred: impl Fn(&StoreCall) -> bool) -> usize {
        self.calls
            .lock()
            .map(|g| g.iter().filter(|call| pred(call)).count())
            .unwrap_or_default()
    }

    fn record(&self, call: StoreCall) {
        if let Ok(mut guard) = self.calls.lock() {
            guard.push(call);
        }
    }
}

impl LineStore for RecordingStore {
    fn append(&self, line: &str) {
        self.record(StoreCall::Append(line.to_owned()));
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(line.to_owned());
        }
    }

    fn list(&self) -> Vec<String> {
        self.record(StoreCall::List);
        let scripted = self
            .list_responses
            .lock()
            .ok()
            .and_then(|mut g| g.pop_front());
        match scripted {
            Some(lines) => lines,
            None => self.entries.lock().map(|g| g.clone()).unwrap_or_default(),
        }
    }

    fn truncate(&self) {
        self.record(StoreCall::Truncate);
        if let Ok(mut guard) = self.entries.lock() {
            guard.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_in_order() {
        let store = RecordingStore::new();
        store.append("x");
        let _ = store.list();
        store.truncate();

        assert_eq!(
            store.calls(),
            vec![
                StoreCall::Append("x".to_owned()),
                StoreCall::List,
                StoreCall::Truncate
            ]
        );
        assert_eq!(store.call_count(), 3);
        assert_eq!(store.append_count(), 1);
        assert_eq!(store.list_count(), 1);
        assert_eq!(store.truncate_count(), 1);
    }

    #[test]
    fn test_behaves_as_memory_store_without_script() {
        let store = RecordingStore::new();
        store.append("one");
        store.append("two");
        assert_eq!(store.list(), vec!["one", "two"]);

        store.append("temp");
        store.truncate();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_scripted_responses_are_consumed_in_order() {
        let store = RecordingStore::new()
            .with_list_response(vec!["a".to_owned(), "b".to_owned()])
            .with_list_response(Vec::new());
        store.append("real");

        assert_eq!(store.list(), vec!["a", "b"]);
        assert!(store.list().is_empty());
        assert_eq!(store.list(), vec!["real"]);
    }

    #[test]
    fn test_clones_share_state() {
        let store = RecordingStore::new();
        let handle = store.clone();
        store.append("shared");

        assert_eq!(handle.appended(), vec!["shared"]);
        handle.clear_calls();
        assert_eq!(store.call_count(), 0);
        assert_eq!(store.list(), vec!["shared"]);
    }
}
