//! Test fixtures for common values.

use gatelog_storage::{LineStore, MemoryLineStore};

/// Username used by tests that need to log in.
pub const TEST_USERNAME: &str = "user";

/// Password used by tests that need to log in.
pub const TEST_PASSWORD: &str = "pass";

/// A short list of distinct lines.
#[must_use]
pub fn sample_lines() -> Vec<String> {
    vec!["first".to_owned(), "second".to_owned(), "third".to_owned()]
}

/// Create a memory store already holding [`sample_lines`].
#[must_use]
pub fn seeded_store() -> MemoryLineStore {
    let store = MemoryLineStore::new();
    for line in sample_lines() {
        store.append(&line);
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_matches_sample_lines() {
        assert_eq!(seeded_store().list(), sample_lines());
    }
}
