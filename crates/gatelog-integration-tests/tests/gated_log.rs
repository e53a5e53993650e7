//! End-to-end scenarios for the access proxy over real and recording stores.

use gatelog_proxy::{AccessProxy, SessionState};
use gatelog_storage::{LineStore, MemoryLineStore};
use gatelog_test::{
    RecordingStore, StoreCall, TEST_PASSWORD, TEST_USERNAME, sample_lines, seeded_store,
    setup_test_logging,
};

#[test]
fn test_store_append_list_truncate_scenario() {
    let store = MemoryLineStore::new();
    store.append("first");
    store.append("second");
    assert_eq!(store.list(), vec!["first", "second"]);

    store.truncate();
    assert!(store.list().is_empty());
}

#[test]
fn test_proxy_over_empty_store_then_scripted_backing() {
    setup_test_logging("debug");

    let backing = RecordingStore::new();
    let mut proxy = AccessProxy::new(&backing);
    assert!(proxy.list().is_empty());

    proxy.login(TEST_USERNAME, TEST_PASSWORD);
    backing.queue_list_response(vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(proxy.list(), vec!["a", "b"]);
    assert_eq!(backing.calls(), vec![StoreCall::List]);
}

#[test]
fn test_full_session_lifecycle_over_memory_store() {
    let store = seeded_store();
    let mut proxy = AccessProxy::new(&store);

    // Locked: reads hide data, writes never land.
    assert!(proxy.list().is_empty());
    proxy.append("intruder");
    proxy.truncate();
    assert_eq!(store.list(), sample_lines());

    // Unlocked: full pass-through.
    proxy.login("", "");
    assert_eq!(proxy.list(), sample_lines());
    proxy.append("fourth");
    assert_eq!(store.len(), 4);
    assert_eq!(store.list().last().map(String::as_str), Some("fourth"));

    proxy.truncate();
    proxy.truncate();
    assert!(proxy.list().is_empty());
    assert!(store.is_empty());

    // Locked again.
    proxy.logout();
    assert_eq!(proxy.state(), &SessionState::Unauthenticated);
    proxy.append("after logout");
    assert!(store.is_empty());
}

#[test]
fn test_each_authenticated_operation_delegates_exactly_once() {
    let backing = RecordingStore::new();
    let mut proxy = AccessProxy::new(&backing);

    proxy.append("x");
    let _ = proxy.list();
    proxy.truncate();
    assert_eq!(backing.call_count(), 0);

    proxy.login("anyone", "anything");
    proxy.append("x");
    let _ = proxy.list();
    proxy.truncate();
    assert_eq!(
        backing.calls(),
        vec![
            StoreCall::Append("x".to_owned()),
            StoreCall::List,
            StoreCall::Truncate,
        ]
    );
}

#[test]
fn test_recording_double_matches_memory_store_semantics() {
    let stores: Vec<Box<dyn LineStore>> = vec![
        Box::new(MemoryLineStore::new()),
        Box::new(RecordingStore::new()),
    ];

    for store in &stores {
        store.append("one");
        store.append("two");
        store.append("one");
        assert_eq!(store.list(), vec!["one", "two", "one"]);

        store.truncate();
        store.truncate();
        assert!(store.list().is_empty());
    }
}

#[test]
fn test_several_proxies_share_one_store() {
    let store = MemoryLineStore::new();
    let mut writer = AccessProxy::new(&store);
    let reader = AccessProxy::new(&store);

    writer.login("writer", "pw");
    writer.append("shared");

    // The second proxy has its own session state.
    assert!(reader.list().is_empty());
    assert_eq!(writer.list(), vec!["shared"]);
    assert_eq!(store.list(), vec!["shared"]);
}
