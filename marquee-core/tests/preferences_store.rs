use marquee_core::prelude::*;
use marquee_core::preferences::MY_LIST_KEY;

#[test]
fn file_store_round_trip_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut prefs = Preferences::new(JsonFileStore::open(&path).unwrap());
    assert!(prefs.add_to_list(ContentId(42)));
    assert!(prefs.is_in_list(ContentId(42)));
    assert!(prefs.toggle_like(ContentId(7)));

    let reopened = Preferences::new(JsonFileStore::open(&path).unwrap());
    assert_eq!(reopened.my_list(), vec![ContentId(42)]);
    assert!(reopened.is_liked(ContentId(7)));

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[MY_LIST_KEY], serde_json::json!([42]));
}

#[test]
fn list_and_like_semantics() {
    let mut prefs = Preferences::new(MemoryStore::new());
    prefs.add_to_list(ContentId(42));
    assert!(prefs.is_in_list(ContentId(42)));
    prefs.remove_from_list(ContentId(42));
    assert!(!prefs.is_in_list(ContentId(42)));

    assert!(prefs.toggle_like(ContentId(7)));
    assert!(!prefs.toggle_like(ContentId(7)));
}

#[test]
fn unwritable_location_degrades_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let parent = dir.path().join("state");
    let path = parent.join("prefs.json");
    let store = JsonFileStore::open(&path).unwrap();
    // A regular file where the parent directory should be.
    std::fs::write(&parent, b"x").unwrap();

    let mut prefs = Preferences::new(store);
    assert!(!prefs.add_to_list(ContentId(1)));
    assert!(!prefs.is_in_list(ContentId(1)));
    assert!(!prefs.toggle_dislike(ContentId(1)));
    assert!(prefs.my_list().is_empty());
}
