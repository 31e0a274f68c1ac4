//! User preferences: "my list", likes and dislikes.
//!
//! Each collection is a JSON array of content ids under a fixed key of a
//! [`KeyValueStore`]. Storage failures are logged and answered with safe
//! defaults; callers never see them.

mod file;
mod store;

pub use file::JsonFileStore;
pub use store::{KeyValueStore, MemoryStore};

use marquee_contracts::preferences::PreferencesStore;
use marquee_model::ContentId;
use tracing::{debug, error};

use crate::error::StorageError;

pub const MY_LIST_KEY: &str = "myList";
pub const LIKED_KEY: &str = "likedItems";
pub const DISLIKED_KEY: &str = "dislikedItems";

#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn liked(&self) -> Vec<ContentId> {
        self.read_ids(LIKED_KEY)
    }

    pub fn disliked(&self) -> Vec<ContentId> {
        self.read_ids(DISLIKED_KEY)
    }

    fn read_ids(&self, key: &str) -> Vec<ContentId> {
        let value = match self.store.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => return Vec::new(),
            Err(err) => {
                error!(key, error = %err, "Error reading preferences");
                return Vec::new();
            }
        };
        serde_json::from_value(value).unwrap_or_else(|err| {
            error!(key, error = %err, "Discarding malformed preference list");
            Vec::new()
        })
    }

    fn write_ids(&mut self, key: &str, ids: &[ContentId]) -> bool {
        let result = serde_json::to_value(ids)
            .map_err(StorageError::from)
            .and_then(|value| self.store.set(key, value));
        match result {
            Ok(()) => true,
            Err(err) => {
                error!(key, error = %err, "Error writing preferences");
                false
            }
        }
    }

    /// Flip membership of `id` in `key`; returns membership after the call.
    fn toggle(&mut self, key: &str, id: ContentId) -> bool {
        let mut ids = self.read_ids(key);
        let was_present = ids.contains(&id);
        if was_present {
            ids.retain(|x| *x != id);
        } else {
            ids.push(id);
        }
        if self.write_ids(key, &ids) {
            debug!(key, %id, present = !was_present, "preference toggled");
            !was_present
        } else {
            was_present
        }
    }

    fn remove_id(&mut self, key: &str, id: ContentId) -> bool {
        let mut ids = self.read_ids(key);
        let before = ids.len();
        ids.retain(|x| *x != id);
        ids.len() != before && self.write_ids(key, &ids)
    }
}

impl<S: KeyValueStore> PreferencesStore for Preferences<S> {
    fn my_list(&self) -> Vec<ContentId> {
        self.read_ids(MY_LIST_KEY)
    }

    fn add_to_list(&mut self, id: ContentId) -> bool {
        let mut ids = self.my_list();
        if ids.contains(&id) {
            return false;
        }
        ids.push(id);
        self.write_ids(MY_LIST_KEY, &ids)
    }

    fn remove_from_list(&mut self, id: ContentId) -> bool {
        self.remove_id(MY_LIST_KEY, id)
    }

    fn toggle_like(&mut self, id: ContentId) -> bool {
        self.toggle(LIKED_KEY, id)
    }

    fn is_liked(&self, id: ContentId) -> bool {
        self.liked().contains(&id)
    }

    fn remove_like(&mut self, id: ContentId) {
        self.remove_id(LIKED_KEY, id);
    }

    fn toggle_dislike(&mut self, id: ContentId) -> bool {
        self.toggle(DISLIKED_KEY, id)
    }

    fn is_disliked(&self, id: ContentId) -> bool {
        self.disliked().contains(&id)
    }

    fn remove_dislike(&mut self, id: ContentId) {
        self.remove_id(DISLIKED_KEY, id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[derive(Debug)]
    struct Unavailable;

    impl KeyValueStore for Unavailable {
        fn get(&self, _: &str) -> Result<Option<Value>, StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }

        fn set(&mut self, _: &str, _: Value) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }

        fn remove(&mut self, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }
    }

    #[test]
    fn list_round_trip() {
        let mut prefs = Preferences::new(MemoryStore::new());
        assert!(prefs.add_to_list(ContentId(42)));
        assert!(!prefs.add_to_list(ContentId(42)));
        assert!(prefs.is_in_list(ContentId(42)));
        assert!(prefs.remove_from_list(ContentId(42)));
        assert!(!prefs.is_in_list(ContentId(42)));
        assert!(!prefs.remove_from_list(ContentId(42)));
    }

    #[test]
    fn like_toggles() {
        let mut prefs = Preferences::new(MemoryStore::new());
        assert!(prefs.toggle_like(ContentId(7)));
        assert!(prefs.is_liked(ContentId(7)));
        assert!(!prefs.toggle_like(ContentId(7)));
        assert!(!prefs.is_liked(ContentId(7)));
    }

    #[test]
    fn like_and_dislike_are_independent() {
        let mut prefs = Preferences::new(MemoryStore::new());
        prefs.toggle_like(ContentId(1));
        prefs.toggle_dislike(ContentId(1));
        assert!(prefs.is_liked(ContentId(1)) && prefs.is_disliked(ContentId(1)));
        prefs.remove_dislike(ContentId(1));
        assert!(!prefs.is_disliked(ContentId(1)));
    }

    #[test]
    fn stored_format_is_id_array() {
        let mut prefs = Preferences::new(MemoryStore::new());
        prefs.add_to_list(ContentId(3));
        prefs.add_to_list(ContentId(1));
        assert_eq!(
            prefs.store().get(MY_LIST_KEY).unwrap(),
            Some(json!([3, 1]))
        );
    }

    #[test]
    fn unavailable_store_answers_defaults() {
        let mut prefs = Preferences::new(Unavailable);
        assert!(prefs.my_list().is_empty());
        assert!(!prefs.add_to_list(ContentId(1)));
        assert!(!prefs.is_in_list(ContentId(1)));
        assert!(!prefs.toggle_like(ContentId(1)));
        assert!(!prefs.is_disliked(ContentId(1)));
    }

    #[test]
    fn malformed_list_reads_empty() {
        let mut store = MemoryStore::new();
        store.set(LIKED_KEY, json!({"oops": true})).unwrap();
        let prefs = Preferences::new(store);
        assert!(prefs.liked().is_empty());
    }
}
