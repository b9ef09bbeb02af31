//! Integration tests for the favorites store over the real file backend.

use plaza::favorites::{FavoritesStore, FAVORITES_KEY};
use plaza::storage::{FileStore, KeyValueStore};

#[test]
fn test_toggle_persists_and_reloads() {
    let tmp = tempfile::tempdir().unwrap();

    {
        let store = FileStore::with_dir(tmp.path()).unwrap();
        let mut favorites = FavoritesStore::load(Box::new(store));
        favorites.toggle("b9");
        assert!(favorites.has("b9"));
    }

    // Persisted representation round-trips through a fresh store
    let store = FileStore::with_dir(tmp.path()).unwrap();
    let reloaded = FavoritesStore::load(Box::new(store));
    assert!(reloaded.has("b9"));
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_double_toggle_round_trips_to_empty() {
    let tmp = tempfile::tempdir().unwrap();

    {
        let store = FileStore::with_dir(tmp.path()).unwrap();
        let mut favorites = FavoritesStore::load(Box::new(store));
        favorites.toggle("b9");
        favorites.toggle("b9");
        assert!(!favorites.has("b9"));
    }

    let store = FileStore::with_dir(tmp.path()).unwrap();
    let reloaded = FavoritesStore::load(Box::new(store));
    assert!(reloaded.is_empty());

    // The stored payload itself is an empty JSON array
    let store = FileStore::with_dir(tmp.path()).unwrap();
    let raw = store.get(FAVORITES_KEY).unwrap().unwrap();
    let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
    assert!(ids.is_empty());
}

#[test]
fn test_membership_survives_any_toggle_sequence() {
    let tmp = tempfile::tempdir().unwrap();

    {
        let store = FileStore::with_dir(tmp.path()).unwrap();
        let mut favorites = FavoritesStore::load(Box::new(store));
        for id in ["b1", "b2", "b3", "b2", "b4", "b1", "b1"] {
            favorites.toggle(id);
        }
        // b1 toggled 3x -> on, b2 2x -> off, b3 1x -> on, b4 1x -> on
        assert!(favorites.has("b1"));
        assert!(!favorites.has("b2"));
    }

    let store = FileStore::with_dir(tmp.path()).unwrap();
    let reloaded = FavoritesStore::load(Box::new(store));
    let mut members: Vec<&str> = reloaded.all().iter().map(|s| s.as_str()).collect();
    members.sort_unstable();
    assert_eq!(members, vec!["b1", "b3", "b4"]);
}

#[test]
fn test_corrupt_file_recovers_to_empty_set() {
    let tmp = tempfile::tempdir().unwrap();

    {
        let mut store = FileStore::with_dir(tmp.path()).unwrap();
        store.set(FAVORITES_KEY, "][ definitely not json").unwrap();
    }

    let store = FileStore::with_dir(tmp.path()).unwrap();
    let favorites = FavoritesStore::load(Box::new(store));
    assert!(favorites.is_empty());
}

#[test]
fn test_stored_order_is_not_significant() {
    let tmp = tempfile::tempdir().unwrap();

    {
        let mut store = FileStore::with_dir(tmp.path()).unwrap();
        store.set(FAVORITES_KEY, r#"["z","a","m"]"#).unwrap();
    }

    let store = FileStore::with_dir(tmp.path()).unwrap();
    let favorites = FavoritesStore::load(Box::new(store));
    assert!(favorites.has("a") && favorites.has("m") && favorites.has("z"));
    assert_eq!(favorites.len(), 3);
}
