//! Favorites store: toggling, persistence format, recovery and concurrency.

use std::fs;
use std::sync::Arc;
use std::thread;

use tcgdex_catalog::{CatalogError, FavoritesStore};

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn missing_file_is_an_empty_set() {
    let tmp = tempfile::tempdir().unwrap();
    let store = FavoritesStore::open(tmp.path().join("favorites.json"));
    assert!(store.is_empty());
    assert!(store.snapshot().is_empty());
}

#[test]
fn empty_file_is_an_empty_set() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("favorites.json");
    fs::write(&path, "  \n").unwrap();

    assert!(FavoritesStore::open(&path).is_empty());
}

#[test]
fn corrupt_file_is_an_empty_set() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("favorites.json");
    fs::write(&path, "{not json").unwrap();

    let store = FavoritesStore::open(&path);
    assert!(store.is_empty());

    // The next toggle replaces the corrupt content.
    assert!(store.toggle("base1-4").unwrap());
    assert_eq!(FavoritesStore::open(&path).ids(), vec!["base1-4"]);
}

#[test]
fn existing_file_is_loaded_without_duplicates() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("favorites.json");
    fs::write(&path, r#"["base1-4", "xy1-1", "base1-4"]"#).unwrap();

    let store = FavoritesStore::open(&path);
    assert_eq!(store.len(), 2);
    assert_eq!(store.ids(), vec!["base1-4", "xy1-1"]);
    assert_eq!(store.snapshot().get("xy1-1"), Some(&true));
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

#[test]
fn toggle_is_its_own_inverse() {
    let tmp = tempfile::tempdir().unwrap();
    let store = FavoritesStore::open(tmp.path().join("favorites.json"));
    store.toggle("xy1-1").unwrap();
    let before = store.snapshot();

    let first = store.toggle("base1-4").unwrap();
    let second = store.toggle("base1-4").unwrap();

    assert_eq!(first, !second);
    assert!(first);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn toggle_persists_pretty_printed_array() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nested").join("dir").join("favorites.json");
    let store = FavoritesStore::open(&path);

    store.toggle("xy1-1").unwrap();
    store.toggle("base1-4").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "[\n  \"base1-4\",\n  \"xy1-1\"\n]\n");
}

#[test]
fn removing_last_favorite_writes_empty_array() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("favorites.json");
    let store = FavoritesStore::open(&path);

    store.toggle("base1-4").unwrap();
    assert!(!store.toggle("base1-4").unwrap());

    let ids: Vec<String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(ids.is_empty());
}

#[test]
fn favorites_survive_reopen() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("favorites.json");

    {
        let store = FavoritesStore::open(&path);
        store.toggle("base1-4").unwrap();
        store.toggle("sv01-001").unwrap();
    }

    let reopened = FavoritesStore::open(&path);
    assert!(reopened.contains("base1-4"));
    assert!(reopened.contains("sv01-001"));
    assert_eq!(reopened.len(), 2);
}

#[test]
fn failed_write_leaves_snapshot_unchanged() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("favorites.json");
    let store = FavoritesStore::open(&path);
    store.toggle("base1-4").unwrap();
    let before = store.snapshot();

    // A directory in place of the file makes the final rename fail.
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let err = store.toggle("xy1-1").unwrap_err();
    assert!(matches!(err, CatalogError::Persistence(_)));
    assert_eq!(store.snapshot(), before);

    let err = store.toggle("base1-4").unwrap_err();
    assert!(matches!(err, CatalogError::Persistence(_)));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn concurrent_toggles_are_serialized() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("favorites.json");
    let store = Arc::new(FavoritesStore::open(&path));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for j in 0..10 {
                    store.toggle(&format!("set{i}-{j}")).unwrap();
                }
                // Toggle the shared id an even number of times in total.
                store.toggle("shared-1").unwrap();
                store.toggle("shared-1").unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.len(), 80);
    assert!(!store.contains("shared-1"));

    let on_disk = FavoritesStore::open(&path);
    assert_eq!(on_disk.ids(), store.ids());
}
