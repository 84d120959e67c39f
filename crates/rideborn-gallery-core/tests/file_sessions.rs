//! Multi-session scenarios against the on-disk backend: each "page load"
//! reopens the storage file, the way a browser rereads localStorage.

use std::fs;

use rideborn_gallery_core::gallery::card_ids;
use rideborn_gallery_core::{
    CardId, CardSource, FileStorage, GalleryOrderStore, GalleryState, Persistence, StorageKeys,
};
use tempfile::tempdir;

fn page_load(path: &std::path::Path) -> GalleryOrderStore<FileStorage> {
    GalleryOrderStore::new(FileStorage::open(path))
}

#[test]
fn pins_and_order_survive_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gallery.json");
    let known = card_ids(["p1", "p2", "p3", "p4"]);

    // First visit: nothing saved, natural order.
    let mut store = page_load(&path);
    assert_eq!(store.restore(&known), GalleryState::default());
    let state = GalleryState::natural(known.clone());

    // Drag p4 to the front, then pin p3.
    let dragged = GalleryState::new(card_ids(["p4", "p1", "p2", "p3"]), state.pinned.clone());
    store.save_order(&dragged.order).unwrap();
    let pinned = store.toggle_pin(&dragged, &CardId::from("p3")).unwrap();
    assert_eq!(pinned.order, card_ids(["p3", "p4", "p1", "p2"]));

    // Second visit.
    let store = page_load(&path);
    assert_eq!(store.restore(&known), pinned);
}

#[test]
fn new_post_appears_after_saved_cards() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gallery.json");

    let mut store = page_load(&path);
    store.save_order(&card_ids(["b", "a"])).unwrap();

    // The CMS published "c" and removed nothing.
    let store = page_load(&path);
    let state = store.restore(&card_ids(["c", "a", "b"]));
    assert_eq!(state.order, card_ids(["b", "a", "c"]));
}

#[test]
fn reset_then_reload_is_natural() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gallery.json");
    let known = card_ids(["a", "b"]);

    let mut store = page_load(&path);
    let state = store
        .toggle_pin(&GalleryState::natural(known.clone()), &CardId::from("b"))
        .unwrap();
    assert_eq!(state.order, card_ids(["b", "a"]));
    store.reset().unwrap();

    let store = page_load(&path);
    assert_eq!(store.restore(&known), GalleryState::default());
}

#[test]
fn hand_edited_garbage_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gallery.json");
    fs::write(
        &path,
        r#"{ "gallery-order": "not json", "pinned-cards": "[\"a\"]" }"#,
    )
    .unwrap();

    let store = page_load(&path);
    assert_eq!(store.restore(&card_ids(["a", "b"])), GalleryState::default());
}

#[test]
fn site_variants_share_one_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gallery.json");
    let known = card_ids(["a", "b"]);

    let mut main = page_load(&path);
    main.save_order(&card_ids(["b", "a"])).unwrap();

    let mut alt = GalleryOrderStore::with_keys(FileStorage::open(&path), StorageKeys::namespaced("alt"));
    assert_eq!(alt.restore(&known), GalleryState::default());
    alt.save_order(&card_ids(["a", "b"])).unwrap();

    let storage = FileStorage::open(&path);
    assert_eq!(storage.load("gallery-order").as_deref(), Some(r#"["b","a"]"#));
    assert_eq!(storage.load("alt:gallery-order").as_deref(), Some(r#"["a","b"]"#));
}

#[test]
fn cards_from_cms_export() {
    let dir = tempdir().unwrap();
    let cards_path = dir.path().join("posts.json");
    fs::write(
        &cards_path,
        r#"{"contents":[{"id":"x1","title":"A","slug":"a"},{"id":"x2","title":"B","slug":"b"}],"totalCount":2,"offset":0,"limit":10}"#,
    )
    .unwrap();

    let known = CardSource::from_path(&cards_path).unwrap().into_cards();
    let mut store = page_load(&dir.path().join("gallery.json"));
    let state = store
        .toggle_pin(&GalleryState::natural(known), &CardId::from("x2"))
        .unwrap();
    assert_eq!(state.order, card_ids(["x2", "x1"]));
}
