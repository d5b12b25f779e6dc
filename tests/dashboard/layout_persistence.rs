//! Layout auto-save, restore and default handling across store reopens

use std::sync::Arc;

use safetysync::dashboard::{factory_catalog, GridRect, SavedWidget, DEFAULT_LAYOUT_KEY, LAYOUT_KEY};
use safetysync::storage::{load_json, save_json, Blob, FileStore, KeyValueStore, MemoryStore};
use safetysync::{LayoutManager, WidgetId};
use tempfile::TempDir;

fn is_visible<S: KeyValueStore>(manager: &LayoutManager<S>, id: &str) -> bool {
    manager.widget(id).unwrap().visible
}

#[test]
fn test_hidden_widget_stays_hidden_after_reload() {
    let dir = TempDir::new().unwrap();
    {
        let mut manager = LayoutManager::open(FileStore::open(dir.path()).unwrap());
        assert!(is_visible(&manager, "total-users"));
        assert!(!manager.toggle("total-users").unwrap());
    }

    let manager = LayoutManager::open(FileStore::open(dir.path()).unwrap());
    assert!(!is_visible(&manager, "total-users"));
    assert!(manager.visible_widgets().all(|w| w.id != "total-users"));
}

#[test]
fn test_widget_missing_from_saved_blob_keeps_factory_state() {
    let store = Arc::new(MemoryStore::new());
    let saved = vec![SavedWidget {
        id: WidgetId::new("total-users"),
        visible: false,
        rect: None,
    }];
    save_json(&store, LAYOUT_KEY, &saved).unwrap();

    let manager = LayoutManager::open(Arc::clone(&store));
    assert!(!is_visible(&manager, "total-users"));
    for factory in factory_catalog().iter().filter(|w| w.id != "total-users") {
        let restored = manager.widget(factory.id.as_str()).unwrap();
        assert_eq!(restored.visible, factory.visible);
        assert_eq!(restored.rect, factory.rect);
    }
}

#[test]
fn test_corrupt_layout_falls_back_to_factory() {
    let store = MemoryStore::new();
    store.save(LAYOUT_KEY, Blob::from("not json at all")).unwrap();
    let manager = LayoutManager::open(store);
    assert_eq!(manager.widgets(), factory_catalog().as_slice());
}

#[test]
fn test_every_change_is_autosaved() {
    let store = Arc::new(MemoryStore::new());
    let mut manager = LayoutManager::open(Arc::clone(&store));
    manager
        .move_widget("open-tickets", GridRect::new(0, 7, 6, 2))
        .unwrap();

    let saved: Vec<SavedWidget> = load_json(&store, LAYOUT_KEY).unwrap().unwrap();
    let entry = saved.iter().find(|w| w.id == "open-tickets").unwrap();
    assert_eq!(entry.rect, Some(GridRect::new(0, 7, 6, 2)));
    assert_eq!(saved.len(), factory_catalog().len());
}

#[test]
fn test_default_survives_reset_and_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut manager = LayoutManager::open(FileStore::open(dir.path()).unwrap());
        manager.toggle("avg-training-time").unwrap();
        manager.save_as_default().unwrap();
        manager.reset_to_factory().unwrap();
        assert!(!is_visible(&manager, "avg-training-time"));
    }

    let store = FileStore::open(dir.path()).unwrap();
    assert!(store.contains(DEFAULT_LAYOUT_KEY).unwrap());
    let mut manager = LayoutManager::open(store);
    assert!(!is_visible(&manager, "avg-training-time"));
    assert!(manager.load_default().unwrap());
    assert!(is_visible(&manager, "avg-training-time"));
}
