//! Persisted dashboard layout
//!
//! ## Design
//!
//! `LayoutManager` owns the current descriptor set and a `KeyValueStore`.
//! Two fixed keys are used:
//!
//! - `admin-dashboard-layout`: the current layout, written after every
//!   mutation and restored on open
//! - `admin-dashboard-default`: the user-chosen default, written only by
//!   `save_as_default`
//!
//! ## Merge on load
//!
//! Saved entries are applied onto the factory catalog by id. Catalog widgets
//! missing from the saved blob keep factory values; saved entries with no
//! matching catalog id are dropped. An absent or unreadable blob leaves the
//! factory layout in place and is logged, never returned as an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use safetysync_core::{Error, Result};
use safetysync_storage::{load_json_lenient, save_json, KeyValueStore};

use crate::widget::{factory_catalog, GridRect, WidgetDescriptor, WidgetId};

/// Store key for the auto-saved current layout
pub const LAYOUT_KEY: &str = "admin-dashboard-layout";

/// Store key for the user-chosen default layout
pub const DEFAULT_LAYOUT_KEY: &str = "admin-dashboard-default";

/// Persisted shape of one widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedWidget {
    /// Catalog identifier
    pub id: WidgetId,
    /// Saved visibility
    pub visible: bool,
    /// Saved placement; factory placement when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<GridRect>,
}

impl From<&WidgetDescriptor> for SavedWidget {
    fn from(w: &WidgetDescriptor) -> Self {
        SavedWidget {
            id: w.id.clone(),
            visible: w.visible,
            rect: Some(w.rect),
        }
    }
}

/// Apply saved entries onto `base` by id
///
/// Returns the number of saved entries that were applied.
pub fn merge_saved(base: &mut [WidgetDescriptor], saved: &[SavedWidget]) -> usize {
    let mut applied = 0;
    for entry in saved {
        match base.iter_mut().find(|w| w.id == entry.id) {
            Some(widget) => {
                widget.visible = entry.visible;
                match entry.rect {
                    Some(rect) if rect.validate().is_ok() => widget.rect = rect,
                    Some(rect) => {
                        debug!(widget = %entry.id, %rect, "keeping factory rect for invalid saved rect")
                    }
                    None => {}
                }
                applied += 1;
            }
            None => debug!(widget = %entry.id, "dropping saved widget not in catalog"),
        }
    }
    applied
}

/// Dashboard layout backed by a key-value store
pub struct LayoutManager<S: KeyValueStore> {
    store: S,
    widgets: Vec<WidgetDescriptor>,
}

impl<S: KeyValueStore> LayoutManager<S> {
    /// Open the layout, restoring the auto-saved state if present
    pub fn open(store: S) -> Self {
        let mut widgets = factory_catalog();
        if let Some(saved) = load_json_lenient::<Vec<SavedWidget>, _>(&store, LAYOUT_KEY) {
            let applied = merge_saved(&mut widgets, &saved);
            debug!(applied, saved = saved.len(), "restored dashboard layout");
        }
        LayoutManager { store, widgets }
    }

    /// All descriptors in display order
    pub fn widgets(&self) -> &[WidgetDescriptor] {
        &self.widgets
    }

    /// Descriptor for `id`
    pub fn widget(&self, id: &str) -> Option<&WidgetDescriptor> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Visible descriptors in display order
    pub fn visible_widgets(&self) -> impl Iterator<Item = &WidgetDescriptor> + '_ {
        self.widgets.iter().filter(|w| w.visible)
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip one widget's visibility and return the new value
    ///
    /// The in-memory layout changes only once the auto-save succeeds.
    ///
    /// # Errors
    ///
    /// Returns `UnknownWidget` for ids outside the catalog, or a storage
    /// error if the auto-save fails.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let mut widgets = self.widgets.clone();
        let widget = find_mut(&mut widgets, id)?;
        widget.visible = !widget.visible;
        let visible = widget.visible;
        self.commit(widgets)?;
        debug!(widget = id, visible, "toggled widget");
        Ok(visible)
    }

    /// Move or resize one widget
    ///
    /// # Errors
    ///
    /// Returns `UnknownWidget` for ids outside the catalog, `InvalidInput`
    /// for a zero-sized rectangle, or a storage error if the auto-save fails.
    pub fn move_widget(&mut self, id: &str, rect: GridRect) -> Result<()> {
        rect.validate()?;
        let mut widgets = self.widgets.clone();
        find_mut(&mut widgets, id)?.rect = rect;
        self.commit(widgets)?;
        debug!(widget = id, %rect, "moved widget");
        Ok(())
    }

    /// Restore every descriptor to the factory catalog
    pub fn reset_to_factory(&mut self) -> Result<()> {
        self.commit(factory_catalog())?;
        info!("dashboard layout reset to factory default");
        Ok(())
    }

    /// Persist the current layout as the user default
    pub fn save_as_default(&self) -> Result<()> {
        let saved: Vec<SavedWidget> = self.widgets.iter().map(SavedWidget::from).collect();
        save_json(&self.store, DEFAULT_LAYOUT_KEY, &saved)?;
        info!(widgets = saved.len(), "saved dashboard default layout");
        Ok(())
    }

    /// Apply the user default, if one was saved
    ///
    /// Returns `false` and leaves the layout untouched when no readable
    /// default exists.
    pub fn load_default(&mut self) -> Result<bool> {
        let Some(saved) = load_json_lenient::<Vec<SavedWidget>, _>(&self.store, DEFAULT_LAYOUT_KEY)
        else {
            return Ok(false);
        };
        let mut widgets = factory_catalog();
        let applied = merge_saved(&mut widgets, &saved);
        self.commit(widgets)?;
        info!(applied, "applied dashboard default layout");
        Ok(true)
    }

    /// Auto-save `widgets`, then make them current
    fn commit(&mut self, widgets: Vec<WidgetDescriptor>) -> Result<()> {
        let saved: Vec<SavedWidget> = widgets.iter().map(SavedWidget::from).collect();
        save_json(&self.store, LAYOUT_KEY, &saved)?;
        self.widgets = widgets;
        Ok(())
    }
}

fn find_mut<'a>(widgets: &'a mut [WidgetDescriptor], id: &str) -> Result<&'a mut WidgetDescriptor> {
    widgets
        .iter_mut()
        .find(|w| w.id == id)
        .ok_or_else(|| Error::UnknownWidget(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use safetysync_storage::{Blob, FileStore, MemoryStore};
    use std::sync::Arc;

    /// Store whose writes always fail
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn load(&self, key: &str) -> Result<Option<Blob>> {
            self.0.load(key)
        }

        fn save(&self, key: &str, _blob: Blob) -> Result<()> {
            Err(Error::storage(format!("read-only store, cannot write '{}'", key)))
        }

        fn remove(&self, _key: &str) -> Result<bool> {
            Err(Error::storage("read-only store"))
        }
    }

    fn visible(manager: &LayoutManager<impl KeyValueStore>, id: &str) -> bool {
        manager.widget(id).unwrap().visible
    }

    #[test]
    fn test_open_empty_store_uses_factory() {
        let manager = LayoutManager::open(MemoryStore::new());
        assert_eq!(manager.widgets(), factory_catalog().as_slice());
    }

    #[test]
    fn test_toggle_flips_and_autosaves() {
        let store = Arc::new(MemoryStore::new());
        let mut manager = LayoutManager::open(Arc::clone(&store));
        assert!(!manager.toggle("total-users").unwrap());
        assert!(store.contains(LAYOUT_KEY).unwrap());

        let reopened = LayoutManager::open(Arc::clone(&store));
        assert!(!visible(&reopened, "total-users"));
    }

    #[test]
    fn test_toggle_unknown_widget() {
        let mut manager = LayoutManager::open(MemoryStore::new());
        let err = manager.toggle("weather").unwrap_err();
        assert!(matches!(err, Error::UnknownWidget(id) if id == "weather"));
    }

    #[test]
    fn test_move_widget() {
        let mut manager = LayoutManager::open(MemoryStore::new());
        let rect = GridRect::new(6, 6, 2, 2);
        manager.move_widget("open-tickets", rect).unwrap();
        assert_eq!(manager.widget("open-tickets").unwrap().rect, rect);
        assert!(manager
            .move_widget("open-tickets", GridRect::new(0, 0, 0, 1))
            .is_err());
    }

    #[test]
    fn test_reset_to_factory() {
        let mut manager = LayoutManager::open(MemoryStore::new());
        manager.toggle("total-users").unwrap();
        manager
            .move_widget("compliance-rate", GridRect::new(1, 1, 1, 1))
            .unwrap();
        manager.reset_to_factory().unwrap();
        assert_eq!(manager.widgets(), factory_catalog().as_slice());
    }

    #[test]
    fn test_default_round_trip() {
        let store = Arc::new(MemoryStore::new());
        let mut manager = LayoutManager::open(Arc::clone(&store));
        assert!(!manager.load_default().unwrap());

        manager.toggle("monthly-revenue").unwrap();
        manager.save_as_default().unwrap();
        manager.reset_to_factory().unwrap();
        assert!(visible(&manager, "monthly-revenue"));

        assert!(manager.load_default().unwrap());
        assert!(!visible(&manager, "monthly-revenue"));
    }

    #[test]
    fn test_merge_keeps_new_factory_widgets_and_drops_unknown() {
        let saved = vec![
            SavedWidget {
                id: WidgetId::new("total-users"),
                visible: false,
                rect: None,
            },
            SavedWidget {
                id: WidgetId::new("retired-widget"),
                visible: true,
                rect: Some(GridRect::new(0, 0, 1, 1)),
            },
        ];
        let mut widgets = factory_catalog();
        assert_eq!(merge_saved(&mut widgets, &saved), 1);
        assert_eq!(widgets.len(), factory_catalog().len());
        assert!(!widgets[0].visible);
        assert_eq!(widgets[0].rect, factory_catalog()[0].rect);
        assert!(widgets.iter().all(|w| w.id != "retired-widget"));
    }

    #[test]
    fn test_unparsable_blob_falls_back_to_factory() {
        let store = MemoryStore::new();
        store.save(LAYOUT_KEY, Blob::from("[{\"id\":")).unwrap();
        let manager = LayoutManager::open(store);
        assert_eq!(manager.widgets(), factory_catalog().as_slice());
    }

    #[test]
    fn test_visible_widgets_in_order() {
        let mut manager = LayoutManager::open(MemoryStore::new());
        manager.toggle("active-employees").unwrap();
        let ids: Vec<&str> = manager.visible_widgets().map(|w| w.id.as_str()).collect();
        assert_eq!(ids[0], "total-users");
        assert_eq!(ids[1], "compliance-rate");
        assert!(!ids.contains(&"avg-training-time"));
    }

    #[test]
    fn test_layout_persists_across_file_store_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut manager = LayoutManager::open(FileStore::open(dir.path()).unwrap());
            manager.toggle("total-users").unwrap();
        }
        let manager = LayoutManager::open(FileStore::open(dir.path()).unwrap());
        assert!(!visible(&manager, "total-users"));
    }

    #[test]
    fn test_failed_save_leaves_layout_unchanged() {
        let mut manager = LayoutManager::open(ReadOnlyStore(MemoryStore::new()));

        assert!(manager.toggle("total-users").is_err());
        assert!(visible(&manager, "total-users"));

        assert!(manager
            .move_widget("open-tickets", GridRect::new(1, 1, 2, 2))
            .is_err());
        assert_eq!(
            manager.widget("open-tickets").unwrap().rect,
            factory_catalog()[6].rect
        );
        assert_eq!(manager.widgets(), factory_catalog().as_slice());
    }

    #[test]
    fn test_failed_reset_keeps_current_layout() {
        let store = MemoryStore::new();
        save_json(
            &store,
            LAYOUT_KEY,
            &vec![SavedWidget {
                id: WidgetId::new("total-users"),
                visible: false,
                rect: None,
            }],
        )
        .unwrap();
        let mut manager = LayoutManager::open(ReadOnlyStore(store));
        assert!(!visible(&manager, "total-users"));

        assert!(manager.reset_to_factory().is_err());
        assert!(!visible(&manager, "total-users"));
    }

    #[test]
    fn test_merge_skips_zero_sized_saved_rect() {
        let saved = vec![SavedWidget {
            id: WidgetId::new("compliance-rate"),
            visible: false,
            rect: Some(GridRect::new(0, 0, 0, 0)),
        }];
        let mut widgets = factory_catalog();
        assert_eq!(merge_saved(&mut widgets, &saved), 1);
        assert!(!widgets[2].visible);
        assert_eq!(widgets[2].rect, factory_catalog()[2].rect);
        assert!(widgets[2].rect.validate().is_ok());
    }
}
