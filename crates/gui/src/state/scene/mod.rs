//! Scene state management
//!
//! `SceneStore` owns every placed primitive plus the current selection. It is
//! the single source of truth for the primitive list and the viewport; both
//! read it and report interactions back as plain indices.

mod display;
mod factory;
mod group_ops;

pub use display::{kind_icon, kind_label, list_rows, position_label, ListRow};
pub use factory::{random_position, spawn_record, PLACEMENT_EXTENT};

use shared::{PrimitiveRecord, SceneError};

use super::selection::SelectionState;

/// Authoritative collection of primitives, newest group first
#[derive(Default)]
pub struct SceneStore {
    records: Vec<PrimitiveRecord>,
    selection: SelectionState,
    /// Last id handed out; ids are never reused, even after `clear`
    last_id: u64,
    /// Monotonically increasing version counter for cache invalidation
    version: u64,
}

impl SceneStore {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn records(&self) -> &[PrimitiveRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PrimitiveRecord> {
        self.records.get(index)
    }

    /// Selected index, if any
    pub fn selected(&self) -> Option<usize> {
        self.selection.primary()
    }

    pub fn selected_record(&self) -> Option<&PrimitiveRecord> {
        self.selected().and_then(|i| self.records.get(i))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.is_selected(index)
    }

    /// Select the record at `index`.
    ///
    /// Signed so that callers forwarding raw UI/JSON values (e.g. `-1`) get
    /// a range error instead of a wrapped index.
    pub fn select(&mut self, index: i64) -> Result<(), SceneError> {
        let len = self.records.len();
        let valid = usize::try_from(index).ok().filter(|&i| i < len);
        let Some(index) = valid else {
            return Err(SceneError::SelectionOutOfRange { index, len });
        };
        if !self.selection.is_selected(index) {
            self.selection.select(index);
            self.version += 1;
        }
        Ok(())
    }

    /// Remove every record and reset the selection
    pub fn clear(&mut self) {
        if self.records.is_empty() && self.selection.primary().is_none() {
            return;
        }
        tracing::info!("Cleared {} primitives", self.records.len());
        self.records.clear();
        self.selection.clear();
        self.version += 1;
    }

    fn next_id(&mut self) -> shared::PrimitiveId {
        self.last_id += 1;
        shared::PrimitiveId(self.last_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::{Dimensions, ShapeKind};

    fn store_with(count: usize) -> SceneStore {
        let mut rng = StdRng::seed_from_u64(5);
        let mut store = SceneStore::default();
        store
            .add_group_with(ShapeKind::Box, Dimensions::default(), count, &mut rng)
            .unwrap();
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = SceneStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.selected().is_none());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_select_in_range() {
        let mut store = store_with(3);
        store.select(2).unwrap();
        assert_eq!(store.selected(), Some(2));
        assert!(store.is_selected(2));
        assert_eq!(store.selected_record().unwrap().id, store.records()[2].id);
    }

    #[test]
    fn test_select_idempotent() {
        let mut store = store_with(3);
        store.select(1).unwrap();
        let v = store.version();
        store.select(1).unwrap();
        assert_eq!(store.version(), v);
        assert_eq!(store.selected(), Some(1));
    }

    #[test]
    fn test_select_out_of_range_keeps_selection() {
        let mut store = store_with(3);
        store.select(1).unwrap();

        assert_eq!(
            store.select(-1),
            Err(SceneError::SelectionOutOfRange { index: -1, len: 3 })
        );
        assert_eq!(
            store.select(3),
            Err(SceneError::SelectionOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(store.selected(), Some(1));
    }

    #[test]
    fn test_select_on_empty_store_fails() {
        let mut store = SceneStore::default();
        assert!(store.select(0).is_err());
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut store = store_with(4);
        store.select(3).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert!(store.selected().is_none());

        let v = store.version();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.version(), v);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut store = store_with(2);
        let max_before = store.records().iter().map(|r| r.id).max().unwrap();
        store.clear();
        let mut rng = StdRng::seed_from_u64(6);
        store
            .add_group_with(ShapeKind::Pyramid, Dimensions::default(), 1, &mut rng)
            .unwrap();
        assert!(store.records()[0].id > max_before);
    }
}
