//! Group creation

use std::ops::Range;

use rand::Rng;
use shared::{Dimensions, SceneError, ShapeKind, MAX_GROUP_COUNT};

use super::factory::spawn_record;
use super::SceneStore;

impl SceneStore {
    /// Add `count` primitives using the process-wide random source
    pub fn add_group(
        &mut self,
        kind: ShapeKind,
        dimensions: Dimensions,
        count: usize,
    ) -> Result<Range<usize>, SceneError> {
        self.add_group_with(kind, dimensions, count, &mut rand::thread_rng())
    }

    /// Add `count` primitives drawing placement and colours from `rng`.
    ///
    /// New records are prepended in generation order and occupy the returned
    /// index range (`0..count`); existing records shift back by `count`. A
    /// selected record stays selected. Validation happens before any state
    /// changes, so on error nothing is added. `count` must be in
    /// `1..=MAX_GROUP_COUNT`.
    pub fn add_group_with<R: Rng + ?Sized>(
        &mut self,
        kind: ShapeKind,
        dimensions: Dimensions,
        count: usize,
        rng: &mut R,
    ) -> Result<Range<usize>, SceneError> {
        dimensions.validate()?;
        if !(1..=MAX_GROUP_COUNT).contains(&count) {
            return Err(SceneError::InvalidCount(count));
        }

        let group: Vec<_> = (0..count)
            .map(|_| {
                let id = self.next_id();
                spawn_record(id, kind, dimensions, rng)
            })
            .collect();

        self.records.splice(0..0, group);
        self.selection.shift(count);
        self.version += 1;

        tracing::info!(
            "Added {count} {kind:?} primitive(s) ({}x{}x{}), scene size {}",
            dimensions.width,
            dimensions.height,
            dimensions.depth,
            self.records.len()
        );
        Ok(0..count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::PrimitiveId;
    use std::collections::HashSet;

    fn unit() -> Dimensions {
        Dimensions::new(1.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_add_group_on_empty_store() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut store = SceneStore::default();
        let range = store
            .add_group_with(ShapeKind::Box, unit(), 3, &mut rng)
            .unwrap();

        assert_eq!(range, 0..3);
        assert_eq!(store.len(), 3);
        let ids: HashSet<PrimitiveId> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 3);
        for r in store.records() {
            assert_eq!(r.kind, ShapeKind::Box);
            assert_eq!(r.dimensions, unit());
            assert!(r.position.iter().all(|c| (-2.0..=2.0).contains(c)));
        }
    }

    #[test]
    fn test_second_group_is_prepended() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut store = SceneStore::default();
        store.add_group_with(ShapeKind::Box, unit(), 3, &mut rng).unwrap();
        let old: Vec<_> = store.records().to_vec();

        let range = store
            .add_group_with(ShapeKind::Pyramid, unit(), 2, &mut rng)
            .unwrap();

        assert_eq!(range, 0..2);
        assert_eq!(store.len(), 5);
        assert!(store.records()[..2].iter().all(|r| r.kind == ShapeKind::Pyramid));
        // Existing records unchanged, shifted by two
        assert_eq!(&store.records()[2..], &old[..]);
    }

    #[test]
    fn test_selection_follows_record_across_prepend() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = SceneStore::default();
        store.add_group_with(ShapeKind::Box, unit(), 3, &mut rng).unwrap();
        store.select(1).unwrap();
        let selected_id = store.selected_record().unwrap().id;

        store.add_group_with(ShapeKind::Box, unit(), 2, &mut rng).unwrap();
        assert_eq!(store.selected(), Some(3));
        assert_eq!(store.selected_record().unwrap().id, selected_id);
    }

    #[test]
    fn test_invalid_count_mutates_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = SceneStore::default();
        store.add_group_with(ShapeKind::Box, unit(), 1, &mut rng).unwrap();
        let v = store.version();

        assert_eq!(
            store.add_group_with(ShapeKind::Box, unit(), 0, &mut rng),
            Err(SceneError::InvalidCount(0))
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.version(), v);
    }

    #[test]
    fn test_oversized_count_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = SceneStore::default();
        assert_eq!(
            store.add_group_with(ShapeKind::Box, unit(), usize::MAX, &mut rng),
            Err(SceneError::InvalidCount(usize::MAX))
        );
        assert_eq!(
            store.add_group_with(ShapeKind::Box, unit(), MAX_GROUP_COUNT + 1, &mut rng),
            Err(SceneError::InvalidCount(MAX_GROUP_COUNT + 1))
        );
        assert!(store.is_empty());
        assert_eq!(store.version(), 0);

        let range = store
            .add_group_with(ShapeKind::Box, unit(), MAX_GROUP_COUNT, &mut rng)
            .unwrap();
        assert_eq!(range, 0..MAX_GROUP_COUNT);
    }

    #[test]
    fn test_invalid_dimension_mutates_nothing() {
        let mut store = SceneStore::default();
        let dims = Dimensions { width: 1.0, height: 0.0, depth: 1.0 };
        assert!(matches!(
            store.add_group(ShapeKind::Pyramid, dims, 4),
            Err(SceneError::InvalidDimension { name: "height", .. })
        ));
        assert!(store.is_empty());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_ids_increase_monotonically() {
        let mut store = SceneStore::default();
        store.add_group(ShapeKind::Box, unit(), 2).unwrap();
        store.add_group(ShapeKind::Box, unit(), 2).unwrap();
        // Newest first, generation order inside a group
        let ids: Vec<u64> = store.records().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
    }

    #[test]
    fn test_same_seed_same_scene() {
        let build = || {
            let mut rng = StdRng::seed_from_u64(77);
            let mut store = SceneStore::default();
            store.add_group_with(ShapeKind::Box, unit(), 4, &mut rng).unwrap();
            store.records().to_vec()
        };
        assert_eq!(build(), build());
    }
}
