//! Headless test harness for programmatic scene manipulation.
//!
//! Drives a `SceneStore` with a seeded random source and a mesh cache, so
//! tests and the JSON command protocol get reproducible scenes without a window.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{Dimensions, SceneError, ShapeKind};

use crate::build::MeshCache;
use crate::state::scene::{list_rows, ListRow, SceneStore};
use crate::validation::MeshValidator;
use crate::viewport::mesh::MeshData;
use crate::viewport::picking::{pick_record, Ray};

/// Headless test harness: store, random source and build cache
pub struct TestHarness {
    pub store: SceneStore,
    pub rng: StdRng,
    cache: MeshCache,
}

impl TestHarness {
    /// Empty harness seeded with 0
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            store: SceneStore::default(),
            rng: StdRng::seed_from_u64(seed),
            cache: MeshCache::new(),
        }
    }

    // ── Scene manipulation ────────────────────────────────────

    pub fn add_group(
        &mut self,
        kind: ShapeKind,
        dimensions: Dimensions,
        count: usize,
    ) -> Result<Range<usize>, SceneError> {
        self.store
            .add_group_with(kind, dimensions, count, &mut self.rng)
    }

    /// Add `count` boxes of the given size
    pub fn add_boxes(
        &mut self,
        width: f32,
        height: f32,
        depth: f32,
        count: usize,
    ) -> Result<Range<usize>, SceneError> {
        let dims = Dimensions { width, height, depth };
        self.add_group(ShapeKind::Box, dims, count)
    }

    /// Add `count` pyramids; depth is unused by the shape
    pub fn add_pyramids(
        &mut self,
        base_radius: f32,
        height: f32,
        count: usize,
    ) -> Result<Range<usize>, SceneError> {
        let dims = Dimensions {
            width: base_radius,
            height,
            depth: 1.0,
        };
        self.add_group(ShapeKind::Pyramid, dims, count)
    }

    pub fn select(&mut self, index: i64) -> Result<(), SceneError> {
        self.store.select(index)
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    // ── Build + inspection ────────────────────────────────────

    /// Bring meshes up to date with the store; true when a rebuild happened
    pub fn build(&mut self) -> bool {
        self.cache.sync(&self.store)
    }

    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    /// Mesh for store index `index` as of the last `build`
    pub fn mesh(&self, index: usize) -> Option<&MeshData> {
        self.cache.meshes().get(index)
    }

    pub fn mesh_count(&self) -> usize {
        self.cache.meshes().len()
    }

    pub fn validate_mesh(&self, index: usize) -> Option<MeshValidator<'_>> {
        self.mesh(index).map(MeshValidator::new)
    }

    /// Store index hit first by `ray`, using the last built meshes
    pub fn pick(&self, ray: &Ray) -> Option<usize> {
        pick_record(ray, self.cache.meshes(), self.cache.aabbs())
    }

    /// Click semantics: select whatever the ray hits
    pub fn click(&mut self, ray: &Ray) -> Option<usize> {
        self.build();
        let index = self.pick(ray)?;
        // `index` comes from the current meshes, so it is in range
        self.store.select(index as i64).ok()?;
        Some(index)
    }

    pub fn list(&self) -> Vec<ListRow> {
        list_rows(&self.store)
    }

    pub fn rebuild_count(&self) -> u64 {
        self.cache.rebuild_count()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_new_harness_empty() {
        let h = TestHarness::new();
        assert_eq!(h.record_count(), 0);
        assert!(h.list().is_empty());
    }

    #[test]
    fn test_add_boxes_and_pyramids() {
        let mut h = TestHarness::new();
        assert_eq!(h.add_boxes(1.0, 1.0, 1.0, 3), Ok(0..3));
        assert_eq!(h.add_pyramids(0.5, 1.0, 2), Ok(0..2));
        assert_eq!(h.record_count(), 5);
        assert_eq!(h.list()[0].kind, ShapeKind::Pyramid);
    }

    #[test]
    fn test_build_and_mesh() {
        let mut h = TestHarness::new();
        h.add_boxes(1.0, 1.0, 1.0, 2).unwrap();
        assert!(h.build());
        assert!(!h.build());
        assert_eq!(h.mesh_count(), 2);

        let v = h.validate_mesh(0).unwrap();
        assert_eq!(v.triangle_count(), 12);
        assert!(v.validate_all().is_empty());
        assert!(h.mesh(2).is_none());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut h = TestHarness::new();
        h.add_boxes(1.0, 1.0, 1.0, 2).unwrap();
        h.select(0).unwrap();
        h.clear();
        h.build();
        assert_eq!(h.record_count(), 0);
        assert_eq!(h.mesh_count(), 0);
        assert!(h.store.selected().is_none());
    }

    #[test]
    fn test_click_selects_hit_record() {
        let mut h = TestHarness::new();
        h.add_boxes(0.5, 0.5, 0.5, 1).unwrap();
        let center = Vec3::from(h.store.records()[0].position);

        let ray = Ray::new(center + Vec3::new(0.05, 0.02, 10.0), Vec3::NEG_Z);
        assert_eq!(h.click(&ray), Some(0));
        assert_eq!(h.store.selected(), Some(0));

        let miss = Ray::new(Vec3::new(50.0, 50.0, 10.0), Vec3::NEG_Z);
        assert_eq!(h.click(&miss), None);
        assert_eq!(h.store.selected(), Some(0));
    }

    #[test]
    fn test_same_seed_same_list() {
        let run = |seed| {
            let mut h = TestHarness::with_seed(seed);
            h.add_pyramids(1.0, 1.0, 4).unwrap();
            h.list()
        };
        assert_eq!(run(5), run(5));
    }
}
