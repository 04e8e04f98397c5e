//! Geometry memoization and per-scene mesh cache

use std::collections::HashMap;
use std::sync::Arc;

use shared::{Dimensions, SceneError, ShapeKind};

use super::geometry::{build_geometry, Geometry};
use super::mesh_build::record_mesh;
use crate::state::scene::SceneStore;
use crate::viewport::mesh::MeshData;
use crate::viewport::picking::Aabb;

/// (kind, width bits, height bits, depth bits)
type GeometryKey = (ShapeKind, u32, u32, u32);

/// Builders are pure, so identical (kind, dimensions) share one buffer
#[derive(Default)]
pub struct GeometryCache {
    entries: HashMap<GeometryKey, Arc<Geometry>>,
    misses: u64,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch or build the geometry for a shape
    pub fn get(&mut self, kind: ShapeKind, dims: &Dimensions) -> Result<Arc<Geometry>, SceneError> {
        // Pyramid ignores depth, so it must not split the key
        let depth_bits = match kind {
            ShapeKind::Box => dims.depth.to_bits(),
            ShapeKind::Pyramid => 0,
        };
        let key = (kind, dims.width.to_bits(), dims.height.to_bits(), depth_bits);

        if let Some(geometry) = self.entries.get(&key) {
            return Ok(Arc::clone(geometry));
        }

        let geometry = Arc::new(build_geometry(kind, dims)?);
        self.misses += 1;
        self.entries.insert(key, Arc::clone(&geometry));
        Ok(geometry)
    }

    /// Number of distinct geometries built so far
    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Meshes for every record, rebuilt when the store version or selection changes.
///
/// `meshes()[i]` always belongs to `store.records()[i]` for the version it was built from.
pub struct MeshCache {
    geometry: GeometryCache,
    meshes: Vec<MeshData>,
    aabbs: Vec<Aabb>,
    version: u64,
    selected: Option<usize>,
    rebuild_count: u64,
}

impl Default for MeshCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshCache {
    pub fn new() -> Self {
        Self {
            geometry: GeometryCache::new(),
            meshes: Vec::new(),
            aabbs: Vec::new(),
            version: u64::MAX, // force first rebuild
            selected: None,
            rebuild_count: 0,
        }
    }

    /// Check if cache matches the store
    pub fn is_valid(&self, store: &SceneStore) -> bool {
        self.version == store.version() && self.selected == store.selected()
    }

    /// Rebuild if stale; returns true when a rebuild happened
    pub fn sync(&mut self, store: &SceneStore) -> bool {
        if self.is_valid(store) {
            return false;
        }
        self.rebuild(store);
        true
    }

    /// Rebuild all record meshes
    pub fn rebuild(&mut self, store: &SceneStore) {
        let mut meshes = Vec::with_capacity(store.len());
        for (index, record) in store.records().iter().enumerate() {
            match self.geometry.get(record.kind, &record.dimensions) {
                Ok(geometry) => {
                    meshes.push(record_mesh(record, &geometry, store.is_selected(index)));
                }
                Err(e) => {
                    // Records are validated on insert; keep indices aligned anyway
                    tracing::error!("Geometry for {} failed: {e}", record.id);
                    meshes.push(MeshData::default());
                }
            }
        }

        self.aabbs = meshes.iter().map(Aabb::from_mesh).collect();
        self.meshes = meshes;
        self.version = store.version();
        self.selected = store.selected();
        self.rebuild_count += 1;
        tracing::debug!(
            "Rebuilt {} meshes (geometry cache: {} shapes)",
            self.meshes.len(),
            self.geometry.len()
        );
    }

    pub fn meshes(&self) -> &[MeshData] {
        &self.meshes
    }

    pub fn aabbs(&self) -> &[Aabb] {
        &self.aabbs
    }

    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    pub fn geometry(&self) -> &GeometryCache {
        &self.geometry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_geometry_cache_shares_buffers() {
        let mut cache = GeometryCache::new();
        let dims = Dimensions::new(1.0, 2.0, 3.0).unwrap();
        let a = cache.get(ShapeKind::Box, &dims).unwrap();
        let b = cache.get(ShapeKind::Box, &dims).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.misses(), 1);

        cache.get(ShapeKind::Pyramid, &dims).unwrap();
        assert_eq!(cache.misses(), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_pyramid_key_ignores_depth() {
        let mut cache = GeometryCache::new();
        cache.get(ShapeKind::Pyramid, &Dimensions::new(1.0, 1.0, 1.0).unwrap()).unwrap();
        cache.get(ShapeKind::Pyramid, &Dimensions::new(1.0, 1.0, 9.0).unwrap()).unwrap();
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_geometry_cache_rejects_invalid() {
        let mut cache = GeometryCache::new();
        let dims = Dimensions { width: 0.0, height: 1.0, depth: 1.0 };
        assert!(cache.get(ShapeKind::Box, &dims).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_mesh_cache_tracks_version_and_selection() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut store = SceneStore::default();
        let mut cache = MeshCache::new();

        assert!(cache.sync(&store));
        assert!(!cache.sync(&store));

        store
            .add_group_with(ShapeKind::Box, Dimensions::default(), 2, &mut rng)
            .unwrap();
        assert!(cache.sync(&store));
        assert_eq!(cache.meshes().len(), 2);
        assert_eq!(cache.aabbs().len(), 2);

        store.select(1).unwrap();
        assert!(cache.sync(&store));
        assert_eq!(cache.rebuild_count(), 3);

        // Re-selecting the same index is not a change
        store.select(1).unwrap();
        assert!(!cache.sync(&store));
    }
}
