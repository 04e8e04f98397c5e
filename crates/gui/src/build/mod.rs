//! Geometry generation and mesh building for scene primitives.

mod cache;
pub mod colors;
pub mod geometry;
mod mesh_build;

pub use cache::{GeometryCache, MeshCache};
pub use colors::generate_face_colors;
pub use geometry::{
    build_box_geometry, build_geometry, build_pyramid_geometry, FaceGroup, Geometry,
    DEFAULT_RADIAL_SEGMENTS,
};
pub use mesh_build::{mesh_from_geometry, record_mesh, record_transform, SELECTED_SCALE};

use shared::SceneError;

use crate::state::scene::SceneStore;
use crate::viewport::mesh::MeshData;

/// Build meshes for the whole store, index-aligned with `store.records()`
pub fn build_scene_meshes(
    store: &SceneStore,
    geometry: &mut GeometryCache,
) -> Result<Vec<MeshData>, SceneError> {
    store
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let g = geometry.get(record.kind, &record.dimensions)?;
            Ok(record_mesh(record, &g, store.is_selected(index)))
        })
        .collect()
}
