//! Integration tests for the build pipeline.
//!
//! Tests end-to-end: SceneStore -> build_scene_meshes -> validate mesh output,
//! plus the raw geometry builders against the geometry validator.

use primscene_gui_lib::build::{
    build_box_geometry, build_pyramid_geometry, build_scene_meshes, generate_face_colors,
    mesh_from_geometry, GeometryCache, MeshCache, SELECTED_SCALE,
};
use primscene_gui_lib::fixtures::*;
use primscene_gui_lib::validation::{GeometryValidator, MeshValidator};
use glam::Mat4;
use shared::{SceneError, FACE_COLOR_COUNT};

#[test]
fn test_box_geometry_counts() {
    let g = build_box_geometry(1.0, 2.0, 3.0).unwrap();
    assert_eq!(g.vertex_count(), 24);
    assert_eq!(g.indices.len(), 36);
    assert!(g.indices.iter().all(|&i| i < 24));

    let errors = GeometryValidator::new(&g).validate_all();
    assert!(errors.is_empty(), "Geometry errors: {:?}", errors);
}

#[test]
fn test_pyramid_geometry_closed_for_many_sides() {
    for n in 3..=16 {
        let g = build_pyramid_geometry(0.7, 1.3, n).unwrap();
        assert_eq!(g.triangle_count(), 2 * n as usize);
        assert_eq!(g.vertex_count(), n as usize + 2);

        let v = GeometryValidator::new(&g);
        assert!(v.degenerate_triangles().is_empty());
        assert!(v.is_closed(), "n={n} not closed");
        assert!(v.inward_triangles().is_empty());
    }
}

#[test]
fn test_builders_reject_bad_input() {
    assert!(matches!(
        build_box_geometry(0.0, 1.0, 1.0),
        Err(SceneError::InvalidDimension { name: "width", .. })
    ));
    assert!(build_box_geometry(1.0, f32::NAN, 1.0).is_err());
    assert_eq!(
        build_pyramid_geometry(1.0, 1.0, 2),
        Err(SceneError::InvalidSegments(2))
    );
}

#[test]
fn test_mixed_store_end_to_end() {
    let store = store_with(3, 2, 8);
    let meshes = build_scene_meshes(&store, &mut GeometryCache::new()).unwrap();
    assert_eq!(meshes.len(), 5);

    for (index, mesh) in meshes.iter().enumerate() {
        let v = MeshValidator::new(mesh);
        let errors = v.validate_all();
        assert!(errors.is_empty(), "Mesh {index}: {:?}", errors);
    }
}

#[test]
fn test_box_mesh_uses_all_face_colors() {
    let mut rng = seeded_rng(3);
    let colors = generate_face_colors(&mut rng);
    let g = build_box_geometry(1.0, 1.0, 1.0).unwrap();
    let mesh = mesh_from_geometry(&g, &colors, Mat4::IDENTITY);
    assert_eq!(MeshValidator::new(&mesh).distinct_color_count(), FACE_COLOR_COUNT);
}

#[test]
fn test_mesh_cache_follows_selection() {
    let mut store = store_with(2, 0, 1);
    let mut cache = MeshCache::new();
    cache.sync(&store);
    let before = MeshValidator::new(&cache.meshes()[0]).dimensions();

    store.select(0).unwrap();
    assert!(cache.sync(&store));
    let after = MeshValidator::new(&cache.meshes()[0]).dimensions();
    for axis in 0..3 {
        assert!((after[axis] - before[axis] * SELECTED_SCALE).abs() < 1e-4);
    }
    assert_eq!(cache.geometry().misses(), 1);
}

#[test]
fn test_fixed_position_records() {
    let box_record = unit_box_at(1, [1.0, 0.0, -1.0]);
    let pyramid = unit_pyramid_at(2, [0.0, 0.0, 0.0]);
    let mut geometry = GeometryCache::new();

    let g = geometry.get(box_record.kind, &box_record.dimensions).unwrap();
    let mesh = primscene_gui_lib::build::record_mesh(&box_record, &g, false);
    let aabb = MeshValidator::new(&mesh).aabb();
    assert!((aabb.center().x - 1.0).abs() < 1e-5);
    assert!((aabb.center().z + 1.0).abs() < 1e-5);

    let g = geometry.get(pyramid.kind, &pyramid.dimensions).unwrap();
    let mesh = primscene_gui_lib::build::record_mesh(&pyramid, &g, false);
    let aabb = MeshValidator::new(&mesh).aabb();
    assert!(aabb.min.y.abs() < 1e-5);
    assert!((aabb.max.y - 1.0).abs() < 1e-5);
}
