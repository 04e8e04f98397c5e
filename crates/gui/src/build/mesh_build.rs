//! Geometry + record data -> flat-shaded GPU mesh

use glam::{Mat4, Vec3};
use shared::{PrimitiveRecord, Rgb};

use super::geometry::Geometry;
use crate::viewport::mesh::MeshData;

/// Visual scale applied to the selected primitive (presentation only)
pub const SELECTED_SCALE: f32 = 1.2;

/// World transform for a record: translate to its position, scale around its origin
pub fn record_transform(record: &PrimitiveRecord, selected: bool) -> Mat4 {
    let scale = if selected { SELECTED_SCALE } else { 1.0 };
    Mat4::from_translation(Vec3::from(record.position)) * Mat4::from_scale(Vec3::splat(scale))
}

/// De-index `geometry` into a flat-shaded mesh.
///
/// Every triangle gets its own three vertices carrying the triangle normal and
/// the colour of its face group, so shared positions never blend face colours.
pub fn mesh_from_geometry(geometry: &Geometry, colors: &[Rgb], transform: Mat4) -> MeshData {
    let tri_count = geometry.triangle_count();
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(tri_count * 3 * 9),
        indices: Vec::with_capacity(tri_count * 3),
    };

    for tri in 0..tri_count {
        let corners = geometry.triangle(tri).map(|p| transform.transform_point3(p));
        let normal = (corners[1] - corners[0])
            .cross(corners[2] - corners[0])
            .normalize_or_zero();
        let color = colors
            .get(geometry.color_slot(tri))
            .copied()
            .unwrap_or_default()
            .to_array();

        for corner in corners {
            let index = mesh.push_vertex(corner, normal, color);
            mesh.indices.push(index);
        }
    }

    mesh
}

/// Render input for one record
pub fn record_mesh(record: &PrimitiveRecord, geometry: &Geometry, selected: bool) -> MeshData {
    mesh_from_geometry(geometry, &record.face_colors, record_transform(record, selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::geometry::{build_box_geometry, build_pyramid_geometry};
    use crate::viewport::picking::Aabb;
    use shared::{Dimensions, PrimitiveId, ShapeKind};

    fn record_at(position: [f32; 3]) -> PrimitiveRecord {
        PrimitiveRecord {
            id: PrimitiveId(1),
            kind: ShapeKind::Box,
            position,
            dimensions: Dimensions::new(1.0, 2.0, 3.0).unwrap(),
            face_colors: std::array::from_fn(|i| Rgb::new(i as f32 / 10.0, 0.5, 0.5)),
        }
    }

    #[test]
    fn test_box_mesh_is_flat_shaded() {
        let g = build_box_geometry(1.0, 2.0, 3.0).unwrap();
        let mesh = record_mesh(&record_at([0.0; 3]), &g, false);
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_face_colors_follow_groups() {
        let g = build_box_geometry(1.0, 2.0, 3.0).unwrap();
        let record = record_at([0.0; 3]);
        let mesh = record_mesh(&record, &g, false);
        for tri in 0..12 {
            let expected = record.face_colors[tri / 2].to_array();
            assert_eq!(mesh.color(tri * 3), expected);
        }
    }

    #[test]
    fn test_translation_moves_aabb() {
        let g = build_box_geometry(1.0, 2.0, 3.0).unwrap();
        let mesh = record_mesh(&record_at([1.0, -1.0, 0.5]), &g, false);
        let aabb = Aabb::from_mesh(&mesh);
        assert!(aabb.center().abs_diff_eq(Vec3::new(1.0, -1.0, 0.5), 1e-5));
    }

    #[test]
    fn test_selected_scale_is_visual_only() {
        let g = build_box_geometry(1.0, 2.0, 3.0).unwrap();
        let record = record_at([0.0; 3]);
        let plain = Aabb::from_mesh(&record_mesh(&record, &g, false));
        let selected = Aabb::from_mesh(&record_mesh(&record, &g, true));
        let ratio = (selected.max - selected.min) / (plain.max - plain.min);
        assert!(ratio.abs_diff_eq(Vec3::splat(SELECTED_SCALE), 1e-5));
        assert_eq!(record.dimensions, Dimensions::new(1.0, 2.0, 3.0).unwrap());
    }

    #[test]
    fn test_pyramid_uses_two_slots() {
        let g = build_pyramid_geometry(1.0, 1.0, 4).unwrap();
        let record = record_at([0.0; 3]);
        let mesh = record_mesh(&record, &g, false);
        assert_eq!(mesh.color(0), record.face_colors[0].to_array());
        assert_eq!(mesh.color(4 * 3), record.face_colors[1].to_array());
    }
}
