//! Geometry and mesh validation utilities.
//!
//! `GeometryValidator` checks the raw shape buffers (index stride and range,
//! degenerate triangles, outward winding, closedness). `MeshValidator` checks
//! the interleaved render buffers: stride, in-range indices, normalized
//! normals, AABB dimensions.

use std::collections::HashMap;

use glam::Vec3;

use crate::build::Geometry;
use crate::viewport::mesh::{MeshData, MESH_STRIDE};
use crate::viewport::picking::Aabb;

/// Positions closer than this are welded when checking closedness
const WELD_EPSILON: f32 = 1e-5;

type WeldKey = (i64, i64, i64);

fn weld_key(p: [f32; 3]) -> WeldKey {
    let q = |c: f32| (c / WELD_EPSILON).round() as i64;
    (q(p[0]), q(p[1]), q(p[2]))
}

/// Validator for `Geometry` buffers.
pub struct GeometryValidator<'a> {
    geometry: &'a Geometry,
}

impl<'a> GeometryValidator<'a> {
    pub fn new(geometry: &'a Geometry) -> Self {
        Self { geometry }
    }

    pub fn is_index_stride_valid(&self) -> bool {
        self.geometry.indices.len() % 3 == 0
    }

    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.geometry.vertex_count() as u32;
        self.geometry.indices.iter().all(|&i| i < max_idx)
    }

    /// Triangles whose area is (numerically) zero
    pub fn degenerate_triangles(&self) -> Vec<usize> {
        (0..self.geometry.triangle_count())
            .filter(|&tri| self.geometry.triangle_normal(tri).length() <= f32::EPSILON)
            .collect()
    }

    fn centroid(&self) -> Vec3 {
        let count = self.geometry.vertex_count().max(1) as f32;
        let sum: Vec3 = self.geometry.positions.iter().map(|p| Vec3::from(*p)).sum();
        sum / count
    }

    /// Triangles facing the shape centroid instead of away from it.
    ///
    /// Valid for convex shapes, which is all the builders emit.
    pub fn inward_triangles(&self) -> Vec<usize> {
        let center = self.centroid();
        (0..self.geometry.triangle_count())
            .filter(|&tri| {
                let [a, b, c] = self.geometry.triangle(tri);
                let face_center = (a + b + c) / 3.0;
                self.geometry.triangle_normal(tri).dot(face_center - center) <= 0.0
            })
            .collect()
    }

    /// Directed edges between welded positions, with their use count
    fn directed_edges(&self) -> HashMap<(WeldKey, WeldKey), usize> {
        let g = self.geometry;
        let mut edges = HashMap::new();
        for tri in g.indices.chunks_exact(3) {
            let keys = [
                weld_key(g.positions[tri[0] as usize]),
                weld_key(g.positions[tri[1] as usize]),
                weld_key(g.positions[tri[2] as usize]),
            ];
            for k in 0..3 {
                *edges.entry((keys[k], keys[(k + 1) % 3])).or_insert(0) += 1;
            }
        }
        edges
    }

    /// Every undirected edge is shared by exactly two triangles
    pub fn is_closed(&self) -> bool {
        let mut undirected: HashMap<(WeldKey, WeldKey), usize> = HashMap::new();
        for ((a, b), uses) in self.directed_edges() {
            let key = if a <= b { (a, b) } else { (b, a) };
            *undirected.entry(key).or_insert(0) += uses;
        }
        !undirected.is_empty() && undirected.values().all(|&uses| uses == 2)
    }

    /// Neighbouring triangles traverse their shared edge in opposite directions
    pub fn is_consistently_oriented(&self) -> bool {
        self.directed_edges().values().all(|&uses| uses == 1)
    }

    /// Run all checks; an empty list means the geometry is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.is_index_stride_valid() {
            errors.push(format!(
                "Index buffer length {} is not a multiple of 3",
                self.geometry.indices.len()
            ));
            return errors;
        }
        if !self.are_indices_in_range() {
            errors.push(format!(
                "Indices out of range (vertex_count={})",
                self.geometry.vertex_count()
            ));
            return errors;
        }

        let degenerate = self.degenerate_triangles();
        if !degenerate.is_empty() {
            errors.push(format!("Degenerate triangles: {degenerate:?}"));
        }
        let inward = self.inward_triangles();
        if !inward.is_empty() {
            errors.push(format!("Inward-facing triangles: {inward:?}"));
        }
        if !self.is_closed() {
            errors.push("Surface is not closed".to_string());
        }
        if !self.is_consistently_oriented() {
            errors.push("Inconsistent triangle orientation".to_string());
        }

        errors
    }
}

/// Validator for `MeshData` integrity checks.
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len() / MESH_STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }

    /// Vertex buffer length is a multiple of the stride
    pub fn is_stride_valid(&self) -> bool {
        self.mesh.vertices.len() % MESH_STRIDE == 0
    }

    pub fn is_index_stride_valid(&self) -> bool {
        self.mesh.indices.len() % 3 == 0
    }

    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < max_idx)
    }

    /// All vertex normals have unit length (within epsilon)
    pub fn are_normals_normalized(&self, epsilon: f32) -> bool {
        self.mesh
            .vertices
            .chunks_exact(MESH_STRIDE)
            .all(|v| (Vec3::new(v[3], v[4], v[5]).length() - 1.0).abs() <= epsilon)
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_mesh(self.mesh)
    }

    /// Size of the bounding box along X, Y, Z
    pub fn dimensions(&self) -> [f32; 3] {
        self.aabb().size().to_array()
    }

    pub fn assert_dimensions_approx(&self, expected: [f32; 3], tolerance: f32) -> bool {
        self.dimensions()
            .iter()
            .zip(expected)
            .all(|(d, e)| (d - e).abs() < tolerance)
    }

    /// Number of distinct vertex colours
    pub fn distinct_color_count(&self) -> usize {
        let mut colors: Vec<[u32; 3]> = self
            .mesh
            .vertices
            .chunks_exact(MESH_STRIDE)
            .map(|v| [v[6].to_bits(), v[7].to_bits(), v[8].to_bits()])
            .collect();
        colors.sort_unstable();
        colors.dedup();
        colors.len()
    }

    /// Run all checks; an empty list means the mesh is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.is_stride_valid() {
            errors.push(format!(
                "Vertex buffer length {} is not a multiple of {MESH_STRIDE}",
                self.mesh.vertices.len()
            ));
        }

        if !self.is_index_stride_valid() {
            errors.push(format!(
                "Index buffer length {} is not a multiple of 3",
                self.mesh.indices.len()
            ));
        }

        if !self.are_indices_in_range() {
            let max_idx = self.vertex_count() as u32;
            let out_of_range: Vec<_> = self
                .mesh
                .indices
                .iter()
                .filter(|&&i| i >= max_idx)
                .take(5)
                .collect();
            errors.push(format!(
                "Indices out of range (vertex_count={max_idx}): {out_of_range:?}"
            ));
        }

        if self.vertex_count() > 0 && !self.are_normals_normalized(0.1) {
            errors.push("Some normals are not unit-length (epsilon=0.1)".to_string());
        }

        errors
    }
}
