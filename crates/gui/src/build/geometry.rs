//! Procedural geometry for scene primitives.
//!
//! Both builders return plain position/index buffers (triangle list, CCW
//! winding seen from outside) plus face groups, so the render bridge can
//! assign one face colour per group. Buffers are freshly allocated per call.

use glam::Vec3;
use shared::{check_dimension, SceneError, ShapeKind, Dimensions};

/// Default pyramid side count (square base)
pub const DEFAULT_RADIAL_SEGMENTS: u32 = 4;

/// Number of faces emitted by the box builder
pub const BOX_FACE_COUNT: usize = 6;

/// A run of the index buffer rendered with one face colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGroup {
    /// First index (into `indices`) of the run
    pub start: usize,
    /// Number of indices in the run (multiple of 3)
    pub count: usize,
    /// Slot in the record's face colour array
    pub color_index: usize,
}

/// Vertex + index buffers for one primitive shape
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub groups: Vec<FaceGroup>,
}

impl Geometry {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions of triangle `tri`
    pub fn triangle(&self, tri: usize) -> [Vec3; 3] {
        let i = tri * 3;
        [
            Vec3::from(self.positions[self.indices[i] as usize]),
            Vec3::from(self.positions[self.indices[i + 1] as usize]),
            Vec3::from(self.positions[self.indices[i + 2] as usize]),
        ]
    }

    /// Unnormalized geometric normal of triangle `tri`
    pub fn triangle_normal(&self, tri: usize) -> Vec3 {
        let [a, b, c] = self.triangle(tri);
        (b - a).cross(c - a)
    }

    /// Face colour slot used by triangle `tri`
    pub fn color_slot(&self, tri: usize) -> usize {
        let first_index = tri * 3;
        self.groups
            .iter()
            .find(|g| first_index >= g.start && first_index < g.start + g.count)
            .map(|g| g.color_index)
            .unwrap_or(0)
    }
}

/// Build geometry for a record's shape
pub fn build_geometry(kind: ShapeKind, dims: &Dimensions) -> Result<Geometry, SceneError> {
    match kind {
        ShapeKind::Box => build_box_geometry(dims.width, dims.height, dims.depth),
        ShapeKind::Pyramid => {
            build_pyramid_geometry(dims.width, dims.height, DEFAULT_RADIAL_SEGMENTS)
        }
    }
}

/// Axis-aligned box centred on the origin: 24 vertices, 36 indices.
///
/// Face order is Front, Back, Top, Bottom, Right, Left; group `i` uses face colour `i`.
pub fn build_box_geometry(width: f32, height: f32, depth: f32) -> Result<Geometry, SceneError> {
    let hw = check_dimension("width", width)? * 0.5;
    let hh = check_dimension("height", height)? * 0.5;
    let hd = check_dimension("depth", depth)? * 0.5;

    let faces: [[Vec3; 4]; BOX_FACE_COUNT] = [
        // Front (+Z)
        [Vec3::new(-hw, -hh, hd), Vec3::new(hw, -hh, hd), Vec3::new(hw, hh, hd), Vec3::new(-hw, hh, hd)],
        // Back (-Z)
        [Vec3::new(hw, -hh, -hd), Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, hh, -hd), Vec3::new(hw, hh, -hd)],
        // Top (+Y)
        [Vec3::new(-hw, hh, hd), Vec3::new(hw, hh, hd), Vec3::new(hw, hh, -hd), Vec3::new(-hw, hh, -hd)],
        // Bottom (-Y)
        [Vec3::new(-hw, -hh, -hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, -hh, hd), Vec3::new(-hw, -hh, hd)],
        // Right (+X)
        [Vec3::new(hw, -hh, hd), Vec3::new(hw, -hh, -hd), Vec3::new(hw, hh, -hd), Vec3::new(hw, hh, hd)],
        // Left (-X)
        [Vec3::new(-hw, -hh, -hd), Vec3::new(-hw, -hh, hd), Vec3::new(-hw, hh, hd), Vec3::new(-hw, hh, -hd)],
    ];

    let mut positions = Vec::with_capacity(BOX_FACE_COUNT * 4);
    let mut indices = Vec::with_capacity(BOX_FACE_COUNT * 6);
    let mut groups = Vec::with_capacity(BOX_FACE_COUNT);

    for (face, quad) in faces.iter().enumerate() {
        let base = positions.len() as u32;
        positions.extend(quad.iter().map(|v| v.to_array()));
        groups.push(FaceGroup {
            start: indices.len(),
            count: 6,
            color_index: face,
        });
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    Ok(Geometry {
        positions,
        indices,
        groups,
    })
}

/// Closed N-sided pyramid standing on the XZ plane.
///
/// Layout: rim vertices `0..n`, apex at `n`, base centre at `n + 1`.
/// Emits `n` side triangles (colour slot 0) then `n` base triangles (slot 1),
/// so the result is watertight with `2n` triangles.
pub fn build_pyramid_geometry(
    base_radius: f32,
    height: f32,
    radial_segments: u32,
) -> Result<Geometry, SceneError> {
    let radius = check_dimension("base_radius", base_radius)?;
    let height = check_dimension("height", height)?;
    if radial_segments < 3 {
        return Err(SceneError::InvalidSegments(radial_segments));
    }

    let n = radial_segments;
    let mut positions = Vec::with_capacity(n as usize + 2);
    for i in 0..n {
        let angle = i as f32 / n as f32 * std::f32::consts::TAU;
        positions.push([angle.cos() * radius, 0.0, angle.sin() * radius]);
    }
    let apex = n;
    positions.push([0.0, height, 0.0]);
    let center = n + 1;
    positions.push([0.0, 0.0, 0.0]);

    let mut indices = Vec::with_capacity(n as usize * 6);

    // Lateral fan
    for i in 0..n {
        let next = (i + 1) % n;
        indices.extend_from_slice(&[apex, next, i]);
    }
    let lateral_count = indices.len();

    // Base fan (faces -Y)
    for i in 0..n {
        let next = (i + 1) % n;
        indices.extend_from_slice(&[center, i, next]);
    }

    let groups = vec![
        FaceGroup {
            start: 0,
            count: lateral_count,
            color_index: 0,
        },
        FaceGroup {
            start: lateral_count,
            count: indices.len() - lateral_count,
            color_index: 1,
        },
    ];

    Ok(Geometry {
        positions,
        indices,
        groups,
    })
}
