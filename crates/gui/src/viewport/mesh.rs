use glam::Vec3;

/// Floats per mesh vertex: position(3) + normal(3) + color(3)
pub const MESH_STRIDE: usize = 9;

/// Floats per line vertex: position(3) + color(4)
pub const LINE_STRIDE: usize = 7;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / MESH_STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `i`
    pub fn position(&self, i: usize) -> Vec3 {
        let base = i * MESH_STRIDE;
        Vec3::new(self.vertices[base], self.vertices[base + 1], self.vertices[base + 2])
    }

    /// Color of vertex `i`
    pub fn color(&self, i: usize) -> [f32; 3] {
        let base = i * MESH_STRIDE + 6;
        [self.vertices[base], self.vertices[base + 1], self.vertices[base + 2]]
    }

    pub(crate) fn push_vertex(&mut self, p: Vec3, n: Vec3, c: [f32; 3]) -> u32 {
        let index = self.vertex_count() as u32;
        self.vertices.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z, c[0], c[1], c[2]]);
        index
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
#[derive(Clone, Debug, Default)]
pub struct LineMeshData {
    pub vertices: Vec<f32>,
}

impl LineMeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / LINE_STRIDE
    }
}

// ── Grid and axes ────────────────────────────────────────────

pub fn grid(range: i32, cell_size: f32, opacity: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let grid_color = [0.25_f32, 0.25, 0.25, opacity];
    let origin_color_x = [0.5_f32, 0.2, 0.2, opacity * 0.7];
    let origin_color_z = [0.2_f32, 0.2, 0.5, opacity * 0.7];

    let extent = range as f32 * cell_size;

    for i in -range..=range {
        let f = i as f32 * cell_size;
        let along_z = if i == 0 { origin_color_z } else { grid_color };
        push_line_vert(&mut vertices, f, 0.0, -extent, along_z);
        push_line_vert(&mut vertices, f, 0.0, extent, along_z);

        let along_x = if i == 0 { origin_color_x } else { grid_color };
        push_line_vert(&mut vertices, -extent, 0.0, f, along_x);
        push_line_vert(&mut vertices, extent, 0.0, f, along_x);
    }

    LineMeshData { vertices }
}

pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let r = [0.9_f32, 0.2, 0.2, 1.0];
    let g = [0.2_f32, 0.8, 0.2, 1.0];
    let b = [0.2_f32, 0.3, 0.9, 1.0];

    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, r);
    push_line_vert(&mut vertices, length, 0.0, 0.0, r);
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, g);
    push_line_vert(&mut vertices, 0.0, length, 0.0, g);
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, b);
    push_line_vert(&mut vertices, 0.0, 0.0, length, b);

    LineMeshData { vertices }
}

fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_line_count() {
        let g = grid(5, 1.0, 0.6);
        // 11 positions, two lines each, two vertices per line
        assert_eq!(g.vertex_count(), 11 * 4);
    }

    #[test]
    fn test_axes_three_segments() {
        let a = axes(1.5);
        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.vertices[LINE_STRIDE], 1.5);
    }

    #[test]
    fn test_push_vertex_returns_index() {
        let mut m = MeshData::default();
        assert_eq!(m.push_vertex(Vec3::ZERO, Vec3::Y, [1.0, 0.0, 0.0]), 0);
        assert_eq!(m.push_vertex(Vec3::ONE, Vec3::Y, [0.0, 1.0, 0.0]), 1);
        assert_eq!(m.vertex_count(), 2);
        assert_eq!(m.position(1), Vec3::ONE);
        assert_eq!(m.color(1), [0.0, 1.0, 0.0]);
    }
}
