use glam::Vec3;

use super::mesh::MeshData;

/// A ray in world space
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Compute AABB from MeshData (9 floats per vertex: pos+normal+color)
    pub fn from_mesh(data: &MeshData) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);

        for i in 0..data.vertex_count() {
            let p = data.position(i);
            min = min.min(p);
            max = max.max(p);
        }

        Self { min, max }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along X, Y, Z
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Slab test: the (entry, exit) distances of the ray through the box.
/// Entry is negative when the origin is inside.
pub fn ray_aabb_span(ray: &Ray, aabb: &Aabb) -> Option<(f32, f32)> {
    let inv_dir = ray.direction.recip();

    let t1 = (aabb.min - ray.origin) * inv_dir;
    let t2 = (aabb.max - ray.origin) * inv_dir;

    let tmin = t1.min(t2).max_element();
    let tmax = t1.max(t2).min_element();

    if tmax < 0.0 || tmin > tmax {
        return None;
    }
    Some((tmin, tmax))
}

/// Distance along the ray to the box surface, or None.
/// From inside the box this is the exit distance.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    ray_aabb_span(ray, aabb).map(|(tmin, tmax)| if tmin < 0.0 { tmax } else { tmin })
}

/// Möller-Trumbore ray-triangle intersection algorithm.
/// Returns the distance along the ray if hit, or None if no intersection.
pub fn ray_triangle_intersect(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() < EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Result of picking a triangle in a mesh
#[derive(Clone, Debug)]
pub struct TriangleHit {
    /// Index of the triangle (into mesh.indices / 3)
    pub triangle_index: usize,
    /// Distance from ray origin to hit point
    pub distance: f32,
}

/// Find the nearest triangle in a mesh intersected by the ray.
pub fn pick_triangle(ray: &Ray, mesh: &MeshData) -> Option<TriangleHit> {
    let mut best: Option<TriangleHit> = None;

    for (tri_idx, tri) in mesh.indices.chunks_exact(3).enumerate() {
        let v0 = mesh.position(tri[0] as usize);
        let v1 = mesh.position(tri[1] as usize);
        let v2 = mesh.position(tri[2] as usize);

        if let Some(dist) = ray_triangle_intersect(ray, v0, v1, v2) {
            if best.as_ref().is_none_or(|b| dist < b.distance) {
                best = Some(TriangleHit {
                    triangle_index: tri_idx,
                    distance: dist,
                });
            }
        }
    }

    best
}

/// Pick the record whose mesh is hit first by the ray.
///
/// `meshes[i]` and `aabbs[i]` belong to the record at store index `i`. AABBs
/// reject misses cheaply; survivors are tested triangle by triangle.
pub fn pick_record(ray: &Ray, meshes: &[MeshData], aabbs: &[Aabb]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, (mesh, aabb)) in meshes.iter().zip(aabbs).enumerate() {
        let Some((entry, _)) = ray_aabb_span(ray, aabb) else {
            continue;
        };
        // No triangle inside the box can be nearer than the entry point
        if best.is_some_and(|(_, d)| entry.max(0.0) > d) {
            continue;
        }
        if let Some(hit) = pick_triangle(ray, mesh) {
            if best.is_none_or(|(_, d)| hit.distance < d) {
                best = Some((index, hit.distance));
            }
        }
    }

    best.map(|(index, _)| index)
}
