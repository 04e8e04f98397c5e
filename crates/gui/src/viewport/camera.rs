use glam::{Mat4, Vec3, Vec4};

use super::picking::Ray;

const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 100.0;
const PITCH_LIMIT: f32 = 1.5;

/// Orbit camera circling `target`
#[derive(Clone, Debug)]
pub struct ArcBallCamera {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from target
    pub distance: f32,
    pub target: Vec3,
    /// Vertical field of view (radians)
    pub fov: f32,
}

impl Default for ArcBallCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcBallCamera {
    /// Start view: the whole placement cube fits on screen
    pub fn new() -> Self {
        Self {
            yaw: 0.7,
            pitch: 0.45,
            distance: 10.0,
            target: Vec3::ZERO,
            fov: 45.0_f32.to_radians(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Orbit by a mouse delta in degrees
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx.to_radians();
        self.pitch = (self.pitch + dy.to_radians()).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// `delta` > 0 moves closer
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        let (right, up) = self.basis();
        self.target += right * dx + up * dy;
    }

    /// Re-target without changing orientation or distance
    pub fn focus_on(&mut self, point: Vec3) {
        self.target = point;
    }

    /// Camera position in world space
    pub fn eye_position(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, aspect, 0.1, 200.0)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Screen-aligned (right, up) unit vectors
    fn basis(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye_position()).normalize_or_zero();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        (right, up)
    }

    /// Cast a ray from a screen position into the 3D scene
    pub fn screen_ray(&self, screen_pos: egui::Pos2, rect: egui::Rect) -> Ray {
        let ndc_x = (screen_pos.x - rect.center().x) / (rect.width() * 0.5);
        let ndc_y = -(screen_pos.y - rect.center().y) / (rect.height() * 0.5);

        let inverse = self.view_projection(rect.aspect_ratio()).inverse();
        let unproject = |z: f32| {
            let p = inverse * Vec4::new(ndc_x, ndc_y, z, 1.0);
            p.truncate() / p.w
        };
        let near = unproject(-1.0);
        let far = unproject(1.0);

        Ray::new(self.eye_position(), far - near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn test_zoom_clamped() {
        let mut cam = ArcBallCamera::new();
        for _ in 0..100 {
            cam.zoom(0.5);
        }
        assert_eq!(cam.distance, MIN_DISTANCE);
        for _ in 0..100 {
            cam.zoom(-0.5);
        }
        assert_eq!(cam.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut cam = ArcBallCamera::new();
        cam.rotate(0.0, 720.0);
        assert_eq!(cam.pitch, PITCH_LIMIT);
    }

    #[test]
    fn test_center_ray_hits_target() {
        let mut cam = ArcBallCamera::new();
        cam.focus_on(Vec3::new(1.0, 0.5, -1.0));
        let ray = cam.screen_ray(rect().center(), rect());
        let to_target = (cam.target - ray.origin).normalize();
        assert!(ray.direction.dot(to_target) > 0.9999);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut cam = ArcBallCamera::new();
        cam.rotate(30.0, 10.0);
        cam.pan(1.0, 1.0);
        cam.reset();
        assert_eq!(cam.target, Vec3::ZERO);
        assert_eq!(cam.yaw, ArcBallCamera::new().yaw);
    }
}
