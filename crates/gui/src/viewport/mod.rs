//! 3D viewport panel with OpenGL rendering

mod camera;
mod gl_renderer;
pub use primscene_gui_lib::viewport::{mesh, picking};

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::build::MeshCache;
use crate::i18n::t;
use crate::state::AppState;
use camera::ArcBallCamera;
use gl_renderer::{GlRenderer, RenderParams};
use mesh::MeshData;
use picking::pick_record;

/// Degrees of orbit per dragged pixel
const ORBIT_SPEED: f32 = 0.4;
/// World units of pan per dragged pixel at distance 1
const PAN_SPEED: f32 = 0.0015;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    mesh_cache: MeshCache,
    /// Snapshot handed to the paint callback, replaced on rebuild
    frame_meshes: Arc<Vec<MeshData>>,
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            gl_renderer: None,
            mesh_cache: MeshCache::new(),
            frame_meshes: Arc::new(Vec::new()),
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        match GlRenderer::new(gl) {
            Ok(renderer) => self.gl_renderer = Some(Arc::new(Mutex::new(renderer))),
            Err(e) => tracing::error!("GL renderer unavailable: {e}"),
        }
    }

    /// Release GPU resources
    pub fn destroy_gl(&mut self, gl: &glow::Context) {
        if let Some(renderer) = self.gl_renderer.take() {
            if let Ok(mut r) = renderer.lock() {
                r.destroy(gl);
            }
        }
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    /// Focus camera on a specific point
    pub fn focus_on(&mut self, target: glam::Vec3) {
        self.camera.focus_on(target);
    }

    /// Center of the record's drawn bounds, if it has been meshed
    pub fn aabb_center(&self, index: usize) -> Option<glam::Vec3> {
        self.mesh_cache.aabbs().get(index).map(|aabb| aabb.center())
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        self.handle_camera(&response, ui);

        // Meshes must be fresh before picking so indices line up with the store
        if self.mesh_cache.sync(&state.store) {
            self.frame_meshes = Arc::new(self.mesh_cache.meshes().to_vec());
        }

        self.handle_selection(&response, rect, state);

        if !ui.is_rect_visible(rect) {
            return;
        }
        self.render_gl(ui, rect, state);
    }

    fn handle_camera(&mut self, response: &egui::Response, ui: &Ui) {
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            if ui.input(|i| i.modifiers.shift) {
                let scale = PAN_SPEED * self.camera.distance;
                self.camera.pan(-delta.x * scale, delta.y * scale);
            } else {
                self.camera.rotate(-delta.x * ORBIT_SPEED, delta.y * ORBIT_SPEED);
            }
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }
    }

    fn handle_selection(&mut self, response: &egui::Response, rect: egui::Rect, state: &mut AppState) {
        if !response.clicked() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };

        let ray = self.camera.screen_ray(pos, rect);
        let hit = pick_record(&ray, self.mesh_cache.meshes(), self.mesh_cache.aabbs());
        if let Some(index) = hit {
            if let Err(e) = state.store.select(index as i64) {
                tracing::warn!("Pick returned a stale index: {e}");
            }
        }
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                t("vp.no_gl"),
                egui::FontId::proportional(16.0),
                ui.visuals().weak_text_color(),
            );
            return;
        };

        let renderer = Arc::clone(gl_renderer);
        let camera = self.camera.clone();
        let meshes = Arc::clone(&self.frame_meshes);
        let version = self.mesh_cache.rebuild_count();
        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();
        let bg_color = state.settings.viewport.background_color;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();
                let clip = info.clip_rect_in_pixels();
                let params = RenderParams {
                    viewport: [
                        clip.left_px as f32,
                        clip.from_bottom_px as f32,
                        clip.width_px as f32,
                        clip.height_px as f32,
                    ],
                    grid_visible: grid_settings.visible,
                    axes_visible: axes_settings.visible,
                    bg_color,
                };

                if let Ok(mut r) = renderer.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    r.sync_meshes(gl, &meshes, version);
                    r.paint(gl, &camera, &params);
                }
            })),
        };

        ui.painter().add(callback);
    }
}
