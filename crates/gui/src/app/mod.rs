//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::state::{AppSettings, AppState};
use crate::ui::add_group_dialog::AddGroupDialogUi;
use crate::ui::{primitive_list, properties, status_bar, toolbar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct PrimSceneApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl PrimSceneApp {
    pub fn new(cc: &eframe::CreationContext<'_>, seed: Option<u64>) -> Self {
        let settings = AppSettings::load();
        crate::i18n::apply_language(settings.ui.language);

        let state = AppState::new(settings, seed);

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            viewport,
            last_font_size,
        }
    }
}

impl eframe::App for PrimSceneApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::edit_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::create_menu(ui, &mut self.state);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        menus::settings_window(ctx, &mut self.state);

        // ── Add-group dialog ─────────────────────────────────
        if self.state.add_group_dialog.show(ctx) {
            self.state.confirm_add_group();
        }

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Left panel: primitive list ───────────────────────
        if self.state.panels.primitive_list {
            egui::SidePanel::left("primitive_list")
                .default_width(230.0)
                .width_range(160.0..=420.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    primitive_list::show(ui, &mut self.state);
                });
        }

        // ── Right panel: properties ──────────────────────────
        if self.state.panels.properties {
            egui::SidePanel::right("properties")
                .default_width(250.0)
                .width_range(180.0..=420.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("props_scroll")
                        .show(ui, |ui| {
                            properties::show(ui, &self.state);
                        });
                });
        }

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.state.settings.save();
        if let Some(gl) = gl {
            self.viewport.destroy_gl(gl);
        }
    }
}
