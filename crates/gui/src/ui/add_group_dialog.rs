//! Add-group dialog UI rendering
//!
//! Data structures are in state/add_group_dialog.rs.

use shared::{ShapeKind, MAX_GROUP_COUNT};

use crate::i18n::t;
use crate::state::AddGroupDialog;

/// Extension trait for AddGroupDialog to add UI rendering
pub trait AddGroupDialogUi {
    /// Show the dialog; returns true when the user confirmed
    fn show(&mut self, ctx: &egui::Context) -> bool;
}

impl AddGroupDialogUi for AddGroupDialog {
    fn show(&mut self, ctx: &egui::Context) -> bool {
        if !self.open {
            return false;
        }

        let mut confirmed = false;
        let mut cancelled = false;

        egui::Window::new(t("dialog.title"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(280.0);

                let params = &mut self.params;
                egui::Grid::new("add_group_grid")
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(t("dialog.kind"));
                        ui.horizontal(|ui| {
                            for &kind in ShapeKind::all() {
                                ui.selectable_value(&mut params.kind, kind, super::kind_name(kind));
                            }
                        });
                        ui.end_row();

                        let is_pyramid = params.kind == ShapeKind::Pyramid;
                        ui.label(if is_pyramid { t("dialog.radius") } else { t("dialog.width") });
                        ui.add(egui::DragValue::new(&mut params.width).speed(0.05));
                        ui.end_row();

                        ui.label(t("dialog.height"));
                        ui.add(egui::DragValue::new(&mut params.height).speed(0.05));
                        ui.end_row();

                        ui.label(t("dialog.depth"));
                        ui.add_enabled(
                            !is_pyramid,
                            egui::DragValue::new(&mut params.depth).speed(0.05),
                        )
                        .on_disabled_hover_text(t("dialog.depth_unused"));
                        ui.end_row();

                        ui.label(t("dialog.count"));
                        ui.add(egui::DragValue::new(&mut params.count).speed(1).range(0..=MAX_GROUP_COUNT));
                        ui.end_row();
                    });

                // Rejection from the store, shown until the next attempt
                if let Some(error) = &self.error {
                    ui.add_space(6.0);
                    ui.colored_label(egui::Color32::from_rgb(230, 110, 100), error);
                }

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(t("dialog.cancel")).clicked() {
                        cancelled = true;
                    }
                    if ui.button(t("dialog.ok")).clicked() {
                        confirmed = true;
                    }
                });
            });

        if cancelled {
            self.close();
        }
        confirmed
    }
}
