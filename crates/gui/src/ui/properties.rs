//! Properties panel for the selected primitive (read-only)

use egui::Ui;
use shared::{PrimitiveRecord, ShapeKind};

use crate::i18n::t;
use crate::state::scene::{kind_icon, position_label};
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.heading(t("prop.title"));
    ui.separator();

    let Some((index, record)) = state
        .store
        .selected()
        .and_then(|i| state.store.get(i).map(|r| (i, r)))
    else {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.weak(t("prop.select_object"));
            ui.weak(t("prop.to_view"));
        });
        return;
    };

    show_record(ui, index, record);
}

fn show_record(ui: &mut Ui, index: usize, record: &PrimitiveRecord) {
    ui.horizontal(|ui| {
        ui.strong(kind_icon(record.kind));
        ui.strong(format!("{} {}", super::kind_name(record.kind), record.id));
    });
    ui.add_space(4.0);

    egui::Grid::new("record_props")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label(t("prop.id"));
            ui.monospace(record.id.to_string());
            ui.end_row();

            ui.label(t("prop.index"));
            ui.monospace(index.to_string());
            ui.end_row();

            ui.label(t("prop.type"));
            ui.label(super::kind_name(record.kind));
            ui.end_row();
        });

    ui.add_space(8.0);
    egui::CollapsingHeader::new(t("prop.position"))
        .id_salt("record_position")
        .default_open(true)
        .show(ui, |ui| {
            ui.monospace(position_label(record.position));
        });

    ui.add_space(8.0);
    egui::CollapsingHeader::new(t("prop.dimensions"))
        .id_salt("record_dimensions")
        .default_open(true)
        .show(ui, |ui| {
            let d = &record.dimensions;
            egui::Grid::new("record_dims")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| match record.kind {
                    ShapeKind::Box => {
                        dim_row(ui, t("prop.width"), d.width);
                        dim_row(ui, t("prop.height"), d.height);
                        dim_row(ui, t("prop.depth"), d.depth);
                    }
                    ShapeKind::Pyramid => {
                        dim_row(ui, t("prop.radius"), d.width);
                        dim_row(ui, t("prop.height"), d.height);
                    }
                });
        });

    ui.add_space(8.0);
    egui::CollapsingHeader::new(t("prop.face_colors"))
        .id_salt("record_colors")
        .default_open(true)
        .show(ui, |ui| {
            // Pyramids draw with the first two slots only
            let used = match record.kind {
                ShapeKind::Box => record.face_colors.len(),
                ShapeKind::Pyramid => 2,
            };
            for (slot, color) in record.face_colors.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, super::to_color32(*color));
                    ui.monospace(color.to_hex());
                    if slot >= used {
                        ui.weak(t("prop.unused"));
                    }
                });
            }
        });
}

fn dim_row(ui: &mut Ui, label: &str, value: f32) {
    ui.label(label);
    ui.monospace(format!("{value:.3}"));
    ui.end_row();
}
