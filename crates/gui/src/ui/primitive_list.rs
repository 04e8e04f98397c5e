//! Primitive list panel: one row per record, newest group first

use egui::Ui;

use crate::i18n::t;
use crate::state::scene::{kind_icon, list_rows};
use crate::state::AppState;

const SWATCH_SIZE: f32 = 12.0;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading(t("list.title"));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("({})", state.store.len()));
        });
    });
    ui.separator();

    if state.store.is_empty() {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.weak(t("list.empty"));
            ui.add_space(4.0);
            ui.weak(t("list.hint"));
        });
        return;
    }

    let [r, g, b] = state.settings.viewport.selection_color;
    let highlight = egui::Color32::from_rgb(r, g, b);

    // Rows are snapshotted so clicks can mutate the store afterwards
    let rows = list_rows(&state.store);
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .id_salt("primitive_list_scroll")
        .show_rows(ui, ui.spacing().interact_size.y, rows.len(), |ui, range| {
            for index in range {
                let row = &rows[index];
                let selected = state.store.is_selected(index);

                let text_color = if selected {
                    highlight
                } else {
                    egui::Color32::from_rgb(200, 200, 200)
                };

                let response = ui
                    .horizontal(|ui| {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                            egui::Sense::hover(),
                        );
                        ui.painter().rect_filled(rect, 2.0, super::to_color32(row.color));

                        let label = format!(
                            "{} {} {}",
                            kind_icon(row.kind),
                            super::kind_name(row.kind),
                            row.id
                        );
                        let resp = ui.add(
                            egui::SelectableLabel::new(
                                selected,
                                egui::RichText::new(label).color(text_color),
                            ),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.weak(egui::RichText::new(&row.position_label).small());
                        });
                        resp
                    })
                    .inner;

                if response.clicked() {
                    clicked = Some(index);
                }
            }
        });

    if let Some(index) = clicked {
        if let Err(e) = state.store.select(index as i64) {
            tracing::warn!("List selection failed: {e}");
        }
    }
}
