use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.weak(format!("{} {}", t("status.primitives"), state.store.len()));

        ui.separator();

        match state.store.selected_record() {
            Some(record) => {
                ui.label(format!(
                    "{} {} {}",
                    t("status.selected"),
                    super::kind_name(record.kind),
                    record.id
                ));
            }
            None => {
                ui.weak(format!("{} {}", t("status.selected"), t("status.none")));
            }
        }

        ui.separator();
        ui.weak(t("vp.hint"));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("PrimScene v", env!("CARGO_PKG_VERSION")));
        });
    });
}
