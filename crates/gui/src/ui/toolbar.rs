//! Toolbar actions and UI

use egui::Ui;
use shared::ShapeKind;

use crate::i18n::t;
use crate::state::AppState;

// ── Public actions (callable from menus too) ─────────────────

pub fn action_add_group(state: &mut AppState, kind: ShapeKind) {
    state.add_group_dialog.open_for(kind);
}

pub fn action_clear(state: &mut AppState) {
    state.store.clear();
}

// ── UI ───────────────────────────────────────────────────────

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui
            .button(format!("➕ {}", t("tb.add_group")))
            .on_hover_text(t("tip.add_group"))
            .clicked()
        {
            let kind = state.add_group_dialog.params.kind;
            action_add_group(state, kind);
        }

        ui.separator();

        let quick = [
            (ShapeKind::Box, t("tip.quick_box")),
            (ShapeKind::Pyramid, t("tip.quick_pyramid")),
        ];
        for (kind, tip) in quick {
            if ui.button(super::kind_name(kind)).on_hover_text(tip).clicked() {
                action_add_group(state, kind);
            }
        }

        ui.separator();

        if ui
            .add_enabled(!state.store.is_empty(), egui::Button::new(t("tb.clear_all")))
            .on_hover_text(t("tip.clear_all"))
            .clicked()
        {
            action_clear(state);
        }
    });
}
