//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(
    ctx: &egui::Context,
    state: &mut AppState,
    viewport: &mut ViewportPanel,
) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Ctrl+G: add group
        if i.modifiers.command && i.key_pressed(egui::Key::G) {
            let kind = state.add_group_dialog.params.kind;
            state.add_group_dialog.open_for(kind);
        }
        // Escape: close dialog
        if i.key_pressed(egui::Key::Escape) && state.add_group_dialog.open {
            state.add_group_dialog.close();
        }
        // Up / Down: walk the list
        if i.key_pressed(egui::Key::ArrowDown) {
            step_selection(state, 1);
        }
        if i.key_pressed(egui::Key::ArrowUp) {
            step_selection(state, -1);
        }
        // F: focus camera on selected primitive
        if i.key_pressed(egui::Key::F) && !i.modifiers.command {
            if let Some(center) = state
                .store
                .selected()
                .and_then(|index| viewport.aabb_center(index))
            {
                viewport.focus_on(center);
            }
        }
    });
}

fn step_selection(state: &mut AppState, delta: i64) {
    if state.store.is_empty() {
        return;
    }
    let target = match state.store.selected() {
        Some(index) => index as i64 + delta,
        None => 0,
    };
    // Stepping past either end is a no-op
    if let Err(e) = state.store.select(target) {
        tracing::debug!("Keyboard selection ignored: {e}");
    }
}
