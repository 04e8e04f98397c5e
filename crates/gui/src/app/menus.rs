//! Application menu bar and settings window

use eframe::egui;
use shared::ShapeKind;

use crate::i18n::{apply_language, t};
use crate::state::{AppState, Language};
use crate::ui::kind_name;
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.new")).clicked() {
            state.store.clear();
            ui.close_menu();
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.edit"), |ui| {
        if ui
            .add_enabled(!state.store.is_empty(), egui::Button::new(t("menu.clear")))
            .clicked()
        {
            state.store.clear();
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.panels.primitive_list, t("menu.primitive_list"));
        ui.checkbox(&mut state.panels.properties, t("menu.properties"));
        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            let current = state.settings.ui.language;
            for (language, label) in [(Language::Russian, "Русский"), (Language::English, "English")] {
                if ui.selectable_label(current == language, label).clicked() {
                    state.settings.ui.language = language;
                    apply_language(language);
                    ui.close_menu();
                }
            }
        });
    });
}

/// Show the create menu
pub fn create_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.create"), |ui| {
        if ui.button(t("menu.add_group")).clicked() {
            let kind = state.add_group_dialog.params.kind;
            state.add_group_dialog.open_for(kind);
            ui.close_menu();
        }
        ui.separator();
        for &kind in ShapeKind::all() {
            if ui.button(format!("  {}…", kind_name(kind))).clicked() {
                state.add_group_dialog.open_for(kind);
                ui.close_menu();
            }
        }
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_grid_settings(ui, state);
                show_axes_settings(ui, state);
                show_viewport_settings(ui, state);
                show_group_defaults(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open;
}

fn show_grid_settings(ui: &mut egui::Ui, state: &mut AppState) {
    let grid = &mut state.settings.grid;
    ui.heading(t("settings.grid"));
    ui.checkbox(&mut grid.visible, t("settings.grid_visible"));
    egui::Grid::new("grid_settings").num_columns(2).show(ui, |ui| {
        ui.label(t("settings.grid_size"));
        ui.add(egui::DragValue::new(&mut grid.size).speed(0.05).range(0.05..=10.0));
        ui.end_row();

        ui.label(t("settings.grid_range"));
        ui.add(egui::DragValue::new(&mut grid.range).speed(1).range(1..=50));
        ui.end_row();

        ui.label(t("settings.grid_opacity"));
        ui.add(egui::Slider::new(&mut grid.opacity, 0.0..=1.0));
        ui.end_row();
    });
    ui.add_space(10.0);
}

fn show_axes_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.axes"));
    ui.checkbox(&mut state.settings.axes.visible, t("settings.axes_visible"));
    ui.horizontal(|ui| {
        ui.label(t("settings.axes_length"));
        ui.add(
            egui::DragValue::new(&mut state.settings.axes.length)
                .speed(0.1)
                .range(0.1..=20.0),
        );
    });
    ui.add_space(10.0);
}

fn color_row(ui: &mut egui::Ui, label: &str, rgb: &mut [u8; 3]) {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
        if ui.color_edit_button_srgba(&mut color).changed() {
            *rgb = [color.r(), color.g(), color.b()];
        }
    });
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.viewport"));
    color_row(ui, t("settings.bg_color"), &mut state.settings.viewport.background_color);
    color_row(ui, t("settings.sel_color"), &mut state.settings.viewport.selection_color);
    ui.add_space(10.0);
}

fn show_group_defaults(ui: &mut egui::Ui, state: &mut AppState) {
    let defaults = &mut state.settings.group_defaults;
    ui.heading(t("settings.group_defaults"));
    egui::Grid::new("group_defaults").num_columns(2).show(ui, |ui| {
        ui.label(t("dialog.kind"));
        egui::ComboBox::from_id_salt("default_kind")
            .selected_text(kind_name(defaults.kind))
            .show_ui(ui, |ui| {
                for &kind in ShapeKind::all() {
                    ui.selectable_value(&mut defaults.kind, kind, kind_name(kind));
                }
            });
        ui.end_row();

        for (label, value) in [
            (t("dialog.width"), &mut defaults.width),
            (t("dialog.height"), &mut defaults.height),
            (t("dialog.depth"), &mut defaults.depth),
        ] {
            ui.label(label);
            ui.add(egui::DragValue::new(value).speed(0.05).range(0.01..=100.0));
            ui.end_row();
        }

        ui.label(t("dialog.count"));
        ui.add(egui::DragValue::new(&mut defaults.count).speed(1).range(1..=500));
        ui.end_row();
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.apply")).clicked() {
            state.settings.save();
        }
        if ui.button(t("settings.reset")).clicked() {
            state.settings = crate::state::AppSettings::default();
            apply_language(state.settings.ui.language);
        }
        if ui.button(t("settings.close")).clicked() {
            state.show_settings_window = false;
        }
    });
}
