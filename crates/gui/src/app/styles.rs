//! Application style configuration

use eframe::egui;
use egui::{Color32, CornerRadius, FontId, TextStyle};

const PANEL_FILL: Color32 = Color32::from_rgb(28, 29, 33);
const WINDOW_FILL: Color32 = Color32::from_rgb(34, 35, 40);
const SELECTION_FILL: Color32 = Color32::from_rgb(38, 84, 120);

/// Configure initial application styles with given font size
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();

    let widget_radius = CornerRadius::same(3);
    let widgets = &mut style.visuals.widgets;
    for w in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
    ] {
        w.corner_radius = widget_radius;
    }
    style.visuals.window_corner_radius = CornerRadius::same(6);
    style.visuals.menu_corner_radius = CornerRadius::same(4);

    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);

    style.visuals.panel_fill = PANEL_FILL;
    style.visuals.window_fill = WINDOW_FILL;
    style.visuals.selection.bg_fill = SELECTION_FILL;

    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

/// Apply font size to all text styles
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

fn apply_text_styles(style: &mut egui::Style, size: f32) {
    let table = [
        (TextStyle::Body, FontId::proportional(size)),
        (TextStyle::Button, FontId::proportional(size)),
        (TextStyle::Small, FontId::proportional(size * 0.85)),
        (TextStyle::Heading, FontId::proportional(size * 1.3)),
        (TextStyle::Monospace, FontId::monospace(size)),
    ];
    style.text_styles.extend(table);
}
