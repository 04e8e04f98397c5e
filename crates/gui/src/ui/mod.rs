pub mod add_group_dialog;
pub mod primitive_list;
pub mod properties;
pub mod status_bar;
pub mod toolbar;

use shared::{Rgb, ShapeKind};

use crate::i18n::t;

/// Localized shape name
pub fn kind_name(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Box => t("prim.box"),
        ShapeKind::Pyramid => t("prim.pyramid"),
    }
}

pub fn to_color32(c: Rgb) -> egui::Color32 {
    let [r, g, b] = c.to_rgb8();
    egui::Color32::from_rgb(r, g, b)
}
