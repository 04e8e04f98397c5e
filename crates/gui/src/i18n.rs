use std::sync::atomic::{AtomicU8, Ordering};

use crate::state::Language;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ru,
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Ru (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::En,
        _ => Lang::Ru,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Ru => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Switch the string table to the persisted language setting
pub fn apply_language(language: Language) {
    set_lang(match language {
        Language::Russian => Lang::Ru,
        Language::English => Lang::En,
    });
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.new" => if ru { "Новая сцена" } else { "New scene" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.edit" => if ru { "Правка" } else { "Edit" },
        "menu.clear" => if ru { "Очистить сцену" } else { "Clear scene" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.primitive_list" => if ru { "Список примитивов" } else { "Primitive list" },
        "menu.properties" => if ru { "Свойства" } else { "Properties" },
        "menu.reset_camera" => if ru { "Сбросить камеру" } else { "Reset camera" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        "menu.create" => if ru { "Создать" } else { "Create" },
        "menu.add_group" => if ru { "Добавить группу...  Ctrl+G" } else { "Add group...  Ctrl+G" },

        "menu.settings" => if ru { "Настройки" } else { "Settings" },
        "menu.preferences" => if ru { "Параметры..." } else { "Preferences..." },

        // ── Primitives ──────────────────────────────────────
        "prim.box" => if ru { "Параллелепипед" } else { "Box" },
        "prim.pyramid" => if ru { "Пирамида" } else { "Pyramid" },

        // ── Toolbar ─────────────────────────────────────────
        "tb.add_group" => if ru { "Группа" } else { "Group" },
        "tb.clear_all" => if ru { "Очистить" } else { "Clear all" },

        "tip.add_group" => if ru { "Добавить группу примитивов (Ctrl+G)" } else { "Add a group of primitives (Ctrl+G)" },
        "tip.quick_box" => if ru { "Добавить группу параллелепипедов" } else { "Add a group of boxes" },
        "tip.quick_pyramid" => if ru { "Добавить группу пирамид" } else { "Add a group of pyramids" },
        "tip.clear_all" => if ru { "Удалить все примитивы" } else { "Remove all primitives" },

        // ── Primitive list ──────────────────────────────────
        "list.title" => if ru { "Примитивы" } else { "Primitives" },
        "list.empty" => if ru { "Примитивов нет." } else { "No primitives yet." },
        "list.hint" => if ru { "Создать → Добавить группу" } else { "Create → Add group" },

        // ── Add-group dialog ────────────────────────────────
        "dialog.title" => if ru { "Новая группа" } else { "New group" },
        "dialog.kind" => if ru { "Тип:" } else { "Kind:" },
        "dialog.width" => if ru { "Ширина:" } else { "Width:" },
        "dialog.radius" => if ru { "Радиус основания:" } else { "Base radius:" },
        "dialog.height" => if ru { "Высота:" } else { "Height:" },
        "dialog.depth" => if ru { "Глубина:" } else { "Depth:" },
        "dialog.count" => if ru { "Количество:" } else { "Count:" },
        "dialog.depth_unused" => if ru { "Глубина пирамидой не используется" } else { "Depth is not used by pyramids" },
        "dialog.ok" => if ru { "Добавить" } else { "Add" },
        "dialog.cancel" => if ru { "Отмена" } else { "Cancel" },

        // ── Properties ──────────────────────────────────────
        "prop.title" => if ru { "Свойства" } else { "Properties" },
        "prop.select_object" => if ru { "Выберите примитив" } else { "Select a primitive" },
        "prop.to_view" => if ru { "для просмотра свойств." } else { "to view its properties." },
        "prop.id" => if ru { "Номер:" } else { "Id:" },
        "prop.index" => if ru { "Позиция в списке:" } else { "List position:" },
        "prop.type" => if ru { "Тип:" } else { "Type:" },
        "prop.position" => if ru { "Положение" } else { "Position" },
        "prop.dimensions" => if ru { "Размеры" } else { "Dimensions" },
        "prop.width" => if ru { "Ширина" } else { "Width" },
        "prop.height" => if ru { "Высота" } else { "Height" },
        "prop.depth" => if ru { "Глубина" } else { "Depth" },
        "prop.radius" => if ru { "Радиус" } else { "Radius" },
        "prop.face_colors" => if ru { "Цвета граней" } else { "Face colors" },
        "prop.unused" => if ru { "(не используется)" } else { "(unused)" },

        // ── Status bar ──────────────────────────────────────
        "status.primitives" => if ru { "Примитивов:" } else { "Primitives:" },
        "status.selected" => if ru { "Выбран:" } else { "Selected:" },
        "status.none" => if ru { "нет" } else { "none" },

        // ── Viewport ────────────────────────────────────────
        "vp.hint" => if ru { "ЛКМ: выбор  ПКМ/СКМ: вращение  Колесо: масштаб" } else { "LMB: select  RMB/MMB: orbit  Wheel: zoom" },
        "vp.no_gl" => if ru { "OpenGL недоступен" } else { "OpenGL is not available" },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.grid" => if ru { "Сетка" } else { "Grid" },
        "settings.grid_visible" => if ru { "Показывать сетку" } else { "Show grid" },
        "settings.grid_size" => if ru { "Размер ячейки:" } else { "Cell size:" },
        "settings.grid_range" => if ru { "Число линий:" } else { "Line count:" },
        "settings.grid_opacity" => if ru { "Прозрачность:" } else { "Opacity:" },
        "settings.axes" => if ru { "Оси" } else { "Axes" },
        "settings.axes_visible" => if ru { "Показывать оси" } else { "Show axes" },
        "settings.axes_length" => if ru { "Длина осей:" } else { "Axis length:" },
        "settings.viewport" => if ru { "Вьюпорт" } else { "Viewport" },
        "settings.bg_color" => if ru { "Цвет фона:" } else { "Background:" },
        "settings.sel_color" => if ru { "Цвет выделения:" } else { "Selection:" },
        "settings.group_defaults" => if ru { "Группа по умолчанию" } else { "Group defaults" },
        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта:" } else { "Font size:" },
        "settings.apply" => if ru { "Сохранить" } else { "Save" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_language() {
        apply_language(Language::English);
        assert_eq!(t("menu.file"), "File");
        apply_language(Language::Russian);
        assert_eq!(t("menu.file"), "Файл");
        assert_eq!(t("no.such.key"), "???");
    }
}
