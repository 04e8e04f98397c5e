use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Количество цветов граней у каждого примитива (по числу граней куба)
pub const FACE_COLOR_COUNT: usize = 6;

/// Уникальный идентификатор примитива в сцене
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimitiveId(pub u64);

impl std::fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Тип примитива
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Box,
    Pyramid,
}

impl ShapeKind {
    /// Все типы примитивов (для выпадающих списков)
    pub fn all() -> &'static [ShapeKind] {
        &[ShapeKind::Box, ShapeKind::Pyramid]
    }
}

/// Наибольшее число примитивов в одной группе
pub const MAX_GROUP_COUNT: usize = 1000;

/// Ошибки операций над сценой и генератора геометрии
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("invalid dimension `{name}`: {value} (must be a positive finite number)")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("invalid radial segment count {0} (at least 3 required)")]
    InvalidSegments(u32),
    #[error("invalid group size {0} (must be between 1 and {max})", max = MAX_GROUP_COUNT)]
    InvalidCount(usize),
    #[error("selection index {index} is out of range for {len} primitives")]
    SelectionOutOfRange { index: i64, len: usize },
}

/// Проверить, что размер положителен и конечен
pub fn check_dimension(name: &'static str, value: f32) -> Result<f32, SceneError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SceneError::InvalidDimension { name, value })
    }
}

/// Размеры примитива.
///
/// Для пирамиды `width` это радиус основания, `height` это высота вершины,
/// `depth` не используется (но тоже обязан быть положительным).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Dimensions {
    /// Создать размеры с проверкой (все значения > 0)
    pub fn new(width: f32, height: f32, depth: f32) -> Result<Self, SceneError> {
        Ok(Self {
            width: check_dimension("width", width)?,
            height: check_dimension("height", height)?,
            depth: check_dimension("depth", depth)?,
        })
    }

    /// Повторная проверка (поля публичные и могут прийти из JSON)
    pub fn validate(&self) -> Result<(), SceneError> {
        Self::new(self.width, self.height, self.depth).map(|_| ())
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        }
    }
}

/// Цвет грани: три канала в диапазоне [0, 1)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Каналы как массив (для вершинного буфера)
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// 8-битное представление каждого канала
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Строка вида `#rrggbb`
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Размещённый в сцене примитив
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveRecord {
    pub id: PrimitiveId,
    pub kind: ShapeKind,
    /// Позиция центра (для пирамиды: центра основания)
    pub position: [f32; 3],
    pub dimensions: Dimensions,
    /// Всегда ровно 6 цветов; пирамида использует только первые два
    pub face_colors: [Rgb; FACE_COLOR_COUNT],
}

impl PrimitiveRecord {
    /// Основной цвет для списка (цвет первой грани)
    pub fn primary_color(&self) -> Rgb {
        self.face_colors[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_accept_positive() {
        let d = Dimensions::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(d.width, 1.0);
        assert_eq!(d.height, 2.0);
        assert_eq!(d.depth, 3.0);
    }

    #[test]
    fn test_dimensions_reject_zero_and_negative() {
        assert_eq!(
            Dimensions::new(0.0, 1.0, 1.0),
            Err(SceneError::InvalidDimension { name: "width", value: 0.0 })
        );
        assert!(matches!(
            Dimensions::new(1.0, -2.0, 1.0),
            Err(SceneError::InvalidDimension { name: "height", .. })
        ));
        assert!(Dimensions::new(1.0, 1.0, f32::NAN).is_err());
        assert!(Dimensions::new(f32::INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_hex(), "#ff0000");
        assert_eq!(Rgb::new(0.0, 0.5, 1.0).to_rgb8(), [0, 128, 255]);
    }

    #[test]
    fn test_primitive_id_display() {
        assert_eq!(PrimitiveId(42).to_string(), "#42");
    }

    #[test]
    fn test_shape_kind_serde() {
        let json = serde_json::to_string(&ShapeKind::Pyramid).unwrap();
        assert_eq!(json, "\"pyramid\"");
        let kind: ShapeKind = serde_json::from_str("\"box\"").unwrap();
        assert_eq!(kind, ShapeKind::Box);
    }

    #[test]
    fn test_error_messages() {
        let e = SceneError::SelectionOutOfRange { index: -1, len: 3 };
        assert_eq!(
            e.to_string(),
            "selection index -1 is out of range for 3 primitives"
        );
        assert_eq!(
            SceneError::InvalidCount(0).to_string(),
            "invalid group size 0 (must be between 1 and 1000)"
        );
    }
}
