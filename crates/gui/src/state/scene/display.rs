//! Display helpers for the primitive list

use shared::{PrimitiveId, PrimitiveRecord, Rgb, ShapeKind};

use super::SceneStore;

/// One line of the primitive list
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: PrimitiveId,
    pub label: String,
    pub kind: ShapeKind,
    pub position_label: String,
    /// Swatch colour (first face)
    pub color: Rgb,
}

impl ListRow {
    fn from_record(record: &PrimitiveRecord) -> Self {
        Self {
            id: record.id,
            label: format!("{} {}", kind_label(record.kind), record.id),
            kind: record.kind,
            position_label: position_label(record.position),
            color: record.primary_color(),
        }
    }
}

/// Rows in store order, so row `i` describes `store.records()[i]`
pub fn list_rows(store: &SceneStore) -> Vec<ListRow> {
    store.records().iter().map(ListRow::from_record).collect()
}

/// `(x.x, y.y, z.z)` with one decimal per axis
pub fn position_label(position: [f32; 3]) -> String {
    let [x, y, z] = position;
    format!("({x:.1}, {y:.1}, {z:.1})")
}

pub fn kind_label(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Box => "Box",
        ShapeKind::Pyramid => "Pyramid",
    }
}

pub fn kind_icon(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Box => "[B]",
        ShapeKind::Pyramid => "[P]",
    }
}
