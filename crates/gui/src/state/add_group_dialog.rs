//! Add-group dialog state (data only)
//!
//! The UI rendering is in ui/add_group_dialog.rs in the binary crate.

use std::ops::Range;

use rand::Rng;
use shared::{Dimensions, SceneError, ShapeKind};

use super::scene::SceneStore;
use super::settings::GroupDefaults;

/// Parameters of the next group to add
#[derive(Clone, Debug, PartialEq)]
pub struct GroupParams {
    pub kind: ShapeKind,
    /// Ширина (для пирамиды: радиус основания)
    pub width: f32,
    pub height: f32,
    /// Глубина (пирамидой не используется)
    pub depth: f32,
    pub count: usize,
}

impl Default for GroupParams {
    fn default() -> Self {
        Self::from(&GroupDefaults::default())
    }
}

impl From<&GroupDefaults> for GroupParams {
    fn from(d: &GroupDefaults) -> Self {
        Self {
            kind: d.kind,
            width: d.width,
            height: d.height,
            depth: d.depth,
            count: d.count,
        }
    }
}

impl GroupParams {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }
}

/// Dialog state for group creation
#[derive(Default)]
pub struct AddGroupDialog {
    pub open: bool,
    pub params: GroupParams,
    /// Last rejection message; the dialog stays open while set
    pub error: Option<String>,
}

impl AddGroupDialog {
    /// Open the dialog with `kind` preselected, keeping the other fields
    pub fn open_for(&mut self, kind: ShapeKind) {
        self.open = true;
        self.params.kind = kind;
        self.error = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.error = None;
    }

    /// Apply the current parameters to `store`.
    ///
    /// Closes on success; on failure the dialog stays open with the error text.
    pub fn confirm<R: Rng + ?Sized>(
        &mut self,
        store: &mut SceneStore,
        rng: &mut R,
    ) -> Result<Range<usize>, SceneError> {
        let result = store.add_group_with(
            self.params.kind,
            self.params.dimensions(),
            self.params.count,
            rng,
        );
        match &result {
            Ok(_) => self.close(),
            Err(e) => {
                tracing::warn!("Add group rejected: {e}");
                self.error = Some(e.to_string());
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_defaults() {
        let p = GroupParams::default();
        assert_eq!(p.kind, ShapeKind::Box);
        assert_eq!((p.width, p.height, p.depth), (1.0, 1.0, 1.0));
        assert_eq!(p.count, 3);
    }

    #[test]
    fn test_open_for_sets_kind() {
        let mut d = AddGroupDialog::default();
        d.params.count = 9;
        d.open_for(ShapeKind::Pyramid);
        assert!(d.open);
        assert_eq!(d.params.kind, ShapeKind::Pyramid);
        assert_eq!(d.params.count, 9);
    }

    #[test]
    fn test_confirm_success_closes() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut store = SceneStore::default();
        let mut d = AddGroupDialog::default();
        d.open_for(ShapeKind::Box);

        assert_eq!(d.confirm(&mut store, &mut rng), Ok(0..3));
        assert!(!d.open);
        assert!(d.error.is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_confirm_failure_keeps_dialog_open() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut store = SceneStore::default();
        let mut d = AddGroupDialog::default();
        d.open_for(ShapeKind::Box);
        d.params.count = 0;

        assert_eq!(
            d.confirm(&mut store, &mut rng),
            Err(SceneError::InvalidCount(0))
        );
        assert!(d.open);
        assert!(d.error.as_deref().unwrap().contains("group size"));
        assert!(store.is_empty());

        d.params.count = 1;
        d.params.width = -1.0;
        assert!(d.confirm(&mut store, &mut rng).is_err());
        assert!(d.error.as_deref().unwrap().contains("width"));
        assert!(store.is_empty());
    }
}
