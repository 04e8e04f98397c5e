/// Single-index selection into the store's record sequence
#[derive(Default, Clone, Debug)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    /// Currently selected index
    pub fn primary(&self) -> Option<usize> {
        self.selected
    }

    /// Check if an index is selected
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Select an index (no range check here; the store does that)
    pub(crate) fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Keep pointing at the same record after `count` records were prepended
    pub(crate) fn shift(&mut self, count: usize) {
        if let Some(index) = self.selected.as_mut() {
            *index += count;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_empty() {
        let s = SelectionState::default();
        assert!(s.primary().is_none());
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut s = SelectionState::default();
        s.select(1);
        s.select(4);
        assert_eq!(s.primary(), Some(4));
        assert!(!s.is_selected(1));
        assert!(s.is_selected(4));
    }

    #[test]
    fn test_shift() {
        let mut s = SelectionState::default();
        s.shift(3);
        assert!(s.primary().is_none());
        s.select(1);
        s.shift(3);
        assert_eq!(s.primary(), Some(4));
    }

    #[test]
    fn test_clear() {
        let mut s = SelectionState::default();
        s.select(0);
        s.clear();
        assert!(s.primary().is_none());
        s.clear();
        assert!(s.primary().is_none());
    }
}
