//! Selection state shared by the label list and the timeline.

use uuid::Uuid;

/// Tracks which labels and which region are currently selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selected label IDs, in the order they were selected.
    pub label_ids: Vec<Uuid>,
    /// Highlighted region, if any.
    pub region_id: Option<Uuid>,
}

impl SelectionState {
    /// Clear all selections.
    pub fn clear(&mut self) {
        self.label_ids.clear();
        self.region_id = None;
    }

    /// Replace the label selection with a single label.
    pub fn select_label(&mut self, label_id: Uuid) {
        self.label_ids.clear();
        self.label_ids.push(label_id);
    }

    /// Add a label to the end of the selection, if not already selected.
    pub fn extend_label(&mut self, label_id: Uuid) {
        if !self.label_ids.contains(&label_id) {
            self.label_ids.push(label_id);
        }
    }

    /// Remove a label from selection, if present.
    pub fn remove_label(&mut self, label_id: Uuid) {
        self.label_ids.retain(|id| *id != label_id);
    }

    /// Clear the label selection only.
    pub fn clear_labels(&mut self) {
        self.label_ids.clear();
    }

    pub fn has_labels(&self) -> bool {
        !self.label_ids.is_empty()
    }

    /// Replace the region selection.
    pub fn select_region(&mut self, region_id: Uuid) {
        self.region_id = Some(region_id);
    }

    /// Forget the highlighted region if it is `region_id`.
    pub fn remove_region(&mut self, region_id: Uuid) {
        if self.region_id == Some(region_id) {
            self.region_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_keeps_order_without_duplicates() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut selection = SelectionState::default();
        selection.extend_label(b);
        selection.extend_label(a);
        selection.extend_label(b);
        assert_eq!(selection.label_ids, vec![b, a]);
        selection.select_label(a);
        assert_eq!(selection.label_ids, vec![a]);
    }

    #[test]
    fn test_remove_region_only_clears_matching() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut selection = SelectionState::default();
        selection.select_region(a);
        selection.remove_region(b);
        assert_eq!(selection.region_id, Some(a));
        selection.remove_region(a);
        assert_eq!(selection.region_id, None);
    }
}
