//! Label registry
//!
//! Ordered collection of labels. Owns the palette cursor and the counter
//! used for synthesized names, so independent registries never share state.
//! Renames and deletes are applied to the region collection in the same
//! call: a rename rewrites the matching token of every composite label and a
//! delete removes every region tagged with the label.

use uuid::Uuid;

use crate::constants::LABEL_PALETTE;
use super::{Label, Region, RegionCollection, Rgba, SelectionState};

/// A label removed from the registry together with the regions it took along.
#[derive(Debug, Clone, PartialEq)]
pub struct Deletion {
    pub label: Label,
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone)]
pub struct LabelRegistry {
    labels: Vec<Label>,
    /// Next palette entry to hand out
    palette_cursor: usize,
    /// Next number for a synthesized `Label {n}` name
    name_counter: u64,
}

impl Default for LabelRegistry {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            palette_cursor: 0,
            name_counter: 1,
        }
    }
}

impl LabelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a label with the next palette color.
    /// Without a name, `Label {n}` is synthesized. The name counter advances
    /// on every create, named or not, and is never reused.
    pub fn create(&mut self, name: Option<&str>) -> &Label {
        let color = self.next_color();
        self.insert(name, color)
    }

    /// Create a label with an explicit color; the palette cursor stays put.
    pub fn create_with_color(&mut self, name: Option<&str>, color: Rgba) -> &Label {
        self.insert(name, color)
    }

    /// Hand out the palette color under the cursor and advance it,
    /// wrapping around at the end of the palette.
    pub fn next_color(&mut self) -> Rgba {
        let index = self.palette_cursor % LABEL_PALETTE.len();
        let color = Rgba::from_rgb_u32(LABEL_PALETTE[index]);
        self.palette_cursor = (index + 1) % LABEL_PALETTE.len();
        color
    }

    pub fn palette_cursor(&self) -> usize {
        self.palette_cursor
    }

    /// Label with `name`, creating it with the next palette color if absent.
    pub fn ensure(&mut self, name: &str) -> Uuid {
        match self.find_by_name(name) {
            Some(label) => label.id,
            None => self.create(Some(name)).id,
        }
    }

    fn insert(&mut self, name: Option<&str>, color: Rgba) -> &Label {
        let name = match name {
            Some(name) => name.to_string(),
            None => format!("Label {}", self.name_counter),
        };
        self.name_counter += 1;
        if self.find_by_name(&name).is_some() {
            log::warn!("label name {:?} is already taken", name);
        }
        log::debug!("created label {:?} with color {}", name, color);
        self.labels.push(Label::new(name, color));
        let index = self.labels.len() - 1;
        &self.labels[index]
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    pub fn get(&self, id: Uuid) -> Option<&Label> {
        self.labels.iter().find(|l| l.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.name == name)
    }

    /// Selected labels, in selection order. Stale ids are skipped.
    pub fn selected<'a>(&'a self, selection: &SelectionState) -> Vec<&'a Label> {
        selection
            .label_ids
            .iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// Rename a label and rewrite the matching token in every region.
    ///
    /// The old name is captured, replaced and propagated in one step.
    /// An empty name, or an unknown id, changes nothing and returns `false`.
    /// Region colors are not recomputed.
    pub fn rename(&mut self, id: Uuid, new_name: &str, regions: &mut RegionCollection) -> bool {
        if new_name.is_empty() {
            return false;
        }
        if self.labels.iter().any(|l| l.id != id && l.name == new_name) {
            log::warn!("renaming onto existing label name {:?}", new_name);
        }
        let Some(label) = self.labels.iter_mut().find(|l| l.id == id) else {
            return false;
        };
        let Some(old_name) = label.rename(new_name) else {
            return false;
        };
        let changed = regions.rename_token(&old_name, new_name);
        log::debug!(
            "renamed label {:?} to {:?}, {} region(s) updated",
            old_name,
            new_name,
            changed.len()
        );
        true
    }

    /// Remove a label and every region tagged with it, even regions that
    /// also carry other labels.
    pub fn delete(&mut self, id: Uuid, regions: &mut RegionCollection) -> Option<Deletion> {
        let index = self.labels.iter().position(|l| l.id == id)?;
        let label = self.labels.remove(index);
        let removed = regions.remove_with_token(&label.name);
        log::debug!(
            "deleted label {:?} and {} region(s)",
            label.name,
            removed.len()
        );
        Some(Deletion {
            label,
            regions: removed,
        })
    }

    /// Delete every selected label one at a time, then clear the label
    /// selection. A highlighted region that was cascaded away is forgotten.
    pub fn delete_selected(
        &mut self,
        selection: &mut SelectionState,
        regions: &mut RegionCollection,
    ) -> Vec<Deletion> {
        let mut deletions = Vec::new();
        while let Some(id) = selection.label_ids.first().copied() {
            selection.remove_label(id);
            if let Some(deletion) = self.delete(id, regions) {
                for region in &deletion.regions {
                    selection.remove_region(region.id);
                }
                deletions.push(deletion);
            }
        }
        selection.clear_labels();
        deletions
    }
}
