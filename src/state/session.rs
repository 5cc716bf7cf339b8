//! Annotation session: one loaded table together with its labels, regions,
//! selection and the gesture in progress.

use std::path::Path;
use uuid::Uuid;

use crate::config::Settings;
use crate::core::codec::{decode, encode};
use crate::core::drag::{step, DragContext, DragState, PointerEvent, PressTarget, RegionChange};
use crate::error::TableError;
use crate::table::Table;
use super::{Deletion, LabelRegistry, Region, RegionCollection, SelectionState};

/// Counts reported after a table is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows: usize,
    pub labels_created: usize,
    pub regions: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    settings: Settings,
    table: Table,
    registry: LabelRegistry,
    regions: RegionCollection,
    selection: SelectionState,
    drag: DragState,
}

impl Session {
    /// Create an empty session
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Open a CSV file and decode its label column
    pub fn open(path: &Path, settings: Settings) -> Result<Self, TableError> {
        let table = Table::load(path, &settings)?;
        let mut session = Self::new(settings);
        session.load_table(table);
        Ok(session)
    }

    // =========================================================================
    // Load/Save
    // =========================================================================

    /// Replace the table. Regions, selection and any gesture are dropped; the
    /// registry is kept, so labels with a known name are reused.
    ///
    /// Every distinct value of the label column becomes a label, in order of
    /// first appearance, and every run of one value becomes a selected region
    /// colored like that label. A composite value such as `A+B` is kept whole.
    /// A table without a label column loads no regions.
    pub fn load_table(&mut self, table: Table) -> LoadSummary {
        self.regions.clear();
        self.selection.clear();
        self.drag = DragState::Idle;
        self.table = table;

        let mut summary = LoadSummary {
            rows: self.table.row_count(),
            ..Default::default()
        };
        let Some(values) = self.table.label_values(&self.settings) else {
            log::warn!(
                "no label column {:?}, starting without annotations",
                self.settings.label_column
            );
            return summary;
        };

        let before = self.registry.len();
        for value in values.iter().flatten() {
            self.registry.ensure(value);
        }
        summary.labels_created = self.registry.len() - before;

        let (lower, upper) = self.settings.bounds();
        for segment in decode(&values) {
            let Some(color) = self.registry.find_by_name(&segment.label).map(|l| l.color) else {
                continue;
            };
            let mut region = Region::new(
                segment.label,
                color,
                (segment.start as f64, segment.end as f64),
            );
            region.set_limits(lower, upper);
            region.selected = true;
            self.regions.push(region);
        }
        summary.regions = self.regions.len();

        log::info!(
            "loaded {} rows, {} new label(s), {} region(s)",
            summary.rows,
            summary.labels_created,
            summary.regions
        );
        summary
    }

    /// The table with its label column painted from the regions
    pub fn labeled_table(&self) -> Result<Table, TableError> {
        let cells = encode(&self.regions, self.table.row_count());
        self.table
            .with_label_column(&self.settings.label_column, cells)
    }

    /// Write the labeled table as CSV
    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        let table = self.labeled_table()?;
        table.save(path)?;
        log::info!("saved {} region(s) to {:?}", self.regions.len(), path);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn registry(&self) -> &LabelRegistry {
        &self.registry
    }

    pub fn regions(&self) -> &RegionCollection {
        &self.regions
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    // =========================================================================
    // Labels
    // =========================================================================

    /// Create a label (named `Label {n}` when `name` is `None`)
    pub fn create_label(&mut self, name: Option<&str>) -> Uuid {
        self.registry.create(name).id
    }

    /// Label with `name`, created if absent
    pub fn ensure_label(&mut self, name: &str) -> Uuid {
        self.registry.ensure(name)
    }

    /// Replace the label selection with one label
    pub fn select_label(&mut self, id: Uuid) -> bool {
        if self.registry.get(id).is_none() {
            return false;
        }
        self.selection.select_label(id);
        true
    }

    /// Add a label to the end of the selection
    pub fn extend_label_selection(&mut self, id: Uuid) -> bool {
        if self.registry.get(id).is_none() {
            return false;
        }
        self.selection.extend_label(id);
        true
    }

    pub fn clear_label_selection(&mut self) {
        self.selection.clear_labels();
    }

    /// Rename a label, rewriting it in every region
    pub fn rename_label(&mut self, id: Uuid, new_name: &str) -> bool {
        self.registry.rename(id, new_name, &mut self.regions)
    }

    /// Delete a label and every region tagged with it
    pub fn delete_label(&mut self, id: Uuid) -> Option<Deletion> {
        self.selection.remove_label(id);
        let deletion = self.registry.delete(id, &mut self.regions)?;
        for region in &deletion.regions {
            self.forget_region(region.id);
        }
        Some(deletion)
    }

    /// Delete every selected label
    pub fn delete_selected_labels(&mut self) -> Vec<Deletion> {
        let deletions = self
            .registry
            .delete_selected(&mut self.selection, &mut self.regions);
        for region in deletions.iter().flat_map(|d| d.regions.iter()) {
            self.forget_region(region.id);
        }
        deletions
    }

    // =========================================================================
    // Regions
    // =========================================================================

    /// Feed one pointer event to the drag machine
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<RegionChange> {
        let selected = self.registry.selected(&self.selection);
        let ctx = DragContext {
            selected: &selected,
            limits: self.settings.bounds(),
        };
        let (state, changes) = step(self.drag, event, &ctx, &mut self.regions);
        log::debug!("{:?} + {:?} -> {:?}", self.drag, event, state);
        self.drag = state;
        for change in &changes {
            if let RegionChange::ChangeFinished { id, .. } = change {
                if self.regions.get(*id).is_some_and(|r| r.selected) {
                    self.selection.select_region(*id);
                }
            }
        }
        changes
    }

    /// What a press at `x` would land on
    pub fn press_target(&self, x: f64) -> PressTarget {
        match self.regions.hit_test(x) {
            Some(id) => PressTarget::Region(id),
            None => PressTarget::Background,
        }
    }

    /// Highlight a region
    pub fn click_region(&mut self, id: Uuid) -> bool {
        if !self.regions.select(id) {
            return false;
        }
        self.selection.select_region(id);
        true
    }

    /// Remove one region
    pub fn remove_region(&mut self, id: Uuid) -> Option<Region> {
        let region = self.regions.remove(id)?;
        self.forget_region(id);
        Some(region)
    }

    /// Apply new drag limits to all current and future regions
    pub fn set_region_limits(&mut self, lower: f64, upper: f64) {
        self.settings.lower_bound = lower.min(upper);
        self.settings.upper_bound = lower.max(upper);
        self.regions
            .set_limits(self.settings.lower_bound, self.settings.upper_bound);
    }

    fn forget_region(&mut self, id: Uuid) {
        self.selection.remove_region(id);
        if self.drag.region_id() == Some(id) {
            self.drag = DragState::Idle;
        }
    }
}
