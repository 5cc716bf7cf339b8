use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::REGION_Z_RAISED;
use super::Region;

/// All regions of the loaded table, in the order they were added
///
/// The order is significant: on export, later regions overwrite earlier
/// ones where they overlap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionCollection {
    regions: Vec<Region>,
}

impl RegionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region, returning its id
    pub fn push(&mut self, region: Region) -> Uuid {
        let id = region.id;
        self.regions.push(region);
        id
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions in collection order
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }

    pub fn get(&self, id: Uuid) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Region> {
        self.regions.iter_mut().find(|r| r.id == id)
    }

    /// Region at a position in collection order
    pub fn nth(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Remove a region by ID
    pub fn remove(&mut self, id: Uuid) -> Option<Region> {
        let index = self.regions.iter().position(|r| r.id == id)?;
        Some(self.regions.remove(index))
    }

    /// Remove every region tagged with `name`, returning them in order
    pub fn remove_with_token(&mut self, name: &str) -> Vec<Region> {
        let (removed, kept): (Vec<Region>, Vec<Region>) = std::mem::take(&mut self.regions)
            .into_iter()
            .partition(|region| region.has_token(name));
        self.regions = kept;
        removed
    }

    /// Replace the token `old` by `new` in every region.
    /// Returns the ids of the regions that changed.
    pub fn rename_token(&mut self, old: &str, new: &str) -> Vec<Uuid> {
        self.regions
            .iter_mut()
            .filter_map(|region| region.replace_token(old, new).then_some(region.id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Highlight one region and clear the highlight of all others
    pub fn select(&mut self, id: Uuid) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        for region in self.regions.iter_mut() {
            region.selected = region.id == id;
        }
        true
    }

    pub fn deselect_all(&mut self) {
        for region in self.regions.iter_mut() {
            region.selected = false;
        }
    }

    /// Lift a region above its siblings
    pub fn raise(&mut self, id: Uuid) -> bool {
        match self.get_mut(id) {
            Some(region) => {
                region.z = REGION_Z_RAISED;
                true
            }
            None => false,
        }
    }

    /// Apply the same drag limits to every region
    pub fn set_limits(&mut self, lower: f64, upper: f64) {
        for region in self.regions.iter_mut() {
            region.set_limits(lower, upper);
        }
    }

    /// Topmost region under `x`; on equal z the most recently added wins
    pub fn hit_test(&self, x: f64) -> Option<Uuid> {
        self.regions
            .iter()
            .enumerate()
            .filter(|(_, region)| region.contains(x))
            .max_by_key(|(index, region)| (region.z, *index))
            .map(|(_, region)| region.id)
    }
}

impl<'a> IntoIterator for &'a RegionCollection {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Rgba;

    fn region(label: &str, start: f64, end: f64) -> Region {
        Region::new(label, Rgba::new(0, 0, 0, 255), (start, end))
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut regions = RegionCollection::new();
        regions.push(region("B", 5.0, 6.0));
        regions.push(region("A", 0.0, 1.0));
        let labels: Vec<_> = regions.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["B", "A"]);
    }

    #[test]
    fn test_remove_with_token_removes_whole_region() {
        let mut regions = RegionCollection::new();
        regions.push(region("A", 0.0, 1.0));
        regions.push(region("A+B", 1.0, 2.0));
        regions.push(region("B", 2.0, 3.0));
        let removed = regions.remove_with_token("A");
        assert_eq!(removed.len(), 2);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions.nth(0).unwrap().label, "B");
    }

    #[test]
    fn test_rename_token() {
        let mut regions = RegionCollection::new();
        let ab = regions.push(region("A+B", 0.0, 1.0));
        regions.push(region("C", 1.0, 2.0));
        assert_eq!(regions.rename_token("A", "X"), vec![ab]);
        assert_eq!(regions.get(ab).unwrap().label, "X+B");
        assert_eq!(regions.nth(1).unwrap().label, "C");
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut regions = RegionCollection::new();
        let a = regions.push(region("A", 0.0, 1.0));
        let b = regions.push(region("B", 1.0, 2.0));
        assert!(regions.select(a));
        assert!(regions.select(b));
        assert!(!regions.get(a).unwrap().selected);
        assert!(regions.get(b).unwrap().selected);
        assert!(!regions.select(Uuid::new_v4()));
    }

    #[test]
    fn test_hit_test_prefers_raised() {
        let mut regions = RegionCollection::new();
        let a = regions.push(region("A", 0.0, 10.0));
        let b = regions.push(region("B", 5.0, 15.0));
        assert_eq!(regions.hit_test(7.0), Some(b));
        regions.raise(a);
        assert_eq!(regions.hit_test(7.0), Some(a));
        assert_eq!(regions.hit_test(20.0), None);
    }

    #[test]
    fn test_set_limits_clamps_all() {
        let mut regions = RegionCollection::new();
        regions.push(region("A", 0.0, 500.0));
        regions.set_limits(0.0, 100.0);
        assert_eq!(regions.nth(0).unwrap().bounds(), (0.0, 100.0));
    }
}
