use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{LABEL_SEPARATOR, REGION_LOWER_BOUND, REGION_UPPER_BOUND, REGION_Z_DEFAULT};
use super::{blend, Label, RegionShades, Rgba};

/// Join label names into a composite region label.
pub fn join_labels<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(LABEL_SEPARATOR)
}

/// Split a composite region label into its label names.
pub fn split_label(label: &str) -> impl Iterator<Item = &str> {
    label.split(LABEL_SEPARATOR)
}

/// One annotated span `[start, end)` on the sample timeline
///
/// The two edges are stored in the order they were last set; `bounds()`
/// always reports them sorted, so dragging one edge past the other swaps
/// their roles instead of producing a negative width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Unique identifier
    pub id: Uuid,
    /// Composite label (label names joined by the separator)
    pub label: String,
    /// Color derived from the labels at creation time
    pub color: Rgba,
    /// Rendering shades derived from `color`
    pub shades: RegionShades,
    /// Whether the region is highlighted
    pub selected: bool,
    /// Stacking order for hit-testing and drawing
    pub z: i32,
    edges: [f64; 2],
    limits: (f64, f64),
}

impl Region {
    /// Create a region with the default drag limits
    pub fn new(label: impl Into<String>, color: Rgba, bounds: (f64, f64)) -> Self {
        let mut region = Self {
            id: Uuid::new_v4(),
            label: label.into(),
            color,
            shades: RegionShades::from_color(color),
            selected: false,
            z: REGION_Z_DEFAULT,
            edges: [bounds.0, bounds.1],
            limits: (REGION_LOWER_BOUND, REGION_UPPER_BOUND),
        };
        region.clamp_edges();
        region
    }

    /// Create a region tagged with `labels`, in selection order.
    /// Returns `None` when no labels are given.
    pub fn from_labels(labels: &[&Label], bounds: (f64, f64)) -> Option<Self> {
        let colors: Vec<Rgba> = labels.iter().map(|label| label.color).collect();
        let color = blend(&colors)?;
        let label = join_labels(labels.iter().map(|label| label.name.as_str()));
        Some(Self::new(label, color, bounds))
    }

    /// Sorted `(start, end)`.
    pub fn bounds(&self) -> (f64, f64) {
        let [a, b] = self.edges;
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    pub fn start(&self) -> f64 {
        self.bounds().0
    }

    pub fn end(&self) -> f64 {
        self.bounds().1
    }

    pub fn width(&self) -> f64 {
        let (start, end) = self.bounds();
        end - start
    }

    /// Set both edges, each clamped to the drag limits.
    pub fn set_bounds(&mut self, start: f64, end: f64) {
        self.set_edges([start, end]);
    }

    /// Edge positions in the order they were set.
    pub fn edges(&self) -> [f64; 2] {
        self.edges
    }

    pub fn set_edges(&mut self, edges: [f64; 2]) {
        self.edges = edges;
        self.clamp_edges();
    }

    /// Drag limits as `(lower, upper)`.
    pub fn limits(&self) -> (f64, f64) {
        self.limits
    }

    pub fn set_limits(&mut self, lower: f64, upper: f64) {
        self.limits = if lower <= upper { (lower, upper) } else { (upper, lower) };
        self.clamp_edges();
    }

    /// Label names this region is tagged with.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        split_label(&self.label)
    }

    pub fn has_token(&self, name: &str) -> bool {
        self.tokens().any(|token| token == name)
    }

    /// Replace every token equal to `old` with `new`, keeping the others in
    /// place. Returns whether anything changed. The color is left as is.
    pub fn replace_token(&mut self, old: &str, new: &str) -> bool {
        if !self.has_token(old) {
            return false;
        }
        let label = join_labels(self.tokens().map(|token| if token == old { new } else { token }));
        self.label = label;
        true
    }

    /// Horizontal position of the label glyph.
    pub fn label_anchor(&self) -> f64 {
        let (start, end) = self.bounds();
        (start + end) / 2.0
    }

    /// Whether `x` lies on the region (edges included).
    pub fn contains(&self, x: f64) -> bool {
        let (start, end) = self.bounds();
        start <= x && x <= end
    }

    fn clamp_edges(&mut self) {
        let (lower, upper) = self.limits;
        for edge in self.edges.iter_mut() {
            *edge = edge.clamp(lower, upper);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str, color: Rgba) -> Label {
        Label::new(name, color)
    }

    #[test]
    fn test_bounds_are_sorted() {
        let mut region = Region::new("A", Rgba::new(0, 0, 0, 255), (10.0, 4.0));
        assert_eq!(region.bounds(), (4.0, 10.0));
        assert_eq!(region.width(), 6.0);
        region.set_bounds(3.0, 1.0);
        assert_eq!(region.edges(), [3.0, 1.0]);
        assert_eq!(region.bounds(), (1.0, 3.0));
    }

    #[test]
    fn test_edges_clamped_to_limits() {
        let mut region = Region::new("A", Rgba::new(0, 0, 0, 255), (-5.0, 2e9));
        assert_eq!(region.bounds(), (0.0, 1e9));
        region.set_limits(0.0, 100.0);
        assert_eq!(region.bounds(), (0.0, 100.0));
        region.set_bounds(-1.0, 50.0);
        assert_eq!(region.bounds(), (0.0, 50.0));
    }

    #[test]
    fn test_from_labels_single() {
        let a = label("A", Rgba::new(10, 20, 30, 255));
        let region = Region::from_labels(&[&a], (0.0, 5.0)).unwrap();
        assert_eq!(region.label, "A");
        assert_eq!(region.color, a.color);
        assert_eq!(region.shades.base, Rgba::new(10, 20, 30, 75));
    }

    #[test]
    fn test_from_labels_multi() {
        let a = label("A", Rgba::new(200, 0, 0, 255));
        let b = label("B", Rgba::new(0, 200, 0, 255));
        let region = Region::from_labels(&[&a, &b], (0.0, 5.0)).unwrap();
        assert_eq!(region.label, "A+B");
        assert_eq!(region.color, Rgba::new(50, 100, 0, 255));
        assert!(Region::from_labels(&[], (0.0, 1.0)).is_none());
    }

    #[test]
    fn test_replace_token() {
        let mut region = Region::new("A+B+A", Rgba::new(0, 0, 0, 255), (0.0, 1.0));
        assert!(region.replace_token("A", "X"));
        assert_eq!(region.label, "X+B+X");
        assert!(!region.replace_token("C", "Y"));
        assert_eq!(region.label, "X+B+X");
    }

    #[test]
    fn test_has_token_is_exact() {
        let region = Region::new("AB+C", Rgba::new(0, 0, 0, 255), (0.0, 1.0));
        assert!(region.has_token("AB"));
        assert!(region.has_token("C"));
        assert!(!region.has_token("A"));
    }

    #[test]
    fn test_label_anchor() {
        let region = Region::new("A", Rgba::new(0, 0, 0, 255), (2.0, 8.0));
        assert_eq!(region.label_anchor(), 5.0);
        assert!(region.contains(2.0));
        assert!(!region.contains(8.5));
    }
}
