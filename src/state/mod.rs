//! State management module
//!
//! This module contains the data structures of an annotation session:
//! - Label: A named, colored category
//! - LabelRegistry: The ordered set of labels with palette and name counters
//! - Region: A labeled interval on the sample timeline
//! - RegionCollection: All regions in creation order
//! - Session: The loaded table together with labels, regions and selection

mod color;
mod label;
mod region;
mod regions;
mod registry;
mod selection;
mod session;

pub use color::{blend, RegionShades, Rgba};
pub use label::Label;
pub use region::{join_labels, split_label, Region};
pub use regions::RegionCollection;
pub use registry::{Deletion, LabelRegistry};
pub use selection::SelectionState;
pub use session::{LoadSummary, Session};
