use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Rgba;

/// A named, colored category that timeline spans can be tagged with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Unique identifier
    pub id: Uuid,
    /// Display name, unique within its registry
    pub name: String,
    /// Color assigned at creation
    pub color: Rgba,
    /// Name held before the most recent rename
    #[serde(default)]
    pub previous_name: Option<String>,
}

impl Label {
    /// Create a new label
    pub fn new(name: impl Into<String>, color: Rgba) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color,
            previous_name: None,
        }
    }

    /// Replace the name, remembering the old one.
    /// Returns the old name, or `None` (and changes nothing) for an empty name.
    pub(crate) fn rename(&mut self, name: impl Into<String>) -> Option<String> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        let old = std::mem::replace(&mut self.name, name);
        self.previous_name = Some(old.clone());
        Some(old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_records_previous_name() {
        let mut label = Label::new("walk", Rgba::new(1, 2, 3, 255));
        assert_eq!(label.rename("run").as_deref(), Some("walk"));
        assert_eq!(label.name, "run");
        assert_eq!(label.previous_name.as_deref(), Some("walk"));
    }

    #[test]
    fn test_rename_to_empty_is_ignored() {
        let mut label = Label::new("walk", Rgba::new(1, 2, 3, 255));
        assert_eq!(label.rename(""), None);
        assert_eq!(label.name, "walk");
        assert_eq!(label.previous_name, None);
    }
}
