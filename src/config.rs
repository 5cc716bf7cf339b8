use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::constants::{
    DEFAULT_LABEL_COLUMN, DEFAULT_MISSING_VALUES, REGION_LOWER_BOUND, REGION_UPPER_BOUND,
};
use crate::error::ConfigError;

/// Import and interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Name of the column holding per-sample labels
    #[serde(default = "default_label_column")]
    pub label_column: String,
    /// Raw lines skipped before the header row
    #[serde(default)]
    pub skip_lines: usize,
    /// Lower drag limit of every region
    #[serde(default = "default_lower_bound")]
    pub lower_bound: f64,
    /// Upper drag limit of every region
    #[serde(default = "default_upper_bound")]
    pub upper_bound: f64,
    /// Cell spellings read as missing labels
    #[serde(default = "default_missing_values")]
    pub missing_values: Vec<String>,
}

fn default_label_column() -> String {
    DEFAULT_LABEL_COLUMN.to_string()
}

fn default_lower_bound() -> f64 {
    REGION_LOWER_BOUND
}

fn default_upper_bound() -> f64 {
    REGION_UPPER_BOUND
}

fn default_missing_values() -> Vec<String> {
    DEFAULT_MISSING_VALUES.iter().map(|v| v.to_string()).collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            label_column: default_label_column(),
            skip_lines: 0,
            lower_bound: default_lower_bound(),
            upper_bound: default_upper_bound(),
            missing_values: default_missing_values(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no settings at {:?}, using defaults", path);
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        let mut settings: Settings = serde_json::from_str(&json)?;
        settings.normalize();
        Ok(settings)
    }

    /// Use a label column name, falling back to the default for an empty one.
    pub fn set_label_column(&mut self, name: impl Into<String>) {
        self.label_column = name.into();
        self.normalize();
    }

    /// Drag limits as `(lower, upper)`.
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower_bound, self.upper_bound)
    }

    /// Whether a raw cell counts as a missing label.
    pub fn is_missing(&self, cell: &str) -> bool {
        self.missing_values.iter().any(|value| value == cell)
    }

    fn normalize(&mut self) {
        if self.label_column.trim().is_empty() {
            self.label_column = default_label_column();
        }
        if self.upper_bound < self.lower_bound {
            std::mem::swap(&mut self.lower_bound, &mut self.upper_bound);
        }
    }
}
