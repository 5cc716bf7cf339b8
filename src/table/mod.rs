//! Tabular source and sink
//!
//! A table is an ordered set of named columns of raw string cells sharing
//! one row index, which is the sample timeline. One designated column holds
//! the per-sample labels; the numeric columns are the plottable series.

mod csv_io;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::TableError;

/// One named column of raw cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table from columns of equal length
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, TableError> {
        let row_count = columns.first().map(|c| c.cells.len()).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.cells.len() != row_count) {
            return Err(TableError::LengthMismatch {
                name: bad.name.clone(),
                expected: row_count,
                got: bad.cells.len(),
            });
        }
        Ok(Self { columns, row_count })
    }

    /// Number of samples on the timeline
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Columns whose every non-missing cell parses as a number, excluding the
    /// label column. These are the series that can be plotted.
    pub fn numeric_columns<'a>(&'a self, settings: &Settings) -> Vec<&'a str> {
        self.columns
            .iter()
            .filter(|c| c.name != settings.label_column)
            .filter(|c| {
                c.cells
                    .iter()
                    .filter(|cell| !settings.is_missing(cell.trim()))
                    .all(|cell| cell.trim().parse::<f64>().is_ok())
            })
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Values of a numeric series; missing or unparsable cells are `None`.
    pub fn series(&self, name: &str, settings: &Settings) -> Result<Vec<Option<f64>>, TableError> {
        let column = self.column(name).ok_or_else(|| TableError::UnknownColumn {
            name: name.to_string(),
        })?;
        Ok(column
            .cells
            .iter()
            .map(|cell| {
                let cell = cell.trim();
                if settings.is_missing(cell) {
                    None
                } else {
                    cell.parse().ok()
                }
            })
            .collect())
    }

    /// The label column with missing cells as `None`, or `None` when the
    /// table has no label column. Cells are trimmed before the missing check,
    /// as in `series`.
    pub fn label_values(&self, settings: &Settings) -> Option<Vec<Option<String>>> {
        let column = self.column(&settings.label_column)?;
        Some(
            column
                .cells
                .iter()
                .map(|cell| (!settings.is_missing(cell.trim())).then(|| cell.clone()))
                .collect(),
        )
    }

    /// Copy of the table with `name` overwritten in place, or appended as the
    /// last column if absent.
    pub fn with_label_column(&self, name: &str, cells: Vec<String>) -> Result<Self, TableError> {
        if cells.len() != self.row_count {
            return Err(TableError::LengthMismatch {
                name: name.to_string(),
                expected: self.row_count,
                got: cells.len(),
            });
        }
        let mut table = self.clone();
        match table.columns.iter_mut().find(|c| c.name == name) {
            Some(column) => column.cells = cells,
            None => table.columns.push(Column {
                name: name.to_string(),
                cells,
            }),
        }
        Ok(table)
    }
}
