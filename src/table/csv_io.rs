use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use crate::config::Settings;
use crate::error::TableError;
use super::{Column, Table};

impl Table {
    /// Read a CSV table, skipping `settings.skip_lines` raw lines before the
    /// header row.
    pub fn read_csv<R: Read>(reader: R, settings: &Settings) -> Result<Self, TableError> {
        let mut reader = BufReader::new(reader);
        let mut discarded = String::new();
        for _ in 0..settings.skip_lines {
            discarded.clear();
            if reader.read_line(&mut discarded)? == 0 {
                break;
            }
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(TableError::MissingHeader);
        }

        let mut columns: Vec<Column> = headers
            .iter()
            .map(|name| Column {
                name: name.to_string(),
                cells: Vec::new(),
            })
            .collect();
        for (row, record) in csv_reader.records().enumerate() {
            let record = record?;
            if record.len() != columns.len() {
                return Err(TableError::RaggedRow {
                    row: row + 1,
                    expected: columns.len(),
                    got: record.len(),
                });
            }
            for (column, cell) in columns.iter_mut().zip(record.iter()) {
                column.cells.push(cell.to_string());
            }
        }

        let table = Table::from_columns(columns)?;
        log::info!(
            "read table with {} rows and {} columns",
            table.row_count(),
            table.columns.len()
        );
        Ok(table)
    }

    /// Load a CSV file
    pub fn load(path: &Path, settings: &Settings) -> Result<Self, TableError> {
        let file = File::open(path)?;
        Self::read_csv(file, settings)
    }

    /// Write the table as CSV with a header row
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), TableError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.column_names())?;
        for row in 0..self.row_count {
            csv_writer.write_record(self.columns.iter().map(|c| c.cells[row].as_str()))?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Save the table to a CSV file
    pub fn save(&self, path: &Path) -> Result<(), TableError> {
        let file = File::create(path)?;
        self.write_csv(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = "t,accel,Label\n0,0.1,walk\n1,0.2,walk\n2,0.3,\n";

    #[test]
    fn test_read_csv() {
        let table = Table::read_csv(DATA.as_bytes(), &Settings::default()).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column("Label").unwrap().cells, ["walk", "walk", ""]);
    }

    #[test]
    fn test_skip_lines() {
        let data = format!("device 7\nrecorded 2024-01-01\n{}", DATA);
        let settings = Settings {
            skip_lines: 2,
            ..Default::default()
        };
        let table = Table::read_csv(data.as_bytes(), &settings).unwrap();
        let names: Vec<_> = table.column_names().collect();
        assert_eq!(names, ["t", "accel", "Label"]);
    }

    #[test]
    fn test_ragged_row() {
        let data = "a,b\n1,2\n3\n";
        let result = Table::read_csv(data.as_bytes(), &Settings::default());
        assert!(matches!(
            result,
            Err(TableError::RaggedRow { row: 2, expected: 2, got: 1 })
        ));
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let result = Table::read_csv("".as_bytes(), &Settings::default());
        assert!(matches!(result, Err(TableError::MissingHeader)));
    }

    #[test]
    fn test_write_csv() {
        let table = Table::read_csv(DATA.as_bytes(), &Settings::default()).unwrap();
        let mut out = Vec::new();
        table.write_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), DATA);
    }
}
