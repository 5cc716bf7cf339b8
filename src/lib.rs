//! Chronnotate
//!
//! Interval annotation engine for time-indexed tabular data. A CSV table is
//! read as a sample timeline; its label column is decoded into labeled
//! regions, which can be created, moved, renamed and deleted, and encoded
//! back into the label column on save.

pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod state;
pub mod table;

pub use config::Settings;
pub use error::{ColorError, ConfigError, TableError};
pub use state::Session;
pub use table::Table;
