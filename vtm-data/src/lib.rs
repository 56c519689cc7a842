//! Turnout statistics table handling.
//!
//! This crate covers the tabular half of the pipeline:
//! - [`record::StatRow`]: one row of the statistics CSV, column name -> raw text
//! - [`parser::parse_table`]: raw delimited text -> ordered rows
//! - [`year_index::YearIndex`]: year -> state -> row lookup built once per load
//!
//! Values stay as raw strings all the way through; numeric coercion happens
//! at join time so malformed cells degrade to defaults instead of failing
//! the load.

pub mod parser;
pub mod record;
pub mod year_index;

pub use parser::parse_table;
pub use record::StatRow;
pub use year_index::YearIndex;
