//! A single row of the turnout statistics table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column holding the election year identifier.
pub const YEAR_COL: &str = "YEAR";

/// Column holding the state name (join key against boundary `NAME`).
pub const STATE_COL: &str = "STATE";

/// Column holding the raw voter-eligible-population count.
pub const VEP_COL: &str = "VEP";

/// Column holding the raw VEP turnout rate (percent).
pub const VEP_TURNOUT_RATE_COL: &str = "VEP_TURNOUT_RATE";

/// One row of the statistics table: column name -> raw cell text.
///
/// Immutable once parsed. Columns beyond the four well-known ones are kept
/// and flow through the geometry join untouched, so the table can grow
/// columns without code changes here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatRow {
    fields: BTreeMap<String, String>,
}

impl StatRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell value. Used by the parser while assembling a row.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Raw cell text for a column, if the row has that column at all.
    /// A present-but-empty cell returns `Some("")`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Raw `YEAR` value.
    pub fn year(&self) -> Option<&str> {
        self.get(YEAR_COL)
    }

    /// Raw `STATE` value.
    pub fn state(&self) -> Option<&str> {
        self.get(STATE_COL)
    }

    /// Raw `VEP` value.
    pub fn vep(&self) -> Option<&str> {
        self.get(VEP_COL)
    }

    /// Raw `VEP_TURNOUT_RATE` value.
    pub fn vep_turnout_rate(&self) -> Option<&str> {
        self.get(VEP_TURNOUT_RATE_COL)
    }

    /// All (column, value) pairs in column-name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for StatRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> StatRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn accessors_read_well_known_columns() {
        let r = row(&[
            ("YEAR", "2012"),
            ("STATE", "California"),
            ("VEP", "23681837"),
            ("VEP_TURNOUT_RATE", "55.2"),
        ]);
        assert_eq!(r.year(), Some("2012"));
        assert_eq!(r.state(), Some("California"));
        assert_eq!(r.vep(), Some("23681837"));
        assert_eq!(r.vep_turnout_rate(), Some("55.2"));
    }

    #[test]
    fn missing_column_is_none_but_empty_cell_is_some() {
        let r = row(&[("YEAR", "2012"), ("VEP", "")]);
        assert_eq!(r.state(), None);
        assert_eq!(r.vep(), Some(""));
    }
}
