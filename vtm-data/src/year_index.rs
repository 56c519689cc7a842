//! Per-year, per-state lookup over parsed statistics rows.

use crate::record::StatRow;
use std::collections::HashMap;

/// Year -> state -> row lookup, built once per table load.
///
/// Trades a little memory for O(1) year-to-state resolution on every slider
/// move instead of rescanning the full row sequence.
#[derive(Debug, Clone, Default)]
pub struct YearIndex {
    by_year: HashMap<String, HashMap<String, StatRow>>,
}

impl YearIndex {
    /// Fold rows left to right into the index.
    ///
    /// A row with no `YEAR` column or with a missing/empty `STATE` value
    /// contributes no entry. A later row for the same (year, state) replaces
    /// the earlier one wholesale. A present-but-odd year value (empty or
    /// non-numeric text) still groups under that literal key; lookups of
    /// real years simply never see it.
    pub fn build(rows: &[StatRow]) -> Self {
        let mut by_year: HashMap<String, HashMap<String, StatRow>> = HashMap::new();
        for row in rows {
            let Some(year) = row.year() else { continue };
            let state = match row.state() {
                Some(s) if !s.is_empty() => s,
                _ => continue,
            };
            by_year
                .entry(year.to_string())
                .or_default()
                .insert(state.to_string(), row.clone());
        }
        Self { by_year }
    }

    /// Per-state rows for a year. Unknown years yield `None`, which the
    /// joiner treats as an empty lookup rather than an error.
    pub fn lookup(&self, year: &str) -> Option<&HashMap<String, StatRow>> {
        self.by_year.get(year)
    }

    /// All year keys, in no particular order.
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.by_year.keys().map(String::as_str)
    }

    /// Min and max of the numeric year keys, for seeding the slider range.
    /// `None` when no key parses as a number.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut bounds: Option<(i32, i32)> = None;
        for year in self.by_year.keys() {
            if let Ok(n) = year.trim().parse::<i32>() {
                bounds = Some(match bounds {
                    Some((lo, hi)) => (lo.min(n), hi.max(n)),
                    None => (n, n),
                });
            }
        }
        bounds
    }

    /// Number of distinct year keys.
    pub fn len(&self) -> usize {
        self.by_year.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    #[test]
    fn groups_rows_by_year_and_state() {
        let rows = parse_table(
            "YEAR,STATE,VEP,VEP_TURNOUT_RATE\n\
             2008,Texas,16219045,54.1\n\
             2012,Texas,16937317,49.6\n\
             2012,California,23681837,55.2\n",
        );
        let index = YearIndex::build(&rows);
        assert_eq!(index.len(), 2);
        let y2012 = index.lookup("2012").unwrap();
        assert_eq!(y2012.len(), 2);
        assert_eq!(y2012["California"].vep(), Some("23681837"));
        assert_eq!(index.lookup("2008").unwrap()["Texas"].vep(), Some("16219045"));
    }

    #[test]
    fn duplicate_year_state_keeps_the_later_row() {
        let rows = parse_table(
            "YEAR,STATE,VEP,VEP_TURNOUT_RATE\n\
             2012,Texas,1,10.0\n\
             2012,Texas,16937317,49.6\n",
        );
        let index = YearIndex::build(&rows);
        let tx = &index.lookup("2012").unwrap()["Texas"];
        assert_eq!(tx.vep(), Some("16937317"));
        assert_eq!(tx.vep_turnout_rate(), Some("49.6"));
    }

    #[test]
    fn stateless_rows_contribute_no_entry() {
        let rows = parse_table(
            "YEAR,STATE,VEP\n\
             2012,,999\n\
             2012\n",
        );
        let index = YearIndex::build(&rows);
        assert!(index.lookup("2012").is_none());
    }

    #[test]
    fn odd_year_values_group_under_their_literal_key() {
        let rows = parse_table(
            "YEAR,STATE,VEP\n\
             n/a,Texas,1\n\
             2012,Texas,2\n",
        );
        let index = YearIndex::build(&rows);
        assert!(index.lookup("n/a").is_some());
        assert_eq!(index.lookup("2012").unwrap()["Texas"].vep(), Some("2"));
    }

    #[test]
    fn year_bounds_span_numeric_keys_only() {
        let rows = parse_table(
            "YEAR,STATE,VEP\n\
             2000,Texas,1\n\
             2020,Texas,2\n\
             n/a,Texas,3\n",
        );
        let index = YearIndex::build(&rows);
        assert_eq!(index.year_bounds(), Some((2000, 2020)));

        let empty = YearIndex::build(&[]);
        assert_eq!(empty.year_bounds(), None);
        assert!(empty.is_empty());
    }
}
