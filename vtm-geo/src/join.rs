//! Merge one year's statistics into the boundary collection.

use crate::feature::{FeatureCollection, VEP_NUM_KEY, VEP_TURNOUT_RATE_NUM_KEY};
use serde_json::Value;
use vtm_data::record::{VEP_COL, VEP_TURNOUT_RATE_COL};
use vtm_data::YearIndex;

/// Join the requested year's rows onto cloned boundary features.
///
/// Total over any input: an unknown year means an empty lookup, and every
/// feature takes the no-match branch. Matched features get the row's fields
/// overlaid onto their properties (boundary fields retained, joined fields
/// added or overwritten). Matched or not, every output feature ends up with
/// `VEP_NUM` (parsed VEP or 0) and `VEP_TURNOUT_RATE_NUM` (parsed rate or
/// null), which the fill layer's color ramp requires to be present.
///
/// The base collection is never touched, and each call returns structurally
/// fresh clones, so repeated year selections cannot leak fields into one
/// another.
pub fn join(base: &FeatureCollection, index: &YearIndex, year: &str) -> FeatureCollection {
    let lookup = index.lookup(year);
    if lookup.is_none() {
        log::debug!("no statistics for year {}; rendering bare boundaries", year);
    }

    let features = base
        .features
        .iter()
        .map(|feature| {
            let mut merged = feature.clone();
            let row = feature
                .name()
                .and_then(|name| lookup.and_then(|states| states.get(name)));

            // Matched features derive the numeric fields from the row alone;
            // only unmatched ones read whatever raw VEP columns the boundary
            // file itself carried.
            let (vep, rate) = match row {
                Some(row) => {
                    for (column, value) in row.fields() {
                        merged
                            .properties
                            .insert(column.to_string(), Value::String(value.to_string()));
                    }
                    (parse_text(row.vep()), parse_text(row.vep_turnout_rate()))
                }
                None => (
                    parse_number(merged.properties.get(VEP_COL)),
                    parse_number(merged.properties.get(VEP_TURNOUT_RATE_COL)),
                ),
            };

            merged
                .properties
                .insert(VEP_NUM_KEY.to_string(), number_value(vep.unwrap_or(0.0)));
            merged.properties.insert(
                VEP_TURNOUT_RATE_NUM_KEY.to_string(),
                rate.map(number_value).unwrap_or(Value::Null),
            );

            merged
        })
        .collect();

    FeatureCollection {
        kind: base.kind.clone(),
        features,
        foreign: base.foreign.clone(),
    }
}

/// Coerce a JSON property to a finite number.
///
/// Accepts JSON numbers and trimmed numeric strings; empty, missing, and
/// non-numeric values come back as `None` so callers fall to their stated
/// defaults instead of propagating NaN.
pub fn parse_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_text(Some(s)),
        _ => None,
    }
}

/// `parse_number` for raw cell text straight off a statistics row.
fn parse_text(value: Option<&str>) -> Option<f64> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn number_value(v: f64) -> Value {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
