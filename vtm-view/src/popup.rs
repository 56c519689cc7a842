//! Hover popup HTML for the currently rendered state.

use serde_json::{Map, Value};
use vtm_data::record::{VEP_COL, VEP_TURNOUT_RATE_COL};
use vtm_geo::feature::{VEP_NUM_KEY, VEP_TURNOUT_RATE_NUM_KEY};
use vtm_geo::parse_number;

/// Format the popup fragment for a hovered feature's properties bag.
///
/// Prefers the derived numeric fields and falls back to the raw text
/// columns, so the popup still works on a properties bag that never went
/// through the joiner. Missing values render as "N/A".
pub fn popup_html(props: &Map<String, Value>) -> String {
    let state = props
        .get("NAME")
        .and_then(Value::as_str)
        .or_else(|| props.get("STATE").and_then(Value::as_str))
        .or_else(|| props.get("STATE_ABV").and_then(Value::as_str))
        .unwrap_or("Unknown");

    let vep = field_number(props, VEP_NUM_KEY, VEP_COL);
    let turnout = field_number(props, VEP_TURNOUT_RATE_NUM_KEY, VEP_TURNOUT_RATE_COL);

    let vep_text = vep
        .map(format_thousands)
        .unwrap_or_else(|| "N/A".to_string());
    let turnout_text = turnout
        .map(|v| format!("{}%", format_plain(v)))
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "<div style=\"font-size:13px\">\
         <strong>{state}</strong><br/>\
         <strong>VEP:</strong> {vep_text}<br/>\
         <strong>VEP Turnout Rate:</strong> {turnout_text}\
         </div>"
    )
}

/// Read the derived numeric field, falling back to the raw text column when
/// the derived one is absent or null. The map engine hands properties back
/// through JSON, so numbers may arrive either as numbers or as strings.
fn field_number(props: &Map<String, Value>, num_key: &str, raw_key: &str) -> Option<f64> {
    match props.get(num_key) {
        Some(Value::Null) | None => parse_number(props.get(raw_key)),
        value => parse_number(value),
    }
}

/// Shortest plain decimal rendering: 55.2 -> "55.2", 61.0 -> "61".
fn format_plain(v: f64) -> String {
    format!("{}", v)
}

/// Group the integer digits by thousands: 23681837 -> "23,681,837".
fn format_thousands(v: f64) -> String {
    let plain = format_plain(v);
    let (int_part, fraction) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
