//! GeoJSON boundary model.
//!
//! Only `properties` is ever inspected; `geometry` and any foreign members
//! (`crs`, `bbox`, ...) round-trip through serde untouched so the rendering
//! side receives exactly what the boundary file contained.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Boundary property holding the state name (join key).
pub const NAME_KEY: &str = "NAME";

/// Derived property: parsed VEP count, always present after a join.
pub const VEP_NUM_KEY: &str = "VEP_NUM";

/// Derived property: parsed turnout rate, present (possibly null) after a join.
pub const VEP_TURNOUT_RATE_NUM_KEY: &str = "VEP_TURNOUT_RATE_NUM";

/// One state's polygon plus its properties bag.
///
/// Read-only once loaded; the joiner clones, never mutates in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryFeature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub geometry: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

fn feature_type() -> String {
    "Feature".to_string()
}

impl BoundaryFeature {
    /// The state name this feature joins on, when present.
    pub fn name(&self) -> Option<&str> {
        self.properties.get(NAME_KEY).and_then(Value::as_str)
    }
}

/// A GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<BoundaryFeature>,
    #[serde(flatten)]
    pub foreign: Map<String, Value>,
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

impl FeatureCollection {
    /// Parse a GeoJSON text blob.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("failed to parse boundary GeoJSON")
    }
}
