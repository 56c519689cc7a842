//! State boundary geometry and the per-year statistics join.
//!
//! Geometry payloads are carried as opaque JSON; nothing here interprets
//! coordinates. The only real logic is [`join::join`], which overlays one
//! year's statistics onto cloned boundary features and derives the numeric
//! fields the map's fill layer styles on.

pub mod feature;
pub mod join;

pub use feature::{BoundaryFeature, FeatureCollection};
pub use join::{join, parse_number};
