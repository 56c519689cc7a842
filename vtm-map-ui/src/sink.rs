//! `MapDataSink` backed by the Mapbox GL JS bridge.

use crate::js_bridge;
use std::cell::RefCell;
use std::rc::Rc;
use vtm_geo::FeatureCollection;
use vtm_view::{MapDataSink, ViewController};

/// Shared controller handle for single-threaded WASM: cheaply cloneable,
/// suitable for stashing in a Dioxus Signal.
pub type MapController = Rc<RefCell<ViewController<JsMapSink>>>;

/// Pushes merged collections into the live `states` source on the JS side.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsMapSink;

impl MapDataSink for JsMapSink {
    fn set_states_data(&mut self, data: &FeatureCollection) {
        match serde_json::to_string(data) {
            Ok(json) => js_bridge::set_states_data(&json),
            Err(e) => log::error!("failed to serialize merged geometry: {}", e),
        }
    }
}
