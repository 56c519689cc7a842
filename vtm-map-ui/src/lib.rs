//! Shared Dioxus components and Mapbox GL JS bridge for the turnout map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Mapbox GL boot script via `js_sys::eval()`
//! - `fetch`: browser Fetch API wrapper for loading the CSV and GeoJSON inputs
//! - `sink`: the `MapDataSink` implementation pushing merged GeoJSON to the map
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (year slider, containers, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod sink;
pub mod state;
