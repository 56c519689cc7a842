//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use crate::sink::MapController;
use dioxus::prelude::*;

/// Shared application state for the turnout map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the two input loads are still in flight
    pub loading: Signal<bool>,
    /// Error message if a load or parse went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected election year (raw slider value)
    pub selected_year: Signal<String>,
    /// Lower bound of the year slider
    pub year_min: Signal<i32>,
    /// Upper bound of the year slider
    pub year_max: Signal<i32>,
    /// View controller handle (None until both inputs have loaded)
    pub controller: Signal<Option<MapController>>,
}

impl AppState {
    /// Create a new AppState with default signal values. The year bounds
    /// are placeholders until the statistics load pins them to the data.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_year: Signal::new("2020".to_string()),
            year_min: Signal::new(1980),
            year_max: Signal::new(2020),
            controller: Signal::new(None),
        }
    }
}
