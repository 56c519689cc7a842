//! View-side logic for the turnout map, kept free of WASM so it tests
//! natively: the year-selection controller that drives the rendering
//! collaborator's data source, and the hover popup formatter.

pub mod controller;
pub mod popup;

pub use controller::{MapDataSink, ViewController, ViewState};
pub use popup::popup_html;
