//! Reusable Dioxus RSX components for the turnout map app.

mod error_display;
mod loading_spinner;
mod map_container;
mod year_slider;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use year_slider::YearSlider;
