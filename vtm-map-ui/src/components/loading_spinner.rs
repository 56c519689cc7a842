//! Loading spinner component.

use dioxus::prelude::*;

/// Simple loading indicator shown while the boundary and statistics
/// fetches are in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading turnout data..."
        }
    }
}
