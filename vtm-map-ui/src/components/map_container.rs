//! Map container component with loading overlay.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map canvas (Mapbox GL renders into this)
    pub id: String,
    /// Whether the inputs are still loading
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels
    #[props(default = 560)]
    pub min_height: u32,
}

/// A container div for the Mapbox GL canvas with a loading overlay.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading map..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%; position: absolute; inset: 0;",
            }
        }
    }
}
