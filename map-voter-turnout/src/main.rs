//! U.S. Voter Turnout by State
//!
//! Renders a choropleth of voter-eligible-population (VEP) turnout per
//! state on a Mapbox GL map, recolored as the year slider moves, with a
//! hover popup showing each state's statistics.
//!
//! Data flow:
//! 1. On mount: fetch the state boundary GeoJSON and the turnout CSV.
//! 2. Parse both, build the year index, and pin the slider range to the
//!    years actually present in the table.
//! 3. Boot the map via the JS bridge and hand a `ViewController` the base
//!    boundaries, the index, and the live `states` source as its sink.
//! 4. Every slider move re-joins the selected year and pushes the merged
//!    collection; the fill layer recolors off `VEP_NUM`.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use vtm_data::{parse_table, YearIndex};
use vtm_geo::FeatureCollection;
use vtm_map_ui::components::{ErrorDisplay, LoadingSpinner, MapContainer, YearSlider};
use vtm_map_ui::fetch::fetch_text;
use vtm_map_ui::js_bridge;
use vtm_map_ui::sink::JsMapSink;
use vtm_map_ui::state::AppState;
use vtm_view::ViewController;

/// Census state boundaries (20m resolution), one polygon per state.
const STATES_GEOJSON_URL: &str = "assets/map-outlines/gz_2010_us_040_00_20m.json";
/// National outline, handed straight to the map engine (no join).
const NATIONAL_OUTLINE_URL: &str = "assets/map-outlines/gz_2010_us_outline_20m.json";
/// Per-year, per-state VEP turnout statistics.
const TURNOUT_CSV_URL: &str = "assets/voter_turnout_data.csv";

/// DOM id the Mapbox GL canvas renders into.
const MAP_CONTAINER_ID: &str = "turnout-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("turnout-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Load both inputs once on mount, then build the pipeline ───
    use_future(move || async move {
        let geojson_text = match fetch_text(STATES_GEOJSON_URL).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("boundary fetch failed: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load state boundaries: {}", e)));
                state.loading.set(false);
                return;
            }
        };
        let csv_text = match fetch_text(TURNOUT_CSV_URL).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("statistics fetch failed: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load turnout statistics: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        let base = match FeatureCollection::parse(&geojson_text) {
            Ok(collection) => collection,
            Err(e) => {
                log::error!("boundary parse failed: {}", e);
                state
                    .error_msg
                    .set(Some(format!("State boundary file is not valid GeoJSON: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        let rows = parse_table(&csv_text);
        let index = YearIndex::build(&rows);
        log::info!(
            "loaded {} boundary features, {} statistics rows, {} years",
            base.features.len(),
            rows.len(),
            index.len()
        );

        // Pin the slider to the data; keep the current selection if it
        // already falls inside the range.
        if let Some((lo, hi)) = index.year_bounds() {
            state.year_min.set(lo);
            state.year_max.set(hi);
            let clamped = (state.selected_year)()
                .parse::<i32>()
                .map(|y| y.clamp(lo, hi))
                .unwrap_or(hi);
            state.selected_year.set(clamped.to_string());
        }

        js_bridge::init_map(MAP_CONTAINER_ID, NATIONAL_OUTLINE_URL);
        js_bridge::install_popup_formatter();

        let controller = Rc::new(RefCell::new(ViewController::new(base, index, JsMapSink)));
        state.controller.set(Some(controller));
        state.loading.set(false);
    });

    // ─── Re-join and push whenever the year selection (or the controller
    //     itself, on initial load) changes ───
    use_effect(move || {
        let year = (state.selected_year)();
        let Some(controller) = (state.controller)() else {
            return;
        };
        controller.borrow_mut().select_year(&year);
    });

    let loading = (state.loading)();
    let error = (state.error_msg)();

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; font-family: sans-serif;",
            h2 {
                style: "margin: 12px 0 4px 0;",
                "U.S. Voter Turnout by State"
            }
            p {
                style: "margin: 0 0 8px 0; font-size: 13px; color: #666;",
                "Voter-eligible population (VEP) and turnout rate per election year. Hover a state for details."
            }
            if let Some(message) = error {
                ErrorDisplay { message }
            }
            if loading {
                LoadingSpinner {}
            } else {
                YearSlider {}
            }
            MapContainer { id: MAP_CONTAINER_ID.to_string(), loading }
        }
    }
}
