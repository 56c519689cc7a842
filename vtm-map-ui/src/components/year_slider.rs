//! Year slider with a label mirroring the current selection.

use crate::state::AppState;
use dioxus::prelude::*;

/// Discrete year selector driving the choropleth recolor.
///
/// Emits on `input` (not `change`) so the map updates while the thumb is
/// being dragged. Federal elections are two years apart, hence the step.
#[component]
pub fn YearSlider() -> Element {
    let mut state = use_context::<AppState>();
    let year = (state.selected_year)();
    let min = (state.year_min)();
    let max = (state.year_max)();

    let on_input = move |evt: Event<FormData>| {
        state.selected_year.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "Election year: "
            }
            input {
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "2",
                value: "{year}",
                style: "flex: 1; max-width: 360px;",
                oninput: on_input,
            }
            span {
                id: "year-value",
                style: "min-width: 3em; font-variant-numeric: tabular-nums;",
                "{year}"
            }
        }
    }
}
