//! Typed wrappers around Mapbox GL JS interop via `js_sys::eval()`.
//!
//! The map boot script lives in `assets/js/map-init.js` and is evaluated as
//! a global (no ES modules); its entry points are promoted to `window.*`.
//! This module provides safe Rust wrappers that serialize data and call
//! those globals, plus the hook that exposes the Rust popup formatter to the
//! JS hover handler.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embedded at compile time, evaluated once the mapbox-gl script tag loads.
static MAP_INIT_JS: &str = include_str!("../assets/js/map-init.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('VTM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the map boot script and create the map, with a wait-for-mapboxgl
/// polling loop.
///
/// The script defines `initTurnoutMap` / `vtmSetStatesData` via `function`
/// declarations. To ensure they become globally accessible (not block-scoped
/// inside the setInterval callback), the script is stashed on `window`,
/// evaluated at global scope via indirect eval once mapbox-gl and the
/// container element exist, and the functions are explicitly promoted to
/// `window.*` before the map is created.
pub fn init_map(container_id: &str, outline_url: &str) {
    let store_js = format!(
        "window.__vtmMapScript = {};",
        serde_json::to_string(MAP_INIT_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            var waitForMapbox = setInterval(function() {{
                if (typeof mapboxgl !== 'undefined' &&
                    window.__vtmMapScript &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(waitForMapbox);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__vtmMapScript);
                    delete window.__vtmMapScript;
                    if (typeof initTurnoutMap !== 'undefined') window.initTurnoutMap = initTurnoutMap;
                    if (typeof vtmSetStatesData !== 'undefined') window.vtmSetStatesData = vtmSetStatesData;
                    try {{
                        window.initTurnoutMap('{container_id}', '{outline_url}');
                    }} catch(e) {{ console.error('[VTM] map init error:', e); }}
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Push a merged GeoJSON string into the live `states` source.
///
/// Waits for the map's `load` event (`__vtmMapReady`) with a polling loop.
pub fn set_states_data(geojson: &str) {
    let payload = serde_json::to_string(geojson).unwrap_or_default();
    call_js(&states_push_script(&payload));
}

/// Build the polling push script for one merged-collection payload.
///
/// The payload is baked into the IIFE as a local, not parked on `window`:
/// slider drags fire one push per thumb movement, and a shared slot would
/// let a later push strand an earlier poller on a condition that can never
/// become true again. With a captured local every poll applies its own data
/// once the map is ready and then clears itself.
fn states_push_script(payload_literal: &str) -> String {
    format!(
        r#"
        (function() {{
            var payload = {payload_literal};
            var poll = setInterval(function() {{
                if (window.__vtmMapReady &&
                    typeof window.vtmSetStatesData !== 'undefined') {{
                    clearInterval(poll);
                    try {{
                        window.vtmSetStatesData(payload);
                    }} catch(e) {{ console.error('[VTM] vtmSetStatesData error:', e); }}
                }}
            }}, 100);
        }})();
        "#
    )
}

/// Expose the Rust popup formatter to the hover handler in map-init.js.
///
/// The JS side calls `window.__vtmFormatPopup(JSON.stringify(props))` on
/// mousemove over the fill layer and feeds the returned HTML to the popup.
/// The closure must live for the page lifetime, so it is leaked on purpose.
pub fn install_popup_formatter() {
    let formatter = Closure::<dyn Fn(String) -> String>::new(|props_json: String| {
        let props = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&props_json)
            .unwrap_or_default();
        vtm_view::popup_html(&props)
    });

    match web_sys::window() {
        Some(window) => {
            if js_sys::Reflect::set(
                &window,
                &JsValue::from_str("__vtmFormatPopup"),
                formatter.as_ref(),
            )
            .is_ok()
            {
                web_sys::console::log_1(&"[VTM Debug] popup formatter installed".into());
            } else {
                log::error!("failed to install popup formatter on window");
            }
        }
        None => log::error!("no window object; popup formatter not installed"),
    }
    formatter.forget();
}

#[cfg(test)]
mod tests {
    use super::states_push_script;

    #[test]
    fn each_push_script_captures_its_own_payload() {
        let first = states_push_script("\"{\\\"year\\\":\\\"2008\\\"}\"");
        let second = states_push_script("\"{\\\"year\\\":\\\"2012\\\"}\"");

        // The payload lives inside the IIFE, so overlapping pushes cannot
        // overwrite each other's data.
        assert!(first.contains(r#"var payload = "{\"year\":\"2008\"}";"#));
        assert!(second.contains(r#"var payload = "{\"year\":\"2012\"}";"#));
        assert!(!first.contains("2012"));

        // No shared window slot, and the poll always clears itself on the
        // same path that applies the data.
        assert!(!first.contains("__vtmPendingStates"));
        assert!(first.contains("clearInterval(poll)"));
    }
}
