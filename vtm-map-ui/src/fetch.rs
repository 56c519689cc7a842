//! Minimal wrapper over the browser Fetch API.

use anyhow::{anyhow, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

/// Fetch a URL and return its body as text.
///
/// Any JS rejection or non-2xx status comes back as an error; there is no
/// retry, the caller decides what a failed load means.
pub async fn fetch_text(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window object"))?;

    let request =
        Request::new_with_str(url).map_err(|e| anyhow!("bad request url {url}: {e:?}"))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow!("fetch of {url} failed: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| anyhow!("fetch of {url} returned a non-Response value"))?;

    if !response.ok() {
        return Err(anyhow!(
            "fetch of {} failed with status {}",
            url,
            response.status()
        ));
    }

    let body = response
        .text()
        .map_err(|e| anyhow!("reading body of {url} failed: {e:?}"))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| anyhow!("reading body of {url} failed: {e:?}"))?;
    text.as_string()
        .ok_or_else(|| anyhow!("response body of {url} was not text"))
}
