//! Browser-side HTTP helpers over the Fetch API.

use anyhow::{anyhow, bail, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch `url` and return the response body as text. Non-2xx statuses are
/// errors; the tab's network failures surface as the JsValue message.
pub async fn fetch_text(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window object"))?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("request to {url} failed: {e:?}"))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| anyhow!("fetch did not return a Response"))?;

    if !resp.ok() {
        bail!("request to {} returned status {}", url, resp.status());
    }

    let text_promise = resp
        .text()
        .map_err(|e| anyhow!("reading body of {url} failed: {e:?}"))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow!("reading body of {url} failed: {e:?}"))?;

    text_value
        .as_string()
        .ok_or_else(|| anyhow!("body of {url} is not a string"))
}
