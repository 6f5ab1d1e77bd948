//! Browser Page Source
//!
//! `window.fetch` binding for the acquisition loop.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use roster_core::{CharacterPage, FetchError, FetchResult, PageSource};

/// Issues one plain GET per page
pub struct BrowserFetch;

#[async_trait(?Send)]
impl PageSource for BrowserFetch {
    async fn fetch_page(&self, url: &str) -> FetchResult<CharacterPage> {
        let window = web_sys::window().ok_or_else(|| FetchError::transport(url, "no window available"))?;

        let value = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| FetchError::transport(url, js_message(&e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|e| FetchError::transport(url, js_message(&e)))?;

        if !response.ok() {
            return Err(FetchError::Status { url: url.to_string(), status: response.status() });
        }

        let body = response.json().map_err(|e| FetchError::decode(url, js_message(&e)))?;
        let json = JsFuture::from(body)
            .await
            .map_err(|e| FetchError::decode(url, js_message(&e)))?;
        serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::decode(url, e.to_string()))
    }
}

/// Best-effort text for a rejected promise or thrown value
fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", value),
    }
}
