//! mondo-wasm: client-side search for the MondoExplora homepage.
//!
//! The page fetches `/api/search-data` once, hands the JSON to
//! [`load_search_data`] and then calls [`search`] on every keystroke, so
//! typing never round-trips to the server.
//!
//! ```javascript
//! import init, { load_search_data, search } from '/pkg/mondo_wasm.js';
//!
//! await init();
//! load_search_data(await (await fetch('/api/search-data')).text());
//! console.log(search('thai')); // [{ name, slug, type }, ...]
//! ```
//!
//! Build with `wasm-pack build crates/mondo-wasm --target web`; the web
//! server serves the `pkg/` output under `/pkg`.
use std::sync::RwLock;

use js_sys::Array;
use mondo_core::model::SearchItem;
use mondo_core::search::{SearchIndex, DEFAULT_RESULT_LIMIT};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

static INDEX: RwLock<Option<SearchIndex>> = RwLock::new(None);

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Replace the search list with the JSON array served by `/api/search-data`.
/// Returns the number of items loaded.
#[wasm_bindgen]
pub fn load_search_data(json: &str) -> Result<usize, JsValue> {
    let items: Vec<SearchItem> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid search data: {e}")))?;
    let count = items.len();

    let mut guard = INDEX
        .write()
        .map_err(|_| JsValue::from_str("Search index lock poisoned"))?;
    *guard = Some(SearchIndex::new(items));

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("Loaded {count} search items").into());
    Ok(count)
}

#[wasm_bindgen]
pub fn item_count() -> usize {
    INDEX
        .read()
        .ok()
        .and_then(|guard| guard.as_ref().map(SearchIndex::len))
        .unwrap_or(0)
}

/// Up to ten matches for `query`; empty before any data is loaded.
pub fn search_items(query: &str) -> Vec<SearchItem> {
    let Ok(guard) = INDEX.read() else {
        return Vec::new();
    };
    guard
        .as_ref()
        .map(|index| {
            index
                .filter(query, DEFAULT_RESULT_LIMIT)
                .into_iter()
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

/// [`search_items`] as a JS array of `{ name, slug, type }` objects.
#[wasm_bindgen]
pub fn search(query: &str) -> JsValue {
    to_value(&search_items(query)).unwrap_or_else(|_| Array::new().into())
}
