use dialogs_core::DialogConfig;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::constants::{CONFIG_GLOBAL, LANG_PARAM};

/// Log a message to the browser console.
pub fn log(s: &str) {
    gloo::console::log!(s);
}

pub fn warn(s: &str) {
    gloo::console::warn!(s);
}

pub fn debug(s: &str) {
    gloo::console::debug!(s);
}

/// Serialize a JS object through `JSON.stringify` so serde can read it.
pub fn js_to_json(v: &JsValue) -> Option<String> {
    if v.is_undefined() || v.is_null() {
        return None;
    }
    js_sys::JSON::stringify(v).ok()?.as_string()
}

/// Read `window.__DIALOG_CONFIG` if the host page set one; defaults otherwise.
pub fn load_config(window: &Window) -> DialogConfig {
    let raw = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)).ok();
    let Some(text) = raw.as_ref().and_then(js_to_json) else {
        return DialogConfig::default();
    };
    match DialogConfig::from_json(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn(&format!("Ignoring malformed {CONFIG_GLOBAL}: {e}"));
            DialogConfig::default()
        }
    }
}

/// Index page URL, carrying the current `lang` query parameter along.
pub fn index_href(base: &str, search: &str) -> String {
    match get_query_param(search, LANG_PARAM) {
        Some(lang) if !lang.is_empty() => {
            let sep = if base.contains('?') { '&' } else { '?' };
            format!(
                "{base}{sep}{LANG_PARAM}={}",
                utf8_percent_encode(&lang, NON_ALPHANUMERIC)
            )
        }
        _ => base.to_string(),
    }
}

/// Simple query string parser.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_encoding::percent_decode_str(&s)
        .decode_utf8_lossy()
        .to_string()
}

/// JS truthiness of a stored string value.
pub fn truthy(v: Option<String>) -> bool {
    v.is_some_and(|s| !s.is_empty())
}

/// Evaluate an optional zero-argument JS predicate; errors count as false.
pub fn call_predicate(f: Option<&js_sys::Function>) -> bool {
    f.and_then(|f| f.call0(&JsValue::NULL).ok())
        .is_some_and(|v| v.is_truthy())
}
