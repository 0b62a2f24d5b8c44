use dialogs_core::{DialogManager, DialogStyle, OnClose, bounding_box};
use wasm_bindgen::prelude::*;
use web_sys::Element;

mod constants;
mod flows;
mod host;
mod state;
mod turtle_field;
mod utils;

pub use host::WebHost;
pub use turtle_field::TurtleField;

use crate::state::with_manager;
use crate::utils::{js_to_json, log};

fn to_js(e: dialogs_core::DialogError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn not_started() -> JsValue {
    JsValue::from_str("dialog manager not started")
}

fn parse_style(style: &JsValue) -> Result<DialogStyle, JsValue> {
    match js_to_json(style) {
        Some(text) => {
            serde_json::from_str(&text).map_err(|e| JsValue::from_str(&format!("bad style: {e}")))
        }
        None => Ok(DialogStyle::default()),
    }
}

/// Wrap a JS callback as a close hook. It runs after the manager is
/// released so it may call back into this API.
fn js_on_close(f: js_sys::Function) -> OnClose<WebHost> {
    Box::new(move |_host: &mut WebHost| state::defer_close(f))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // pages without dialog chrome call initDialogs() once it exists
    if let Err(e) = init_dialogs() {
        log(&format!("Dialogs not initialised: {:?}", e));
    }
    Ok(())
}

/// Bind to the page's dialog chrome, replacing any earlier manager.
#[wasm_bindgen(js_name = initDialogs)]
pub fn init_dialogs() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let config = utils::load_config(&window);
    let host = WebHost::new(window, document)?;
    state::install(DialogManager::new(host, config));
    log("Dialogs ready");
    Ok(())
}

/// Show `content` as the page's dialog. `style` is an optional object with
/// `width`, `height`, `left`, `top`, `marginLeft`, `marginTop`.
#[wasm_bindgen(js_name = showDialog)]
pub fn show_dialog(
    content: Option<Element>,
    origin: Option<Element>,
    animate: bool,
    modal: bool,
    style: JsValue,
    on_close: Option<js_sys::Function>,
) -> Result<(), JsValue> {
    let style = parse_style(&style)?;
    with_manager(|m| m.show_dialog(content, origin, animate, modal, &style, on_close.map(js_on_close)))
        .ok_or_else(not_started)?
        .map_err(to_js)
}

#[wasm_bindgen(js_name = hideDialog)]
pub fn hide_dialog(animate: Option<bool>) {
    with_manager(|m| m.hide_dialog(animate.unwrap_or(true)));
}

#[wasm_bindgen(js_name = isDialogVisible)]
pub fn is_dialog_visible() -> bool {
    with_manager(|m| m.is_visible()).unwrap_or(false)
}

/// Page-absolute `{x, y, width, height}` of `element`.
#[wasm_bindgen(js_name = getBoundingBox)]
pub fn get_bounding_box(element: &Element) -> Result<JsValue, JsValue> {
    let rect = with_manager(|m| bounding_box(m.host(), element)).ok_or_else(not_started)?;
    let out = js_sys::Object::new();
    js_sys::Reflect::set(&out, &"x".into(), &rect.x.into())?;
    js_sys::Reflect::set(&out, &"y".into(), &rect.y.into())?;
    js_sys::Reflect::set(&out, &"width".into(), &rect.width.into())?;
    js_sys::Reflect::set(&out, &"height".into(), &rect.height.into())?;
    Ok(out.into())
}

#[wasm_bindgen(js_name = storageAlert)]
pub fn storage_alert(origin: Option<Element>, message: &str) -> Result<(), JsValue> {
    with_manager(|m| m.storage_alert(origin, message))
        .ok_or_else(not_started)?
        .map_err(to_js)
}

/// Offer to leave the current level unless it is already solved. While a
/// block drag (`isDragging()`) or another dialog is in the way the offer is
/// retried on a timer.
#[wasm_bindgen(js_name = abortOffer)]
pub fn abort_offer(
    storage_name: String,
    level: u32,
    is_dragging: Option<js_sys::Function>,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    wasm_bindgen_futures::spawn_local(flows::abort_offer_loop(
        window,
        storage_name,
        level,
        is_dragging,
    ));
    Ok(())
}

#[wasm_bindgen(js_name = startDialogKeyDown)]
pub fn start_dialog_key_down() {
    with_manager(|m| m.start_dialog_keydown(dialogs_core::KeyVariant::Dismiss));
}

#[wasm_bindgen(js_name = stopDialogKeyDown)]
pub fn stop_dialog_key_down() {
    with_manager(|m| m.stop_dialog_keydown());
}
