use std::cell::RefCell;

use dialogs_core::DialogManager;
use wasm_bindgen::JsValue;

use crate::host::WebHost;
use crate::utils::warn;

thread_local! {
    /// The page's single dialog manager.
    pub static MANAGER: RefCell<Option<DialogManager<WebHost>>> = const { RefCell::new(None) };
    /// JS `onClose` callbacks waiting for the manager borrow to end.
    static PENDING_CLOSE: RefCell<Vec<js_sys::Function>> = const { RefCell::new(Vec::new()) };
}

pub fn install(manager: DialogManager<WebHost>) {
    MANAGER.with(|slot| slot.replace(Some(manager)));
    run_pending_close();
}

/// Queue a JS close callback; it runs when the current [`with_manager`]
/// call returns.
pub fn defer_close(f: js_sys::Function) {
    PENDING_CLOSE.with(|q| q.borrow_mut().push(f));
}

fn run_pending_close() {
    loop {
        let next = PENDING_CLOSE.with(|q| {
            let mut q = q.borrow_mut();
            if q.is_empty() { None } else { Some(q.remove(0)) }
        });
        let Some(f) = next else {
            return;
        };
        if let Err(e) = f.call0(&JsValue::NULL) {
            warn(&format!("onClose threw: {:?}", e));
        }
    }
}

/// Run `f` against the manager, then any close callbacks it queued.
/// Returns `None` when the bindings were never started or when called
/// while the manager is already borrowed.
pub fn with_manager<R>(f: impl FnOnce(&mut DialogManager<WebHost>) -> R) -> Option<R> {
    let out = MANAGER.with(|slot| {
        let Ok(mut slot) = slot.try_borrow_mut() else {
            warn("dialog manager is busy; nested call ignored");
            return None;
        };
        match slot.as_mut() {
            Some(m) => Some(f(m)),
            None => {
                warn("dialog manager not started");
                None
            }
        }
    });
    run_pending_close();
    out
}
