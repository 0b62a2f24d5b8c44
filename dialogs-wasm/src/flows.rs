use dialogs_core::{AbortDecision, AbortStatus};
use gloo::timers::future::TimeoutFuture;
use web_sys::Window;

use crate::state::with_manager;
use crate::utils::{call_predicate, truthy, warn};

/// Stored "level complete" flag, as saved by the game under
/// `<storage_name><level>` in `localStorage`.
pub fn level_completed(window: &Window, storage_name: &str, level: u32) -> bool {
    let Ok(Some(storage)) = window.local_storage() else {
        return false;
    };
    truthy(
        storage
            .get_item(&format!("{storage_name}{level}"))
            .ok()
            .flatten(),
    )
}

/// Keep offering the abort dialog until it is shown or no longer relevant.
/// Blocked offers are retried every `abort_retry_ms`.
pub async fn abort_offer_loop(
    window: Window,
    storage_name: String,
    level: u32,
    is_dragging: Option<js_sys::Function>,
) {
    loop {
        let status = AbortStatus {
            level_completed: level_completed(&window, &storage_name, level),
            drag_in_progress: call_predicate(is_dragging.as_ref()),
        };
        let Some((decision, retry_ms)) =
            with_manager(|m| (m.abort_offer(status), m.config().abort_retry_ms))
        else {
            return;
        };
        match decision {
            Ok(AbortDecision::Retry) => TimeoutFuture::new(retry_ms).await,
            Ok(AbortDecision::Skipped | AbortDecision::Shown) => return,
            Err(e) => {
                warn(&format!("Abort offer failed: {e}"));
                return;
            }
        }
    }
}
