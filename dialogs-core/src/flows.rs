//! Pre-built dialogs: the storage alert and the offer to abort a level.

use crate::constants::*;
use crate::error::{DialogError, Result};
use crate::host::{ClickAction, DialogHost};
use crate::keys::KeyVariant;
use crate::manager::{DialogManager, OnClose};

/// What the page knows when it asks whether to offer an abort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AbortStatus {
    /// Stored "level complete" flag for the current level.
    pub level_completed: bool,
    /// A block drag is in progress on the workspace.
    pub drag_in_progress: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortDecision {
    /// The level was already solved; nothing to offer.
    Skipped,
    /// Busy right now, ask again after `abort_retry_ms`.
    Retry,
    Shown,
}

fn stop_keydown<H: DialogHost + 'static>() -> OnClose<H> {
    Box::new(|host: &mut H| host.unbind_keydown())
}

impl<H: DialogHost + 'static> DialogManager<H> {
    /// Shows `message` in the storage container, one paragraph per line.
    pub fn storage_alert(&mut self, origin: Option<H::Element>, message: &str) -> Result<()> {
        let container = self
            .host
            .element_by_id(STORAGE_CONTAINER_ID)
            .ok_or(DialogError::InvalidArgument("storage container is missing"))?;
        self.host.clear_children(&container);
        for line in message.split('\n') {
            let p = self.host.create_element("p", None)?;
            self.host.set_text(&p, line);
            self.host.append_child(&container, &p);
        }

        let content = self.host.element_by_id(STORAGE_DIALOG_ID);
        let style = self.config.storage_alert_style.clone();
        self.show_dialog(content, origin, true, true, &style, Some(stop_keydown()))?;
        self.start_dialog_keydown(KeyVariant::Dismiss);
        Ok(())
    }

    /// Offers to leave an unfinished level.
    pub fn abort_offer(&mut self, status: AbortStatus) -> Result<AbortDecision> {
        if status.level_completed {
            return Ok(AbortDecision::Skipped);
        }
        if status.drag_in_progress || self.state.visible {
            return Ok(AbortDecision::Retry);
        }
        let content = self.host.element_by_id(ABORT_DIALOG_ID);
        if let Some(cancel) = self.host.element_by_id(ABORT_CANCEL_ID) {
            self.host.bind_action(&cancel, ClickAction::Hide);
        }
        if let Some(ok) = self.host.element_by_id(ABORT_OK_ID) {
            self.host.bind_action(&ok, ClickAction::NavigateIndex);
        }
        let style = self.config.abort_style.clone();
        self.show_dialog(content, None, false, true, &style, Some(stop_keydown()))?;
        self.start_dialog_keydown(KeyVariant::Abort);
        Ok(AbortDecision::Shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialogConfig;
    use crate::host::Chrome;
    use crate::style::StyleProp;
    use crate::testing::FakeHost;

    fn manager_with_dialogs() -> DialogManager<FakeHost> {
        let mut host = FakeHost::new();
        let storage = host.parked_content(STORAGE_DIALOG_ID);
        host.child_with_id(storage, "div", STORAGE_CONTAINER_ID);
        host.child_with_id(storage, "button", "storageOk");
        let abort = host.parked_content(ABORT_DIALOG_ID);
        host.child_with_id(abort, "button", ABORT_CANCEL_ID);
        host.child_with_id(abort, "button", ABORT_OK_ID);
        DialogManager::new(host, DialogConfig::default())
    }

    #[test]
    fn storage_alert_splits_lines() {
        let mut m = manager_with_dialogs();
        m.storage_alert(None, "Saved.\nLink: abc").unwrap();
        assert!(m.is_visible());
        let container = m.host().element_by_id(STORAGE_CONTAINER_ID).unwrap();
        let paragraphs = m.host().children(&container);
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(m.host().tag_of(paragraphs[0]), "p");
        assert_eq!(m.host().text_of(paragraphs[0]), "Saved.");
        assert_eq!(m.host().text_of(paragraphs[1]), "Link: abc");

        let dialog = m.host().chrome(Chrome::Container);
        assert_eq!(m.host().style(dialog, StyleProp::Width), Some("50%"));
        assert_eq!(m.host().style(dialog, StyleProp::Top), Some("5em"));
        assert_eq!(m.host().keydown, Some(KeyVariant::Dismiss));
    }

    #[test]
    fn storage_alert_replaces_previous_message() {
        let mut m = manager_with_dialogs();
        m.storage_alert(None, "one\ntwo\nthree").unwrap();
        m.storage_alert(None, "only").unwrap();
        let container = m.host().element_by_id(STORAGE_CONTAINER_ID).unwrap();
        assert_eq!(m.host().children(&container).len(), 1);
    }

    #[test]
    fn storage_alert_keydown_unbound_on_close() {
        let mut m = manager_with_dialogs();
        m.storage_alert(None, "hi").unwrap();
        let out = m.handle_keydown("Enter", KeyVariant::Dismiss);
        assert!(out.consumed);
        assert_eq!(m.host().keydown, None);
    }

    #[test]
    fn abort_skipped_when_level_complete() {
        let mut m = manager_with_dialogs();
        let status = AbortStatus {
            level_completed: true,
            drag_in_progress: false,
        };
        assert_eq!(m.abort_offer(status).unwrap(), AbortDecision::Skipped);
        assert!(!m.is_visible());
        assert!(m.host().calls.is_empty());
    }

    #[test]
    fn abort_retries_while_busy() {
        let mut m = manager_with_dialogs();
        let dragging = AbortStatus {
            level_completed: false,
            drag_in_progress: true,
        };
        assert_eq!(m.abort_offer(dragging).unwrap(), AbortDecision::Retry);
        assert!(!m.is_visible());

        m.storage_alert(None, "busy").unwrap();
        assert_eq!(
            m.abort_offer(AbortStatus::default()).unwrap(),
            AbortDecision::Retry
        );
    }

    #[test]
    fn abort_shows_modal_with_actions() {
        let mut m = manager_with_dialogs();
        assert_eq!(
            m.abort_offer(AbortStatus::default()).unwrap(),
            AbortDecision::Shown
        );
        assert!(m.is_visible());
        let cancel = m.host().element_by_id(ABORT_CANCEL_ID).unwrap();
        let ok = m.host().element_by_id(ABORT_OK_ID).unwrap();
        assert_eq!(m.host().action_of(cancel), Some(ClickAction::Hide));
        assert_eq!(m.host().action_of(ok), Some(ClickAction::NavigateIndex));
        assert_eq!(m.host().keydown, Some(KeyVariant::Abort));
        let dialog = m.host().chrome(Chrome::Container);
        assert_eq!(m.host().style(dialog, StyleProp::Width), Some("40%"));
        assert!(m.host_mut().take_scheduled().is_empty());

        let out = m.handle_keydown("Enter", KeyVariant::Abort);
        assert!(out.navigate);
        assert_eq!(m.host().navigated, vec!["./".to_string()]);
        assert_eq!(m.host().keydown, None);
    }
}
