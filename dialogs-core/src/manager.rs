//! Dialog lifecycle: show, hide, border animation and header drag.

use crate::config::DialogConfig;
use crate::constants::*;
use crate::error::{DialogError, Result};
use crate::geometry::{Point, Rect, bounding_box, clamp_to_viewport};
use crate::host::{Chrome, ClickAction, DeferredTask, DialogHost, Marker};
use crate::keys::{DialogKey, KeyOutcome, KeyVariant};
use crate::style::{DialogStyle, StyleProp, px};

/// Runs once when the dialog it was registered with hides.
pub type OnClose<H> = Box<dyn FnOnce(&mut H)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Main,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl MouseButton {
    /// Maps `MouseEvent.button`.
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => MouseButton::Main,
            1 => MouseButton::Auxiliary,
            2 => MouseButton::Secondary,
            n => MouseButton::Other(n),
        }
    }
}

/// Per-session state of the single dialog slot.
pub struct DialogState<H: DialogHost> {
    pub(crate) visible: bool,
    pub(crate) origin: Option<H::Element>,
    pub(crate) on_close: Option<OnClose<H>>,
    pub(crate) header: Option<H::Element>,
    pub(crate) dragging: bool,
    pub(crate) drag_origin: Point,
    pub(crate) session: u64,
}

impl<H: DialogHost> Default for DialogState<H> {
    fn default() -> Self {
        DialogState {
            visible: false,
            origin: None,
            on_close: None,
            header: None,
            dragging: false,
            drag_origin: Point::default(),
            session: 0,
        }
    }
}

/// Owns the page's dialog chrome. At most one dialog is visible at a time.
pub struct DialogManager<H: DialogHost> {
    pub(crate) host: H,
    pub(crate) config: DialogConfig,
    pub(crate) state: DialogState<H>,
}

impl<H: DialogHost> DialogManager<H> {
    pub fn new(host: H, config: DialogConfig) -> Self {
        DialogManager {
            host,
            config,
            state: DialogState::default(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// Bumped by every show and hide; deferred tasks from older sessions
    /// are dropped.
    pub fn session(&self) -> u64 {
        self.state.session
    }

    /// Shows `content` in the dialog container, replacing any dialog that is
    /// already up (that one is hidden without animation).
    pub fn show_dialog(
        &mut self,
        content: Option<H::Element>,
        origin: Option<H::Element>,
        animate: bool,
        modal: bool,
        style: &DialogStyle,
        on_close: Option<OnClose<H>>,
    ) -> Result<()> {
        let content = content.ok_or(DialogError::InvalidArgument("dialog content is required"))?;
        if self.state.visible {
            self.hide_dialog(false);
        }
        for el in self.host.find_marked(&content, Marker::AutoHide) {
            self.host.bind_action(&el, ClickAction::Hide);
            self.host.remove_class(&el, AUTO_HIDE_CLASS);
        }

        self.state.visible = true;
        self.state.session += 1;
        self.state.origin = origin.clone();
        self.state.on_close = on_close;

        let dialog = self.host.chrome(Chrome::Container);
        for (prop, value) in style.entries() {
            self.host.set_style(&dialog, prop, value);
        }

        if modal {
            let backdrop = self.host.chrome(Chrome::Backdrop);
            self.host.set_style(&backdrop, StyleProp::Visibility, "visible");
            self.host
                .set_style(&backdrop, StyleProp::Opacity, &self.config.backdrop_opacity.to_string());
            self.host
                .set_style(&backdrop, StyleProp::ZIndex, &Z_BACKDROP.to_string());
            let header = self.host.create_element("div", Some(HEADER_ID))?;
            self.host.append_child(&dialog, &header);
            self.host.bind_header_drag(&header);
            self.state.header = Some(header);
        }

        self.host.append_child(&dialog, &content);
        self.host.remove_class(&content, HIDDEN_CONTENT_CLASS);

        if let Some(o) = &origin
            && let Err(e) = self.host.blur(o)
        {
            self.host.debug(&format!("origin not blurred: {e}"));
        }

        match origin {
            Some(o) if animate => {
                self.match_border(&o, false, self.config.border_origin_opacity);
                self.match_border(&dialog, true, self.config.border_dialog_opacity);
                let session = self.state.session;
                self.host
                    .schedule(self.config.animation_ms, DeferredTask::ShowComplete { session });
            }
            _ => self.finish_show(),
        }
        Ok(())
    }

    /// Hides the current dialog. Does nothing if no dialog is visible.
    pub fn hide_dialog(&mut self, animate: bool) {
        if !self.state.visible {
            return;
        }
        self.end_drag();
        if let Some(header) = &self.state.header {
            self.host.unbind_header_drag(header);
        }
        self.state.visible = false;
        // retires the show's pending border step and completion
        self.state.session += 1;
        if let Some(cb) = self.state.on_close.take() {
            cb(&mut self.host);
        }

        let dialog = self.host.chrome(Chrome::Container);
        let backdrop = self.host.chrome(Chrome::Backdrop);
        self.host.set_style(&backdrop, StyleProp::Opacity, "0");

        match self.state.origin.clone() {
            Some(origin) if animate => {
                self.match_border(&dialog, false, self.config.border_closing_opacity);
                self.match_border(&origin, true, self.config.border_origin_opacity);
                let session = self.state.session;
                self.host
                    .schedule(self.config.animation_ms, DeferredTask::HideComplete { session });
            }
            _ => self.finish_hide(),
        }

        self.host.set_style(&dialog, StyleProp::Visibility, "hidden");
        self.host
            .set_style(&dialog, StyleProp::ZIndex, &Z_HIDDEN.to_string());

        if let Some(header) = self.state.header.take() {
            self.host.remove(&header);
        }

        let parking = self.host.chrome(Chrome::Parking);
        for child in self.host.children(&dialog) {
            self.host.append_child(&parking, &child);
            self.host.add_class(&child, HIDDEN_CONTENT_CLASS);
        }
    }

    /// Entry point for tasks the host scheduled on our behalf.
    pub fn run_task(&mut self, task: DeferredTask) {
        match task {
            DeferredTask::ShowComplete { session } => {
                if session == self.state.session && self.state.visible {
                    self.finish_show();
                }
            }
            DeferredTask::HideComplete { session } => {
                if session == self.state.session && !self.state.visible {
                    self.finish_hide();
                }
            }
            DeferredTask::BorderGeometry {
                session,
                rect,
                opacity,
            } => {
                if session == self.state.session {
                    self.apply_border(rect, opacity);
                }
            }
        }
    }

    fn finish_show(&mut self) {
        let dialog = self.host.chrome(Chrome::Container);
        self.host.set_style(&dialog, StyleProp::Visibility, "visible");
        self.host
            .set_style(&dialog, StyleProp::ZIndex, &Z_DIALOG.to_string());
        let border = self.host.chrome(Chrome::Border);
        self.host.set_style(&border, StyleProp::Visibility, "hidden");

        let target = [Marker::Primary, Marker::Secondary, Marker::Button]
            .into_iter()
            .find_map(|m| self.host.find_marked(&dialog, m).into_iter().next());
        if let Some(el) = target {
            self.host.focus(&el);
        }
    }

    fn finish_hide(&mut self) {
        let backdrop = self.host.chrome(Chrome::Backdrop);
        self.host
            .set_style(&backdrop, StyleProp::ZIndex, &Z_HIDDEN.to_string());
        self.host.set_style(&backdrop, StyleProp::Visibility, "hidden");
        let border = self.host.chrome(Chrome::Border);
        self.host.set_style(&border, StyleProp::Visibility, "hidden");
    }

    /// Moves the ghost border over `target`. With `animate` the change lands
    /// one tick later so the CSS transition can interpolate it.
    pub fn match_border(&mut self, target: &H::Element, animate: bool, opacity: f64) {
        let rect = bounding_box(&self.host, target);
        let border = self.host.chrome(Chrome::Border);
        if animate {
            self.host.add_class(&border, BORDER_ANIMATE_CLASS);
            let session = self.state.session;
            self.host.schedule(
                self.config.border_tick_ms,
                DeferredTask::BorderGeometry {
                    session,
                    rect,
                    opacity,
                },
            );
        } else {
            self.host.remove_class(&border, BORDER_ANIMATE_CLASS);
            self.apply_border(rect, opacity);
        }
    }

    fn apply_border(&mut self, rect: Rect, opacity: f64) {
        let border = self.host.chrome(Chrome::Border);
        self.host.set_style(&border, StyleProp::Visibility, "visible");
        self.host.set_style(&border, StyleProp::Left, &px(rect.x));
        self.host.set_style(&border, StyleProp::Top, &px(rect.y));
        self.host.set_style(&border, StyleProp::Width, &px(rect.width));
        self.host.set_style(&border, StyleProp::Height, &px(rect.height));
        self.host
            .set_style(&border, StyleProp::Opacity, &opacity.to_string());
    }

    /// Header mouse-down. Returns true when a drag started and the event
    /// must not propagate further.
    pub fn begin_drag(&mut self, button: MouseButton, pointer: Point) -> bool {
        self.end_drag();
        if button == MouseButton::Secondary {
            return false;
        }
        let dialog = self.host.chrome(Chrome::Container);
        self.state.drag_origin = self.host.page_offset(&dialog) - pointer;
        self.host.bind_drag_tracking();
        self.state.dragging = true;
        true
    }

    pub fn drag_to(&mut self, pointer: Point) {
        if !self.state.dragging {
            return;
        }
        let dialog = self.host.chrome(Chrome::Container);
        let pos = clamp_to_viewport(
            self.state.drag_origin + pointer,
            self.host.offset_size(&dialog),
            self.host.viewport(),
        );
        self.host.set_style(&dialog, StyleProp::Left, &px(pos.x));
        self.host.set_style(&dialog, StyleProp::Top, &px(pos.y));
    }

    /// Drops the document-level drag listeners if any are bound.
    pub fn end_drag(&mut self) {
        if self.state.dragging {
            self.host.unbind_drag_tracking();
            self.state.dragging = false;
        }
    }

    /// Binds the global keydown handler, replacing any bound one.
    pub fn start_dialog_keydown(&mut self, variant: KeyVariant) {
        self.host.unbind_keydown();
        self.host.bind_keydown(variant);
    }

    pub fn stop_dialog_keydown(&mut self) {
        self.host.unbind_keydown();
    }

    /// Enter, Escape or Space close a visible dialog. The abort variant also
    /// navigates to the index page on Enter and Space.
    pub fn handle_keydown(&mut self, key: &str, variant: KeyVariant) -> KeyOutcome {
        let Some(key) = DialogKey::from_key(key) else {
            return KeyOutcome::IGNORED;
        };
        if !self.state.visible {
            return KeyOutcome::IGNORED;
        }
        self.hide_dialog(true);
        let navigate = variant == KeyVariant::Abort && key != DialogKey::Escape;
        if navigate {
            let url = self.config.index_url.clone();
            self.host.navigate_to_index(&url);
        }
        KeyOutcome {
            consumed: true,
            navigate,
        }
    }

    /// Runs a bound click action.
    pub fn click_action(&mut self, action: ClickAction) {
        match action {
            ClickAction::Hide => self.hide_dialog(true),
            ClickAction::NavigateIndex => {
                let url = self.config.index_url.clone();
                self.host.navigate_to_index(&url);
            }
        }
    }
}
