use dialogs_core::constants::{
    AUTO_HIDE_CLASS, BACKDROP_ID, BORDER_ID, DIALOG_ID, PRIMARY_CLASS, SECONDARY_CLASS,
};
use dialogs_core::{
    Chrome, ClickAction, DeferredTask, DialogError, DialogHost, KeyVariant, Marker, MouseButton,
    Point, Size, StyleProp,
};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, HtmlElement, KeyboardEvent, MouseEvent,
    SvgElement, SvgGraphicsElement, Window,
};

use crate::state::with_manager;
use crate::utils::{debug, index_href, log, warn};

/// [`DialogHost`] backed by the live document.
pub struct WebHost {
    window: Window,
    document: Document,
    dialog: Element,
    border: Element,
    backdrop: Element,
    body: Element,
    header_listener: Option<EventListener>,
    drag_listeners: Option<(EventListener, EventListener)>,
    keydown_listener: Option<EventListener>,
    action_listeners: Vec<(Element, [EventListener; 2])>,
}

fn js_err(e: JsValue) -> DialogError {
    DialogError::Host(format!("{:?}", e))
}

fn style_of(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(h) = el.dyn_ref::<HtmlElement>() {
        Some(h.style())
    } else {
        el.dyn_ref::<SvgElement>().map(|s| s.style())
    }
}

fn mouse_point(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

fn capture() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Capture,
        passive: false,
    }
}

impl WebHost {
    /// Looks up the dialog chrome (`#dialog`, `#dialogBorder`,
    /// `#dialogShadow`) in `document`.
    pub fn new(window: Window, document: Document) -> Result<Self, JsValue> {
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))
        };
        let dialog = find(DIALOG_ID)?;
        let border = find(BORDER_ID)?;
        let backdrop = find(BACKDROP_ID)?;
        let body: Element = document.body().ok_or("no body")?.into();
        Ok(WebHost {
            window,
            document,
            dialog,
            border,
            backdrop,
            body,
            header_listener: None,
            drag_listeners: None,
            keydown_listener: None,
            action_listeners: Vec::new(),
        })
    }
}

impl DialogHost for WebHost {
    type Element = Element;

    fn chrome(&self, part: Chrome) -> Element {
        match part {
            Chrome::Container => self.dialog.clone(),
            Chrome::Border => self.border.clone(),
            Chrome::Backdrop => self.backdrop.clone(),
            Chrome::Parking => self.body.clone(),
        }
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create_element(&mut self, tag: &str, id: Option<&str>) -> dialogs_core::Result<Element> {
        let el = self.document.create_element(tag).map_err(js_err)?;
        if let Some(id) = id {
            el.set_id(id);
        }
        Ok(el)
    }

    fn children(&self, el: &Element) -> Vec<Element> {
        let list = el.children();
        (0..list.length()).filter_map(|i| list.item(i)).collect()
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        if let Err(e) = parent.append_child(child) {
            warn(&format!("append_child failed: {:?}", e));
        }
    }

    fn remove(&mut self, el: &Element) {
        el.remove();
    }

    fn clear_children(&mut self, el: &Element) {
        el.set_text_content(None);
    }

    fn set_text(&mut self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn find_marked(&self, root: &Element, marker: Marker) -> Vec<Element> {
        let selector = match marker {
            Marker::AutoHide => format!(".{AUTO_HIDE_CLASS}"),
            Marker::Primary => format!(".{PRIMARY_CLASS}"),
            Marker::Secondary => format!(".{SECONDARY_CLASS}"),
            Marker::Button => "button".to_string(),
        };
        let Ok(list) = root.query_selector_all(&selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| n.dyn_into::<Element>().ok())
            .collect()
    }

    fn add_class(&mut self, el: &Element, class: &str) {
        let _ = el.class_list().add_1(class);
    }

    fn remove_class(&mut self, el: &Element, class: &str) {
        let _ = el.class_list().remove_1(class);
    }

    fn set_style(&mut self, el: &Element, prop: StyleProp, value: &str) {
        if let Some(style) = style_of(el) {
            let _ = style.set_property(prop.css_name(), value);
        }
    }

    fn focus(&mut self, el: &Element) {
        if let Some(h) = el.dyn_ref::<HtmlElement>() {
            let _ = h.focus();
        }
    }

    fn blur(&mut self, el: &Element) -> dialogs_core::Result<()> {
        if let Some(h) = el.dyn_ref::<HtmlElement>() {
            return h.blur().map_err(js_err);
        }
        match el.dyn_ref::<SvgElement>() {
            Some(s) => s.blur().map_err(js_err),
            None => Err(DialogError::Host("origin cannot take focus".to_string())),
        }
    }

    fn page_offset(&self, el: &Element) -> Point {
        let rect = el.get_bounding_client_rect();
        let sx = self.window.scroll_x().unwrap_or(0.0);
        let sy = self.window.scroll_y().unwrap_or(0.0);
        Point::new(rect.left() + sx, rect.top() + sy)
    }

    fn svg_bbox(&self, el: &Element) -> Option<Size> {
        let g = el.dyn_ref::<SvgGraphicsElement>()?;
        let b = g.get_b_box().ok()?;
        Some(Size::new(b.width() as f64, b.height() as f64))
    }

    fn offset_size(&self, el: &Element) -> Size {
        match el.dyn_ref::<HtmlElement>() {
            Some(h) => Size::new(h.offset_width() as f64, h.offset_height() as f64),
            None => {
                let r = el.get_bounding_client_rect();
                Size::new(r.width(), r.height())
            }
        }
    }

    fn viewport(&self) -> Size {
        match self.document.document_element() {
            Some(root) => Size::new(root.client_width() as f64, root.client_height() as f64),
            None => Size::new(
                self.window
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0),
                self.window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0),
            ),
        }
    }

    fn bind_action(&mut self, el: &Element, action: ClickAction) {
        // rebinding replaces the old handlers
        self.action_listeners.retain(|(bound, _)| bound != el);
        let on = |event: &'static str| {
            EventListener::new(el, event, move |_e: &Event| {
                with_manager(|m| m.click_action(action));
            })
        };
        let listeners = [on("click"), on("touchend")];
        self.action_listeners.push((el.clone(), listeners));
    }

    fn bind_header_drag(&mut self, header: &Element) {
        let listener = EventListener::new(header, "mousedown", |e: &Event| {
            let Some(e) = e.dyn_ref::<MouseEvent>() else {
                return;
            };
            let button = MouseButton::from_code(e.button());
            let started = with_manager(|m| m.begin_drag(button, mouse_point(e))).unwrap_or(false);
            if started {
                e.stop_propagation();
            }
        });
        self.header_listener = Some(listener);
    }

    fn unbind_header_drag(&mut self, _header: &Element) {
        self.header_listener.take();
    }

    fn bind_drag_tracking(&mut self) {
        let moved = EventListener::new(&self.document, "mousemove", |e: &Event| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                with_manager(|m| m.drag_to(mouse_point(e)));
            }
        });
        let released = EventListener::new(&self.document, "mouseup", |_e: &Event| {
            with_manager(|m| m.end_drag());
        });
        self.drag_listeners = Some((moved, released));
    }

    fn unbind_drag_tracking(&mut self) {
        self.drag_listeners.take();
    }

    fn bind_keydown(&mut self, variant: KeyVariant) {
        let listener =
            EventListener::new_with_options(&self.body, "keydown", capture(), move |e: &Event| {
                let Some(e) = e.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                let key = e.key();
                if let Some(out) = with_manager(|m| m.handle_keydown(&key, variant))
                    && out.consumed
                {
                    e.stop_propagation();
                    e.prevent_default();
                }
            });
        self.keydown_listener = Some(listener);
    }

    fn unbind_keydown(&mut self) {
        self.keydown_listener.take();
    }

    fn navigate_to_index(&mut self, url: &str) {
        let location = self.window.location();
        let search = location.search().unwrap_or_default();
        let href = index_href(url, &search);
        log(&format!("Leaving for {href}"));
        if let Err(e) = location.set_href(&href) {
            warn(&format!("Navigation failed: {:?}", e));
        }
    }

    fn schedule(&mut self, delay_ms: u32, task: DeferredTask) {
        Timeout::new(delay_ms, move || {
            with_manager(|m| m.run_task(task));
        })
        .forget();
    }

    fn debug(&mut self, msg: &str) {
        debug(msg);
    }
}
