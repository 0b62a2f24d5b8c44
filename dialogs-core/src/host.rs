//! The seam between the dialog logic and the page it runs in.
//!
//! [`DialogHost`] lists every DOM primitive the manager needs. The browser
//! implementation lives in the `dialogs-wasm` crate; unit tests use an
//! in-memory recording host.

use std::fmt;

use crate::error::Result;
use crate::geometry::{Point, Rect, Size};
use crate::keys::KeyVariant;
use crate::style::StyleProp;

/// Process-wide singleton elements the manager drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chrome {
    /// Hosts whichever content is currently shown.
    Container,
    /// Ghost outline animated between origin and dialog.
    Border,
    /// Translucent modal backdrop.
    Backdrop,
    /// Body-level parking spot for content that is not shown.
    Parking,
}

/// Marker classes looked up inside dialog content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    AutoHide,
    Primary,
    Secondary,
    /// Any button element, no class required.
    Button,
}

/// What a click or touchend on a bound element does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    Hide,
    NavigateIndex,
}

/// Work the manager wants run later on the event loop. The host hands each
/// task back to [`crate::DialogManager::run_task`] once its delay elapses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeferredTask {
    ShowComplete { session: u64 },
    HideComplete { session: u64 },
    BorderGeometry {
        session: u64,
        rect: Rect,
        opacity: f64,
    },
}

pub trait DialogHost {
    type Element: Clone + PartialEq + fmt::Debug;

    fn chrome(&self, part: Chrome) -> Self::Element;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn create_element(&mut self, tag: &str, id: Option<&str>) -> Result<Self::Element>;

    fn children(&self, el: &Self::Element) -> Vec<Self::Element>;
    /// Appends `child` to `parent`, detaching it from any previous parent.
    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element);
    fn remove(&mut self, el: &Self::Element);
    fn clear_children(&mut self, el: &Self::Element);
    fn set_text(&mut self, el: &Self::Element, text: &str);

    /// Descendants of `root` carrying `marker`, in document order.
    fn find_marked(&self, root: &Self::Element, marker: Marker) -> Vec<Self::Element>;
    fn add_class(&mut self, el: &Self::Element, class: &str);
    fn remove_class(&mut self, el: &Self::Element, class: &str);
    fn set_style(&mut self, el: &Self::Element, prop: StyleProp, value: &str);

    fn focus(&mut self, el: &Self::Element);
    fn blur(&mut self, el: &Self::Element) -> Result<()>;

    fn page_offset(&self, el: &Self::Element) -> Point;
    /// Bounding box size for SVG elements, `None` for HTML elements.
    fn svg_bbox(&self, el: &Self::Element) -> Option<Size>;
    fn offset_size(&self, el: &Self::Element) -> Size;
    fn viewport(&self) -> Size;

    fn bind_action(&mut self, el: &Self::Element, action: ClickAction);
    /// Routes mouse-down on `header` to [`crate::DialogManager::begin_drag`].
    fn bind_header_drag(&mut self, header: &Self::Element);
    fn unbind_header_drag(&mut self, header: &Self::Element);
    /// Routes document mouse-move/mouse-up to the drag protocol.
    fn bind_drag_tracking(&mut self);
    fn unbind_drag_tracking(&mut self);
    fn bind_keydown(&mut self, variant: KeyVariant);
    fn unbind_keydown(&mut self);

    fn navigate_to_index(&mut self, url: &str);
    fn schedule(&mut self, delay_ms: u32, task: DeferredTask);

    /// Diagnostics for failures the manager tolerates.
    fn debug(&mut self, msg: &str);
}
