//! In-memory [`DialogHost`] that records every mutation.

use std::collections::{HashMap, HashSet};

use crate::error::{DialogError, Result};
use crate::geometry::{Point, Rect, Size};
use crate::host::{Chrome, ClickAction, DeferredTask, DialogHost, Marker};
use crate::keys::KeyVariant;
use crate::style::StyleProp;

pub type NodeId = usize;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Create(NodeId),
    Append(NodeId, NodeId),
    Remove(NodeId),
    Clear(NodeId),
    Text(NodeId, String),
    AddClass(NodeId, String),
    RemoveClass(NodeId, String),
    Style(NodeId, StyleProp, String),
    Focus(NodeId),
    Blur(NodeId),
    BindAction(NodeId, ClickAction),
    BindHeader(NodeId),
    UnbindHeader(NodeId),
    BindDragTracking,
    UnbindDragTracking,
    BindKeydown(KeyVariant),
    UnbindKeydown,
    Navigate(String),
    Schedule(u32),
    Note(&'static str),
}

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    styles: HashMap<StyleProp, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    text: String,
    rect: Rect,
    svg: bool,
}

pub struct FakeHost {
    nodes: Vec<Node>,
    pub calls: Vec<Call>,
    scheduled: Vec<(u32, DeferredTask)>,
    pub focused: Option<NodeId>,
    pub viewport: Size,
    pub drag_tracking: bool,
    headers: HashSet<NodeId>,
    actions: HashMap<NodeId, ClickAction>,
    pub keydown: Option<KeyVariant>,
    pub navigated: Vec<String>,
    pub debug_lines: Vec<String>,
}

const BODY: NodeId = 0;
const CONTAINER: NodeId = 1;
const BORDER: NodeId = 2;
const BACKDROP: NodeId = 3;
const PARKING: NodeId = 4;

impl FakeHost {
    pub fn new() -> Self {
        let mut host = FakeHost {
            nodes: Vec::new(),
            calls: Vec::new(),
            scheduled: Vec::new(),
            focused: None,
            viewport: Size::new(1024.0, 768.0),
            drag_tracking: false,
            headers: HashSet::new(),
            actions: HashMap::new(),
            keydown: None,
            navigated: Vec::new(),
            debug_lines: Vec::new(),
        };
        host.node("body", None, None);
        host.node("div", Some("dialog"), Some(BODY));
        host.node("div", Some("dialogBorder"), Some(BODY));
        host.node("div", Some("dialogShadow"), Some(BODY));
        host.node("div", None, Some(BODY));
        host
    }

    fn node(&mut self, tag: &str, id: Option<&str>, parent: Option<NodeId>) -> NodeId {
        let n = self.nodes.len();
        self.nodes.push(Node {
            tag: tag.to_string(),
            id: id.map(str::to_string),
            parent,
            ..Default::default()
        });
        if let Some(p) = parent {
            self.nodes[p].children.push(n);
        }
        n
    }

    pub fn note(&mut self, label: &'static str) {
        self.calls.push(Call::Note(label));
    }

    /// Content block parked at body level, as the page ships it.
    pub fn parked_content(&mut self, id: &str) -> NodeId {
        let n = self.node("div", Some(id), Some(PARKING));
        self.nodes[n]
            .classes
            .push(crate::constants::HIDDEN_CONTENT_CLASS.to_string());
        n
    }

    pub fn child_with_class(&mut self, parent: NodeId, class: &str) -> NodeId {
        let n = self.node("div", None, Some(parent));
        self.nodes[n].classes.push(class.to_string());
        n
    }

    pub fn child_button(&mut self, parent: NodeId) -> NodeId {
        self.node("button", None, Some(parent))
    }

    pub fn child_with_id(&mut self, parent: NodeId, tag: &str, id: &str) -> NodeId {
        self.node(tag, Some(id), Some(parent))
    }

    /// Origin that is no longer in the document; blurring it fails.
    pub fn detached_origin(&mut self) -> NodeId {
        self.node("button", None, None)
    }

    pub fn origin_at(&mut self, rect: Rect) -> NodeId {
        let n = self.node("button", None, Some(BODY));
        self.nodes[n].rect = rect;
        n
    }

    pub fn svg_origin(&mut self, at: Point, size: Size) -> NodeId {
        let n = self.node("g", None, Some(BODY));
        self.nodes[n].rect = Rect::from_parts(at, size);
        self.nodes[n].svg = true;
        n
    }

    pub fn place(&mut self, n: NodeId, rect: Rect) {
        self.nodes[n].rect = rect;
    }

    pub fn style(&self, n: NodeId, prop: StyleProp) -> Option<&str> {
        self.nodes[n].styles.get(&prop).map(String::as_str)
    }

    pub fn has_class(&self, n: NodeId, class: &str) -> bool {
        self.nodes[n].classes.iter().any(|c| c == class)
    }

    pub fn parent_of(&self, n: NodeId) -> Option<NodeId> {
        self.nodes[n].parent
    }

    pub fn text_of(&self, n: NodeId) -> &str {
        &self.nodes[n].text
    }

    pub fn tag_of(&self, n: NodeId) -> &str {
        &self.nodes[n].tag
    }

    pub fn position(&self, call: &Call) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }

    pub fn header_bound(&self, n: NodeId) -> bool {
        self.headers.contains(&n)
    }

    pub fn action_of(&self, n: NodeId) -> Option<ClickAction> {
        self.actions.get(&n).copied()
    }

    pub fn scheduled_delays(&self) -> Vec<u32> {
        self.scheduled.iter().map(|(d, _)| *d).collect()
    }

    pub fn take_scheduled(&mut self) -> Vec<DeferredTask> {
        self.scheduled.drain(..).map(|(_, t)| t).collect()
    }

    fn detach(&mut self, n: NodeId) {
        if let Some(p) = self.nodes[n].parent.take() {
            self.nodes[p].children.retain(|c| *c != n);
        }
    }

    fn descendants(&self, root: NodeId, out: &mut Vec<NodeId>) {
        for &c in &self.nodes[root].children {
            out.push(c);
            self.descendants(c, out);
        }
    }

    fn attached(&self, mut n: NodeId) -> bool {
        loop {
            if n == BODY {
                return true;
            }
            match self.nodes[n].parent {
                Some(p) => n = p,
                None => return false,
            }
        }
    }
}

impl DialogHost for FakeHost {
    type Element = NodeId;

    fn chrome(&self, part: Chrome) -> NodeId {
        match part {
            Chrome::Container => CONTAINER,
            Chrome::Border => BORDER,
            Chrome::Backdrop => BACKDROP,
            Chrome::Parking => PARKING,
        }
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        (0..self.nodes.len()).find(|&n| self.nodes[n].id.as_deref() == Some(id) && self.attached(n))
    }

    fn create_element(&mut self, tag: &str, id: Option<&str>) -> Result<NodeId> {
        let n = self.node(tag, id, None);
        self.calls.push(Call::Create(n));
        Ok(n)
    }

    fn children(&self, el: &NodeId) -> Vec<NodeId> {
        self.nodes[*el].children.clone()
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.detach(*child);
        self.nodes[*child].parent = Some(*parent);
        self.nodes[*parent].children.push(*child);
        self.calls.push(Call::Append(*parent, *child));
    }

    fn remove(&mut self, el: &NodeId) {
        self.detach(*el);
        self.calls.push(Call::Remove(*el));
    }

    fn clear_children(&mut self, el: &NodeId) {
        for c in self.nodes[*el].children.clone() {
            self.detach(c);
        }
        self.calls.push(Call::Clear(*el));
    }

    fn set_text(&mut self, el: &NodeId, text: &str) {
        self.nodes[*el].text = text.to_string();
        self.calls.push(Call::Text(*el, text.to_string()));
    }

    fn find_marked(&self, root: &NodeId, marker: Marker) -> Vec<NodeId> {
        let mut all = Vec::new();
        self.descendants(*root, &mut all);
        all.into_iter()
            .filter(|&n| match marker {
                Marker::AutoHide => self.has_class(n, crate::constants::AUTO_HIDE_CLASS),
                Marker::Primary => self.has_class(n, crate::constants::PRIMARY_CLASS),
                Marker::Secondary => self.has_class(n, crate::constants::SECONDARY_CLASS),
                Marker::Button => self.nodes[n].tag == "button",
            })
            .collect()
    }

    fn add_class(&mut self, el: &NodeId, class: &str) {
        if !self.has_class(*el, class) {
            self.nodes[*el].classes.push(class.to_string());
        }
        self.calls.push(Call::AddClass(*el, class.to_string()));
    }

    fn remove_class(&mut self, el: &NodeId, class: &str) {
        self.nodes[*el].classes.retain(|c| c != class);
        self.calls.push(Call::RemoveClass(*el, class.to_string()));
    }

    fn set_style(&mut self, el: &NodeId, prop: StyleProp, value: &str) {
        self.nodes[*el].styles.insert(prop, value.to_string());
        self.calls.push(Call::Style(*el, prop, value.to_string()));
    }

    fn focus(&mut self, el: &NodeId) {
        self.focused = Some(*el);
        self.calls.push(Call::Focus(*el));
    }

    fn blur(&mut self, el: &NodeId) -> Result<()> {
        self.calls.push(Call::Blur(*el));
        if !self.attached(*el) {
            return Err(DialogError::Host("element is detached".to_string()));
        }
        if self.focused == Some(*el) {
            self.focused = None;
        }
        Ok(())
    }

    fn page_offset(&self, el: &NodeId) -> Point {
        let r = self.nodes[*el].rect;
        Point::new(r.x, r.y)
    }

    fn svg_bbox(&self, el: &NodeId) -> Option<Size> {
        let n = &self.nodes[*el];
        n.svg.then(|| Size::new(n.rect.width, n.rect.height))
    }

    fn offset_size(&self, el: &NodeId) -> Size {
        let r = self.nodes[*el].rect;
        Size::new(r.width, r.height)
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn bind_action(&mut self, el: &NodeId, action: ClickAction) {
        self.actions.insert(*el, action);
        self.calls.push(Call::BindAction(*el, action));
    }

    fn bind_header_drag(&mut self, header: &NodeId) {
        self.headers.insert(*header);
        self.calls.push(Call::BindHeader(*header));
    }

    fn unbind_header_drag(&mut self, header: &NodeId) {
        self.headers.remove(header);
        self.calls.push(Call::UnbindHeader(*header));
    }

    fn bind_drag_tracking(&mut self) {
        self.drag_tracking = true;
        self.calls.push(Call::BindDragTracking);
    }

    fn unbind_drag_tracking(&mut self) {
        self.drag_tracking = false;
        self.calls.push(Call::UnbindDragTracking);
    }

    fn bind_keydown(&mut self, variant: KeyVariant) {
        self.keydown = Some(variant);
        self.calls.push(Call::BindKeydown(variant));
    }

    fn unbind_keydown(&mut self) {
        self.keydown = None;
        self.calls.push(Call::UnbindKeydown);
    }

    fn navigate_to_index(&mut self, url: &str) {
        self.navigated.push(url.to_string());
        self.calls.push(Call::Navigate(url.to_string()));
    }

    fn schedule(&mut self, delay_ms: u32, task: DeferredTask) {
        self.scheduled.push((delay_ms, task));
        self.calls.push(Call::Schedule(delay_ms));
    }

    fn debug(&mut self, msg: &str) {
        self.debug_lines.push(msg.to_string());
    }
}
