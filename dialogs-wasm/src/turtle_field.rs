use std::cell::RefCell;
use std::rc::Rc;

use dialogs_core::turtle::SvgAttr;
use dialogs_core::{Direction, TurtlePart, TurtleValue};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::constants::{TURTLE_DIR_ATTR, TURTLE_PART_ATTR};
use crate::utils::warn;

fn apply_plan(root: &Element, plan: &[SvgAttr]) -> Result<(), JsValue> {
    for attr in plan {
        if let Some(el) = root.query_selector(&format!("#{}", attr.element))? {
            el.set_attribute(attr.name, &attr.value)?;
        }
    }
    Ok(())
}

fn parse_direction(s: &str) -> Option<Direction> {
    match s {
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        _ => None,
    }
}

/// Editable turtle field: a value, the SVG it drives and the picker
/// buttons of its editor.
#[wasm_bindgen]
pub struct TurtleField {
    id: String,
    value: Rc<RefCell<TurtleValue>>,
    svg: Rc<RefCell<Option<Element>>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl TurtleField {
    /// `id` prefixes the ids of the turtle's SVG parts.
    #[wasm_bindgen(constructor)]
    pub fn new(id: String, value: Option<String>) -> Result<TurtleField, JsValue> {
        let value = match value {
            Some(raw) => TurtleValue::validate(&raw).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => TurtleValue::default(),
        };
        Ok(TurtleField {
            id,
            value: Rc::new(RefCell::new(value)),
            svg: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
        })
    }

    #[wasm_bindgen(js_name = getValue)]
    pub fn value(&self) -> String {
        self.value.borrow().to_json()
    }

    /// Replaces the value; an invalid value is rejected and the old one kept.
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, raw: &str) -> Result<(), JsValue> {
        let v = TurtleValue::validate(raw).map_err(|e| JsValue::from_str(&e.to_string()))?;
        *self.value.borrow_mut() = v;
        self.refresh()
    }

    #[wasm_bindgen(js_name = getText)]
    pub fn text(&self) -> String {
        self.value.borrow().text().to_string()
    }

    /// Step `part` (`name`, `pattern` or `hat`) one entry left or right.
    pub fn cycle(&mut self, part: &str, forward: bool) -> Result<String, JsValue> {
        let part = TurtlePart::parse(part)
            .ok_or_else(|| JsValue::from_str(&format!("unknown turtle part '{part}'")))?;
        let dir = if forward { Direction::Right } else { Direction::Left };
        let label = self.value.borrow_mut().cycle(part, dir).to_string();
        self.refresh()?;
        Ok(label)
    }

    /// Draw the current value onto `svg` and keep it in sync from now on.
    pub fn render(&mut self, svg: Element) -> Result<(), JsValue> {
        *self.svg.borrow_mut() = Some(svg);
        self.refresh()
    }

    /// Wire the arrow buttons inside `editor`. Each carries
    /// `data-turtle-part` and `data-turtle-dir`; the element with id
    /// `<field id>-<part>-label` shows the current choice.
    #[wasm_bindgen(js_name = bindEditor)]
    pub fn bind_editor(&mut self, editor: &Element) -> Result<(), JsValue> {
        self.listeners.clear();
        let buttons = editor.query_selector_all(&format!("[{TURTLE_PART_ATTR}]"))?;
        for i in 0..buttons.length() {
            let Some(btn) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let part_name = btn.get_attribute(TURTLE_PART_ATTR).unwrap_or_default();
            let Some(part) = TurtlePart::parse(&part_name) else {
                warn(&format!("Unknown turtle part '{part_name}'"));
                continue;
            };
            let Some(dir) = btn
                .get_attribute(TURTLE_DIR_ATTR)
                .as_deref()
                .and_then(parse_direction)
            else {
                continue;
            };
            let value = self.value.clone();
            let svg = self.svg.clone();
            let editor = editor.clone();
            let label_id = format!("{}-{}-label", self.id, part_name);
            let id = self.id.clone();
            self.listeners.push(EventListener::new(&btn, "click", move |_e: &Event| {
                let label = value.borrow_mut().cycle(part, dir).to_string();
                if let Ok(Some(el)) = editor.query_selector(&format!("#{label_id}")) {
                    el.set_text_content(Some(&label));
                }
                if let Some(root) = svg.borrow().as_ref()
                    && let Err(e) = apply_plan(root, &value.borrow().svg_plan(&id))
                {
                    warn(&format!("Turtle redraw failed: {:?}", e));
                }
            }));
        }
        Ok(())
    }
}

impl TurtleField {
    fn refresh(&self) -> Result<(), JsValue> {
        match self.svg.borrow().as_ref() {
            Some(root) => apply_plan(root, &self.value.borrow().svg_plan(&self.id)),
            None => Ok(()),
        }
    }
}
