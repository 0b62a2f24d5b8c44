//! Value model of the turtle customisation field.
//!
//! The field shows a small SVG turtle and edits a three-part value: the
//! turtle's name, its shell pattern and its hat. Each part is picked from a
//! fixed list with left/right arrows that wrap around.

use serde::{Deserialize, Serialize};

use crate::error::{DialogError, Result};

pub const TURTLE_NAMES: [&str; 7] = [
    "Yertle", "Franklin", "Crush", "Leonardo", "Bowser", "Squirtle", "Oogway",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    Dots,
    Stripes,
    Hexagons,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Dots, Pattern::Stripes, Pattern::Hexagons];

    pub fn label(self) -> &'static str {
        match self {
            Pattern::Dots => "Dots",
            Pattern::Stripes => "Stripes",
            Pattern::Hexagons => "Hexagons",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hat {
    Stovepipe,
    Crown,
    Propeller,
    Mask,
    Fedora,
}

impl Hat {
    pub const ALL: [Hat; 5] = [Hat::Stovepipe, Hat::Crown, Hat::Propeller, Hat::Mask, Hat::Fedora];

    pub fn label(self) -> &'static str {
        match self {
            Hat::Stovepipe => "Stovepipe",
            Hat::Crown => "Crown",
            Hat::Propeller => "Propeller",
            Hat::Mask => "Mask",
            Hat::Fedora => "Fedora",
        }
    }

    /// Id suffix of the SVG group drawing this hat.
    fn part(self) -> &'static str {
        match self {
            Hat::Stovepipe => "stovepipe",
            Hat::Crown => "crown",
            Hat::Propeller => "propeller",
            Hat::Mask => "mask",
            Hat::Fedora => "fedora",
        }
    }

    /// Vertical shift applied to the turtle body so the hat fits above it.
    fn body_offset(self) -> f64 {
        match self {
            Hat::Stovepipe => 18.0,
            Hat::Crown => 9.0,
            Hat::Propeller | Hat::Mask | Hat::Fedora => 6.2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurtlePart {
    Name,
    Pattern,
    Hat,
}

impl TurtlePart {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" | "turtleName" => Some(TurtlePart::Name),
            "pattern" => Some(TurtlePart::Pattern),
            "hat" => Some(TurtlePart::Hat),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Steps `idx` through a list of `len` entries, wrapping at both ends.
pub fn wrap_index(idx: usize, len: usize, dir: Direction) -> usize {
    match dir {
        Direction::Left => (idx + len - 1) % len,
        Direction::Right => (idx + 1) % len,
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurtleValue {
    pub turtle_name: String,
    pub pattern: Pattern,
    pub hat: Hat,
}

impl Default for TurtleValue {
    fn default() -> Self {
        TurtleValue {
            turtle_name: TURTLE_NAMES[0].to_string(),
            pattern: Pattern::Dots,
            hat: Hat::Stovepipe,
        }
    }
}

/// One attribute write on the turtle SVG.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgAttr {
    /// Element id, already prefixed with the field id.
    pub element: String,
    pub name: &'static str,
    pub value: String,
}

impl TurtleValue {
    /// Parses and checks a JSON value; names outside the known list are
    /// rejected like unknown patterns and hats.
    pub fn validate(raw: &str) -> Result<Self> {
        let value: TurtleValue =
            serde_json::from_str(raw).map_err(|e| DialogError::InvalidValue(e.to_string()))?;
        if !TURTLE_NAMES.contains(&value.turtle_name.as_str()) {
            return Err(DialogError::InvalidValue(format!(
                "unknown turtle name '{}'",
                value.turtle_name
            )));
        }
        Ok(value)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Text shown when the field is collapsed.
    pub fn text(&self) -> &str {
        &self.turtle_name
    }

    /// Moves one part to its neighbour and returns the new label.
    pub fn cycle(&mut self, part: TurtlePart, dir: Direction) -> &str {
        match part {
            TurtlePart::Name => {
                let idx = TURTLE_NAMES
                    .iter()
                    .position(|n| *n == self.turtle_name)
                    .unwrap_or(0);
                self.turtle_name = TURTLE_NAMES[wrap_index(idx, TURTLE_NAMES.len(), dir)].to_string();
                &self.turtle_name
            }
            TurtlePart::Pattern => {
                let idx = Pattern::ALL.iter().position(|p| *p == self.pattern).unwrap_or(0);
                self.pattern = Pattern::ALL[wrap_index(idx, Pattern::ALL.len(), dir)];
                self.pattern.label()
            }
            TurtlePart::Hat => {
                let idx = Hat::ALL.iter().position(|h| *h == self.hat).unwrap_or(0);
                self.hat = Hat::ALL[wrap_index(idx, Hat::ALL.len(), dir)];
                self.hat.label()
            }
        }
    }

    /// Attribute writes that bring an SVG turtle drawn with `field_id`
    /// prefixed ids in line with this value.
    pub fn svg_plan(&self, field_id: &str) -> Vec<SvgAttr> {
        let attr = |suffix: &str, name: &'static str, value: String| SvgAttr {
            element: format!("{field_id}-{suffix}"),
            name,
            value,
        };
        let mut plan = vec![attr(
            "shell",
            "fill",
            format!("url(#{field_id}-pattern-{})", self.pattern.label().to_lowercase()),
        )];
        for hat in Hat::ALL {
            let display = if hat == self.hat { "inline" } else { "none" };
            plan.push(attr(hat.part(), "display", display.to_string()));
        }
        plan.push(attr(
            "body",
            "transform",
            format!("translate(0,{})", self.hat.body_offset()),
        ));
        plan
    }
}
