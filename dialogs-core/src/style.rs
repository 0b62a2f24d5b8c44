use serde::{Deserialize, Serialize};

/// Style properties the manager writes. Names are the CSS property names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProp {
    Width,
    Height,
    Left,
    Top,
    MarginLeft,
    MarginTop,
    Opacity,
    Visibility,
    ZIndex,
}

impl StyleProp {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProp::Width => "width",
            StyleProp::Height => "height",
            StyleProp::Left => "left",
            StyleProp::Top => "top",
            StyleProp::MarginLeft => "margin-left",
            StyleProp::MarginTop => "margin-top",
            StyleProp::Opacity => "opacity",
            StyleProp::Visibility => "visibility",
            StyleProp::ZIndex => "z-index",
        }
    }
}

/// Caller supplied placement of the dialog container. Every field is a CSS
/// length (`"50%"`, `"5em"`, `"120px"`); unset fields leave the container's
/// current value alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DialogStyle {
    pub width: Option<String>,
    pub height: Option<String>,
    pub left: Option<String>,
    pub top: Option<String>,
    pub margin_left: Option<String>,
    pub margin_top: Option<String>,
}

impl DialogStyle {
    pub fn new(width: &str, left: &str, top: &str) -> Self {
        DialogStyle {
            width: Some(width.to_string()),
            left: Some(left.to_string()),
            top: Some(top.to_string()),
            ..Default::default()
        }
    }

    /// Properties to write, in a stable order.
    pub fn entries(&self) -> Vec<(StyleProp, &str)> {
        [
            (StyleProp::Width, &self.width),
            (StyleProp::Height, &self.height),
            (StyleProp::Left, &self.left),
            (StyleProp::Top, &self.top),
            (StyleProp::MarginLeft, &self.margin_left),
            (StyleProp::MarginTop, &self.margin_top),
        ]
        .into_iter()
        .filter_map(|(prop, v)| v.as_deref().map(|v| (prop, v)))
        .collect()
    }
}

pub fn px(v: f64) -> String {
    format!("{}px", v)
}
