use serde::Deserialize;

use crate::constants::*;
use crate::style::DialogStyle;

/// Tunables of the dialog manager. Every field falls back to its default
/// when missing from the page-supplied JSON.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DialogConfig {
    pub backdrop_opacity: f64,
    pub animation_ms: u32,
    pub border_tick_ms: u32,
    pub border_origin_opacity: f64,
    pub border_dialog_opacity: f64,
    pub border_closing_opacity: f64,
    pub abort_retry_ms: u32,
    /// Page the abort dialog and its keyboard shortcut navigate to.
    pub index_url: String,
    pub storage_alert_style: DialogStyle,
    pub abort_style: DialogStyle,
}

impl Default for DialogConfig {
    fn default() -> Self {
        DialogConfig {
            backdrop_opacity: BACKDROP_OPACITY,
            animation_ms: ANIMATION_MS,
            border_tick_ms: BORDER_TICK_MS,
            border_origin_opacity: BORDER_ORIGIN_OPACITY,
            border_dialog_opacity: BORDER_DIALOG_OPACITY,
            border_closing_opacity: BORDER_CLOSING_OPACITY,
            abort_retry_ms: ABORT_RETRY_MS,
            index_url: "./".to_string(),
            storage_alert_style: DialogStyle::new("50%", "25%", "5em"),
            abort_style: DialogStyle::new("40%", "30%", "3em"),
        }
    }
}

impl DialogConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
