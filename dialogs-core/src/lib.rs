pub mod config;
pub mod constants;
pub mod error;
pub mod flows;
pub mod geometry;
pub mod host;
pub mod keys;
pub mod manager;
pub mod style;
pub mod turtle;

#[cfg(test)]
mod testing;

pub use config::DialogConfig;
pub use error::{DialogError, Result};
pub use flows::{AbortDecision, AbortStatus};
pub use geometry::{Point, Rect, Size, bounding_box};
pub use host::{Chrome, ClickAction, DeferredTask, DialogHost, Marker};
pub use keys::{KeyOutcome, KeyVariant};
pub use manager::{DialogManager, MouseButton, OnClose};
pub use style::{DialogStyle, StyleProp};
pub use turtle::{Direction, Hat, Pattern, TurtlePart, TurtleValue};
