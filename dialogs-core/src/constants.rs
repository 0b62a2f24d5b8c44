/// Shared identifiers and numeric defaults.
/// Durations are expressed in milliseconds.
pub const ANIMATION_MS: u32 = 175;
/// Delay before a transition-enabled border change is applied.
pub const BORDER_TICK_MS: u32 = 1;
/// Poll interval used while an abort offer is blocked.
pub const ABORT_RETRY_MS: u32 = 15_000;
pub const BACKDROP_OPACITY: f64 = 0.3;
/// Border opacity at the small end (origin) of an animation.
pub const BORDER_ORIGIN_OPACITY: f64 = 0.2;
/// Border opacity when it matches the dialog on the way in.
pub const BORDER_DIALOG_OPACITY: f64 = 0.8;
/// Border opacity when it starts shrinking away from the dialog.
pub const BORDER_CLOSING_OPACITY: f64 = 1.0;

pub const Z_DIALOG: i32 = 10;
pub const Z_BACKDROP: i32 = 9;
pub const Z_HIDDEN: i32 = -1;

// element ids
pub const DIALOG_ID: &str = "dialog";
pub const BORDER_ID: &str = "dialogBorder";
pub const BACKDROP_ID: &str = "dialogShadow";
pub const HEADER_ID: &str = "dialogHeader";
pub const STORAGE_DIALOG_ID: &str = "dialogStorage";
pub const STORAGE_CONTAINER_ID: &str = "containerStorage";
pub const ABORT_DIALOG_ID: &str = "dialogAbort";
pub const ABORT_CANCEL_ID: &str = "abortCancel";
pub const ABORT_OK_ID: &str = "abortOk";

// classes
pub const HIDDEN_CONTENT_CLASS: &str = "dialogHiddenContent";
pub const BORDER_ANIMATE_CLASS: &str = "dialogAnimate";
pub const AUTO_HIDE_CLASS: &str = "addHideHandler";
pub const PRIMARY_CLASS: &str = "primary";
pub const SECONDARY_CLASS: &str = "secondary";
