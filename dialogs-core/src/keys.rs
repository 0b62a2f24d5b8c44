/// Which global keydown handler is bound while a dialog is up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyVariant {
    /// Enter, Escape and Space close the dialog.
    Dismiss,
    /// As `Dismiss`, and Enter or Space also leave for the index page.
    Abort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKey {
    Enter,
    Escape,
    Space,
}

impl DialogKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(DialogKey::Enter),
            "Escape" | "Esc" => Some(DialogKey::Escape),
            " " | "Spacebar" => Some(DialogKey::Space),
            _ => None,
        }
    }
}

/// Result of feeding a keydown to the manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The event should be stopped and its default prevented.
    pub consumed: bool,
    pub navigate: bool,
}

impl KeyOutcome {
    pub const IGNORED: KeyOutcome = KeyOutcome {
        consumed: false,
        navigate: false,
    };
}
