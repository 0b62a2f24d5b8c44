/// Page globals and selectors used by the browser bindings.
/// Optional JSON-like object with [`dialogs_core::DialogConfig`] overrides.
pub const CONFIG_GLOBAL: &str = "__DIALOG_CONFIG";
/// Query parameter forwarded to the index page.
pub const LANG_PARAM: &str = "lang";
/// Attribute naming the part a turtle editor arrow changes.
pub const TURTLE_PART_ATTR: &str = "data-turtle-part";
/// Attribute holding `left` or `right` on a turtle editor arrow.
pub const TURTLE_DIR_ATTR: &str = "data-turtle-dir";
