//! The keyboard event initialization dictionary.
//!
//! Mirrors the DOM `KeyboardEventInit` dictionary.  It is used in both
//! directions: scripts construct events from one (see
//! [`RawKeyboardEvent::from_init`](super::RawKeyboardEvent::from_init)), and a
//! view can snapshot every observable property into one (see
//! [`ResistantKeyboardView::init_dict`](crate::view::ResistantKeyboardView::init_dict)).
//!
//! Field names serialize in DOM camelCase (`keyCode`, `modifierAltGraph`, ...).

use serde::{Deserialize, Serialize};

/// DOM `KeyboardEventInit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyboardEventInit {
    pub key: String,
    pub code: String,
    pub location: u32,
    pub repeat: bool,
    pub is_composing: bool,

    // Legacy attributes
    pub key_code: u32,
    pub char_code: u32,
    pub which: u32,

    // EventModifierInit
    pub ctrl_key: bool,
    pub shift_key: bool,
    pub alt_key: bool,
    pub meta_key: bool,
    pub modifier_alt_graph: bool,
    pub modifier_caps_lock: bool,
    pub modifier_fn: bool,
    pub modifier_fn_lock: bool,
    pub modifier_num_lock: bool,
    #[serde(rename = "modifierOS")]
    pub modifier_os: bool,
    pub modifier_scroll_lock: bool,
    pub modifier_symbol: bool,
    pub modifier_symbol_lock: bool,

    // EventInit
    pub bubbles: bool,
    pub cancelable: bool,
}
