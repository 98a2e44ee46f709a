//! The raw keyboard event as the platform reported it.
//!
//! A [`RawKeyboardEvent`] holds the *true* values: the real modifiers, the
//! real physical `code`, the real `keyCode`/`charCode`.  Nothing in this crate
//! mutates one; views only read it.

use super::init::KeyboardEventInit;
use super::message::EventMessage;
use super::modifiers::Modifiers;

/// A fully populated keyboard event, before any fingerprint resistance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawKeyboardEvent {
    /// Message the event was dispatched for.
    pub message: EventMessage,
    /// Resolved key identifier (`KeyboardEvent.key`).
    pub key: String,
    /// True physical `code` as reported by the platform.
    pub code: String,
    /// True legacy `keyCode`.
    pub key_code: u32,
    /// True `charCode` (meaningful for keypress only).
    pub char_code: u32,
    /// True location (0 = standard, 1 = left, 2 = right, 3 = numpad).
    pub location: u32,
    /// True modifier and lock state.
    pub modifiers: Modifiers,
    pub repeat: bool,
    pub is_composing: bool,
    pub bubbles: bool,
    pub cancelable: bool,
    /// Set for events a script built through the constructor; such events skip
    /// the message-based gating of `charCode`/`keyCode`/`which`.
    pub initialized_by_ctor: bool,
    /// `which` supplied to the constructor.
    pub initialized_which: u32,
}

impl RawKeyboardEvent {
    /// Creates an event for `message` whose key identifier is `key`; all other
    /// fields start zeroed.
    pub fn new(message: EventMessage, key: impl Into<String>) -> Self {
        Self {
            message,
            key: key.into(),
            ..Default::default()
        }
    }

    /// Sets the true physical `code`.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the true `keyCode`.
    pub fn with_key_code(mut self, key_code: u32) -> Self {
        self.key_code = key_code;
        self
    }

    /// Sets the true `charCode`.
    pub fn with_char_code(mut self, char_code: u32) -> Self {
        self.char_code = char_code;
        self
    }

    /// Sets the true location.
    pub fn with_location(mut self, location: u32) -> Self {
        self.location = location;
        self
    }

    /// Sets the true modifier state.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Marks the event as an auto-repeat.
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Builds the event a script gets from `new KeyboardEvent(type, init)`.
    pub fn from_init(event_type: &str, init: &KeyboardEventInit) -> Self {
        let modifiers = Modifiers::NONE
            .with(Modifiers::CTRL, init.ctrl_key)
            .with(Modifiers::ALT, init.alt_key)
            .with(Modifiers::SHIFT, init.shift_key)
            .with(Modifiers::META, init.meta_key)
            .with(Modifiers::ALT_GRAPH, init.modifier_alt_graph)
            .with(Modifiers::CAPS_LOCK, init.modifier_caps_lock)
            .with(Modifiers::FN, init.modifier_fn)
            .with(Modifiers::FN_LOCK, init.modifier_fn_lock)
            .with(Modifiers::NUM_LOCK, init.modifier_num_lock)
            .with(Modifiers::OS, init.modifier_os)
            .with(Modifiers::SCROLL_LOCK, init.modifier_scroll_lock)
            .with(Modifiers::SYMBOL, init.modifier_symbol)
            .with(Modifiers::SYMBOL_LOCK, init.modifier_symbol_lock);

        Self {
            message: EventMessage::from_type(event_type),
            key: init.key.clone(),
            code: init.code.clone(),
            key_code: init.key_code,
            char_code: init.char_code,
            location: init.location,
            modifiers,
            repeat: init.repeat,
            is_composing: init.is_composing,
            bubbles: init.bubbles,
            cancelable: init.cancelable,
            initialized_by_ctor: true,
            initialized_which: init.which,
        }
    }
}
