//! Event message kinds and key locations.

use crate::error::EventError;

/// The internal message an event was dispatched for.
///
/// The down/up families include the before/after notifications sent around
/// embedded content and the plugin variants; they all behave like their plain
/// counterparts for `charCode`/`keyCode`/`which` purposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EventMessage {
    BeforeKeyDown,
    KeyDown,
    KeyDownOnPlugin,
    AfterKeyDown,
    BeforeKeyUp,
    KeyUp,
    KeyUpOnPlugin,
    AfterKeyUp,
    KeyPress,
    /// A keypress that matched no access key and is being re-dispatched.
    AccessKeyNotFound,
    /// Any non-keyboard message (e.g. an event created but never initialized).
    #[default]
    Other,
}

/// Coarse phase of an [`EventMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventPhase {
    Down,
    Up,
    /// Character-producing phase.
    Press,
    Other,
}

impl EventMessage {
    /// Returns the coarse phase of this message.
    pub fn phase(self) -> EventPhase {
        use EventMessage::*;
        match self {
            BeforeKeyDown | KeyDown | KeyDownOnPlugin | AfterKeyDown => EventPhase::Down,
            BeforeKeyUp | KeyUp | KeyUpOnPlugin | AfterKeyUp => EventPhase::Up,
            KeyPress | AccessKeyNotFound => EventPhase::Press,
            Other => EventPhase::Other,
        }
    }

    /// Returns `true` for every keyboard message.
    pub fn is_key_event(self) -> bool {
        self != EventMessage::Other
    }

    /// Maps a DOM event type string to a message.
    ///
    /// Only the three script-visible keyboard types are recognized; anything
    /// else is [`EventMessage::Other`].
    pub fn from_type(event_type: &str) -> Self {
        match event_type {
            "keydown" => EventMessage::KeyDown,
            "keyup" => EventMessage::KeyUp,
            "keypress" => EventMessage::KeyPress,
            _ => EventMessage::Other,
        }
    }
}

/// `KeyboardEvent.location` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum KeyLocation {
    Standard = 0,
    Left = 1,
    Right = 2,
    Numpad = 3,
}

impl KeyLocation {
    /// Returns the DOM numeric value.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// The location reported under fingerprint resistance.
    ///
    /// Right-hand modifiers report as left-hand ones and the numpad reports
    /// as the standard area.
    pub fn resisted(self) -> Self {
        match self {
            KeyLocation::Standard | KeyLocation::Numpad => KeyLocation::Standard,
            KeyLocation::Left | KeyLocation::Right => KeyLocation::Left,
        }
    }
}

impl TryFrom<u32> for KeyLocation {
    type Error = EventError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(KeyLocation::Standard),
            1 => Ok(KeyLocation::Left),
            2 => Ok(KeyLocation::Right),
            3 => Ok(KeyLocation::Numpad),
            other => Err(EventError::InvalidLocation(other)),
        }
    }
}
