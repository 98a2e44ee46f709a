//! Physical key `code` names reported by the consensus table.
//!
//! A code name identifies a key *position* (e.g. `KeyA`, `Digit3`), not the
//! character it produces.  Only the names the consensus table actually emits
//! are listed here; a platform may report many more (`Numpad1`, `AltRight`,
//! ...), but under fingerprint resistance those are never surfaced.
//!
//! `OSLeft` keeps its legacy spelling: it is the name older engines reported
//! for the left Meta/Windows/Command key, and scripts that were fingerprinted
//! against it expect exactly that string.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// A `KeyboardEvent.code` value produced by the consensus table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CodeName {
    // Letters
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,

    // Digit row
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Punctuation
    Space,
    Comma,
    Period,
    Slash,
    Semicolon,
    Quote,
    BracketLeft,
    BracketRight,
    Backquote,
    Backslash,
    Minus,
    Equal,
    IntlBackslash,

    // Function row
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,

    // Named control, navigation and editing keys
    AltLeft,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    Backspace,
    CapsLock,
    ContextMenu,
    ControlLeft,
    Delete,
    End,
    Enter,
    Escape,
    Help,
    Home,
    Insert,
    /// Left Meta key, under its legacy name.
    #[serde(rename = "OSLeft")]
    OsLeft,
    PageDown,
    PageUp,
    Pause,
    PrintScreen,
    ScrollLock,
    ShiftLeft,
    Tab,
}

impl CodeName {
    /// Every code name, in declaration order.
    pub const ALL: [CodeName; 97] = {
        use CodeName::*;
        [
            KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM,
            KeyN, KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
            Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9,
            Space, Comma, Period, Slash, Semicolon, Quote, BracketLeft, BracketRight,
            Backquote, Backslash, Minus, Equal, IntlBackslash,
            F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
            F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
            AltLeft, ArrowDown, ArrowLeft, ArrowRight, ArrowUp, Backspace, CapsLock,
            ContextMenu, ControlLeft, Delete, End, Enter, Escape, Help, Home, Insert,
            OsLeft, PageDown, PageUp, Pause, PrintScreen, ScrollLock, ShiftLeft, Tab,
        ]
    };

    /// Returns the DOM `code` string for this key.
    pub fn as_str(self) -> &'static str {
        use CodeName::*;
        match self {
            KeyA => "KeyA",
            KeyB => "KeyB",
            KeyC => "KeyC",
            KeyD => "KeyD",
            KeyE => "KeyE",
            KeyF => "KeyF",
            KeyG => "KeyG",
            KeyH => "KeyH",
            KeyI => "KeyI",
            KeyJ => "KeyJ",
            KeyK => "KeyK",
            KeyL => "KeyL",
            KeyM => "KeyM",
            KeyN => "KeyN",
            KeyO => "KeyO",
            KeyP => "KeyP",
            KeyQ => "KeyQ",
            KeyR => "KeyR",
            KeyS => "KeyS",
            KeyT => "KeyT",
            KeyU => "KeyU",
            KeyV => "KeyV",
            KeyW => "KeyW",
            KeyX => "KeyX",
            KeyY => "KeyY",
            KeyZ => "KeyZ",
            Digit0 => "Digit0",
            Digit1 => "Digit1",
            Digit2 => "Digit2",
            Digit3 => "Digit3",
            Digit4 => "Digit4",
            Digit5 => "Digit5",
            Digit6 => "Digit6",
            Digit7 => "Digit7",
            Digit8 => "Digit8",
            Digit9 => "Digit9",
            Space => "Space",
            Comma => "Comma",
            Period => "Period",
            Slash => "Slash",
            Semicolon => "Semicolon",
            Quote => "Quote",
            BracketLeft => "BracketLeft",
            BracketRight => "BracketRight",
            Backquote => "Backquote",
            Backslash => "Backslash",
            Minus => "Minus",
            Equal => "Equal",
            IntlBackslash => "IntlBackslash",
            F1 => "F1",
            F2 => "F2",
            F3 => "F3",
            F4 => "F4",
            F5 => "F5",
            F6 => "F6",
            F7 => "F7",
            F8 => "F8",
            F9 => "F9",
            F10 => "F10",
            F11 => "F11",
            F12 => "F12",
            F13 => "F13",
            F14 => "F14",
            F15 => "F15",
            F16 => "F16",
            F17 => "F17",
            F18 => "F18",
            F19 => "F19",
            F20 => "F20",
            F21 => "F21",
            F22 => "F22",
            F23 => "F23",
            F24 => "F24",
            AltLeft => "AltLeft",
            ArrowDown => "ArrowDown",
            ArrowLeft => "ArrowLeft",
            ArrowRight => "ArrowRight",
            ArrowUp => "ArrowUp",
            Backspace => "Backspace",
            CapsLock => "CapsLock",
            ContextMenu => "ContextMenu",
            ControlLeft => "ControlLeft",
            Delete => "Delete",
            End => "End",
            Enter => "Enter",
            Escape => "Escape",
            Help => "Help",
            Home => "Home",
            Insert => "Insert",
            OsLeft => "OSLeft",
            PageDown => "PageDown",
            PageUp => "PageUp",
            Pause => "Pause",
            PrintScreen => "PrintScreen",
            ScrollLock => "ScrollLock",
            ShiftLeft => "ShiftLeft",
            Tab => "Tab",
        }
    }
}

impl fmt::Display for CodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodeName {
    type Err = EventError;

    /// Parses a DOM `code` string.  Matching is case-sensitive, as in the DOM.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| EventError::UnknownCodeName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_code_names_have_distinct_strings() {
        // Arrange
        let mut names: Vec<&str> = CodeName::ALL.iter().map(|c| c.as_str()).collect();

        // Act
        names.sort_unstable();
        names.dedup();

        // Assert
        assert_eq!(names.len(), CodeName::ALL.len(), "duplicate code string");
    }

    #[test]
    fn test_from_str_accepts_every_as_str_value() {
        for code in CodeName::ALL {
            let parsed: CodeName = code.as_str().parse().expect("known code must parse");
            assert_eq!(parsed, code, "{code:?} must parse back from {:?}", code.as_str());
        }
    }

    #[test]
    fn test_meta_key_uses_legacy_os_left_name() {
        assert_eq!(CodeName::OsLeft.as_str(), "OSLeft");
        assert_eq!("OSLeft".parse::<CodeName>().unwrap(), CodeName::OsLeft);
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        let result = "keya".parse::<CodeName>();
        assert_eq!(result, Err(EventError::UnknownCodeName("keya".to_string())));
    }

    #[test]
    fn test_from_str_rejects_codes_outside_the_consensus_vocabulary() {
        // Platforms report these, but the consensus table never does.
        for raw in ["Numpad1", "AltRight", "MetaLeft", "ShiftRight", ""] {
            assert!(raw.parse::<CodeName>().is_err(), "{raw:?} must be rejected");
        }
    }

    #[test]
    fn test_serde_uses_dom_spelling() {
        // Arrange / Act
        let meta = serde_json::to_string(&CodeName::OsLeft).unwrap();
        let intl = serde_json::to_string(&CodeName::IntlBackslash).unwrap();

        // Assert
        assert_eq!(meta, "\"OSLeft\"");
        assert_eq!(intl, "\"IntlBackslash\"");
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(CodeName::Digit3.to_string(), "Digit3");
        assert_eq!(CodeName::F24.to_string(), "F24");
    }
}
