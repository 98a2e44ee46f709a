//! The consensus registrations.
//!
//! Each line registers one key identifier with the `code` and legacy
//! `keyCode` most commonly reported for it across surveyed keyboard layouts,
//! and with the modifier a "consensus" keyboard holds to produce it:
//!
//! - `key`: no modifier
//! - `shift`: Shift
//! - `altgr`: AltGr
//!
//! Registrations are applied in order.  A few identifiers are registered more
//! than once (usually AltGr followed by Shift); the later registration
//! replaces the earlier one entirely, and that order is part of the
//! observable behavior.
//!
//! The following characters were surveyed without a clear winner and are
//! deliberately absent; they resolve to the fallback answer:
//!
//! - U+00AF macron
//! - U+00B1 plus-minus sign
//! - U+00B6 pilcrow sign
//! - U+00B7 middle dot
//! - U+00BC vulgar fraction one quarter
//! - U+00BE vulgar fraction three quarters
//! - U+00CF latin capital letter i with diaeresis
//! - U+00D5 latin capital letter o with tilde
//! - U+00D8 latin capital letter o with stroke
//! - U+00F5 latin small letter o with tilde
//! - U+00F7 division sign
//! - U+0104 latin capital letter a with ogonek
//! - U+0105 latin small letter a with ogonek
//! - U+0106 latin capital letter c with acute
//! - U+0107 latin small letter c with acute
//! - U+0118 latin capital letter e with ogonek
//! - U+0119 latin small letter e with ogonek
//! - U+0141 latin capital letter l with stroke
//! - U+0142 latin small letter l with stroke
//! - U+0143 latin capital letter n with acute
//! - U+0144 latin small letter n with acute
//! - U+015A latin capital letter s with acute
//! - U+015B latin small letter s with acute
//! - U+0179 latin capital letter z with acute
//! - U+017A latin small letter z with acute
//! - U+017B latin capital letter z with dot above
//! - U+017C latin small letter z with dot above
//! - U+01B7 latin capital letter ezh
//! - U+0292 latin small letter ezh
//! - U+2122 trade mark sign

use super::code::CodeName::{self, *};
use super::Disposition;

/// One `(key, code, keyCode, disposition)` row of the consensus data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// The key identifier (`KeyboardEvent.key`) being registered.
    pub key: &'static str,
    /// Consensus `code` name.
    pub code: CodeName,
    /// Consensus legacy `keyCode`.
    pub key_code: u32,
    /// Which modifier the consensus keyboard holds.
    pub disposition: Disposition,
}

const fn key(key: &'static str, code: CodeName, key_code: u32) -> Registration {
    Registration { key, code, key_code, disposition: Disposition::Key }
}

const fn shift(key: &'static str, code: CodeName, key_code: u32) -> Registration {
    Registration { key, code, key_code, disposition: Disposition::Shift }
}

const fn altgr(key: &'static str, code: CodeName, key_code: u32) -> Registration {
    Registration { key, code, key_code, disposition: Disposition::AltGr }
}

/// All registrations, in application order.
pub const REGISTRATIONS: &[Registration] = &[
    // ── Named keys ──────────────────────────────────────────────────────────
    // "Clear" is left out: platforms disagree on what it is.
    key("Alt", AltLeft, 18),
    key("ArrowDown", ArrowDown, 40),
    key("ArrowLeft", ArrowLeft, 37),
    key("ArrowRight", ArrowRight, 39),
    key("ArrowUp", ArrowUp, 38),
    key("Backspace", Backspace, 8),
    key("CapsLock", CapsLock, 20),
    key("ContextMenu", ContextMenu, 93),
    key("Control", ControlLeft, 17),
    key("Delete", Delete, 46),
    key("End", End, 35),
    key("Enter", Enter, 13),
    key("Escape", Escape, 27),
    key("Help", Help, 6),
    key("Home", Home, 36),
    key("Insert", Insert, 45),
    key("Meta", OsLeft, 91),
    key("PageDown", PageDown, 34),
    key("PageUp", PageUp, 33),
    key("Pause", Pause, 19),
    key("PrintScreen", PrintScreen, 44),
    key("ScrollLock", ScrollLock, 145),
    key("Shift", ShiftLeft, 16),
    key("Tab", Tab, 9),

    // ── US punctuation, unshifted and shifted ──────────────────────────────
    key(" ", Space, 32),
    key(",", Comma, 188),
    shift("<", Comma, 188),
    key(".", Period, 190),
    shift(">", Period, 190),
    key("/", Slash, 191),
    shift("?", Slash, 191),
    key(";", Semicolon, 59),
    shift(":", Semicolon, 59),
    key("'", Quote, 222),
    shift("\"", Quote, 222),
    key("[", BracketLeft, 219),
    shift("{", BracketLeft, 219),
    key("]", BracketRight, 221),
    shift("}", BracketRight, 221),
    key("`", Backquote, 192),
    shift("~", Backquote, 192),
    key("\\", Backslash, 220),
    shift("|", Backslash, 220),
    key("-", Minus, 173),
    shift("_", Minus, 173),
    key("=", Equal, 61),
    shift("+", Equal, 61),

    // ── Letters ─────────────────────────────────────────────────────────────
    shift("A", KeyA, 65),
    shift("B", KeyB, 66),
    shift("C", KeyC, 67),
    shift("D", KeyD, 68),
    shift("E", KeyE, 69),
    shift("F", KeyF, 70),
    shift("G", KeyG, 71),
    shift("H", KeyH, 72),
    shift("I", KeyI, 73),
    shift("J", KeyJ, 74),
    shift("K", KeyK, 75),
    shift("L", KeyL, 76),
    shift("M", KeyM, 77),
    shift("N", KeyN, 78),
    shift("O", KeyO, 79),
    shift("P", KeyP, 80),
    shift("Q", KeyQ, 81),
    shift("R", KeyR, 82),
    shift("S", KeyS, 83),
    shift("T", KeyT, 84),
    shift("U", KeyU, 85),
    shift("V", KeyV, 86),
    shift("W", KeyW, 87),
    shift("X", KeyX, 88),
    shift("Y", KeyY, 89),
    shift("Z", KeyZ, 90),
    key("a", KeyA, 65),
    key("b", KeyB, 66),
    key("c", KeyC, 67),
    key("d", KeyD, 68),
    key("e", KeyE, 69),
    key("f", KeyF, 70),
    key("g", KeyG, 71),
    key("h", KeyH, 72),
    key("i", KeyI, 73),
    key("j", KeyJ, 74),
    key("k", KeyK, 75),
    key("l", KeyL, 76),
    key("m", KeyM, 77),
    key("n", KeyN, 78),
    key("o", KeyO, 79),
    key("p", KeyP, 80),
    key("q", KeyQ, 81),
    key("r", KeyR, 82),
    key("s", KeyS, 83),
    key("t", KeyT, 84),
    key("u", KeyU, 85),
    key("v", KeyV, 86),
    key("w", KeyW, 87),
    key("x", KeyX, 88),
    key("y", KeyY, 89),
    key("z", KeyZ, 90),

    // ── Function keys ───────────────────────────────────────────────────────
    key("F1", F1, 112),
    key("F2", F2, 113),
    key("F3", F3, 114),
    key("F4", F4, 115),
    key("F5", F5, 116),
    key("F6", F6, 117),
    key("F7", F7, 118),
    key("F8", F8, 119),
    key("F9", F9, 120),
    key("F10", F10, 121),
    key("F11", F11, 122),
    key("F12", F12, 123),
    key("F13", F13, 124),
    key("F14", F14, 125),
    key("F15", F15, 126),
    key("F16", F16, 127),
    key("F17", F17, 128),
    key("F18", F18, 129),
    key("F19", F19, 130),
    key("F20", F20, 131),
    key("F21", F21, 132),
    key("F22", F22, 133),
    key("F23", F23, 134),
    key("F24", F24, 135),

    // ── Digit row ───────────────────────────────────────────────────────────
    key("0", Digit0, 48),
    key("1", Digit1, 49),
    key("2", Digit2, 50),
    key("3", Digit3, 51),
    key("4", Digit4, 52),
    key("5", Digit5, 53),
    key("6", Digit6, 54),
    key("7", Digit7, 55),
    key("8", Digit8, 56),
    key("9", Digit9, 57),
    shift(")", Digit0, 48),
    shift("!", Digit1, 49),
    shift("@", Digit2, 50),
    shift("#", Digit3, 51),
    shift("$", Digit4, 52),
    shift("%", Digit5, 53),
    shift("^", Digit6, 54),
    shift("&", Digit7, 55),
    shift("*", Digit8, 56),
    shift("(", Digit9, 57),

    // ── Characters outside US-QWERTY, most common key across layouts ───────
    // U+00A1 inverted exclamation mark
    key("\u{00A1}", Equal, 61),
    // U+00A2 cent sign
    altgr("\u{00A2}", Digit4, 52),
    // U+00A3 pound sign
    shift("\u{00A3}", Digit3, 51),
    // U+00A4 currency sign
    shift("\u{00A4}", Digit4, 52),
    // U+00A6 broken bar
    altgr("\u{00A6}", Backquote, 192),
    // U+00A7 section sign
    shift("\u{00A7}", Backquote, 192),
    // U+00A8 diaeresis
    key("\u{00A8}", BracketRight, 221),
    // U+00AA feminine ordinal indicator
    altgr("\u{00AA}", BracketRight, 221),
    // U+00AB left-pointing double angle quotation mark
    key("\u{00AB}", IntlBackslash, 220),
    // U+00AC not sign
    altgr("\u{00AC}", Digit6, 54),
    // U+00AD soft hyphen
    shift("\u{00AD}", Period, 190),
    // U+00B0 degree sign
    altgr("\u{00B0}", Digit0, 48),
    shift("\u{00B0}", Digit0, 48),
    // U+00B2 superscript two
    altgr("\u{00B2}", Digit2, 50),
    // U+00B3 superscript three
    altgr("\u{00B3}", Digit3, 51),
    // U+00B4 acute accent
    key("\u{00B4}", Equal, 61),
    // U+00B5 micro sign
    altgr("\u{00B5}", KeyM, 77),
    // U+00B8 cedilla
    altgr("\u{00B8}", Equal, 61),
    // U+00B9 superscript one
    altgr("\u{00B9}", Digit1, 49),
    // U+00BA masculine ordinal indicator
    key("\u{00BA}", Quote, 222),
    // U+00BB right-pointing double angle quotation mark
    shift("\u{00BB}", IntlBackslash, 220),
    // U+00BD vulgar fraction one half
    altgr("\u{00BD}", Digit5, 53),
    // U+00BF inverted question mark
    shift("\u{00BF}", Equal, 61),
    // U+00C1 latin capital letter a with acute
    altgr("\u{00C1}", KeyA, 65),
    shift("\u{00C1}", KeyA, 65),
    // U+00C2 latin capital letter a with circumflex
    altgr("\u{00C2}", KeyQ, 81),
    shift("\u{00C2}", KeyQ, 81),
    // U+00C4 latin capital letter a with diaeresis
    shift("\u{00C4}", Quote, 222),
    // U+00C5 latin capital letter a with ring above
    shift("\u{00C5}", BracketLeft, 219),
    // U+00C6 latin capital letter ae
    shift("\u{00C6}", Semicolon, 59),
    // U+00C7 latin capital letter c with cedilla
    shift("\u{00C7}", Backslash, 220),
    // U+00C9 latin capital letter e with acute
    altgr("\u{00C9}", KeyE, 69),
    shift("\u{00C9}", KeyE, 69),
    // U+00CD latin capital letter i with acute
    altgr("\u{00CD}", KeyI, 73),
    shift("\u{00CD}", KeyI, 73),
    // U+00D0 latin capital letter eth
    altgr("\u{00D0}", KeyD, 68),
    shift("\u{00D0}", KeyD, 68),
    // U+00D1 latin capital letter n with tilde
    shift("\u{00D1}", Semicolon, 59),
    // U+00D3 latin capital letter o with acute
    altgr("\u{00D3}", KeyO, 79),
    shift("\u{00D3}", KeyO, 79),
    // U+00D6 latin capital letter o with diaeresis
    shift("\u{00D6}", Semicolon, 59),
    // U+00DA latin capital letter u with acute
    altgr("\u{00DA}", KeyU, 85),
    shift("\u{00DA}", KeyU, 85),
    // U+00DC latin capital letter u with diaeresis
    shift("\u{00DC}", BracketLeft, 219),
    // U+00DE latin capital letter thorn
    altgr("\u{00DE}", KeyT, 84),
    shift("\u{00DE}", KeyT, 84),
    // U+00DF latin small letter sharp s
    altgr("\u{00DF}", KeyS, 83),
    // U+00E0 latin small letter a with grave
    key("\u{00E0}", Quote, 222),
    // U+00E1 latin small letter a with acute
    altgr("\u{00E1}", KeyA, 65),
    // U+00E2 latin small letter a with circumflex
    altgr("\u{00E2}", KeyQ, 81),
    // U+00E4 latin small letter a with diaeresis
    key("\u{00E4}", Quote, 222),
    // U+00E5 latin small letter a with ring above
    key("\u{00E5}", BracketLeft, 219),
    // U+00E6 latin small letter ae
    altgr("\u{00E6}", KeyA, 65),
    shift("\u{00E6}", KeyA, 65),
    // U+00E7 latin small letter c with cedilla
    shift("\u{00E7}", Semicolon, 59),
    // U+00E8 latin small letter e with grave
    key("\u{00E8}", BracketLeft, 219),
    // U+00E9 latin small letter e with acute
    shift("\u{00E9}", Backquote, 192),
    // U+00EC latin small letter i with grave
    key("\u{00EC}", Equal, 61),
    // U+00ED latin small letter i with acute
    altgr("\u{00ED}", KeyI, 73),
    // U+00EF latin small letter i with diaeresis
    altgr("\u{00EF}", KeyI, 73),
    // U+00F0 latin small letter eth
    altgr("\u{00F0}", KeyD, 68),
    // U+00F1 latin small letter n with tilde
    key("\u{00F1}", Semicolon, 59),
    // U+00F2 latin small letter o with grave
    key("\u{00F2}", Semicolon, 59),
    // U+00F3 latin small letter o with acute
    key("\u{00F3}", BracketLeft, 219),
    // U+00F6 latin small letter o with diaeresis
    key("\u{00F6}", Semicolon, 59),
    // U+00F8 latin small letter o with stroke
    key("\u{00F8}", Quote, 222),
    // U+00F9 latin small letter u with grave
    key("\u{00F9}", Backslash, 220),
    // U+00FA latin small letter u with acute
    altgr("\u{00FA}", KeyU, 85),
    // U+00FC latin small letter u with diaeresis
    key("\u{00FC}", BracketLeft, 219),
    // U+00FE latin small letter thorn
    altgr("\u{00FE}", KeyT, 84),
    // U+010C latin capital letter c with caron
    altgr("\u{010C}", KeyC, 67),
    shift("\u{010C}", KeyC, 67),
    // U+010D latin small letter c with caron
    altgr("\u{010D}", KeyC, 67),
    // U+0131 latin small letter dotless i
    key("\u{0131}", KeyI, 73),
    // U+0138 latin small letter kra
    altgr("\u{0138}", KeyK, 75),
    // U+014A latin capital letter eng
    altgr("\u{014A}", KeyN, 78),
    shift("\u{014A}", KeyN, 78),
    // U+014B latin small letter eng
    altgr("\u{014B}", KeyN, 78),
    // U+0152 latin capital ligature oe
    altgr("\u{0152}", KeyO, 79),
    shift("\u{0152}", KeyO, 79),
    // U+0153 latin small ligature oe
    altgr("\u{0153}", KeyO, 79),
    // U+015E latin capital letter s with cedilla
    shift("\u{015E}", Semicolon, 59),
    // U+015F latin small letter s with cedilla
    key("\u{015F}", Semicolon, 59),
    // U+0160 latin capital letter s with caron
    altgr("\u{0160}", KeyS, 83),
    shift("\u{0160}", KeyS, 83),
    // U+0161 latin small letter s with caron
    altgr("\u{0161}", KeyS, 83),
    // U+0166 latin capital letter t with stroke
    altgr("\u{0166}", KeyT, 84),
    shift("\u{0166}", KeyT, 84),
    // U+0167 latin small letter t with stroke
    altgr("\u{0167}", KeyT, 84),
    // U+017D latin capital letter z with caron
    altgr("\u{017D}", KeyZ, 90),
    shift("\u{017D}", KeyZ, 90),
    // U+017E latin small letter z with caron
    altgr("\u{017E}", KeyZ, 90),
    // U+018F latin capital letter schwa
    altgr("\u{018F}", KeyA, 65),
    shift("\u{018F}", KeyA, 65),
    // U+01CD latin capital letter a with caron
    altgr("\u{01CD}", Quote, 222),
    shift("\u{01CD}", Quote, 222),
    // U+01CE latin small letter a with caron
    altgr("\u{01CE}", Quote, 222),
    // U+01E4 latin capital letter g with stroke
    altgr("\u{01E4}", KeyF, 70),
    shift("\u{01E4}", KeyF, 70),
    // U+01E5 latin small letter g with stroke
    altgr("\u{01E5}", KeyF, 70),
    // U+01E6 latin capital letter g with caron
    shift("\u{01E6}", BracketLeft, 219),
    // Registered twice; the unshifted registration wins and U+01E7 stays
    // unmapped.
    key("\u{01E6}", BracketLeft, 219),
    // U+01E8 latin capital letter k with caron
    altgr("\u{01E8}", KeyK, 75),
    shift("\u{01E8}", KeyK, 75),
    // U+01E9 latin small letter k with caron
    altgr("\u{01E9}", KeyK, 75),
    // U+01EE latin capital letter ezh with caron
    altgr("\u{01EE}", KeyV, 86),
    shift("\u{01EE}", KeyV, 86),
    // U+01EF latin small letter ezh with caron
    altgr("\u{01EF}", KeyV, 86),
    // U+021E latin capital letter h with caron
    altgr("\u{021E}", KeyH, 72),
    shift("\u{021E}", KeyH, 72),
    // U+021F latin small letter h with caron
    altgr("\u{021F}", KeyH, 72),
    // U+0259 latin small letter schwa
    altgr("\u{0259}", KeyA, 65),
    // U+02C6 modifier letter circumflex accent
    shift("\u{02C6}", BracketRight, 221),
    // U+02C7 caron
    shift("\u{02C7}", Backslash, 220),
    altgr("\u{02C7}", Backslash, 220),
    // U+02CB modifier letter grave accent
    shift("\u{02CB}", Equal, 61),
    // U+02D8 breve
    shift("\u{02D8}", Backslash, 220),
    altgr("\u{02D8}", Backslash, 220),
    // U+02DB ogonek
    altgr("\u{02DB}", Equal, 61),
    shift("\u{02DB}", Equal, 61),
    // U+02DD double acute accent
    altgr("\u{02DD}", BracketLeft, 219),
    // U+0309 combining hook above
    shift("\u{0309}", KeyP, 80),
    altgr("\u{0309}", KeyP, 80),
    // U+031B combining horn
    altgr("\u{031B}", KeyP, 80),
    // U+2030 per mille sign
    altgr("\u{2030}", Digit5, 53),
    // U+20AC euro sign
    altgr("\u{20AC}", KeyE, 69),
];
