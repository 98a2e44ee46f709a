//! Modifier key state carried by a raw keyboard event.

/// Bitmask of the modifier and lock states active when an event fired.
///
/// Bit layout:
/// - Bit 0: Ctrl
/// - Bit 1: Alt
/// - Bit 2: Shift
/// - Bit 3: Meta
/// - Bit 4: AltGraph
/// - Bit 5: CapsLock
/// - Bit 6: Fn
/// - Bit 7: FnLock
/// - Bit 8: NumLock
/// - Bit 9: OS
/// - Bit 10: ScrollLock
/// - Bit 11: Symbol
/// - Bit 12: SymbolLock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(pub u16);

impl Modifiers {
    pub const CTRL: u16 = 1 << 0;
    pub const ALT: u16 = 1 << 1;
    pub const SHIFT: u16 = 1 << 2;
    pub const META: u16 = 1 << 3;
    pub const ALT_GRAPH: u16 = 1 << 4;
    pub const CAPS_LOCK: u16 = 1 << 5;
    pub const FN: u16 = 1 << 6;
    pub const FN_LOCK: u16 = 1 << 7;
    pub const NUM_LOCK: u16 = 1 << 8;
    pub const OS: u16 = 1 << 9;
    pub const SCROLL_LOCK: u16 = 1 << 10;
    pub const SYMBOL: u16 = 1 << 11;
    pub const SYMBOL_LOCK: u16 = 1 << 12;

    /// No modifiers.
    pub const NONE: Modifiers = Modifiers(0);

    /// DOM modifier names accepted by [`Modifiers::state`], with their bits.
    const NAMES: [(&'static str, u16); 13] = [
        ("Control", Self::CTRL),
        ("Alt", Self::ALT),
        ("Shift", Self::SHIFT),
        ("Meta", Self::META),
        ("AltGraph", Self::ALT_GRAPH),
        ("CapsLock", Self::CAPS_LOCK),
        ("Fn", Self::FN),
        ("FnLock", Self::FN_LOCK),
        ("NumLock", Self::NUM_LOCK),
        ("OS", Self::OS),
        ("ScrollLock", Self::SCROLL_LOCK),
        ("Symbol", Self::SYMBOL),
        ("SymbolLock", Self::SYMBOL_LOCK),
    ];

    /// Returns a copy with `bit` set (or cleared when `on` is false).
    pub fn with(self, bit: u16, on: bool) -> Self {
        if on {
            Self(self.0 | bit)
        } else {
            Self(self.0 & !bit)
        }
    }

    /// Returns `true` if every bit in `bit` is set.
    pub fn contains(&self, bit: u16) -> bool {
        self.0 & bit == bit
    }

    /// Returns `true` if Ctrl is down.
    pub fn ctrl(&self) -> bool {
        self.contains(Self::CTRL)
    }

    /// Returns `true` if Alt is down.
    pub fn alt(&self) -> bool {
        self.contains(Self::ALT)
    }

    /// Returns `true` if Shift is down.
    pub fn shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Returns `true` if Meta is down.
    pub fn meta(&self) -> bool {
        self.contains(Self::META)
    }

    /// Returns `true` if AltGraph is down.
    pub fn alt_graph(&self) -> bool {
        self.contains(Self::ALT_GRAPH)
    }

    /// Resolves a DOM `getModifierState()` name.
    ///
    /// Names are case-sensitive; unknown names report `false`.
    pub fn state(&self, name: &str) -> bool {
        Self::NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .is_some_and(|(_, bit)| self.contains(*bit))
    }
}
