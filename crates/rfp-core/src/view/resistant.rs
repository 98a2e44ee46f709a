//! Fingerprint-resistant accessors over a raw keyboard event.
//!
//! With resistance off, every accessor returns the platform's true value.
//! With resistance on, the values that describe *how* a character was typed
//! are replaced by the consensus answer for the character itself:
//!
//! | Accessor     | Resisting value                                           |
//! |--------------|-----------------------------------------------------------|
//! | `code`       | consensus code, else `IntlBackslash`                      |
//! | `key_code`   | `0` when `char_code` is non-zero, else consensus / `220`  |
//! | `shift_key`  | consensus "needs Shift"                                   |
//! | `alt_key`    | consensus "needs AltGr"                                   |
//! | `ctrl_key`   | `true` if the key needs AltGr and Alt is down, else true Ctrl |
//! | `meta_key`   | true Meta                                                 |
//! | `location`   | right → left, numpad → standard                           |
//!
//! `char_code` and `key()` are never altered: the character itself is what
//! the page asked for.  `which` is derived from the (possibly resisted)
//! `key_code`/`char_code`.

use crate::consensus::ConsensusTable;
use crate::event::{EventMessage, EventPhase, KeyLocation, KeyboardEventInit, RawKeyboardEvent};

use super::policy::ResistancePolicy;

/// Legacy `keyCode` of Return.
const VK_RETURN: u32 = 13;
/// Legacy `keyCode` of Backspace.
const VK_BACK: u32 = 8;

/// Read-only view of a raw event under a resistance policy.
///
/// Every accessor is a pure function of the event, the table, and the
/// policy's answer at call time.
pub struct ResistantKeyboardView<'a, P: ResistancePolicy + ?Sized> {
    event: &'a RawKeyboardEvent,
    table: &'a ConsensusTable,
    policy: &'a P,
}

impl<'a, P: ResistancePolicy + ?Sized> ResistantKeyboardView<'a, P> {
    /// Creates a view over `event` that consults `table` and `policy`.
    pub fn new(event: &'a RawKeyboardEvent, table: &'a ConsensusTable, policy: &'a P) -> Self {
        Self { event, table, policy }
    }

    /// Creates a view backed by [`ConsensusTable::global`].
    pub fn with_global_table(event: &'a RawKeyboardEvent, policy: &'a P) -> Self {
        Self::new(event, ConsensusTable::global(), policy)
    }

    /// The underlying raw event.
    pub fn event(&self) -> &RawKeyboardEvent {
        self.event
    }

    fn resisting(&self) -> bool {
        self.policy.resist_fingerprinting()
    }

    /// `KeyboardEvent.key`; never altered.
    pub fn key(&self) -> &str {
        &self.event.key
    }

    /// `KeyboardEvent.code`.
    pub fn code(&self) -> &str {
        if !self.resisting() {
            return &self.event.code;
        }
        self.table.code_or_fallback(&self.event.key).as_str()
    }

    /// `KeyboardEvent.charCode`.
    ///
    /// Non-zero only for character-producing messages, unless the event was
    /// built by a script.  Resistance never changes it.
    pub fn char_code(&self) -> u32 {
        if self.event.initialized_by_ctor {
            return self.event.char_code;
        }
        match self.event.message.phase() {
            EventPhase::Press => self.event.char_code,
            EventPhase::Down | EventPhase::Up | EventPhase::Other => 0,
        }
    }

    /// `KeyboardEvent.keyCode`.
    pub fn key_code(&self) -> u32 {
        if !self.event.initialized_by_ctor && !self.event.message.is_key_event() {
            return 0;
        }
        if !self.resisting() {
            return self.event.key_code;
        }
        if self.char_code() != 0 {
            return 0;
        }
        self.table.key_code_or_fallback(&self.event.key)
    }

    /// `KeyboardEvent.which`.
    pub fn which(&self) -> u32 {
        if self.event.initialized_by_ctor {
            return self.event.initialized_which;
        }
        match self.event.message {
            EventMessage::KeyPress => {
                // Return and Backspace report their keyCode on keypress.
                let key_code = self.key_code();
                if key_code == VK_RETURN || key_code == VK_BACK {
                    key_code
                } else {
                    self.char_code()
                }
            }
            m if matches!(m.phase(), EventPhase::Down | EventPhase::Up) => self.key_code(),
            _ => 0,
        }
    }

    /// `KeyboardEvent.location`.
    pub fn location(&self) -> u32 {
        let location = self.event.location;
        if !self.resisting() {
            return location;
        }
        KeyLocation::try_from(location)
            .map(KeyLocation::resisted)
            .unwrap_or(KeyLocation::Standard)
            .as_u32()
    }

    /// `KeyboardEvent.altKey`.
    ///
    /// Under resistance this means "the character needs AltGr", never that a
    /// physical Alt key is down.
    pub fn alt_key(&self) -> bool {
        if !self.resisting() {
            return self.event.modifiers.alt();
        }
        self.table.requires_altgr(&self.event.key)
    }

    /// `KeyboardEvent.ctrlKey`.
    ///
    /// Some platforms deliver AltGr as Ctrl+Alt.  When the character needs
    /// AltGr and Alt is down, Ctrl is reported down too so the pair looks like
    /// AltGr to scripts; otherwise the true Ctrl state is reported.
    pub fn ctrl_key(&self) -> bool {
        let ctrl = self.event.modifiers.ctrl();
        if !self.resisting() {
            return ctrl;
        }
        if self.table.requires_altgr(&self.event.key) && self.event.modifiers.alt() {
            return true;
        }
        ctrl
    }

    /// `KeyboardEvent.shiftKey`.
    pub fn shift_key(&self) -> bool {
        if !self.resisting() {
            return self.event.modifiers.shift();
        }
        self.table.requires_shift(&self.event.key)
    }

    /// `KeyboardEvent.metaKey`; never resisted.
    pub fn meta_key(&self) -> bool {
        self.event.modifiers.meta()
    }

    /// `KeyboardEvent.repeat`.
    pub fn repeat(&self) -> bool {
        self.event.repeat
    }

    /// `KeyboardEvent.isComposing`.
    pub fn is_composing(&self) -> bool {
        self.event.is_composing
    }

    /// `KeyboardEvent.getModifierState(name)`; reports true state.
    pub fn modifier_state(&self, name: &str) -> bool {
        self.event.modifiers.state(name)
    }

    /// Snapshots every observable property, as a script would see it, into
    /// an initialization dictionary.
    pub fn init_dict(&self) -> KeyboardEventInit {
        let m = self.event.modifiers;
        KeyboardEventInit {
            key: self.key().to_string(),
            code: self.code().to_string(),
            location: self.location(),
            repeat: self.repeat(),
            is_composing: self.is_composing(),
            key_code: self.key_code(),
            char_code: self.char_code(),
            which: self.which(),
            ctrl_key: self.ctrl_key(),
            shift_key: self.shift_key(),
            alt_key: self.alt_key(),
            meta_key: self.meta_key(),
            modifier_alt_graph: m.alt_graph(),
            modifier_caps_lock: m.state("CapsLock"),
            modifier_fn: m.state("Fn"),
            modifier_fn_lock: m.state("FnLock"),
            modifier_num_lock: m.state("NumLock"),
            modifier_os: m.state("OS"),
            modifier_scroll_lock: m.state("ScrollLock"),
            modifier_symbol: m.state("Symbol"),
            modifier_symbol_lock: m.state("SymbolLock"),
            bubbles: self.event.bubbles,
            cancelable: self.event.cancelable,
        }
    }
}
