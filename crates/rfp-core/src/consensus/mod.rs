//! The consensus key table.
//!
//! Maps a key identifier (the DOM `KeyboardEvent.key` value: a named key such
//! as `"ArrowUp"`, or the single character a key produced) to the one answer
//! a fingerprint-resistant event reports for it, whatever keyboard the user
//! really has:
//!
//! | Key   | code          | keyCode | Shift | AltGr |
//! |-------|---------------|---------|-------|-------|
//! | `a`   | `KeyA`        | 65      | no    | no    |
//! | `A`   | `KeyA`        | 65      | yes   | no    |
//! | `<`   | `Comma`       | 188     | yes   | no    |
//! | `€`   | `KeyE`        | 69      | no    | yes   |
//! | other | `IntlBackslash` | 220   | no    | no    |
//!
//! The last row is the fallback for identifiers the table does not know.
//! A miss is not an error: every identifier gets an answer, and the fallback
//! looks like any other punctuation key.
//!
//! The table is built once from [`table::REGISTRATIONS`] and never changes.
//! [`ConsensusTable::global`] gives the process-wide instance; callers that
//! manage their own lifetimes can call [`ConsensusTable::build`] and pass the
//! table around explicitly.

pub mod code;
pub mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, trace};

pub use code::CodeName;
pub use table::{Registration, REGISTRATIONS};

/// `code` reported for identifiers with no consensus entry.
pub const FALLBACK_CODE: CodeName = CodeName::IntlBackslash;

/// `keyCode` reported for identifiers with no consensus entry.
pub const FALLBACK_KEY_CODE: u32 = 220;

/// The process-wide table, built on first use.
static GLOBAL_TABLE: OnceLock<ConsensusTable> = OnceLock::new();

/// Which modifier a consensus keyboard holds to produce a key identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Produced with no modifier.
    Key,
    /// Produced with Shift held.
    Shift,
    /// Produced with AltGr held.
    AltGr,
}

/// The consensus answer for one key identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsensusEntry {
    /// Consensus `KeyboardEvent.code`.
    pub code: CodeName,
    /// Consensus legacy `KeyboardEvent.keyCode`.
    pub key_code: u32,
    /// Whether the consensus keyboard needs Shift for this identifier.
    pub requires_shift: bool,
    /// Whether the consensus keyboard needs AltGr for this identifier.
    pub requires_altgr: bool,
}

impl From<&Registration> for ConsensusEntry {
    fn from(r: &Registration) -> Self {
        Self {
            code: r.code,
            key_code: r.key_code,
            requires_shift: r.disposition == Disposition::Shift,
            requires_altgr: r.disposition == Disposition::AltGr,
        }
    }
}

/// Immutable key identifier → [`ConsensusEntry`] map.
#[derive(Debug, Clone)]
pub struct ConsensusTable {
    entries: HashMap<&'static str, ConsensusEntry>,
}

impl ConsensusTable {
    /// Builds a table from [`REGISTRATIONS`].
    pub fn build() -> Self {
        Self::from_registrations(REGISTRATIONS)
    }

    /// Builds a table from an arbitrary registration list.
    ///
    /// Registrations are applied in order; a later registration for the same
    /// identifier replaces the earlier one.
    pub fn from_registrations(registrations: &[Registration]) -> Self {
        let mut entries = HashMap::with_capacity(registrations.len());
        let mut overridden = 0usize;
        for r in registrations {
            if entries.insert(r.key, ConsensusEntry::from(r)).is_some() {
                overridden += 1;
            }
        }
        debug!(
            registrations = registrations.len(),
            entries = entries.len(),
            overridden,
            "built consensus key table"
        );
        Self { entries }
    }

    /// Returns the process-wide table, building it on first call.
    ///
    /// Concurrent first callers block until the single build finishes; every
    /// caller observes the fully populated table.
    pub fn global() -> &'static ConsensusTable {
        GLOBAL_TABLE.get_or_init(Self::build)
    }

    /// Returns the consensus entry for `key`, if any.
    pub fn lookup(&self, key: &str) -> Option<ConsensusEntry> {
        let entry = self.entries.get(key).copied();
        if entry.is_none() {
            trace!("no consensus entry for key identifier; fallback applies");
        }
        entry
    }

    /// Returns `true` if a consensus keyboard needs Shift for `key`.
    ///
    /// `false` for unknown identifiers.
    pub fn requires_shift(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|e| e.requires_shift)
    }

    /// Returns `true` if a consensus keyboard needs AltGr for `key`.
    ///
    /// `false` for unknown identifiers.
    pub fn requires_altgr(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|e| e.requires_altgr)
    }

    /// Returns the consensus `code` for `key`, or `None` if unknown.
    pub fn code_name_of(&self, key: &str) -> Option<CodeName> {
        self.lookup(key).map(|e| e.code)
    }

    /// Returns the consensus legacy `keyCode` for `key`, or `None` if unknown.
    pub fn legacy_key_code_of(&self, key: &str) -> Option<u32> {
        self.lookup(key).map(|e| e.key_code)
    }

    /// The consensus `code` for `key`, or [`FALLBACK_CODE`].
    pub fn code_or_fallback(&self, key: &str) -> CodeName {
        self.code_name_of(key).unwrap_or(FALLBACK_CODE)
    }

    /// The consensus `keyCode` for `key`, or [`FALLBACK_KEY_CODE`].
    pub fn key_code_or_fallback(&self, key: &str) -> u32 {
        self.legacy_key_code_of(key).unwrap_or(FALLBACK_KEY_CODE)
    }

    /// Returns `true` if `key` has a consensus entry.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct key identifiers in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all `(key identifier, entry)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ConsensusEntry)> + '_ {
        self.entries.iter().map(|(k, e)| (*k, *e))
    }
}
