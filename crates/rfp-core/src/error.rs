//! Error types for parsing event descriptions.
//!
//! None of these can occur on the lookup path: a key identifier missing from
//! the consensus table is answered with fallback values, never an error.  They
//! only arise when a caller hands in a textual or numeric description that
//! does not name anything this crate knows.

use thiserror::Error;

/// Errors produced when converting external values into event model types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EventError {
    /// The string is not one of the `code` names the consensus table uses.
    #[error("unknown code name: {0:?}")]
    UnknownCodeName(String),

    /// The value is not a DOM key location (0 = standard, 1 = left,
    /// 2 = right, 3 = numpad).
    #[error("invalid key location: {0} (expected 0..=3)")]
    InvalidLocation(u32),
}
