//! Fingerprint-resistant views of keyboard events.

pub mod policy;
pub mod resistant;

pub use policy::{CallerContext, Resistance, ResistancePolicy};
pub use resistant::ResistantKeyboardView;
