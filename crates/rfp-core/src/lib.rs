//! # rfp-core
//!
//! Fingerprint-resistant keyboard events.
//!
//! A page can learn a lot about a user from keyboard events: which physical
//! layout they type on, whether they reached a character through Shift or
//! AltGr, whether they used the right-hand Shift or the numpad.  This crate
//! answers those questions the same way for every user by describing each
//! character as if it were typed on one "consensus" US-based layout.
//!
//! # Architecture overview
//!
//! - **`consensus`** – The static table mapping a key identifier (the DOM
//!   `key` string) to the physical `code`, the legacy `keyCode`, and whether
//!   Shift or AltGr is needed to type it.  Built once and shared read-only.
//!
//! - **`event`** – The raw event as the platform reported it: message kind,
//!   true modifiers, true codes.  Also the initialization dictionary scripts
//!   pass to the `KeyboardEvent` constructor.
//!
//! - **`view`** – [`ResistantKeyboardView`], which reads a raw event through a
//!   [`ResistancePolicy`] and returns either the true values or the consensus
//!   values.
//!
//! ```
//! use rfp_core::{EventMessage, RawKeyboardEvent, ResistantKeyboardView};
//!
//! let event = RawKeyboardEvent::new(EventMessage::KeyDown, "q").with_code("KeyA");
//! let view = ResistantKeyboardView::with_global_table(&event, &true);
//! assert_eq!(view.code(), "KeyQ");
//! ```

pub mod consensus;
pub mod error;
pub mod event;
pub mod view;

// Re-export the most-used types at the crate root.
pub use consensus::code::CodeName;
pub use consensus::{ConsensusEntry, ConsensusTable, Disposition, FALLBACK_CODE, FALLBACK_KEY_CODE};
pub use error::EventError;
pub use event::{
    EventMessage, EventPhase, KeyLocation, KeyboardEventInit, Modifiers, RawKeyboardEvent,
};
pub use view::{CallerContext, Resistance, ResistancePolicy, ResistantKeyboardView};
