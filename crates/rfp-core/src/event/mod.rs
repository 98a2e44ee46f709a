//! The raw keyboard event consumed by views.

pub mod init;
pub mod message;
pub mod modifiers;
pub mod raw;

pub use init::KeyboardEventInit;
pub use message::{EventMessage, EventPhase, KeyLocation};
pub use modifiers::Modifiers;
pub use raw::RawKeyboardEvent;
