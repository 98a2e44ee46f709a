//! Whether fingerprint resistance applies to the current caller.
//!
//! The decision belongs to the embedder: a view asks its policy on every
//! accessor call and never caches the answer, so a policy may change between
//! two reads of the same event.

/// Source of the "resist fingerprinting now?" decision.
#[cfg_attr(test, mockall::automock)]
pub trait ResistancePolicy {
    /// Returns `true` if values must be normalized for the current caller.
    fn resist_fingerprinting(&self) -> bool;
}

impl ResistancePolicy for bool {
    fn resist_fingerprinting(&self) -> bool {
        *self
    }
}

impl<P: ResistancePolicy + ?Sized> ResistancePolicy for &P {
    fn resist_fingerprinting(&self) -> bool {
        (**self).resist_fingerprinting()
    }
}

/// A fixed policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resistance {
    /// Always normalize.
    Always,
    /// Always pass the true values through.
    Never,
}

impl ResistancePolicy for Resistance {
    fn resist_fingerprinting(&self) -> bool {
        matches!(self, Resistance::Always)
    }
}

/// The browser-style policy: resistance applies only when the setting is on,
/// a script is running, and that script is not privileged.
///
/// Privileged (browser-internal) code always sees true values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallerContext {
    /// The user-facing "resist fingerprinting" setting.
    pub resist_fingerprinting_enabled: bool,
    /// A script execution context is active on this thread.
    pub has_script_context: bool,
    /// The running script is privileged.
    pub is_privileged_caller: bool,
}

impl ResistancePolicy for CallerContext {
    fn resist_fingerprinting(&self) -> bool {
        self.resist_fingerprinting_enabled && self.has_script_context && !self.is_privileged_caller
    }
}
