//! Confirmation gate port
//!
//! Destructive operations (deleting signals, bulk removals) ask a gate
//! before mutating. The gate is evaluated synchronously; implementations
//! range from an interactive prompt to an unconditional yes for `--yes`
//! flags and tests.

/// Decides whether a destructive operation may proceed
pub trait ConfirmationGate {
    /// Return true to let the operation run
    fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that approves everything
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmationGate for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
