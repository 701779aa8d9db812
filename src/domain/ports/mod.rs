//! Ports
//!
//! Interface definitions the outer layers implement. Collaborators are
//! selected at composition time, never capability-probed at call time.

mod confirmation;

pub use confirmation::{AlwaysConfirm, ConfirmationGate};
