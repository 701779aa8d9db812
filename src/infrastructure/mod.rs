//! Infrastructure Layer
//!
//! Implementations of the outer-facing concerns: the JSON project document
//! on disk and the interactive confirmation gate.

pub mod confirm;
pub mod persistence;
