//! Value Objects
//!
//! Immutable value types shared across the domain.

mod direction;
mod interlock;
mod link_status;
pub mod link_text;
mod nature;

pub use direction::Direction;
pub use interlock::{InterlockItem, InterlockMode, InterlockSpec, DEFAULT_INTERLOCK_CATEGORY};
pub use link_status::LinkStatus;
pub use nature::Nature;
