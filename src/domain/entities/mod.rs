//! Domain Entities
//!
//! Pure data structures for the project graph. All mutation beyond trivial
//! container upkeep happens in `domain::services`.

mod bay;
mod device;
mod project;
mod signal;
mod signal_end;

pub use bay::Bay;
pub use device::Device;
pub use project::{CanvasLayout, DevicePosition, Project};
pub use signal::{Signal, SignalTemplate};
pub use signal_end::SignalEnd;
