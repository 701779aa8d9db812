//! Domain Layer
//!
//! The core of Bayline: the project graph and the services that keep its
//! denormalized signal links consistent.
//!
//! ## Structure
//!
//! - `entities/` - Project graph (Project, Bay, Device, Signal, SignalEnd)
//! - `value_objects/` - Immutable value types and the endpoint text grammar
//! - `services/` - Link consistency, rename, replication, validation
//! - `ports/` - Interfaces for outer-layer collaborators
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Explicit state** - Every operation takes the Project or Bay it
//!    mutates; there is no ambient global state
//! 3. **Fail fast** - Precondition checks run before any mutation

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
