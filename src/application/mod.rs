// SPDX-License-Identifier: MPL-2.0
//! Application layer - Contracts between the controller and its host.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The undo bar controller only talks to ports
//!
//! # Example
//!
//! ```ignore
//! use undo_bar::application::port::{HostSurface, MainThread};
//!
//! // A toolkit binding implements the ports
//! struct AndroidHost { /* ... */ }
//! impl HostSurface for AndroidHost { /* ... */ }
//! ```

pub mod port;
