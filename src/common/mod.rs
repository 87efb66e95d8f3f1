//! Common utilities and shared functionality.
//!
//! - `setup_logging` - fern dispatcher with colored levels and local timestamps
//! - `CustomError` - plain message error returned by the binary helpers

/// Common data structures.
pub mod structs;

/// Logging setup.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
