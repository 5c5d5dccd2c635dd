//! Shared utilities for flexmojo.
//!
//! Cross-cutting concerns used by every other crate in the workspace:
//! the unified error type, filesystem helpers, external process spawning,
//! and Cargo-style terminal status lines.

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;
