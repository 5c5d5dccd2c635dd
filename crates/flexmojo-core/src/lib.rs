//! Core data types for flexmojo.
//!
//! This crate defines what a build step reads from the host project:
//! resolved dependency artifacts, nested plugin configuration trees and the
//! layered lookup over them, project descriptors, lockfiles, and the global
//! user configuration.
//!
//! This crate is intentionally free of process spawning and network I/O.

pub mod artifact;
pub mod config;
pub mod configuration;
pub mod lockfile;
pub mod project;
