//! Flex compiler orchestration.
//!
//! Goals implement the [`mojo::Mojo`] lifecycle. The `compile-swf` goal
//! ([`application::ApplicationMojo`]) reads compiler options through the
//! project's plugin configuration hierarchy, classifies the resolved SWC
//! dependencies into library paths, and drives `mxmlc` from a Flex SDK.

pub mod application;
pub mod mojo;
pub mod mxmlc;
pub mod options;
pub mod sdk;
pub mod source_discovery;
