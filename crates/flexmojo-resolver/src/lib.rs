//! Dependency set materialisation and classification.
//!
//! A [`DependencyResolver`] produces a project's full resolved dependency
//! set; an [`ArtifactClassifier`] resolves it at most once per build
//! invocation and filters it per call site by binary type and scope.

pub mod classifier;
pub mod resolver;

pub use classifier::ArtifactClassifier;
pub use resolver::{DependencyResolver, LockfileResolver};
