//! Sources of a project's resolved dependency set.

use std::path::PathBuf;

use flexmojo_core::artifact::ProjectDependencySet;
use flexmojo_core::lockfile::{Lockfile, LOCKFILE_NAME};
use flexmojo_core::project::ProjectDescriptor;
use flexmojo_util::errors::FlexmojoError;

/// Produces the full resolved dependency set of a project.
///
/// Implementations may do expensive I/O; callers go through an
/// [`ArtifactClassifier`](crate::ArtifactClassifier) so that this runs at
/// most once per build invocation. Failures are reported as
/// [`FlexmojoError::Resolution`] and are not retried.
pub trait DependencyResolver {
    fn resolve(&self) -> Result<ProjectDependencySet, FlexmojoError>;
}

/// An already materialised set resolves to itself.
impl DependencyResolver for ProjectDependencySet {
    fn resolve(&self) -> Result<ProjectDependencySet, FlexmojoError> {
        Ok(self.clone())
    }
}

impl<R: DependencyResolver + ?Sized> DependencyResolver for Box<R> {
    fn resolve(&self) -> Result<ProjectDependencySet, FlexmojoError> {
        (**self).resolve()
    }
}

/// Reads the resolved set from a `flexmojo.lock` file.
#[derive(Debug, Clone)]
pub struct LockfileResolver {
    path: PathBuf,
}

impl LockfileResolver {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolver for the lockfile next to the project's `pom.xml`.
    pub fn for_project(project: &ProjectDescriptor) -> Self {
        Self::new(project.basedir.join(LOCKFILE_NAME))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DependencyResolver for LockfileResolver {
    fn resolve(&self) -> Result<ProjectDependencySet, FlexmojoError> {
        if !self.path.is_file() {
            return Err(FlexmojoError::resolution(format!(
                "no {LOCKFILE_NAME} found at {}",
                self.path.display()
            )));
        }
        let set = Lockfile::from_path(&self.path)?.to_dependency_set()?;
        tracing::info!(
            path = %self.path.display(),
            artifacts = set.len(),
            "resolved dependency set"
        );
        Ok(set)
    }
}
