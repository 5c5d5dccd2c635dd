//! Resolved dependency artifacts and the per-project dependency set.

use std::collections::HashSet;
use std::path::PathBuf;

use flexmojo_util::errors::FlexmojoError;

/// Binary type of a Flex library archive.
pub const SWC: &str = "swc";
/// Binary type of a compiled Flex application.
pub const SWF: &str = "swf";

/// Well-known scope labels. Scopes are open-ended strings; these are the
/// ones the compile goals ask for.
pub mod scope {
    pub const COMPILE: &str = "compile";
    pub const RUNTIME: &str = "runtime";
    pub const PROVIDED: &str = "provided";
    pub const TEST: &str = "test";
    pub const MERGED: &str = "merged";
    pub const INTERNAL: &str = "internal";
    pub const EXTERNAL: &str = "external";
    pub const RSL: &str = "rsl";
}

/// Identity of a resolved artifact: `group:name:version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId {
    pub group: String,
    pub name: String,
    pub version: String,
}

impl ArtifactId {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

impl std::fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// One resolved dependency as handed over by the dependency resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyArtifact {
    pub id: ArtifactId,
    pub binary_type: String,
    pub scope: String,
}

impl DependencyArtifact {
    pub fn new(id: ArtifactId, binary_type: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            id,
            binary_type: binary_type.into(),
            scope: scope.into(),
        }
    }

    /// Location relative to a Maven-layout repository root, e.g.
    /// `com/adobe/flex/framework/3.0.0/framework-3.0.0.swc`.
    pub fn repository_path(&self) -> PathBuf {
        let mut path: PathBuf = self.id.group.split('.').collect();
        path.push(&self.id.name);
        path.push(&self.id.version);
        path.push(format!(
            "{}-{}.{}",
            self.id.name, self.id.version, self.binary_type
        ));
        path
    }
}

/// The full, resolved set of dependency artifacts of a project.
///
/// Entries are unique by [`ArtifactId`] and keep the order in which the
/// resolver produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDependencySet {
    artifacts: Vec<DependencyArtifact>,
}

impl ProjectDependencySet {
    /// Build a set, rejecting duplicate identities.
    pub fn new(artifacts: Vec<DependencyArtifact>) -> Result<Self, FlexmojoError> {
        let mut seen = HashSet::with_capacity(artifacts.len());
        for artifact in &artifacts {
            if !seen.insert(&artifact.id) {
                return Err(FlexmojoError::resolution(format!(
                    "artifact {} was resolved more than once",
                    artifact.id
                )));
            }
        }
        Ok(Self { artifacts })
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DependencyArtifact> {
        self.artifacts.iter()
    }

    pub fn as_slice(&self) -> &[DependencyArtifact] {
        &self.artifacts
    }
}

impl<'a> IntoIterator for &'a ProjectDependencySet {
    type Item = &'a DependencyArtifact;
    type IntoIter = std::slice::Iter<'a, DependencyArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}
