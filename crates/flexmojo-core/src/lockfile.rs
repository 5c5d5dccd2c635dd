use serde::Deserialize;
use std::path::Path;

use flexmojo_util::errors::FlexmojoError;

use crate::artifact::{scope, ArtifactId, DependencyArtifact, ProjectDependencySet, SWC};

pub const LOCKFILE_NAME: &str = "flexmojo.lock";

/// Lockfile recording the fully resolved dependency set of a project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lockfile {
    #[serde(default)]
    pub package: Vec<LockedPackage>,
}

/// A single resolved artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct LockedPackage {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default = "default_type", rename = "type")]
    pub binary_type: String,
    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_type() -> String {
    SWC.to_string()
}

fn default_scope() -> String {
    scope::COMPILE.to_string()
}

impl Lockfile {
    /// Load and parse a lockfile from `path`.
    pub fn from_path(path: &Path) -> Result<Self, FlexmojoError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FlexmojoError::resolution(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            FlexmojoError::resolution(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Convert the locked packages into a dependency set, preserving order.
    pub fn to_dependency_set(&self) -> Result<ProjectDependencySet, FlexmojoError> {
        let artifacts = self
            .package
            .iter()
            .map(|p| {
                DependencyArtifact::new(
                    ArtifactId::new(&p.group, &p.name, &p.version),
                    &p.binary_type,
                    &p.scope,
                )
            })
            .collect();
        ProjectDependencySet::new(artifacts)
    }
}
