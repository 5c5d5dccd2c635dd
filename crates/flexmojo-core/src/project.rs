//! The host project as seen by a build step: identity, layout, and the
//! plugin declarations whose configuration feeds option resolution.

use std::path::{Path, PathBuf};

use crate::configuration::{ConfigurationNode, ExecutionConfiguration, PluginConfigurationHierarchy};

/// Artifact id of the compiler plugin whose configuration the compile goals read.
pub const COMPILER_PLUGIN_ARTIFACT_ID: &str = "flex-compiler-mojo";

pub const DEFAULT_SOURCE_DIRECTORY: &str = "src/main/flex";
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "target";

/// A parsed project descriptor.
#[derive(Debug, Clone, Default)]
pub struct ProjectDescriptor {
    /// Directory containing the descriptor; relative paths resolve against it.
    pub basedir: PathBuf,
    pub group_id: Option<String>,
    pub artifact_id: String,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub build: BuildSection,
}

/// The `<build>` section.
#[derive(Debug, Clone, Default)]
pub struct BuildSection {
    pub source_directory: Option<String>,
    pub output_directory: Option<String>,
    pub final_name: Option<String>,
    pub plugins: Vec<PluginDeclaration>,
    pub plugin_management: Vec<PluginDeclaration>,
}

/// A `<plugin>` declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginDeclaration {
    pub group_id: Option<String>,
    pub artifact_id: String,
    pub version: Option<String>,
    pub configuration: Option<ConfigurationNode>,
    pub executions: Vec<PluginExecution>,
}

/// An `<execution>` inside a plugin declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginExecution {
    pub id: String,
    pub phase: Option<String>,
    pub goals: Vec<String>,
    pub configuration: Option<ConfigurationNode>,
}

impl PluginExecution {
    fn to_execution_configuration(&self) -> ExecutionConfiguration {
        ExecutionConfiguration {
            id: self.id.clone(),
            configuration: self.configuration.clone(),
        }
    }
}

fn find_plugin<'a>(
    plugins: &'a [PluginDeclaration],
    artifact_id: &str,
) -> Option<&'a PluginDeclaration> {
    plugins.iter().find(|p| p.artifact_id == artifact_id)
}

/// Overlay `dominant` on `recessive`: top-level children of `dominant`
/// replace same-named children of `recessive`, the rest are kept.
fn merge_configuration(
    recessive: Option<&ConfigurationNode>,
    dominant: Option<&ConfigurationNode>,
) -> Option<ConfigurationNode> {
    match (recessive, dominant) {
        (None, None) => None,
        (Some(r), None) => Some(r.clone()),
        (None, Some(d)) => Some(d.clone()),
        (Some(r), Some(d)) => {
            let mut merged = d.clone();
            let inherited: Vec<ConfigurationNode> = r
                .children
                .iter()
                .filter(|c| d.child(&c.name).is_none())
                .cloned()
                .collect();
            merged.children.splice(0..0, inherited);
            Some(merged)
        }
    }
}

/// Executions of a plugin as seen after management is applied: managed
/// executions first, each merged with the build-level execution of the same
/// id, then build-level executions with no managed counterpart.
fn merge_executions(
    managed: &[PluginExecution],
    declared: &[PluginExecution],
) -> Vec<ExecutionConfiguration> {
    let mut merged: Vec<ExecutionConfiguration> = managed
        .iter()
        .map(|m| match declared.iter().find(|d| d.id == m.id) {
            Some(d) => ExecutionConfiguration {
                id: m.id.clone(),
                configuration: merge_configuration(
                    m.configuration.as_ref(),
                    d.configuration.as_ref(),
                ),
            },
            None => m.to_execution_configuration(),
        })
        .collect();
    merged.extend(
        declared
            .iter()
            .filter(|d| !managed.iter().any(|m| m.id == d.id))
            .map(PluginExecution::to_execution_configuration),
    );
    merged
}

impl ProjectDescriptor {
    /// Build-level declaration of the plugin with `artifact_id`, if any.
    pub fn plugin(&self, artifact_id: &str) -> Option<&PluginDeclaration> {
        find_plugin(&self.build.plugins, artifact_id)
    }

    /// Plugin-management declaration of the plugin with `artifact_id`, if any.
    pub fn managed_plugin(&self, artifact_id: &str) -> Option<&PluginDeclaration> {
        find_plugin(&self.build.plugin_management, artifact_id)
    }

    /// Assemble the configuration hierarchy of the plugin with `artifact_id`.
    ///
    /// Returns `None` when the plugin is declared neither in the build nor
    /// under plugin management. Executions declared under management are
    /// merged by id with the build-level ones, the build-level configuration
    /// taking precedence.
    pub fn hierarchy_for(&self, artifact_id: &str) -> Option<PluginConfigurationHierarchy> {
        let managed = self.managed_plugin(artifact_id);
        let declared = self.plugin(artifact_id);
        if managed.is_none() && declared.is_none() {
            return None;
        }

        let executions = merge_executions(
            managed.map(|p| p.executions.as_slice()).unwrap_or_default(),
            declared.map(|p| p.executions.as_slice()).unwrap_or_default(),
        );

        Some(PluginConfigurationHierarchy {
            management: managed.and_then(|p| p.configuration.clone()),
            plugin: declared.and_then(|p| p.configuration.clone()),
            executions,
        })
    }

    /// Resolve an option of the plugin with `artifact_id`.
    pub fn plugin_option(&self, artifact_id: &str, option_name: &str) -> Option<String> {
        self.hierarchy_for(artifact_id)
            .and_then(|h| h.resolve_option(option_name))
    }

    /// Absolute source directory.
    pub fn source_directory(&self) -> PathBuf {
        self.resolve_path(
            self.build
                .source_directory
                .as_deref()
                .unwrap_or(DEFAULT_SOURCE_DIRECTORY),
        )
    }

    /// Absolute output directory.
    pub fn output_directory(&self) -> PathBuf {
        self.resolve_path(
            self.build
                .output_directory
                .as_deref()
                .unwrap_or(DEFAULT_OUTPUT_DIRECTORY),
        )
    }

    /// `<finalName>`, defaulting to `artifactId-version`.
    pub fn final_name(&self) -> String {
        if let Some(ref name) = self.build.final_name {
            return name.clone();
        }
        match self.version {
            Some(ref v) => format!("{}-{v}", self.artifact_id),
            None => self.artifact_id.clone(),
        }
    }

    fn resolve_path(&self, p: &str) -> PathBuf {
        let path = Path::new(p);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.basedir.join(path)
        }
    }
}
