//! POM reading: project identity, build layout, plugin and plugin-management
//! declarations with their executions, and `${property}` interpolation of
//! configuration values.

use std::collections::BTreeMap;
use std::path::Path;

use flexmojo_core::configuration::ConfigurationNode;
use flexmojo_core::project::{BuildSection, PluginDeclaration, PluginExecution, ProjectDescriptor};
use flexmojo_util::errors::FlexmojoError;

use crate::xml::parse_tree;

pub const POM_FILE: &str = "pom.xml";

/// Interpolation passes before giving up on nested references.
const MAX_INTERPOLATION_DEPTH: usize = 20;

/// Locate `pom.xml` in `start` or one of its ancestors and read it.
pub fn load_project(start: &Path) -> miette::Result<ProjectDescriptor> {
    let dir = flexmojo_util::fs::find_ancestor_with(start, POM_FILE).ok_or_else(|| {
        FlexmojoError::Descriptor {
            message: format!(
                "Could not find {POM_FILE} in {} or any parent directory",
                start.display()
            ),
        }
    })?;
    Ok(read_project(&dir.join(POM_FILE))?)
}

/// Read and parse the POM at `path`. The project base directory is the
/// directory containing it.
pub fn read_project(path: &Path) -> Result<ProjectDescriptor, FlexmojoError> {
    let xml = std::fs::read_to_string(path)?;
    let basedir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
    let mut project = parse_project(&xml)?;
    project.basedir = basedir;
    tracing::debug!(
        path = %path.display(),
        plugins = project.build.plugins.len(),
        managed = project.build.plugin_management.len(),
        "read project descriptor"
    );
    Ok(project)
}

/// Parse a POM document. `basedir` is left empty.
pub fn parse_project(xml: &str) -> Result<ProjectDescriptor, FlexmojoError> {
    let root = parse_tree(xml)?;
    if root.name != "project" {
        return Err(FlexmojoError::Descriptor {
            message: format!("expected <project> root element, found <{}>", root.name),
        });
    }

    let artifact_id = root
        .child_value("artifactId")
        .ok_or_else(|| FlexmojoError::Descriptor {
            message: "<project> has no <artifactId>".to_string(),
        })?
        .to_string();

    let parent = root.child("parent");
    let inherited = |field: &str| {
        root.child_value(field)
            .or_else(|| parent.and_then(|p| p.child_value(field)))
            .map(str::to_string)
    };

    let mut project = ProjectDescriptor {
        basedir: Default::default(),
        group_id: inherited("groupId"),
        artifact_id,
        version: inherited("version"),
        packaging: root.child_value("packaging").map(str::to_string),
        build: BuildSection::default(),
    };

    if let Some(build) = root.child("build") {
        project.build = BuildSection {
            source_directory: build.child_value("sourceDirectory").map(str::to_string),
            output_directory: build.child_value("directory").map(str::to_string),
            final_name: build.child_value("finalName").map(str::to_string),
            plugins: plugins_of(build.child("plugins")),
            plugin_management: plugins_of(
                build
                    .child("pluginManagement")
                    .and_then(|pm| pm.child("plugins")),
            ),
        };
    }

    let properties = properties_of(&root, &project);
    interpolate_project(&mut project, &properties);
    Ok(project)
}

fn plugins_of(plugins: Option<&ConfigurationNode>) -> Vec<PluginDeclaration> {
    let Some(plugins) = plugins else {
        return Vec::new();
    };
    plugins
        .children
        .iter()
        .filter(|n| n.name == "plugin")
        .filter_map(|p| {
            let artifact_id = p.child_value("artifactId")?;
            Some(PluginDeclaration {
                group_id: p.child_value("groupId").map(str::to_string),
                artifact_id: artifact_id.to_string(),
                version: p.child_value("version").map(str::to_string),
                configuration: p.child("configuration").cloned(),
                executions: executions_of(p.child("executions")),
            })
        })
        .collect()
}

fn executions_of(executions: Option<&ConfigurationNode>) -> Vec<PluginExecution> {
    let Some(executions) = executions else {
        return Vec::new();
    };
    executions
        .children
        .iter()
        .filter(|n| n.name == "execution")
        .map(|e| PluginExecution {
            // Maven's implicit id for executions that don't name themselves.
            id: e.child_value("id").unwrap_or("default").to_string(),
            phase: e.child_value("phase").map(str::to_string),
            goals: e
                .child("goals")
                .map(|g| g.values().into_iter().map(str::to_string).collect())
                .unwrap_or_default(),
            configuration: e.child("configuration").cloned(),
        })
        .collect()
}

/// User properties from `<properties>` plus the built-in `project.*` values.
fn properties_of(
    root: &ConfigurationNode,
    project: &ProjectDescriptor,
) -> BTreeMap<String, String> {
    let mut props = BTreeMap::new();
    if let Some(properties) = root.child("properties") {
        for p in &properties.children {
            props.insert(p.name.clone(), p.value.clone().unwrap_or_default());
        }
    }

    let builtins = [
        ("project.groupId", project.group_id.clone()),
        ("project.artifactId", Some(project.artifact_id.clone())),
        ("project.version", project.version.clone()),
        ("project.packaging", project.packaging.clone()),
        ("project.build.finalName", Some(project.final_name())),
    ];
    for (key, value) in builtins {
        if let Some(v) = value {
            props.insert(key.to_string(), v);
        }
    }
    props
}

/// Resolve `${property}` references. Unknown references are left in place.
pub fn interpolate(input: &str, properties: &BTreeMap<String, String>) -> String {
    let mut result = input.to_string();
    for _ in 0..MAX_INTERPOLATION_DEPTH {
        if !result.contains("${") {
            break;
        }
        let mut out = String::with_capacity(result.len());
        let mut rest = result.as_str();
        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find('}') {
                Some(end) => {
                    let key = &after[..end];
                    match properties.get(key) {
                        Some(v) => out.push_str(v),
                        None => {
                            out.push_str("${");
                            out.push_str(key);
                            out.push('}');
                        }
                    }
                    rest = &after[end + 1..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        if out == result {
            break;
        }
        result = out;
    }
    result
}

fn interpolate_node(node: &mut ConfigurationNode, properties: &BTreeMap<String, String>) {
    if let Some(ref mut v) = node.value {
        *v = interpolate(v, properties);
    }
    for child in &mut node.children {
        interpolate_node(child, properties);
    }
}

fn interpolate_project(project: &mut ProjectDescriptor, properties: &BTreeMap<String, String>) {
    let build = &mut project.build;
    for field in [
        &mut build.source_directory,
        &mut build.output_directory,
        &mut build.final_name,
    ] {
        if let Some(v) = field {
            *v = interpolate(v, properties);
        }
    }
    for plugin in build.plugins.iter_mut().chain(build.plugin_management.iter_mut()) {
        if let Some(ref mut c) = plugin.configuration {
            interpolate_node(c, properties);
        }
        for execution in &mut plugin.executions {
            if let Some(ref mut c) = execution.configuration {
                interpolate_node(c, properties);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn interpolate_simple_and_nested() {
        let p = props(&[("flex.version", "3.0.0"), ("sdk", "flex-${flex.version}")]);
        assert_eq!(interpolate("${sdk}/lib", &p), "flex-3.0.0/lib");
    }

    #[test]
    fn interpolate_leaves_unknown_references() {
        let p = props(&[]);
        assert_eq!(interpolate("${missing}-x", &p), "${missing}-x");
        assert_eq!(interpolate("broken ${ref", &p), "broken ${ref");
    }

    #[test]
    fn interpolate_self_reference_terminates() {
        let p = props(&[("a", "${a}")]);
        assert_eq!(interpolate("${a}", &p), "${a}");
    }
}
