//! Plugin configuration trees and layered option resolution.
//!
//! A plugin's effective configuration comes from three places, in ascending
//! specificity: the `<pluginManagement>` declaration, the build-level
//! declaration, and each `<execution>` in declaration order. An option
//! declared at a later level replaces the value from an earlier one; an
//! option that a level does not mention leaves the earlier value in place.

/// One element of a nested configuration document, e.g.
/// `<targetPlayer>9.0.124</targetPlayer>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationNode {
    pub name: String,
    pub value: Option<String>,
    pub children: Vec<ConfigurationNode>,
}

impl ConfigurationNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children: Vec::new(),
        }
    }

    /// A leaf node carrying a scalar value.
    pub fn leaf(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: ConfigurationNode) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child called `name`.
    pub fn child(&self, name: &str) -> Option<&ConfigurationNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Scalar value of the first direct child called `name`.
    pub fn child_value(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|c| c.value.as_deref())
    }

    /// Scalar values of a list-style node such as
    /// `<locales><locale>en_US</locale><locale>fr_FR</locale></locales>`.
    ///
    /// Children without a value are skipped.
    pub fn values(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|c| c.value.as_deref())
            .collect()
    }
}

/// Configuration attached to one `<execution>` of a plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionConfiguration {
    pub id: String,
    pub configuration: Option<ConfigurationNode>,
}

/// The configuration sources of one plugin, least specific first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginConfigurationHierarchy {
    pub management: Option<ConfigurationNode>,
    pub plugin: Option<ConfigurationNode>,
    pub executions: Vec<ExecutionConfiguration>,
}

impl PluginConfigurationHierarchy {
    /// Configuration roots in override order. Missing roots are skipped.
    fn layers(&self) -> impl Iterator<Item = &ConfigurationNode> {
        self.management
            .iter()
            .chain(self.plugin.iter())
            .chain(self.executions.iter().filter_map(|e| e.configuration.as_ref()))
    }

    /// Find the most specific node declaring `option_name`.
    pub fn resolve_node(&self, option_name: &str) -> Option<&ConfigurationNode> {
        let mut found = None;
        for layer in self.layers() {
            if let Some(node) = layer.child(option_name) {
                found = Some(node);
            }
        }
        found
    }

    /// Resolve the effective scalar value of `option_name`.
    ///
    /// Returns `None` when no level declares the option, and also when the
    /// winning declaration is an empty element: a present node overrides
    /// regardless of its content.
    pub fn resolve_option(&self, option_name: &str) -> Option<String> {
        let value = self
            .resolve_node(option_name)
            .and_then(|node| node.value.clone());
        tracing::trace!(option = option_name, ?value, "resolved plugin option");
        value
    }
}

/// Free-function form of [`PluginConfigurationHierarchy::resolve_option`].
pub fn resolve_option(
    hierarchy: &PluginConfigurationHierarchy,
    option_name: &str,
) -> Option<String> {
    hierarchy.resolve_option(option_name)
}
