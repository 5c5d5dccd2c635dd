//! Typed compiler options read from a plugin configuration hierarchy.
//!
//! The hierarchy hands back raw strings; coercing them to the types the
//! compiler needs, and rejecting values that don't fit, happens here.

use semver::Version;

use flexmojo_core::configuration::PluginConfigurationHierarchy;
use flexmojo_util::errors::FlexmojoError;

pub const TARGET_PLAYER: &str = "targetPlayer";
pub const LOCALES: &str = "locales";
pub const DEBUG: &str = "debug";

/// Options the `compile-swf` goal passes on to `mxmlc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerOptions {
    pub target_player: Option<Version>,
    pub locales: Vec<String>,
    pub debug: bool,
}

impl CompilerOptions {
    pub fn from_hierarchy(hierarchy: &PluginConfigurationHierarchy) -> Result<Self, FlexmojoError> {
        let target_player = hierarchy
            .resolve_option(TARGET_PLAYER)
            .map(|v| parse_player_version(&v))
            .transpose()?;

        let locales = match hierarchy.resolve_node(LOCALES) {
            Some(node) if !node.children.is_empty() => {
                node.values().into_iter().map(str::to_string).collect()
            }
            Some(node) => node
                .value
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
            None => Vec::new(),
        };

        let debug = match hierarchy.resolve_option(DEBUG) {
            Some(v) => parse_bool(DEBUG, &v)?,
            None => false,
        };

        Ok(Self {
            target_player,
            locales,
            debug,
        })
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(option: &str, value: &str) -> Result<bool, FlexmojoError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(FlexmojoError::Configuration {
            option: option.to_string(),
            message: format!("expected `true` or `false`, got `{other}`"),
        }),
    }
}

/// Parse a Flash Player version. `9` and `9.0` are padded to `9.0.0`.
pub fn parse_player_version(raw: &str) -> Result<Version, FlexmojoError> {
    let invalid = |message: String| FlexmojoError::Configuration {
        option: TARGET_PLAYER.to_string(),
        message,
    };

    let trimmed = raw.trim();
    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() > 3 {
        return Err(invalid(format!(
            "`{trimmed}` has more than major.minor.revision components"
        )));
    }
    let mut padded = parts.clone();
    padded.resize(3, "0");
    Version::parse(&padded.join("."))
        .map_err(|e| invalid(format!("`{trimmed}` is not a player version: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexmojo_core::configuration::{ConfigurationNode, ExecutionConfiguration};

    fn hierarchy(plugin: ConfigurationNode) -> PluginConfigurationHierarchy {
        PluginConfigurationHierarchy {
            plugin: Some(plugin),
            ..Default::default()
        }
    }

    #[test]
    fn player_version_padding() {
        assert_eq!(parse_player_version("9").unwrap(), Version::new(9, 0, 0));
        assert_eq!(parse_player_version("10.1").unwrap(), Version::new(10, 1, 0));
        assert_eq!(
            parse_player_version(" 9.0.124 ").unwrap(),
            Version::new(9, 0, 124)
        );
    }

    #[test]
    fn player_version_rejects_garbage() {
        assert!(parse_player_version("nine").is_err());
        assert!(parse_player_version("10.0.12.36").is_err());
        assert!(parse_player_version("").is_err());
    }

    #[test]
    fn defaults_when_nothing_is_declared() {
        let opts =
            CompilerOptions::from_hierarchy(&PluginConfigurationHierarchy::default()).unwrap();
        assert_eq!(opts, CompilerOptions::default());
    }

    #[test]
    fn reads_all_options() {
        let config = ConfigurationNode::new("configuration")
            .with_child(ConfigurationNode::leaf(TARGET_PLAYER, "9.0.124"))
            .with_child(ConfigurationNode::leaf(DEBUG, "TRUE"))
            .with_child(
                ConfigurationNode::new(LOCALES)
                    .with_child(ConfigurationNode::leaf("locale", "en_US"))
                    .with_child(ConfigurationNode::leaf("locale", "de_DE")),
            );
        let opts = CompilerOptions::from_hierarchy(&hierarchy(config)).unwrap();
        assert_eq!(opts.target_player, Some(Version::new(9, 0, 124)));
        assert!(opts.debug);
        assert_eq!(opts.locales, vec!["en_US", "de_DE"]);
    }

    #[test]
    fn comma_separated_locales() {
        let config = ConfigurationNode::new("configuration")
            .with_child(ConfigurationNode::leaf(LOCALES, "en_US, fr_FR"));
        let opts = CompilerOptions::from_hierarchy(&hierarchy(config)).unwrap();
        assert_eq!(opts.locales, vec!["en_US", "fr_FR"]);
    }

    #[test]
    fn execution_override_is_coerced() {
        let h = PluginConfigurationHierarchy {
            management: Some(
                ConfigurationNode::new("configuration")
                    .with_child(ConfigurationNode::leaf(TARGET_PLAYER, "9")),
            ),
            plugin: None,
            executions: vec![ExecutionConfiguration {
                id: "default".to_string(),
                configuration: Some(
                    ConfigurationNode::new("configuration")
                        .with_child(ConfigurationNode::leaf(TARGET_PLAYER, "10.0")),
                ),
            }],
        };
        let opts = CompilerOptions::from_hierarchy(&h).unwrap();
        assert_eq!(opts.target_player, Some(Version::new(10, 0, 0)));
    }

    #[test]
    fn invalid_debug_flag_names_the_option() {
        let config = ConfigurationNode::new("configuration")
            .with_child(ConfigurationNode::leaf(DEBUG, "yes"));
        let err = CompilerOptions::from_hierarchy(&hierarchy(config)).unwrap_err();
        assert!(err.to_string().contains("`debug`"));
    }
}
