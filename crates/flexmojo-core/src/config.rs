use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use flexmojo_util::errors::FlexmojoError;

use crate::artifact::{scope, SWC};

/// Environment variable pointing at a Flex SDK installation.
pub const FLEX_HOME_ENV: &str = "FLEX_HOME";

/// Global user configuration loaded from `~/.flexmojo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub sdk: SdkConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub repository: RepositoryConfig,
}

/// Local artifact repository from `[repository]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub local: Option<String>,
}

/// Flex SDK location from `[sdk]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SdkConfig {
    #[serde(default)]
    pub home: Option<String>,
}

/// Classification defaults from `[build]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_binary_type", rename = "binary-type")]
    pub binary_type: String,
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            binary_type: default_binary_type(),
            scopes: default_scopes(),
        }
    }
}

fn default_binary_type() -> String {
    SWC.to_string()
}

fn default_scopes() -> Vec<String> {
    vec![scope::COMPILE.to_string()]
}

impl GlobalConfig {
    /// Load `~/.flexmojo/config.toml`, or return defaults if it doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load a config file from `path`, or return defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no global config, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| FlexmojoError::Generic {
            message: format!("Failed to read global config: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| {
            FlexmojoError::Generic {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Flex SDK home: `sdk.home` from the config, else `$FLEX_HOME`.
    pub fn sdk_home(&self) -> Option<PathBuf> {
        self.sdk
            .home
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| std::env::var_os(FLEX_HOME_ENV).map(PathBuf::from))
    }
}

impl RepositoryConfig {
    /// Local repository root, defaulting to `~/.m2/repository`.
    pub fn local_root(&self) -> PathBuf {
        match self.local {
            Some(ref dir) => PathBuf::from(dir),
            None => home_dir().join(".m2").join("repository"),
        }
    }
}

fn home_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

/// Returns the path to the flexmojo data directory (`~/.flexmojo/`).
pub fn dirs_path() -> PathBuf {
    home_dir().join(".flexmojo")
}
