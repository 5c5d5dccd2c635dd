//! Flex SDK discovery: locate the SDK home and its `mxmlc` launcher.

use std::path::{Path, PathBuf};

use flexmojo_core::config::{GlobalConfig, FLEX_HOME_ENV};
use flexmojo_util::errors::FlexmojoError;

/// Paths inside a Flex SDK installation.
#[derive(Debug, Clone)]
pub struct FlexSdk {
    pub home: Option<PathBuf>,
    pub mxmlc: PathBuf,
}

fn mxmlc_name() -> &'static str {
    if cfg!(windows) {
        "mxmlc.exe"
    } else {
        "mxmlc"
    }
}

impl FlexSdk {
    /// SDK rooted at `home`; `bin/mxmlc` must exist.
    pub fn from_home(home: impl Into<PathBuf>) -> Result<Self, FlexmojoError> {
        let home = home.into();
        let mxmlc = home.join("bin").join(mxmlc_name());
        if !mxmlc.is_file() {
            return Err(FlexmojoError::Sdk {
                message: format!("{} does not contain bin/{}", home.display(), mxmlc_name()),
            });
        }
        Ok(Self {
            home: Some(home),
            mxmlc,
        })
    }

    /// `mxmlc` looked up on `PATH` at spawn time.
    pub fn system() -> Self {
        Self {
            home: None,
            mxmlc: PathBuf::from(mxmlc_name()),
        }
    }

    /// Locate the SDK from `sdk.home` in the global config, else `$FLEX_HOME`.
    pub fn discover(config: &GlobalConfig) -> Result<Self, FlexmojoError> {
        match config.sdk_home() {
            Some(home) => {
                let sdk = Self::from_home(home)?;
                tracing::debug!(mxmlc = %sdk.mxmlc.display(), "found Flex SDK");
                Ok(sdk)
            }
            None => Err(FlexmojoError::Sdk {
                message: format!("no Flex SDK configured and {FLEX_HOME_ENV} is not set"),
            }),
        }
    }

    /// Directory holding the SDK's framework libraries, if the home is known.
    pub fn frameworks_dir(&self) -> Option<PathBuf> {
        self.home.as_deref().map(|h| h.join("frameworks"))
    }

    pub fn mxmlc(&self) -> &Path {
        &self.mxmlc
    }
}
