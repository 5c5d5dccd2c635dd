use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all flexmojo operations.
#[derive(Debug, Error, Diagnostic)]
pub enum FlexmojoError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed project descriptor (`pom.xml`).
    #[error("Project descriptor error: {message}")]
    #[diagnostic(help("Check your pom.xml for syntax errors"))]
    Descriptor { message: String },

    /// Dependency resolution failed (missing lockfile, duplicate artifacts, etc.).
    #[error("Dependency resolution failed: {message}")]
    #[diagnostic(help("Regenerate flexmojo.lock with your dependency resolver"))]
    Resolution { message: String },

    /// The Flex compiler reported a failure.
    #[error("Compilation failed: {message}")]
    Compilation { message: String },

    /// No usable Flex SDK could be located.
    #[error("Flex SDK error: {message}")]
    #[diagnostic(help("Set `sdk.home` in ~/.flexmojo/config.toml or export FLEX_HOME"))]
    Sdk { message: String },

    /// A configuration option is declared but its value is unusable.
    #[error("Invalid configuration option `{option}`: {message}")]
    Configuration { option: String, message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

impl FlexmojoError {
    /// Shorthand for a [`FlexmojoError::Resolution`] error.
    pub fn resolution(message: impl Into<String>) -> Self {
        Self::Resolution {
            message: message.into(),
        }
    }
}
