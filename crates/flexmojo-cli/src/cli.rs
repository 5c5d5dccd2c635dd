//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flexmojo_core::project::COMPILER_PLUGIN_ARTIFACT_ID;

#[derive(Parser, Debug)]
#[command(
    name = "flexmojo",
    version,
    about = "Build Flex applications from Maven project descriptors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile the project's Flex application into a SWF
    #[command(name = "compile-swf")]
    CompileSwf {
        /// Application source file (discovered in the source directory if omitted)
        #[arg(long)]
        source_file: Option<PathBuf>,
        /// Print the mxmlc command line instead of running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the resolved value of a plugin configuration option
    #[command(name = "option")]
    ShowOption {
        /// Option name, e.g. targetPlayer
        name: String,
        /// Artifact id of the plugin declaring the option
        #[arg(long, default_value = COMPILER_PLUGIN_ARTIFACT_ID)]
        plugin: String,
    },

    /// List resolved dependencies of a binary type in the given scopes
    Classify {
        /// Binary type to select (defaults to build.binary-type in the global config)
        #[arg(short = 't', long = "type")]
        binary_type: Option<String>,
        /// Scope to select; repeatable (defaults to build.scopes in the global config)
        #[arg(short, long = "scope")]
        scopes: Vec<String>,
        /// Select every scope
        #[arg(long, conflicts_with = "scopes")]
        all_scopes: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
