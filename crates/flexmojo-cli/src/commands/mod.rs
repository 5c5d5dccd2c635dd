//! Command dispatch and handler modules.

mod classify;
mod compile_swf;
mod option;

use std::path::PathBuf;

use miette::Result;

use flexmojo_core::project::ProjectDescriptor;
use flexmojo_util::errors::FlexmojoError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::CompileSwf {
            source_file,
            dry_run,
        } => compile_swf::exec(source_file, dry_run),
        Command::ShowOption { name, plugin } => option::exec(&name, &plugin),
        Command::Classify {
            binary_type,
            scopes,
            all_scopes,
        } => classify::exec(binary_type, scopes, all_scopes),
    }
}

fn current_project() -> Result<ProjectDescriptor> {
    let cwd: PathBuf = std::env::current_dir().map_err(FlexmojoError::Io)?;
    let project = flexmojo_maven::pom::load_project(&cwd)?;
    tracing::debug!(
        basedir = %project.basedir.display(),
        artifact = %project.artifact_id,
        "loaded project"
    );
    Ok(project)
}
