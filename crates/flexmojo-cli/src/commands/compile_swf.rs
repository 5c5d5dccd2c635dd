//! `compile-swf` command implementation.

use std::path::PathBuf;

use miette::Result;

use flexmojo_compiler::application::ApplicationMojo;
use flexmojo_compiler::mojo::Mojo;
use flexmojo_compiler::sdk::FlexSdk;
use flexmojo_core::config::GlobalConfig;
use flexmojo_resolver::LockfileResolver;

pub fn exec(source_file: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let project = super::current_project()?;
    let config = GlobalConfig::load()?;

    let sdk = match FlexSdk::discover(&config) {
        Ok(sdk) => sdk,
        // a dry run only prints the command, so fall back to `mxmlc` on PATH
        Err(e) if dry_run => {
            tracing::debug!("{e}; using mxmlc from PATH");
            FlexSdk::system()
        }
        Err(e) => return Err(e.into()),
    };

    let resolver = LockfileResolver::for_project(&project);
    let mut mojo = ApplicationMojo::new(project, resolver, sdk, config.repository.local_root())
        .dry_run(dry_run);
    if let Some(file) = source_file {
        mojo = mojo.with_source_file(file);
    }

    mojo.execute()
}
