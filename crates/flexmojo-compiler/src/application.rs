//! The `compile-swf` goal: compile a Flex application into a SWF.

use std::path::PathBuf;

use flexmojo_core::artifact::{scope, DependencyArtifact, SWC, SWF};
use flexmojo_core::project::{ProjectDescriptor, COMPILER_PLUGIN_ARTIFACT_ID};
use flexmojo_resolver::{ArtifactClassifier, DependencyResolver};
use flexmojo_util::errors::FlexmojoError;
use flexmojo_util::progress::{status, status_info, status_warn};

use crate::mojo::Mojo;
use crate::mxmlc::{Severity, SwfCompilation};
use crate::options::CompilerOptions;
use crate::sdk::FlexSdk;
use crate::source_discovery::discover_source_file;

/// Scopes linked through `-library-path`.
pub const LIBRARY_PATH_SCOPES: &[&str] = &[scope::COMPILE, scope::MERGED];
/// Scopes linked through `-include-libraries`.
pub const INCLUDE_LIBRARY_SCOPES: &[&str] = &[scope::INTERNAL];
/// Scopes linked through `-external-library-path`.
pub const EXTERNAL_LIBRARY_SCOPES: &[&str] = &[scope::EXTERNAL, scope::RSL];

pub struct ApplicationMojo<R> {
    project: ProjectDescriptor,
    classifier: ArtifactClassifier<R>,
    sdk: FlexSdk,
    local_repository: PathBuf,
    source_file: Option<PathBuf>,
    dry_run: bool,
    compilation: Option<SwfCompilation>,
}

impl<R: DependencyResolver> ApplicationMojo<R> {
    pub fn new(
        project: ProjectDescriptor,
        resolver: R,
        sdk: FlexSdk,
        local_repository: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project,
            classifier: ArtifactClassifier::new(resolver),
            sdk,
            local_repository: local_repository.into(),
            source_file: None,
            dry_run: false,
            compilation: None,
        }
    }

    /// Compile this file instead of discovering one in the source directory.
    pub fn with_source_file(mut self, source_file: impl Into<PathBuf>) -> Self {
        self.source_file = Some(source_file.into());
        self
    }

    /// Print the `mxmlc` command instead of running it.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// The prepared invocation, available after `set_up`.
    pub fn compilation(&self) -> Option<&SwfCompilation> {
        self.compilation.as_ref()
    }

    pub fn classifier(&self) -> &ArtifactClassifier<R> {
        &self.classifier
    }

    fn library_files(&self, scopes: &[&str]) -> Result<Vec<PathBuf>, FlexmojoError> {
        Ok(self
            .classifier
            .classify(SWC, scopes)?
            .into_iter()
            .map(|a: &DependencyArtifact| self.local_repository.join(a.repository_path()))
            .collect())
    }

    fn source_file(&self) -> Result<PathBuf, FlexmojoError> {
        match self.source_file {
            Some(ref f) if f.is_absolute() => Ok(f.clone()),
            Some(ref f) => Ok(self.project.basedir.join(f)),
            None => discover_source_file(&self.project.source_directory()),
        }
    }
}

impl<R: DependencyResolver> Mojo for ApplicationMojo<R> {
    fn goal(&self) -> &'static str {
        "compile-swf"
    }

    fn set_up(&mut self) -> miette::Result<()> {
        let source_file = self.source_file()?;
        if !source_file.is_file() {
            return Err(FlexmojoError::Generic {
                message: format!("Unable to find {}", source_file.display()),
            }
            .into());
        }

        let options = match self.project.hierarchy_for(COMPILER_PLUGIN_ARTIFACT_ID) {
            Some(hierarchy) => CompilerOptions::from_hierarchy(&hierarchy)?,
            None => {
                tracing::debug!(
                    "{COMPILER_PLUGIN_ARTIFACT_ID} not declared, using default options"
                );
                CompilerOptions::default()
            }
        };

        let compilation = SwfCompilation {
            source_paths: vec![self.project.source_directory()],
            library_path: self.library_files(LIBRARY_PATH_SCOPES)?,
            include_libraries: self.library_files(INCLUDE_LIBRARY_SCOPES)?,
            external_library_path: self.library_files(EXTERNAL_LIBRARY_SCOPES)?,
            output: self
                .project
                .output_directory()
                .join(format!("{}.{SWF}", self.project.final_name())),
            options,
            source_file,
        };

        for swc in compilation
            .library_path
            .iter()
            .chain(&compilation.include_libraries)
            .chain(&compilation.external_library_path)
        {
            if !swc.is_file() {
                tracing::warn!(path = %swc.display(), "library not present in local repository");
            }
        }

        tracing::debug!(
            source = %compilation.source_file.display(),
            libraries = compilation.library_path.len(),
            included = compilation.include_libraries.len(),
            external = compilation.external_library_path.len(),
            "prepared compile-swf"
        );
        self.compilation = Some(compilation);
        Ok(())
    }

    fn run(&mut self) -> miette::Result<()> {
        let compilation = self.compilation.as_ref().ok_or_else(|| FlexmojoError::Generic {
            message: "compile-swf run before set_up".to_string(),
        })?;

        if self.dry_run {
            println!("{}", compilation.to_command(&self.sdk).command_line());
            return Ok(());
        }

        status(
            "Compiling",
            &format!(
                "{} v{}",
                self.project.artifact_id,
                self.project.version.as_deref().unwrap_or("0")
            ),
        );

        let result = compilation.invoke(&self.sdk)?;
        for d in &result.diagnostics {
            let location = match (&d.file, d.line) {
                (Some(f), Some(l)) => format!("{f}:{l}: "),
                (Some(f), None) => format!("{f}: "),
                _ => String::new(),
            };
            match d.severity {
                Severity::Warning => status_warn("warning", &format!("{location}{}", d.message)),
                Severity::Error => eprintln!("error: {location}{}", d.message),
            }
        }

        if !result.success {
            let first = result
                .diagnostics
                .iter()
                .find(|d| d.severity == Severity::Error)
                .map(|d| d.message.clone())
                .unwrap_or_default();
            return Err(FlexmojoError::Compilation { message: first }.into());
        }
        Ok(())
    }

    fn tear_down(&mut self) -> miette::Result<()> {
        if let Some(ref c) = self.compilation {
            if !self.dry_run {
                status_info("Finished", &c.output.display().to_string());
            }
        }
        Ok(())
    }
}
