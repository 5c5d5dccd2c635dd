//! `mxmlc` argument building and invocation.

use std::path::PathBuf;

use flexmojo_core::config::FLEX_HOME_ENV;
use flexmojo_util::errors::FlexmojoError;
use flexmojo_util::process::CommandBuilder;

use crate::options::CompilerOptions;
use crate::sdk::FlexSdk;

/// One `mxmlc` invocation producing a SWF.
#[derive(Debug, Clone)]
pub struct SwfCompilation {
    pub source_file: PathBuf,
    pub source_paths: Vec<PathBuf>,
    /// SWCs linked into the application as needed.
    pub library_path: Vec<PathBuf>,
    /// SWCs linked in completely.
    pub include_libraries: Vec<PathBuf>,
    /// SWCs available at compile time but loaded at runtime.
    pub external_library_path: Vec<PathBuf>,
    pub output: PathBuf,
    pub options: CompilerOptions,
}

/// Severity of an `mxmlc` diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single compiler diagnostic, e.g.
/// `/src/Main.mxml(12): col: 5 Error: Access of undefined property foo.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub message: String,
}

/// Outcome of running `mxmlc`.
#[derive(Debug)]
pub struct CompilationOutput {
    pub output: PathBuf,
    pub success: bool,
    pub diagnostics: Vec<Diagnostic>,
}

fn path_arg(flag: &str, path: &std::path::Path) -> String {
    format!("{flag}{}", path.to_string_lossy())
}

impl SwfCompilation {
    /// Build the command line for `sdk`'s `mxmlc`. `FLEX_HOME` is pointed at
    /// the SDK so its launcher script finds its own frameworks.
    pub fn to_command(&self, sdk: &FlexSdk) -> CommandBuilder {
        let mut args: Vec<String> = Vec::new();

        if let Some(frameworks) = sdk.frameworks_dir() {
            args.push(path_arg("+flexlib=", &frameworks));
        }
        for dir in &self.source_paths {
            args.push(path_arg("-source-path+=", dir));
        }
        for swc in &self.library_path {
            args.push(path_arg("-library-path+=", swc));
        }
        for swc in &self.include_libraries {
            args.push(path_arg("-include-libraries+=", swc));
        }
        for swc in &self.external_library_path {
            args.push(path_arg("-external-library-path+=", swc));
        }
        if let Some(ref player) = self.options.target_player {
            args.push(format!("-target-player={player}"));
        }
        if !self.options.locales.is_empty() {
            args.push(format!("-locale={}", self.options.locales.join(",")));
        }
        args.push(format!("-debug={}", self.options.debug));
        args.push("-output".into());
        args.push(self.output.to_string_lossy().into());
        args.push(self.source_file.to_string_lossy().into());

        let cmd = CommandBuilder::new(sdk.mxmlc().to_string_lossy().to_string()).args(args);
        match sdk.home {
            Some(ref home) => cmd.env(FLEX_HOME_ENV, home.to_string_lossy().to_string()),
            None => cmd,
        }
    }

    /// Run `mxmlc` and collect its diagnostics.
    pub fn invoke(&self, sdk: &FlexSdk) -> Result<CompilationOutput, FlexmojoError> {
        if let Some(parent) = self.output.parent() {
            flexmojo_util::fs::ensure_dir(parent)?;
        }

        let output = self
            .to_command(sdk)
            .exec()
            .map_err(|e| FlexmojoError::Compilation {
                message: format!("failed to execute {}: {e}", sdk.mxmlc().display()),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let mut diagnostics = parse_diagnostics(&stdout, &stderr);

        if !output.status.success() && !diagnostics.iter().any(|d| d.severity == Severity::Error) {
            let raw = format!("{stdout}\n{stderr}").trim().to_string();
            diagnostics.push(Diagnostic {
                severity: Severity::Error,
                file: None,
                line: None,
                message: if raw.is_empty() {
                    format!("mxmlc exited with {}", output.status)
                } else {
                    raw
                },
            });
        }

        Ok(CompilationOutput {
            output: self.output.clone(),
            success: output.status.success(),
            diagnostics,
        })
    }
}

/// Extract `Error:` / `Warning:` lines from compiler output.
pub fn parse_diagnostics(stdout: &str, stderr: &str) -> Vec<Diagnostic> {
    stdout
        .lines()
        .chain(stderr.lines())
        .filter_map(|line| {
            let line = line.trim();
            if let Some(idx) = line.find("Error: ") {
                Some(parse_line(line, idx, "Error: ", Severity::Error))
            } else {
                line.find("Warning: ")
                    .map(|idx| parse_line(line, idx, "Warning: ", Severity::Warning))
            }
        })
        .collect()
}

fn parse_line(line: &str, idx: usize, marker: &str, severity: Severity) -> Diagnostic {
    let location = line[..idx].trim();
    let message = line[idx + marker.len()..].trim().to_string();

    // location: "/path/File.mxml(12): col: 5" or empty
    let (file, line_num) = match location.find('(') {
        Some(open) => {
            let file = location[..open].to_string();
            let line_num = location[open + 1..]
                .split(')')
                .next()
                .and_then(|n| n.parse::<u32>().ok());
            (Some(file), line_num)
        }
        None if !location.is_empty() => (Some(location.trim_end_matches(':').to_string()), None),
        None => (None, None),
    };

    Diagnostic {
        severity,
        file,
        line: line_num,
        message,
    }
}
