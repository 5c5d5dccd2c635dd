//! Pick the application entry point from the source directory.

use std::path::{Path, PathBuf};

use flexmojo_util::errors::FlexmojoError;

/// Entry-point names recognised when the source directory holds several files.
const MAIN_FILE_NAMES: &[&str] = &["main.mxml", "main.as"];

/// Find the application source file in `source_dir`.
///
/// A lone regular file is the entry point. With several files, the one named
/// `main.mxml` or `main.as` (any case) is used, `main.mxml` taking precedence.
/// Subdirectories are ignored.
pub fn discover_source_file(source_dir: &Path) -> Result<PathBuf, FlexmojoError> {
    let files = flexmojo_util::fs::list_files(source_dir)?;

    let found = match files.as_slice() {
        [single] => Some(single.clone()),
        _ => MAIN_FILE_NAMES.iter().find_map(|main| {
            files
                .iter()
                .find(|f| {
                    f.file_name()
                        .map(|n| n.to_string_lossy().eq_ignore_ascii_case(main))
                        .unwrap_or(false)
                })
                .cloned()
        }),
    };

    found.ok_or_else(|| FlexmojoError::Generic {
        message: format!(
            "Source file not found in {} and not specified",
            source_dir.display()
        ),
    })
}
