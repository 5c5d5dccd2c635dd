//! `classify` command implementation.

use miette::Result;

use flexmojo_core::config::GlobalConfig;
use flexmojo_resolver::{ArtifactClassifier, LockfileResolver};

pub fn exec(binary_type: Option<String>, scopes: Vec<String>, all_scopes: bool) -> Result<()> {
    let project = super::current_project()?;
    let config = GlobalConfig::load()?;

    let binary_type = binary_type.unwrap_or(config.build.binary_type);
    let scopes = if scopes.is_empty() {
        config.build.scopes
    } else {
        scopes
    };
    let filter = if all_scopes { None } else { Some(scopes.as_slice()) };

    let classifier = ArtifactClassifier::new(LockfileResolver::for_project(&project));
    let artifacts = match classifier.classify_optional(&binary_type, filter)? {
        Some(matched) => matched,
        None => classifier
            .dependency_set()?
            .iter()
            .filter(|a| a.binary_type == binary_type)
            .collect(),
    };

    for artifact in artifacts {
        println!("{} ({})", artifact.id, artifact.scope);
    }

    Ok(())
}
