//! Per-invocation dependency classification.
//!
//! The classifier owns a one-shot cache of the resolved dependency set. It
//! starts unresolved, and the first call that needs the set resolves it;
//! from then on every call reuses the cached set. A failed resolution leaves
//! the classifier unresolved and hands the error back to the caller.
//!
//! One classifier belongs to one build invocation and is not shared across
//! threads.

use once_cell::unsync::OnceCell;

use flexmojo_core::artifact::{DependencyArtifact, ProjectDependencySet};
use flexmojo_util::errors::FlexmojoError;

use crate::resolver::DependencyResolver;

pub struct ArtifactClassifier<R> {
    resolver: R,
    resolved: OnceCell<ProjectDependencySet>,
}

impl<R: DependencyResolver> ArtifactClassifier<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            resolved: OnceCell::new(),
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Whether the dependency set has been resolved and cached.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// The full dependency set, resolving it on first access.
    pub fn dependency_set(&self) -> Result<&ProjectDependencySet, FlexmojoError> {
        self.resolved.get_or_try_init(|| {
            tracing::debug!("resolving project dependency set");
            self.resolver.resolve()
        })
    }

    /// Artifacts of `binary_type` whose scope is one of `scopes`, in
    /// resolution order.
    ///
    /// An empty `scopes` matches nothing and does not trigger resolution.
    pub fn classify<S: AsRef<str>>(
        &self,
        binary_type: &str,
        scopes: &[S],
    ) -> Result<Vec<&DependencyArtifact>, FlexmojoError> {
        if scopes.is_empty() {
            return Ok(Vec::new());
        }
        let matched: Vec<&DependencyArtifact> = self
            .dependency_set()?
            .iter()
            .filter(|a| {
                a.binary_type == binary_type && scopes.iter().any(|s| s.as_ref() == a.scope)
            })
            .collect();
        tracing::debug!(
            binary_type,
            scopes = ?scopes.iter().map(AsRef::as_ref).collect::<Vec<_>>(),
            matched = matched.len(),
            "classified dependency artifacts"
        );
        Ok(matched)
    }

    /// Like [`classify`](Self::classify), but an unset filter (`None`)
    /// means "no classification requested": it returns `Ok(None)` without
    /// resolving anything. `Some(&[])` still matches nothing.
    pub fn classify_optional<S: AsRef<str>>(
        &self,
        binary_type: &str,
        scopes: Option<&[S]>,
    ) -> Result<Option<Vec<&DependencyArtifact>>, FlexmojoError> {
        match scopes {
            None => Ok(None),
            Some(scopes) => self.classify(binary_type, scopes).map(Some),
        }
    }
}
