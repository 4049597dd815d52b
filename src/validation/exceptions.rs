//! # Traversal Exceptions
//!
//! Named directories the walk deliberately skips. Kept in one table so that every
//! exception to the convention is visible in a single place.

/// Where in the tree an exception applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionScope {
    /// Immediate subdirectory of `kubernetes/clusters/<cluster>/`
    ClusterEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalException {
    pub scope: ExceptionScope,
    pub name: &'static str,
    pub reason: &'static str,
}

pub const TRAVERSAL_EXCEPTIONS: &[TraversalException] = &[TraversalException {
    scope: ExceptionScope::ClusterEntry,
    name: "bootstrap",
    reason: "applied once by hand to bring the cluster up; not a Kustomize root",
}];

/// Exception covering `name` in `scope`, if any
pub fn exemption(scope: ExceptionScope, name: &str) -> Option<&'static TraversalException> {
    TRAVERSAL_EXCEPTIONS
        .iter()
        .find(|exception| exception.scope == scope && exception.name == name)
}
