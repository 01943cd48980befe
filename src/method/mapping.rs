//! Failure-kind to status-code rules.

use super::kind::{ErrorKind, KindHierarchy};
use crate::error::{BuildError, BuildResult};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Status codes accepted by [`ErrorMapping::new`].
pub const HTTP_STATUS_RANGE: RangeInclusive<u16> = 100..=599;

/// One rule translating a failure kind into an HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMapping {
    kind: ErrorKind,
    status: u16,
}

impl ErrorMapping {
    /// Create a mapping, rejecting status codes outside `100..=599`.
    pub fn new(kind: ErrorKind, status: u16) -> BuildResult<Self> {
        validate_status(status)?;
        Ok(Self { kind, status })
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether a failure of `failure` kind falls under this rule.
    pub fn matches(&self, failure: &ErrorKind, hierarchy: &KindHierarchy) -> bool {
        hierarchy.is_a(failure, &self.kind)
    }
}

/// Status of the first mapping, in registration order, that matches `failure`.
///
/// Earlier mappings shadow later ones, so a broad kind registered before a
/// narrower descendant captures the descendant's failures too.
pub fn resolve_status(
    mappings: &[ErrorMapping],
    failure: &ErrorKind,
    hierarchy: &KindHierarchy,
) -> Option<u16> {
    mappings
        .iter()
        .find(|mapping| mapping.matches(failure, hierarchy))
        .map(ErrorMapping::status)
}

pub(crate) fn validate_status(status: u16) -> BuildResult<()> {
    if HTTP_STATUS_RANGE.contains(&status) {
        Ok(())
    } else {
        Err(BuildError::InvalidStatus { status })
    }
}
