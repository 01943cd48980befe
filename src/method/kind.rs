//! Failure kinds and the host-supplied hierarchy relating them.
//!
//! Kinds are plain identifiers. Whether one kind is a specialisation of
//! another is decided by a [`KindHierarchy`] the host builds up front, not by
//! inspecting types at runtime.

use crate::error::{BuildError, BuildResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Identifier of a failure category, e.g. `"NotFound"` or `"Validation"`.
///
/// Usually declared as constants:
///
/// ```rust
/// use jebatch::ErrorKind;
///
/// const NOT_FOUND: ErrorKind = ErrorKind::new("NotFound");
/// assert_eq!(NOT_FOUND.as_str(), "NotFound");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorKind(Cow<'static, str>);

impl ErrorKind {
    /// Create a kind from a static name.
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a kind from a name only known at runtime.
    pub fn owned(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ErrorKind {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ErrorKind {
    fn from(name: String) -> Self {
        Self::owned(name)
    }
}

/// Child-to-parent links between error kinds.
///
/// Each kind has at most one parent and the links never form a cycle, so
/// walking the ancestors of any kind always terminates.
///
/// # Examples
///
/// ```rust
/// use jebatch::{ErrorKind, KindHierarchy};
///
/// const RUNTIME: ErrorKind = ErrorKind::new("Runtime");
/// const NOT_FOUND: ErrorKind = ErrorKind::new("NotFound");
///
/// let hierarchy = KindHierarchy::new().with_parent(NOT_FOUND, RUNTIME)?;
/// assert!(hierarchy.is_a(&NOT_FOUND, &RUNTIME));
/// assert!(!hierarchy.is_a(&RUNTIME, &NOT_FOUND));
/// # Ok::<(), jebatch::BuildError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindHierarchy {
    parents: HashMap<ErrorKind, ErrorKind>,
}

impl KindHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `parent` as the direct ancestor of `child`.
    ///
    /// Repeating an existing link is accepted. Giving `child` a second,
    /// different parent or closing a cycle is rejected.
    pub fn with_parent(mut self, child: ErrorKind, parent: ErrorKind) -> BuildResult<Self> {
        if let Some(existing) = self.parents.get(&child) {
            if *existing == parent {
                return Ok(self);
            }
            return Err(BuildError::ConflictingParent {
                child,
                existing: existing.clone(),
                requested: parent,
            });
        }

        if self.is_a(&parent, &child) {
            return Err(BuildError::KindCycle { child, parent });
        }

        self.parents.insert(child, parent);
        Ok(self)
    }

    /// Direct parent of `kind`, if one was declared.
    pub fn parent_of(&self, kind: &ErrorKind) -> Option<&ErrorKind> {
        self.parents.get(kind)
    }

    /// Ancestors of `kind`, nearest first, excluding `kind` itself.
    pub fn ancestors<'a>(&'a self, kind: &'a ErrorKind) -> impl Iterator<Item = &'a ErrorKind> + 'a {
        std::iter::successors(self.parents.get(kind), move |current| {
            self.parents.get(*current)
        })
    }

    /// Whether `kind` equals `ancestor` or descends from it.
    pub fn is_a(&self, kind: &ErrorKind, ancestor: &ErrorKind) -> bool {
        kind == ancestor || self.ancestors(kind).any(|candidate| candidate == ancestor)
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
