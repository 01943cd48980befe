//! Error types for method table construction and handler execution.
//!
//! Two families live here: [`BuildError`] covers mistakes made while
//! configuring a [`MethodBuilder`](crate::MethodBuilder), and [`HandlerError`]
//! is the failure value a registered handler hands back to the dispatcher.

use crate::method::ErrorKind;
use std::fmt;

/// Errors that can occur while building a method table.
///
/// These errors are programming errors in the configuration code and are
/// reported at the call that introduced them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Status code outside the HTTP range
    #[error("Invalid HTTP status code {status}, expected a value in 100..=599")]
    InvalidStatus { status: u16 },

    /// Invalid configuration provided
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Parent link would make the kind hierarchy cyclic
    #[error("Error kind '{parent}' cannot be the parent of '{child}': hierarchy would contain a cycle")]
    KindCycle { child: ErrorKind, parent: ErrorKind },

    /// Child kind already has a different parent
    #[error("Error kind '{child}' already has parent '{existing}', cannot re-parent to '{requested}'")]
    ConflictingParent {
        child: ErrorKind,
        existing: ErrorKind,
        requested: ErrorKind,
    },
}

impl BuildError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Failure returned by a registered handler.
///
/// The dispatcher looks the [`kind`](Self::kind) up in the method's error
/// mappings to select a status code and reports the message verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerError {
    kind: ErrorKind,
    message: String,
}

impl HandlerError {
    /// Create a handler failure of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Failure category used for status mapping.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Human-readable description, empty when none was given.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

impl std::error::Error for HandlerError {}

impl From<ErrorKind> for HandlerError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind, String::new())
    }
}

// Result type aliases for convenience
pub type BuildResult<T> = Result<T, BuildError>;
pub type HandlerResult<T> = Result<T, HandlerError>;
