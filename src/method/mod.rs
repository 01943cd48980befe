//! Data model of a method table.
//!
//! # Module Organization
//!
//! * [`verb`] - The REST verbs a table can hold handlers for
//! * [`kind`] - Failure kinds and the host-supplied kind hierarchy
//! * [`mapping`] - Kind-to-status rules and first-match resolution
//! * [`handler`] - Per-verb handler shapes and the [`Method`] record

pub mod handler;
pub mod kind;
pub mod mapping;
pub mod verb;

pub use handler::{DeleteHandler, GetAllHandler, GetHandler, Method, PostHandler, UpdateHandler};
pub use kind::{ErrorKind, KindHierarchy};
pub use mapping::{ErrorMapping, HTTP_STATUS_RANGE, resolve_status};
pub use verb::Verb;
