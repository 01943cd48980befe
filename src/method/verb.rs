//! REST verbs a method table can hold a handler for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation kinds a [`MethodTable`](crate::MethodTable) can register.
///
/// Reading a single resource and reading the whole collection are distinct
/// verbs, each with its own handler signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verb {
    /// Read one resource by id
    Get,
    /// Read the whole collection
    GetAll,
    /// Create a resource
    Post,
    /// Replace a resource
    Put,
    /// Partially update a resource
    Patch,
    /// Remove a resource
    Delete,
}

impl Verb {
    /// All verbs in table order.
    pub const ALL: [Verb; 6] = [
        Verb::Get,
        Verb::GetAll,
        Verb::Post,
        Verb::Put,
        Verb::Patch,
        Verb::Delete,
    ];

    /// Status reported when the handler for this verb succeeds.
    pub fn success_status(self) -> u16 {
        match self {
            Verb::Post => 201,
            _ => 200,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verb::Get => "GET",
            Verb::GetAll => "GET (collection)",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        };
        f.write_str(name)
    }
}
