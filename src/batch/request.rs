//! Logical requests carried inside one batch.

use crate::method::Verb;
use serde::{Deserialize, Serialize};

/// Wire-level method of a logical request.
///
/// GET is one operation on the wire; whether it reads one resource or the
/// collection depends on the presence of an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operation {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Operation {
    /// Verb whose handler serves this operation.
    pub fn verb(self, has_id: bool) -> Verb {
        match self {
            Operation::Get if has_id => Verb::Get,
            Operation::Get => Verb::GetAll,
            Operation::Post => Verb::Post,
            Operation::Put => Verb::Put,
            Operation::Patch => Verb::Patch,
            Operation::Delete => Verb::Delete,
        }
    }
}

/// One logical request: an operation with an optional body and id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequestElement<In, Id> {
    pub operation: Operation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<In>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

impl<In, Id> BatchRequestElement<In, Id> {
    pub fn new(operation: Operation, body: Option<In>, id: Option<Id>) -> Self {
        Self {
            operation,
            body,
            id,
        }
    }

    /// Read one resource.
    pub fn get(id: Id) -> Self {
        Self::new(Operation::Get, None, Some(id))
    }

    /// Read the collection.
    pub fn get_all() -> Self {
        Self::new(Operation::Get, None, None)
    }

    pub fn post(body: In) -> Self {
        Self::new(Operation::Post, Some(body), None)
    }

    pub fn put(id: Id, body: In) -> Self {
        Self::new(Operation::Put, Some(body), Some(id))
    }

    pub fn patch(id: Id, body: In) -> Self {
        Self::new(Operation::Patch, Some(body), Some(id))
    }

    pub fn delete(id: Id) -> Self {
        Self::new(Operation::Delete, None, Some(id))
    }

    /// Verb this element is routed to.
    pub fn verb(&self) -> Verb {
        self.operation.verb(self.id.is_some())
    }
}

/// Logical requests sent together in one exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest<In, Id> {
    pub requests: Vec<BatchRequestElement<In, Id>>,
}

impl<In, Id> BatchRequest<In, Id> {
    pub fn new(requests: Vec<BatchRequestElement<In, Id>>) -> Self {
        Self { requests }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl<In, Id> FromIterator<BatchRequestElement<In, Id>> for BatchRequest<In, Id> {
    fn from_iter<T: IntoIterator<Item = BatchRequestElement<In, Id>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
