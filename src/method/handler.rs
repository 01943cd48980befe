//! Registered methods and the handler shapes each verb accepts.

use super::kind::{ErrorKind, KindHierarchy};
use super::mapping::{ErrorMapping, resolve_status};
use super::verb::Verb;
use crate::error::HandlerResult;
use std::fmt;
use std::sync::Arc;

/// Reads one resource: `Id -> Out`.
pub type GetHandler<Out, Id> = Arc<dyn Fn(Id) -> HandlerResult<Out> + Send + Sync>;

/// Reads the whole collection: `() -> Vec<Out>`.
pub type GetAllHandler<Out> = Arc<dyn Fn() -> HandlerResult<Vec<Out>> + Send + Sync>;

/// Creates a resource from a body and returns its id: `In -> Id`.
pub type PostHandler<In, Id> = Arc<dyn Fn(In) -> HandlerResult<Id> + Send + Sync>;

/// Replaces or patches a resource: `(Id, In) -> ()`. Shared by PUT and PATCH.
pub type UpdateHandler<In, Id> = Arc<dyn Fn(Id, In) -> HandlerResult<()> + Send + Sync>;

/// Removes a resource: `Id -> ()`.
pub type DeleteHandler<Id> = Arc<dyn Fn(Id) -> HandlerResult<()> + Send + Sync>;

/// A handler registered for one verb together with its error mappings.
///
/// Mappings keep their registration order; [`status_for`](Self::status_for)
/// applies them first-match.
#[derive(Clone)]
pub struct Method<H> {
    verb: Verb,
    handler: H,
    error_mappings: Vec<ErrorMapping>,
}

impl<H> Method<H> {
    pub(crate) fn new(verb: Verb, handler: H) -> Self {
        Self {
            verb,
            handler,
            error_mappings: Vec::new(),
        }
    }

    pub(crate) fn push_mapping(&mut self, mapping: ErrorMapping) {
        self.error_mappings.push(mapping);
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mappings in the order they were registered.
    pub fn error_mappings(&self) -> &[ErrorMapping] {
        &self.error_mappings
    }

    /// Status the first matching mapping assigns to `failure`, if any.
    pub fn status_for(&self, failure: &ErrorKind, hierarchy: &KindHierarchy) -> Option<u16> {
        resolve_status(&self.error_mappings, failure, hierarchy)
    }
}

impl<R> Method<Arc<dyn Fn() -> HandlerResult<R> + Send + Sync>> {
    /// Invoke a handler that takes no input.
    pub fn call(&self) -> HandlerResult<R> {
        (self.handler)()
    }
}

impl<A, R> Method<Arc<dyn Fn(A) -> HandlerResult<R> + Send + Sync>> {
    /// Invoke a single-argument handler.
    pub fn call(&self, arg: A) -> HandlerResult<R> {
        (self.handler)(arg)
    }
}

impl<A, B, R> Method<Arc<dyn Fn(A, B) -> HandlerResult<R> + Send + Sync>> {
    /// Invoke a two-argument handler.
    pub fn call(&self, first: A, second: B) -> HandlerResult<R> {
        (self.handler)(first, second)
    }
}

impl<H> fmt::Debug for Method<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("verb", &self.verb)
            .field("error_mappings", &self.error_mappings)
            .finish_non_exhaustive()
    }
}
