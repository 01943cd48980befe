//! Top-level fluent builder with one registration call per verb.

use super::error_builder::ErrorMappingBuilder;
use crate::batch::BatchConfig;
use crate::error::{BuildResult, HandlerResult};
use crate::method::{
    DeleteHandler, GetAllHandler, GetHandler, Method, PostHandler, UpdateHandler, Verb,
};
use crate::table::MethodTable;
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Builder for a [`MethodTable`].
///
/// Each `for_*` call registers the handler for one verb and returns an
/// [`ErrorMappingBuilder`] scoped to it. Registering a verb a second time
/// replaces the earlier handler together with its mappings.
///
/// # Examples
///
/// ```rust
/// use jebatch::{ErrorKind, HandlerError, MethodTable};
///
/// const NOT_FOUND: ErrorKind = ErrorKind::new("NotFound");
/// const VALIDATION: ErrorKind = ErrorKind::new("Validation");
///
/// # fn main() -> Result<(), jebatch::BuildError> {
/// let table = MethodTable::<String, String, u64>::builder()
///     .for_get(|id| Err(HandlerError::new(NOT_FOUND, format!("no user {id}"))))
///     .with_error(NOT_FOUND, 404)?
///     .and()
///     .for_post(|body: String| if body.is_empty() { Err(VALIDATION.into()) } else { Ok(1) })
///     .with_error(VALIDATION, 400)?
///     .build();
///
/// assert_eq!(table.len(), 2);
/// # Ok(())
/// # }
/// ```
///
/// A built table cannot be changed through the builder that produced it:
///
/// ```rust,compile_fail
/// use jebatch::MethodTable;
///
/// let builder = MethodTable::<String, String, u64>::builder();
/// let table = builder.build();
/// let _ = builder.for_delete(|_id| Ok(()));
/// ```
pub struct MethodBuilder<In, Out, Id> {
    table: MethodTable<In, Out, Id>,
}

impl<In, Out, Id> MethodBuilder<In, Out, Id> {
    /// Create a builder with no verbs registered and default configuration.
    pub fn new() -> Self {
        Self {
            table: MethodTable::empty(),
        }
    }

    /// Attach dispatcher configuration.
    ///
    /// # Errors
    ///
    /// Returns a `BuildError` if the configuration does not validate.
    pub fn with_config(mut self, config: BatchConfig) -> BuildResult<Self> {
        config.validate()?;
        self.table.config = config;
        Ok(self)
    }

    /// Handle GET requests for a single resource: accepts the resource id and
    /// returns the resource.
    pub fn for_get<F>(self, getter: F) -> ErrorMappingBuilder<In, Out, Id, GetHandler<Out, Id>>
    where
        F: Fn(Id) -> HandlerResult<Out> + Send + Sync + 'static,
    {
        let handler: GetHandler<Out, Id> = Arc::new(getter);
        self.scoped(Method::new(Verb::Get, handler), |table| &mut table.get)
    }

    /// Handle GET requests for the collection: accepts nothing and returns all
    /// resources.
    pub fn for_get_all<F>(self, getter: F) -> ErrorMappingBuilder<In, Out, Id, GetAllHandler<Out>>
    where
        F: Fn() -> HandlerResult<Vec<Out>> + Send + Sync + 'static,
    {
        let handler: GetAllHandler<Out> = Arc::new(getter);
        self.scoped(Method::new(Verb::GetAll, handler), |table| {
            &mut table.get_all
        })
    }

    /// Handle POST requests: accepts a body and returns the id of the created
    /// resource.
    pub fn for_post<F>(self, poster: F) -> ErrorMappingBuilder<In, Out, Id, PostHandler<In, Id>>
    where
        F: Fn(In) -> HandlerResult<Id> + Send + Sync + 'static,
    {
        let handler: PostHandler<In, Id> = Arc::new(poster);
        self.scoped(Method::new(Verb::Post, handler), |table| &mut table.post)
    }

    /// Handle PUT requests: accepts the resource id and a body.
    pub fn for_put<F>(self, putter: F) -> ErrorMappingBuilder<In, Out, Id, UpdateHandler<In, Id>>
    where
        F: Fn(Id, In) -> HandlerResult<()> + Send + Sync + 'static,
    {
        let handler: UpdateHandler<In, Id> = Arc::new(putter);
        self.scoped(Method::new(Verb::Put, handler), |table| &mut table.put)
    }

    /// Handle PATCH requests: accepts the resource id and a body.
    pub fn for_patch<F>(
        self,
        patcher: F,
    ) -> ErrorMappingBuilder<In, Out, Id, UpdateHandler<In, Id>>
    where
        F: Fn(Id, In) -> HandlerResult<()> + Send + Sync + 'static,
    {
        let handler: UpdateHandler<In, Id> = Arc::new(patcher);
        self.scoped(Method::new(Verb::Patch, handler), |table| &mut table.patch)
    }

    /// Handle DELETE requests: accepts the resource id.
    pub fn for_delete<F>(self, deleter: F) -> ErrorMappingBuilder<In, Out, Id, DeleteHandler<Id>>
    where
        F: Fn(Id) -> HandlerResult<()> + Send + Sync + 'static,
    {
        let handler: DeleteHandler<Id> = Arc::new(deleter);
        self.scoped(Method::new(Verb::Delete, handler), |table| &mut table.delete)
    }

    /// Finish registration and return the table.
    ///
    /// Valid at any point, including before any verb was registered.
    pub fn build(self) -> MethodTable<In, Out, Id> {
        debug!(
            "Method table built with verbs {:?}",
            self.table.verbs()
        );
        self.table
    }

    fn scoped<H>(
        self,
        method: Method<H>,
        slot: fn(&mut MethodTable<In, Out, Id>) -> &mut Option<Method<H>>,
    ) -> ErrorMappingBuilder<In, Out, Id, H> {
        debug!("Registering {} handler", method.verb());
        ErrorMappingBuilder::new(self, method, slot)
    }

    pub(super) fn table_mut(&mut self) -> &mut MethodTable<In, Out, Id> {
        &mut self.table
    }
}

impl<In, Out, Id> Default for MethodBuilder<In, Out, Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In, Out, Id> Clone for MethodBuilder<In, Out, Id> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<In, Out, Id> fmt::Debug for MethodBuilder<In, Out, Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodBuilder")
            .field("table", &self.table)
            .finish()
    }
}
