//! Error mapping registration scoped to a single method.

use super::method_builder::MethodBuilder;
use crate::error::BuildResult;
use crate::method::{ErrorKind, ErrorMapping, Method};
use crate::table::MethodTable;
use log::{debug, warn};
use std::fmt;

/// Slot in the table a scoped method is stored into.
type Slot<In, Out, Id, H> = fn(&mut MethodTable<In, Out, Id>) -> &mut Option<Method<H>>;

/// Builder returned by the `for_*` calls of [`MethodBuilder`].
///
/// Collects error mappings for the method just registered. The method is
/// written into the table when the scope is closed with [`and`](Self::and)
/// or [`build`](Self::build); dropping the scope discards the registration.
///
/// Mappings can only be added while this scope is open:
///
/// ```rust,compile_fail
/// use jebatch::{ErrorKind, MethodTable};
///
/// let builder = MethodTable::<String, String, u64>::builder()
///     .with_error(ErrorKind::new("NotFound"), 404);
/// ```
#[must_use = "the method is only registered once `and()` or `build()` is called"]
pub struct ErrorMappingBuilder<In, Out, Id, H> {
    parent: MethodBuilder<In, Out, Id>,
    method: Method<H>,
    slot: Slot<In, Out, Id, H>,
}

impl<In, Out, Id, H> ErrorMappingBuilder<In, Out, Id, H> {
    pub(super) fn new(
        parent: MethodBuilder<In, Out, Id>,
        method: Method<H>,
        slot: Slot<In, Out, Id, H>,
    ) -> Self {
        Self {
            parent,
            method,
            slot,
        }
    }

    /// Map failures of `kind` to `status` for this method.
    ///
    /// Mappings are tried in the order they are added and the first match
    /// wins. Adding the same kind twice is allowed; the earlier entry shadows
    /// the later one.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::InvalidStatus` if `status` is outside `100..=599`.
    pub fn with_error(mut self, kind: impl Into<ErrorKind>, status: u16) -> BuildResult<Self> {
        let mapping = ErrorMapping::new(kind.into(), status)?;
        debug!(
            "Mapping error kind '{}' to status {} for {}",
            mapping.kind(),
            mapping.status(),
            self.method.verb()
        );
        self.method.push_mapping(mapping);
        Ok(self)
    }

    /// Close this method's mappings and return to the top-level builder.
    pub fn and(self) -> MethodBuilder<In, Out, Id> {
        let Self {
            mut parent,
            method,
            slot,
        } = self;

        let entry = slot(parent.table_mut());
        if let Some(previous) = entry.as_ref() {
            warn!(
                "{} handler registered again, replacing the earlier one and its {} error mapping(s)",
                previous.verb(),
                previous.error_mappings().len()
            );
        }
        *entry = Some(method);
        parent
    }

    /// Close this method's mappings and build the table.
    pub fn build(self) -> MethodTable<In, Out, Id> {
        self.and().build()
    }

    /// Mappings added so far, in order.
    pub fn error_mappings(&self) -> &[ErrorMapping] {
        self.method.error_mappings()
    }
}

impl<In, Out, Id, H> fmt::Debug for ErrorMappingBuilder<In, Out, Id, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorMappingBuilder")
            .field("parent", &self.parent)
            .field("method", &self.method)
            .finish()
    }
}
