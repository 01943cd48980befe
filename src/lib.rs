//! Typed registration of REST handlers for batch request processing.
//!
//! Register one handler per REST verb for a resource, map handler failure
//! kinds to HTTP status codes, and run several logical operations from a
//! single batch request against the resulting table.
//!
//! # Core Components
//!
//! - [`MethodBuilder`] - Fluent registration, one `for_*` call per verb
//! - [`ErrorMappingBuilder`] - Error-kind to status mappings for one method
//! - [`MethodTable`] - The immutable result, consumed by the dispatcher
//! - [`KindHierarchy`] - Host-supplied ancestry between error kinds
//!
//! # Quick Start
//!
//! ```rust
//! use jebatch::{BatchRequest, BatchRequestElement, ErrorKind, HandlerError, MethodTable};
//!
//! const NOT_FOUND: ErrorKind = ErrorKind::new("NotFound");
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let users = MethodTable::<String, String, u64>::builder()
//!     .for_get(|id| match id {
//!         1 => Ok("ann".to_string()),
//!         _ => Err(HandlerError::new(NOT_FOUND, format!("no user {id}"))),
//!     })
//!     .with_error(NOT_FOUND, 404)?
//!     .and()
//!     .for_delete(|_id| Ok(()))
//!     .build();
//!
//! let response = users.process(
//!     "api/users",
//!     BatchRequest::new(vec![
//!         BatchRequestElement::get(1),
//!         BatchRequestElement::get(2),
//!         BatchRequestElement::delete(1),
//!     ]),
//! );
//!
//! assert_eq!(response.statuses(), vec![200, 404, 200]);
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod method;
pub mod table;

// Re-export commonly used types for convenience
pub use batch::{
    BatchConfig, BatchRequest, BatchRequestElement, BatchResponse, BatchResponseElement,
    Operation, ResponseBody,
};
pub use builder::{ErrorMappingBuilder, MethodBuilder};
pub use error::{BuildError, BuildResult, HandlerError, HandlerResult};
pub use method::{ErrorKind, ErrorMapping, KindHierarchy, Method, Verb};
pub use table::MethodTable;
