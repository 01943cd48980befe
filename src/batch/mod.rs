//! Batch execution on top of a built method table.
//!
//! A batch carries several logical REST operations against one resource
//! collection. [`MethodTable::process`](crate::MethodTable::process) runs them
//! in order and returns one [`BatchResponseElement`] per request.
//!
//! # Module Organization
//!
//! * [`config`] - Fallback status and kind hierarchy used by the dispatcher
//! * [`request`] - Logical request types
//! * [`response`] - Per-operation outcomes
//! * [`dispatch`] - Routing, invocation and status resolution

pub mod config;
pub mod dispatch;
pub mod request;
pub mod response;


pub use config::{BatchConfig, DEFAULT_UNMAPPED_STATUS};
pub use request::{BatchRequest, BatchRequestElement, Operation};
pub use response::{BatchResponse, BatchResponseElement, ResponseBody};
