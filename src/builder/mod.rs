//! Fluent registration API.
//!
//! # Module Organization
//!
//! * [`method_builder`] - [`MethodBuilder`], one `for_*` call per verb
//! * [`error_builder`] - [`ErrorMappingBuilder`], error mappings scoped to one method
//! * `tests` - Registration scenarios and policy tests
//!
//! A registration session moves from an open [`MethodBuilder`] into an
//! [`ErrorMappingBuilder`] for each verb and back via `and()`, ending with
//! `build()`. Every step consumes the previous value, so the type system
//! rules out adding mappings outside a method scope or touching a table
//! after it was built.

pub mod error_builder;
pub mod method_builder;


pub use error_builder::ErrorMappingBuilder;
pub use method_builder::MethodBuilder;
