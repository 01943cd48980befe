//! Executes a batch of logical requests against a method table.
//!
//! Each element is routed to the handler registered for its verb. Missing
//! handlers, bodies or ids are rejected before any handler runs; handler
//! failures are translated into statuses through the method's error mappings
//! and the table's [`BatchConfig`](super::BatchConfig).

use super::request::{BatchRequest, BatchRequestElement};
use super::response::{BatchResponse, BatchResponseElement, ResponseBody};
use crate::error::{HandlerError, HandlerResult};
use crate::method::{ErrorKind, Method, Verb};
use crate::table::MethodTable;
use log::{debug, info, warn};
use std::fmt;
use uuid::Uuid;

pub const METHOD_NOT_ALLOWED: u16 = 405;
pub const BAD_REQUEST: u16 = 400;

/// Successful handler result, before it is turned into a response element.
enum Success<Out, Id> {
    Body(ResponseBody<Out>),
    Created(Id),
    Empty,
}

/// Why an element did not succeed.
struct Failure {
    status: u16,
    message: String,
    kind: Option<ErrorKind>,
}

impl Failure {
    fn rejected(status: u16, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
            kind: None,
        }
    }

    fn not_allowed() -> Self {
        Self::rejected(METHOD_NOT_ALLOWED, "method not allowed")
    }

    fn missing_body() -> Self {
        Self::rejected(BAD_REQUEST, "empty request body")
    }

    fn missing_id() -> Self {
        Self::rejected(BAD_REQUEST, "null id")
    }
}

impl<In, Out, Id> MethodTable<In, Out, Id>
where
    Id: fmt::Display,
{
    /// Run every request of `request` and collect the outcomes in order.
    ///
    /// `base_path` is the collection path of the resource; element paths are
    /// derived from it and the element's id.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jebatch::{BatchRequest, BatchRequestElement, MethodTable};
    ///
    /// let table = MethodTable::<String, String, u64>::builder()
    ///     .for_get(|id| Ok(format!("user-{id}")))
    ///     .build();
    ///
    /// let request = BatchRequest::new(vec![
    ///     BatchRequestElement::get(1),
    ///     BatchRequestElement::delete(1),
    /// ]);
    /// let response = table.process("api/users", request);
    ///
    /// assert_eq!(response.statuses(), vec![200, 405]);
    /// assert_eq!(response.responses[0].resource_path, "api/users/1");
    /// ```
    pub fn process(&self, base_path: &str, request: BatchRequest<In, Id>) -> BatchResponse<Out> {
        let batch_id = Uuid::new_v4();

        info!(
            "JeBatch processing {} operation(s) under '{}' (batch: '{}')",
            request.len(),
            base_path,
            batch_id
        );

        let responses = request
            .requests
            .into_iter()
            .map(|element| self.process_element(base_path, element, &batch_id))
            .collect();

        BatchResponse { responses }
    }

    fn process_element(
        &self,
        base_path: &str,
        element: BatchRequestElement<In, Id>,
        batch_id: &Uuid,
    ) -> BatchResponseElement<Out> {
        let verb = element.verb();
        let BatchRequestElement { body, id, .. } = element;
        let id_path = id.as_ref().map(|id| format!("{base_path}/{id}"));

        let result = match verb {
            Verb::Get => self
                .invoke(self.get(), |method| {
                    let id = id.ok_or_else(Failure::missing_id)?;
                    Ok(method.call(id))
                })
                .map(|resource| Success::Body(ResponseBody::Resource(resource))),
            Verb::GetAll => self
                .invoke(self.get_all(), |method| Ok(method.call()))
                .map(|resources| Success::Body(ResponseBody::Collection(resources))),
            Verb::Post => self
                .invoke(self.post(), |method| {
                    let body = body.ok_or_else(Failure::missing_body)?;
                    Ok(method.call(body))
                })
                .map(Success::Created),
            Verb::Put | Verb::Patch => {
                let method = if verb == Verb::Put {
                    self.put()
                } else {
                    self.patch()
                };
                self.invoke(method, |method| {
                    let body = body.ok_or_else(Failure::missing_body)?;
                    let id = id.ok_or_else(Failure::missing_id)?;
                    Ok(method.call(id, body))
                })
                .map(|()| Success::Empty)
            }
            Verb::Delete => self
                .invoke(self.delete(), |method| {
                    let id = id.ok_or_else(Failure::missing_id)?;
                    Ok(method.call(id))
                })
                .map(|()| Success::Empty),
        };

        let default_path = match verb {
            Verb::GetAll | Verb::Post => base_path.to_string(),
            _ => id_path.unwrap_or_else(|| base_path.to_string()),
        };

        match result {
            Ok(success) => {
                let (resource_path, body) = match success {
                    Success::Created(new_id) => (format!("{base_path}/{new_id}"), None),
                    Success::Body(body) => (default_path, Some(body)),
                    Success::Empty => (default_path, None),
                };
                debug!(
                    "JeBatch {} on '{}' succeeded (batch: '{}')",
                    verb, resource_path, batch_id
                );
                BatchResponseElement {
                    status: verb.success_status(),
                    resource_path,
                    message: String::new(),
                    body,
                }
            }
            Err(failure) => {
                match &failure.kind {
                    Some(kind) => warn!(
                        "JeBatch {} on '{}' failed with error kind '{}', responding {} (batch: '{}')",
                        verb, default_path, kind, failure.status, batch_id
                    ),
                    None => debug!(
                        "JeBatch {} on '{}' rejected with {}: {} (batch: '{}')",
                        verb, default_path, failure.status, failure.message, batch_id
                    ),
                }
                BatchResponseElement {
                    status: failure.status,
                    resource_path: default_path,
                    message: failure.message,
                    body: None,
                }
            }
        }
    }

    /// Run `call` against `method`, rejecting unregistered verbs and mapping
    /// handler errors to statuses.
    fn invoke<H, T>(
        &self,
        method: Option<&Method<H>>,
        call: impl FnOnce(&Method<H>) -> Result<HandlerResult<T>, Failure>,
    ) -> Result<T, Failure> {
        let method = method.ok_or_else(Failure::not_allowed)?;
        call(method)?.map_err(|error| self.handler_failure(method, error))
    }

    fn handler_failure<H>(&self, method: &Method<H>, error: HandlerError) -> Failure {
        let status = method
            .status_for(error.kind(), &self.config.hierarchy)
            .unwrap_or(self.config.unmapped_status);

        Failure {
            status,
            message: error.message().to_string(),
            kind: Some(error.kind().clone()),
        }
    }
}
