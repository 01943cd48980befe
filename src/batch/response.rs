//! Results returned for a processed batch.

use serde::{Deserialize, Serialize};

/// Payload of a successful read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody<Out> {
    Resource(Out),
    Collection(Vec<Out>),
}

/// Outcome of one logical request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponseElement<Out> {
    /// HTTP status of this operation
    pub status: u16,
    /// Path of the resource the operation touched
    pub resource_path: String,
    /// Failure message, empty on success
    pub message: String,
    /// Returned resource(s), only present for successful reads
    pub body: Option<ResponseBody<Out>>,
}

impl<Out> BatchResponseElement<Out> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outcomes of a batch, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse<Out> {
    pub responses: Vec<BatchResponseElement<Out>>,
}

impl<Out> BatchResponse<Out> {
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Statuses in request order.
    pub fn statuses(&self) -> Vec<u16> {
        self.responses.iter().map(|response| response.status).collect()
    }
}
