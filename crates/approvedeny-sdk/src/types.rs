//! Wire types exchanged with the Approvedeny API.
//!
//! Response envelopes are deliberately loose: `data` and `metadata` stay
//! opaque (`serde_json::Value`) so the SDK never commits to a schema the
//! server may evolve. Callers that know the shape of `data` can narrow it
//! with [`SuccessResponse::data_as`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Generic decoded shape of any 200 response body.
///
/// All endpoints wrap their result the same way: a `status` marker, a
/// human-readable `message`, and an endpoint-specific `data` value. Fields
/// absent from the body decode to their empty defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Value,
}

impl SuccessResponse {
    /// Deserialize the opaque `data` value into a typed record such as
    /// [`CheckRequest`] or [`CheckRequestResponse`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decoding`] when `data` does not match `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.data.clone()).map_err(Error::Decoding)
    }
}

/// Generic decoded shape of any non-200 response body.
///
/// The server may omit `status`; only `message` is relied upon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Request body for creating a check request against a configured check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCheckRequestPayload {
    pub description: String,
    pub metadata: HashMap<String, Value>,
}

/// A check request as returned by the API.
///
/// Never constructed locally; decoded from a [`SuccessResponse`]'s `data`
/// via [`SuccessResponse::data_as`]. Timestamps are kept as the API's
/// string representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub id: String,
    pub description: String,
    pub metadata: HashMap<String, Value>,
    pub check_id: String,
    pub created_at: String,
    pub updated_at: String,
    /// Present once the check request has been approved or denied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<CheckRequestResponse>,
}

/// The approval/denial response attached to a check request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequestResponse {
    pub id: String,
    pub status: String,
    pub metadata: HashMap<String, Value>,
    pub check_request_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// The payload the Approvedeny service signs when delivering a webhook.
///
/// Field order matters: signatures are computed over the JSON encoding of
/// this struct, `event` first then `data`. See
/// [`is_valid_webhook_signature`](crate::webhook::is_valid_webhook_signature).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub event: String,
    pub data: HashMap<String, Value>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
