//! Invocation response envelope.

use serde::{Deserialize, Serialize};

/// HTTP-style response returned to the hosting runtime on success.
///
/// Failures never build one of these; they surface as errors to the
/// runtime instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    /// HTTP-style status code.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Response body, already JSON-encoded.
    pub body: String,
}

impl HandlerResponse {
    /// Status 200 with `message` JSON-encoded as the body.
    pub fn ok(message: &str) -> Self {
        Self {
            status_code: 200,
            body: serde_json::Value::String(message.to_owned()).to_string(),
        }
    }
}
