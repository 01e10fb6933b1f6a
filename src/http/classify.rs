//! Response classification — maps a received HTTP response to a typed value
//! or a typed [`ApiError`].
//!
//! Transport failures never reach this module; they belong to the retry
//! policy. Classification starts once a response has been obtained.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, ErrorDetail};
use crate::http::transport::TransportResponse;

/// Substituted when a non-2xx body is missing or unparseable.
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Error envelope the API sends on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

/// Route a received response to a typed value or a typed failure.
pub fn decode_response<T: DeserializeOwned>(resp: TransportResponse) -> Result<T, ApiError> {
    if resp.is_success() {
        decode_success(&resp.body)
    } else {
        Err(classify_failure(&resp))
    }
}

/// Deserialize a 2xx body.
///
/// An empty body is decoded from JSON `null`, so endpoints declared to
/// return `()` or `Option<_>` succeed while an endpoint expecting a domain
/// object fails loudly — never a silently-defaulted value.
pub fn decode_success<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    if body.is_empty() {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Map a non-2xx response to its [`ApiError`] variant.
///
/// The mapping is a single exhaustive match: 400 → Validation,
/// 401 → Authentication, 404 → NotFound, 429 → RateLimited, everything
/// else → Api with the raw status.
pub fn classify_failure(resp: &TransportResponse) -> ApiError {
    let envelope: ErrorEnvelope = serde_json::from_slice(&resp.body).unwrap_or(ErrorEnvelope {
        message: None,
        details: Vec::new(),
    });
    let message = envelope
        .message
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());

    match resp.status {
        400 => ApiError::Validation {
            message,
            details: envelope.details,
        },
        401 => ApiError::Authentication(message),
        404 => ApiError::NotFound(message),
        429 => ApiError::RateLimited {
            message,
            retry_after_secs: resp.header("retry-after").and_then(|v| v.parse().ok()),
        },
        status => ApiError::Api { status, message },
    }
}
