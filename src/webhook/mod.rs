//! Webhook authenticity verification and event parsing.
//!
//! ## Security Model
//!
//! The platform signs every webhook delivery with HMAC-SHA256 over the raw
//! request body and sends the digest in the `X-XRPL-Sale-Signature` header
//! as `sha256=<lowercase hex>`. Receivers MUST verify the signature before
//! parsing the payload — [`construct_event`] enforces that order; an
//! unverified payload never reaches the deserializer.
//!
//! Signature comparison is constant-time with respect to secret-dependent
//! data. The header is matched case-insensitively.

#[cfg(feature = "http")]
pub mod client;

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::WebhookError;

/// Header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "X-XRPL-Sale-Signature";

/// Prefix on the rendered digest.
const SIGNATURE_PREFIX: &str = "sha256=";

/// An inbound platform notification, constructed only after successful
/// signature verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WebhookEvent {
    /// Event type tag, e.g. `"investment.created"` or `"project.launched"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Opaque structured payload; shape depends on the event type.
    pub data: serde_json::Value,
}

/// Check a webhook signature against the raw payload bytes.
///
/// Returns `true` iff `signature_header` equals
/// `"sha256=" + hex(HMAC-SHA256(secret, payload))`, compared
/// case-insensitively. Returns `false` (never errors) for an empty secret.
pub fn verify_signature(payload: &[u8], signature_header: &str, secret: &str) -> bool {
    if secret.is_empty() {
        return false;
    }

    let mut mac = match Hmac::<Sha256>::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(payload);
    let expected = format!("{}{}", SIGNATURE_PREFIX, hex::encode(mac.finalize().into_bytes()));

    // The header is attacker-supplied, so lowercasing it leaks nothing;
    // the comparison against the secret-derived digest is constant-time.
    let received = signature_header.to_ascii_lowercase();
    constant_time_eq(received.as_bytes(), expected.as_bytes())
}

/// Verify, then parse. The only supported way to turn an inbound payload
/// into a [`WebhookEvent`].
pub fn construct_event(
    payload: &[u8],
    signature_header: &str,
    secret: &str,
) -> Result<WebhookEvent, WebhookError> {
    if secret.is_empty() {
        return Err(WebhookError::MissingSecret);
    }
    if !verify_signature(payload, signature_header, secret) {
        return Err(WebhookError::InvalidSignature);
    }
    Ok(serde_json::from_slice(payload)?)
}

/// Constant-time comparison.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).fold(0, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test_secret";
    const PAYLOAD: &[u8] = br#"{"type":"investment.created","data":{"id":"inv_1"}}"#;

    fn sign(payload: &[u8], secret: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(payload);
        format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
    }

    #[test]
    fn test_valid_signature_verifies() {
        let sig = sign(PAYLOAD, SECRET);
        assert!(verify_signature(PAYLOAD, &sig, SECRET));
    }

    #[test]
    fn test_comparison_is_case_insensitive() {
        let sig = sign(PAYLOAD, SECRET).to_ascii_uppercase();
        assert!(verify_signature(PAYLOAD, &sig, SECRET));
    }

    #[test]
    fn test_mutated_inputs_fail() {
        let sig = sign(PAYLOAD, SECRET);

        let mut tampered_payload = PAYLOAD.to_vec();
        tampered_payload[10] ^= 1;
        assert!(!verify_signature(&tampered_payload, &sig, SECRET));

        let mut tampered_sig = sig.clone().into_bytes();
        let last = tampered_sig.len() - 1;
        tampered_sig[last] = if tampered_sig[last] == b'0' { b'1' } else { b'0' };
        assert!(!verify_signature(
            PAYLOAD,
            std::str::from_utf8(&tampered_sig).unwrap(),
            SECRET
        ));

        assert!(!verify_signature(PAYLOAD, &sig, "whsec_other_secret"));
    }

    #[test]
    fn test_empty_secret_never_verifies() {
        let sig = sign(PAYLOAD, SECRET);
        assert!(!verify_signature(PAYLOAD, &sig, ""));
    }

    #[test]
    fn test_missing_prefix_fails() {
        let sig = sign(PAYLOAD, SECRET);
        assert!(!verify_signature(PAYLOAD, &sig[7..], SECRET));
    }

    #[test]
    fn test_construct_event_parses_after_verification() {
        let sig = sign(PAYLOAD, SECRET);
        let event = construct_event(PAYLOAD, &sig, SECRET).unwrap();
        assert_eq!(event.event_type, "investment.created");
        assert_eq!(event.data["id"], "inv_1");
    }

    #[test]
    fn test_construct_event_rejects_before_parsing() {
        let err = construct_event(PAYLOAD, "sha256=deadbeef", SECRET).unwrap_err();
        assert!(matches!(err, WebhookError::InvalidSignature));

        let err = construct_event(PAYLOAD, &sign(PAYLOAD, SECRET), "").unwrap_err();
        assert!(matches!(err, WebhookError::MissingSecret));
    }

    #[test]
    fn test_construct_event_surfaces_parse_errors() {
        let bad = b"{not json";
        let sig = sign(bad, SECRET);
        let err = construct_event(bad, &sig, SECRET).unwrap_err();
        assert!(matches!(err, WebhookError::Parse(_)));
    }
}
