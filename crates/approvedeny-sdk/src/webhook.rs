//! Webhook signature verification.
//!
//! When a check request receives a response, the Approvedeny service
//! delivers a webhook to the caller's own endpoint, signed with
//! HMAC-SHA256 over the JSON-encoded payload. This module verifies those
//! signatures locally; nothing here talks to the network.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::types::WebhookPayload;

type HmacSha256 = Hmac<Sha256>;

/// Verify the HMAC-SHA256 signature of an inbound webhook.
///
/// Serializes `payload` to JSON (`event` first, then `data`, matching the
/// encoding the service signs), computes HMAC-SHA256 with `encryption_key`
/// as the key, renders the digest as lowercase hex, and compares it against
/// `signature` in constant time. The match is exact and case-sensitive.
///
/// Never fails: any serialization or keying problem verifies as `false`.
///
/// The comparison only holds if the signer produced byte-identical JSON;
/// key order inside `data` follows the map's iteration order, so payloads
/// should be passed through as received rather than rebuilt.
///
/// # Examples
///
/// ```
/// use approvedeny_sdk::{is_valid_webhook_signature, WebhookPayload};
/// use std::collections::HashMap;
///
/// let payload = WebhookPayload {
///     event: "response.created".to_string(),
///     data: HashMap::new(),
/// };
///
/// // Signature extracted from the webhook request's header.
/// let valid = is_valid_webhook_signature("shared_secret", "deadbeef", &payload);
/// assert!(!valid);
/// ```
pub fn is_valid_webhook_signature(
    encryption_key: &str,
    signature: &str,
    payload: &WebhookPayload,
) -> bool {
    let encoded = match serde_json::to_vec(payload) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    // HMAC-SHA256 accepts keys of any length; this cannot fail in practice.
    let mut mac = match HmacSha256::new_from_slice(encryption_key.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(&encoded);

    let expected = hex::encode(mac.finalize().into_bytes());

    constant_time_eq(expected.as_bytes(), signature.as_bytes())
}

/// Constant-time comparison to prevent timing attacks.
///
/// The length check is safe to do in non-constant time.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;
