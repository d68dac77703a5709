//! Twilio webhook helpers: sender normalization and request signing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha1::Sha1;

/// Sender used when a request carries no `From`.
pub const UNKNOWN_SENDER: &str = "unknown";

/// Strip the `whatsapp:` channel prefix and surrounding whitespace.
pub fn normalize_address(from: Option<&str>) -> String {
    let raw = from.unwrap_or("").trim();
    let address = raw
        .get(..9)
        .filter(|p| p.eq_ignore_ascii_case("whatsapp:"))
        .map_or(raw, |_| &raw[9..])
        .trim();
    if address.is_empty() {
        UNKNOWN_SENDER.to_string()
    } else {
        address.to_string()
    }
}

/// `X-Twilio-Signature` for a form POST: HMAC-SHA1 over the URL followed by
/// every parameter as `key + value`, sorted by key, base64-encoded.
pub fn compute_signature(auth_token: &str, url: &str, params: &[(String, String)]) -> Option<String> {
    let mut mac = Hmac::<Sha1>::new_from_slice(auth_token.as_bytes()).ok()?;
    mac.update(signing_payload(url, params).as_bytes());
    Some(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Check a received signature in constant time.
pub fn is_valid_signature(
    auth_token: &str,
    url: &str,
    params: &[(String, String)],
    signature: Option<&str>,
) -> bool {
    let signature = signature.unwrap_or("").trim();
    if signature.is_empty() || auth_token.is_empty() {
        return false;
    }
    let Ok(signature_bytes) = STANDARD.decode(signature) else {
        return false;
    };
    let Ok(mut mac) = Hmac::<Sha1>::new_from_slice(auth_token.as_bytes()) else {
        return false;
    };
    mac.update(signing_payload(url, params).as_bytes());
    mac.verify_slice(&signature_bytes).is_ok()
}

fn signing_payload(url: &str, params: &[(String, String)]) -> String {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort();
    let mut payload = url.to_string();
    for (key, value) in sorted {
        payload.push_str(key);
        payload.push_str(value);
    }
    payload
}
