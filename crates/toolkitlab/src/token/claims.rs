//! Display view over token claims
//!
//! Each payload entry becomes a [`Claim`] with a friendly label for the
//! registered claim names (RFC 7519 section 4.1). Temporal claims (`exp`,
//! `nbf`, `iat`) holding a number are read as Unix seconds and rendered as a
//! UTC date/time.

use serde_json::Value;
use time::OffsetDateTime;

use crate::token::JsonObject;
use crate::utils::datetime;

/// Registered claim names and their labels
const CLAIM_LABELS: &[(&str, &str)] = &[
    ("iss", "Issuer"),
    ("sub", "Subject"),
    ("aud", "Audience"),
    ("exp", "Expiration"),
    ("nbf", "Not Before"),
    ("iat", "Issued At"),
    ("jti", "JWT ID"),
];

const TEMPORAL_CLAIMS: &[&str] = &["exp", "nbf", "iat"];

/// One payload entry prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    /// Claim name as it appears in the payload
    pub key: String,
    /// Friendly label, or the key itself for unregistered claims
    pub label: String,
    /// Value rendered for display
    pub display_value: String,
    /// Set for an `exp` claim that lies in the past
    pub is_expired: bool,
}

/// Derive display claims from a payload, judging expiry against the current time
pub fn derive_claims(payload: &JsonObject) -> Vec<Claim> {
    derive_claims_at(payload, OffsetDateTime::now_utc())
}

/// Derive display claims from a payload, judging expiry against `now`
///
/// Claims keep the payload key order.
pub fn derive_claims_at(payload: &JsonObject, now: OffsetDateTime) -> Vec<Claim> {
    payload
        .iter()
        .map(|(key, value)| derive_claim(key, value, now))
        .collect()
}

fn derive_claim(key: &str, value: &Value, now: OffsetDateTime) -> Claim {
    let label = CLAIM_LABELS
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(key, |&(_, label)| label);

    let mut display_value = display_value(value);
    let mut is_expired = false;

    if TEMPORAL_CLAIMS.contains(&key) {
        if let Some(seconds) = value.as_f64() {
            match datetime::from_unix_seconds(seconds) {
                Some(instant) => {
                    if let Some(formatted) = datetime::format_date_time(instant) {
                        display_value = formatted;
                    }
                    is_expired = key == "exp" && instant < now;
                }
                None => display_value = "Invalid Date".to_string(),
            }
        }
    }

    Claim {
        key: key.to_string(),
        label: label.to_string(),
        display_value,
        is_expired,
    }
}

/// Strings verbatim, everything else as compact JSON
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
