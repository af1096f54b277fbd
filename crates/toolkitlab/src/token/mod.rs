//! Token inspection
//!
//! Splits a compact `header.payload.signature` token, decodes the first two
//! segments as JSON objects and exposes the result as a [`DecodedToken`].
//! Nothing in this module verifies signatures.

mod claims;
mod decoder;

use std::fmt;
use std::sync::LazyLock;

use serde_json::Value;
use time::OffsetDateTime;

use crate::error::Error;

pub use claims::{Claim, derive_claims, derive_claims_at};
pub use decoder::{TokenDecoder, decode_token};

/// A JSON object with its key order preserved
pub type JsonObject = serde_json::Map<String, Value>;

static EMPTY_OBJECT: LazyLock<JsonObject> = LazyLock::new(JsonObject::new);

/// Why a token could not be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The token does not have exactly three dot-separated segments
    MalformedStructure,
    /// Header or payload is not Base64-encoded JSON
    InvalidEncoding,
    /// The token exceeds the configured size limit
    TokenTooLarge,
}

impl ErrorKind {
    /// Human-readable message for display next to the input
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::MalformedStructure => {
                "Invalid JWT format. Must have 3 parts separated by dots."
            }
            ErrorKind::InvalidEncoding => "Invalid base64 encoding in header or payload.",
            ErrorKind::TokenTooLarge => "Token exceeds the maximum supported size.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<Error> for ErrorKind {
    fn from(error: Error) -> Self {
        match error {
            Error::TokenTooLarge { .. } => ErrorKind::TokenTooLarge,
            Error::FormatInvalid => ErrorKind::MalformedStructure,
            _ => ErrorKind::InvalidEncoding,
        }
    }
}

/// Result of decoding a non-empty token string
///
/// `Valid` only says the token is well-formed. The signature is carried as
/// the raw third segment and is **never verified**.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedToken {
    /// Header and payload decoded to JSON objects
    Valid {
        header: JsonObject,
        payload: JsonObject,
        signature: String,
    },
    /// The token could not be decoded
    Invalid { reason: ErrorKind },
}

impl DecodedToken {
    /// Whether header and payload decoded successfully
    pub fn is_valid(&self) -> bool {
        matches!(self, DecodedToken::Valid { .. })
    }

    /// The failure reason, if any
    pub fn reason(&self) -> Option<ErrorKind> {
        match self {
            DecodedToken::Valid { .. } => None,
            DecodedToken::Invalid { reason } => Some(*reason),
        }
    }

    /// The failure message, if any
    pub fn error_message(&self) -> Option<&'static str> {
        self.reason().map(ErrorKind::message)
    }

    /// Decoded header (empty object for invalid tokens)
    pub fn header(&self) -> &JsonObject {
        match self {
            DecodedToken::Valid { header, .. } => header,
            DecodedToken::Invalid { .. } => &EMPTY_OBJECT,
        }
    }

    /// Decoded payload (empty object for invalid tokens)
    pub fn payload(&self) -> &JsonObject {
        match self {
            DecodedToken::Valid { payload, .. } => payload,
            DecodedToken::Invalid { .. } => &EMPTY_OBJECT,
        }
    }

    /// Raw signature segment (empty for invalid tokens)
    pub fn signature(&self) -> &str {
        match self {
            DecodedToken::Valid { signature, .. } => signature,
            DecodedToken::Invalid { .. } => "",
        }
    }

    /// Header rendered as indented JSON, in its original key order
    pub fn header_json(&self) -> String {
        pretty_json(self.header())
    }

    /// Payload rendered as indented JSON, in its original key order
    pub fn payload_json(&self) -> String {
        pretty_json(self.payload())
    }

    /// The `alg` header value, if it is a string
    pub fn algorithm(&self) -> Option<&str> {
        self.header().get("alg").and_then(Value::as_str)
    }

    /// Claims derived from the payload (none for invalid tokens)
    pub fn claims(&self) -> Vec<Claim> {
        derive_claims(self.payload())
    }

    /// Whether the `exp` claim lies before `now`
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        derive_claims_at(self.payload(), now)
            .iter()
            .any(|claim| claim.key == "exp" && claim.is_expired)
    }
}

fn pretty_json(object: &JsonObject) -> String {
    // A map with string keys always serializes
    serde_json::to_string_pretty(object).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_token_placeholders() {
        let token = DecodedToken::Invalid {
            reason: ErrorKind::MalformedStructure,
        };

        assert!(!token.is_valid());
        assert!(token.header().is_empty());
        assert!(token.payload().is_empty());
        assert_eq!(token.signature(), "");
        assert_eq!(token.header_json(), "{}");
        assert_eq!(token.payload_json(), "{}");
        assert_eq!(token.algorithm(), None);
        assert!(token.claims().is_empty());
        assert_eq!(
            token.error_message(),
            Some("Invalid JWT format. Must have 3 parts separated by dots.")
        );
    }

    #[test]
    fn test_error_kind_from_error() {
        assert_eq!(
            ErrorKind::from(Error::FormatInvalid),
            ErrorKind::MalformedStructure
        );
        assert_eq!(
            ErrorKind::from(Error::FormatInvalidBase64("bad".into())),
            ErrorKind::InvalidEncoding
        );
        assert_eq!(
            ErrorKind::from(Error::FormatInvalidJson("bad".into())),
            ErrorKind::InvalidEncoding
        );
        assert_eq!(
            ErrorKind::from(Error::TokenTooLarge { size: 2, max: 1 }),
            ErrorKind::TokenTooLarge
        );
    }

    #[test]
    fn test_pretty_json_keeps_key_order() {
        let object: JsonObject = serde_json::from_str(r#"{"typ":"JWT","alg":"HS256"}"#).unwrap();
        let token = DecodedToken::Valid {
            header: object,
            payload: JsonObject::new(),
            signature: String::new(),
        };
        assert_eq!(
            token.header_json(),
            "{\n  \"typ\": \"JWT\",\n  \"alg\": \"HS256\"\n}"
        );
    }
}
