use crate::error::{Error, Result};
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_TOKEN_LENGTH};
use crate::token::{DecodedToken, JsonObject};
use crate::utils::base64;

/// Token decoder configuration
///
/// Decoding only inspects a token. **The signature is never verified**: a
/// `Valid` result means the header and payload are well-formed, not that the
/// token is authentic. Do not make trust decisions based on it.
///
/// ```
/// use toolkitlab::TokenDecoder;
///
/// let decoder = TokenDecoder::new().strict_alphabet();
/// assert!(decoder.decode("   ").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TokenDecoder {
    accept_url_safe: bool,
    max_token_length: usize,
}

impl Default for TokenDecoder {
    fn default() -> Self {
        Self {
            accept_url_safe: true,
            max_token_length: MAX_TOKEN_LENGTH,
        }
    }
}

impl TokenDecoder {
    /// Create a decoder with defaults (both Base64 alphabets, 64KB limit)
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept the standard Base64 alphabet (`+` and `/`)
    ///
    /// Tokens from most issuers use the URL-safe alphabet and will be
    /// reported as invalid encoding in this mode.
    pub fn strict_alphabet(mut self) -> Self {
        self.accept_url_safe = false;
        self
    }

    /// Set the maximum accepted token length in bytes (after trimming)
    pub fn max_token_length(mut self, bytes: usize) -> Self {
        self.max_token_length = bytes;
        self
    }

    /// Decode a raw token string
    ///
    /// Returns `None` when the trimmed input is empty: there is nothing to
    /// decode yet. Any other input yields a [`DecodedToken`]; this never
    /// panics and never returns an error.
    pub fn decode(&self, raw: &str) -> Option<DecodedToken> {
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }

        let decoded = match self.decode_parts(token) {
            Ok((header, payload, signature)) => DecodedToken::Valid {
                header,
                payload,
                signature: signature.to_string(),
            },
            Err(e) => {
                tracing::debug!("token rejected: {e}");
                DecodedToken::Invalid { reason: e.into() }
            }
        };

        Some(decoded)
    }

    /// Split the token and decode header and payload
    fn decode_parts<'a>(&self, token: &'a str) -> Result<(JsonObject, JsonObject, &'a str)> {
        // Structure is reported before size
        let mut parts = token.split('.');
        let header_b64 = parts.next().ok_or(Error::FormatInvalid)?;
        let payload_b64 = parts.next().ok_or(Error::FormatInvalid)?;
        let signature_b64 = parts.next().ok_or(Error::FormatInvalid)?;
        if parts.next().is_some() {
            return Err(Error::FormatInvalid);
        }

        if token.len() > self.max_token_length {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: self.max_token_length,
            });
        }

        let header = self.decode_object(header_b64, MAX_DECODED_HEADER_SIZE, "header")?;
        let payload = self.decode_object(payload_b64, MAX_DECODED_PAYLOAD_SIZE, "payload")?;

        Ok((header, payload, signature_b64))
    }

    fn decode_object(&self, segment: &str, max_size: usize, what: &str) -> Result<JsonObject> {
        let json = base64::decode_string(segment, max_size, self.accept_url_safe)?;
        serde_json::from_str::<JsonObject>(&json)
            .map_err(|e| Error::FormatInvalidJson(format!("Failed to parse {what}: {e}")))
    }
}

/// Decode a raw token string with the default [`TokenDecoder`]
///
/// See [`TokenDecoder::decode`]. The signature is **not** verified.
pub fn decode_token(raw: &str) -> Option<DecodedToken> {
    TokenDecoder::default().decode(raw)
}
