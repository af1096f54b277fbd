//! Base64 decoding for token segments
//!
//! Thin wrapper around the `base64` crate mirroring the forgiving decoder
//! browsers expose: padding is optional and trailing bits are ignored.
//! URL-safe characters (`-`, `_`) are folded into the standard alphabet
//! unless the caller asks for the strict alphabet.

use std::borrow::Cow;

use crate::error::{Error, Result};
use base64::{
    Engine, alphabet,
    engine::{
        DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig, general_purpose::URL_SAFE_NO_PAD,
    },
};

const FORGIVING_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a segment to bytes with maximum size limit
pub(crate) fn decode_bytes(input: &str, max_size: usize, url_safe: bool) -> Result<Vec<u8>> {
    let input = if url_safe {
        normalize_url_safe(input)
    } else {
        Cow::Borrowed(input)
    };

    let result = FORGIVING_STANDARD
        .decode(input.as_bytes())
        .map_err(|e| Error::FormatInvalidBase64(format!("Base64 decode failed: {e}")))?;

    // Validate decoded size to prevent DoS attacks
    if result.len() > max_size {
        return Err(Error::FormatInvalidBase64(format!(
            "Decoded size exceeds limit: {} bytes (max: {})",
            result.len(),
            max_size
        )));
    }

    Ok(result)
}

/// Decode a segment to a UTF-8 string with size limit
pub(crate) fn decode_string(input: &str, max_size: usize, url_safe: bool) -> Result<String> {
    decode_bytes(input, max_size, url_safe).and_then(|bytes| {
        String::from_utf8(bytes).map_err(|e| Error::FormatInvalidBase64(format!("Invalid UTF-8: {e}")))
    })
}

/// Encode bytes the way token issuers do (URL-safe alphabet, no padding)
pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

fn normalize_url_safe(input: &str) -> Cow<'_, str> {
    if input.contains(['-', '_']) {
        Cow::Owned(input.replace('-', "+").replace('_', "/"))
    } else {
        Cow::Borrowed(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_invalid() {
        assert!(decode_bytes("!!!", 1000, true).is_err());
        // A single leftover symbol can never form a byte
        assert!(decode_bytes("A", 1000, true).is_err());
    }

    #[test]
    fn test_decode_padding_is_optional() {
        assert_eq!(decode_bytes("SGVsbG8", 1000, true).unwrap(), b"Hello");
        assert_eq!(decode_bytes("SGVsbG8=", 1000, true).unwrap(), b"Hello");
    }

    #[test]
    fn test_decode_with_limit() {
        assert_eq!(decode_bytes("SGVsbG8", 10, true).unwrap(), b"Hello");
        assert!(decode_bytes("SGVsbG8", 3, true).is_err());
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_bytes("", 1000, true).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_url_safe_characters() {
        // 0xfb 0xff encodes to "-_8" in the URL-safe alphabet and "+/8" in the standard one
        assert_eq!(decode_bytes("-_8", 10, true).unwrap(), vec![0xfb, 0xff]);
        assert_eq!(decode_bytes("+/8", 10, true).unwrap(), vec![0xfb, 0xff]);
        assert!(decode_bytes("-_8", 10, false).is_err());
        assert_eq!(decode_bytes("+/8", 10, false).unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_decode_string() {
        assert_eq!(decode_string("SGVsbG8", 10, true).unwrap(), "Hello");
        assert!(decode_string("SGVsbG8", 3, true).is_err());
        // 0xff is not valid UTF-8
        assert!(matches!(
            decode_string("_w", 10, true),
            Err(Error::FormatInvalidBase64(_))
        ));
    }

    #[test]
    fn test_encode_matches_issuers() {
        assert_eq!(encode(b"Hello"), "SGVsbG8");
        assert_eq!(encode([0xfbu8, 0xff]), "-_8");
    }
}
