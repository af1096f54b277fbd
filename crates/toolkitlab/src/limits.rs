//! Size limit constants for input validation

/// Maximum length for a token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

// ============================================================================
// Decoded segment size limits
// ============================================================================

/// Maximum size for decoded header JSON (8KB)
/// Headers are typically small (< 1KB), but we allow reasonable margin
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded payload JSON (64KB)
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;

// ============================================================================
// Meta tag advisory thresholds
// ============================================================================

/// Shortest title search engines display without padding (characters)
pub(crate) const MIN_META_TITLE_LENGTH: usize = 10;

/// Longest title shown before truncation (characters)
pub(crate) const MAX_META_TITLE_LENGTH: usize = 60;

/// Shortest useful description (characters)
pub(crate) const MIN_META_DESCRIPTION_LENGTH: usize = 50;

/// Longest description shown before truncation (characters)
pub(crate) const MAX_META_DESCRIPTION_LENGTH: usize = 160;
