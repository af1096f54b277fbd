//! Errors for toolkitlab

use thiserror::Error;

/// toolkitlab Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid JWT format: expected three parts separated by '.'")]
    FormatInvalid,

    #[error("Base64 decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    // ============================================================================
    // Composition Errors
    // ============================================================================
    #[error("Section template '{0}' does not exist")]
    UnknownSection(String),

    #[error("Section '{0}' already exists")]
    DuplicateSection(String),

    #[error("Unknown license identifier '{0}'")]
    UnknownLicense(String),

    #[error("Section order must list every current section exactly once: expected {expected:?}, found {found:?}")]
    InvalidSectionOrder {
        expected: Vec<String>,
        found: Vec<String>,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Failed to load template registry: {0}")]
    RegistryLoad(String),
}

/// Result type alias for toolkitlab operations
pub type Result<T> = std::result::Result<T, Error>;
