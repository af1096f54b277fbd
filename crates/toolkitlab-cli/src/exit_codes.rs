//! Process exit codes

pub const SUCCESS: u8 = 0;
pub const INVALID_TOKEN: u8 = 1; // Token decoded to `Invalid`
pub const INTERNAL_ERROR: u8 = 2; // Unreadable input or bad JSON
