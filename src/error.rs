//! Shared error-code contract.
//!
//! Edge errors (storage ports, action decoding) expose a stable code so log
//! lines and devtools panels can be grepped without parsing messages.

/// Grepable error code for edge failures.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}
