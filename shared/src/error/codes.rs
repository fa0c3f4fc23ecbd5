//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 5xxx: Payment errors
//! - 7xxx: Table and session errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 5xxx: Payment ====================
    /// Invalid monetary amount
    InvalidAmount = 5006,

    // ==================== 7xxx: Table ====================
    /// Session is not active
    SessionNotActive = 7402,
    /// Session is already paused
    SessionAlreadyPaused = 7403,
    /// Session is not paused
    SessionNotPaused = 7404,
    /// Session has already been closed
    SessionAlreadyClosed = 7405,
    /// Billing mode does not allow this operation
    InvalidBillingMode = 7406,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",

            // Payment
            ErrorCode::InvalidAmount => "Invalid amount",

            // Table
            ErrorCode::SessionNotActive => "Table session is not active",
            ErrorCode::SessionAlreadyPaused => "Table session is already paused",
            ErrorCode::SessionNotPaused => "Table session is not paused",
            ErrorCode::SessionAlreadyClosed => "Table session has already been closed",
            ErrorCode::InvalidBillingMode => "Operation not allowed for this billing mode",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),

            // Payment
            5006 => Ok(ErrorCode::InvalidAmount),

            // Table
            7402 => Ok(ErrorCode::SessionNotActive),
            7403 => Ok(ErrorCode::SessionAlreadyPaused),
            7404 => Ok(ErrorCode::SessionNotPaused),
            7405 => Ok(ErrorCode::SessionAlreadyClosed),
            7406 => Ok(ErrorCode::InvalidBillingMode),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::InvalidAmount.code(), 5006);
        assert_eq!(ErrorCode::SessionNotActive.code(), 7402);
        assert_eq!(ErrorCode::SessionAlreadyClosed.code(), 7405);
        assert_eq!(ErrorCode::InvalidBillingMode.code(), 7406);
    }

    #[test]
    fn test_try_from_known_and_unknown() {
        assert_eq!(ErrorCode::try_from(7403), Ok(ErrorCode::SessionAlreadyPaused));
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ErrorCode::SessionNotPaused).unwrap();
        assert_eq!(json, "7404");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCode::SessionNotPaused);
    }
}
