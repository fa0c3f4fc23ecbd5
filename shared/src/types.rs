//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Milliseconds per second
pub const MILLIS_PER_SECOND: i64 = 1_000;

/// Milliseconds per minute
pub const MILLIS_PER_MINUTE: i64 = 60_000;
