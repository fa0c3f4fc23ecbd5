//! Data models
//!
//! Shared between the billing engine and its call sites.
//! All IDs are `i64` (snowflake), all timestamps Unix millis.

pub mod checkout;
pub mod table_session;
pub mod table_time_item;

// Re-exports
pub use checkout::*;
pub use table_session::*;
pub use table_time_item::*;
