//! Shared types for the table billing workspace
//!
//! Session snapshots, table-time line items, checkout results and the
//! unified error system. Every fee call site (live timer, release,
//! pay-and-close) exchanges these types.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
pub use types::Timestamp;
