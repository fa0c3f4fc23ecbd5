//! Table-time line item (台费明细)

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Line item receipt name for table time
pub const TABLE_TIME_ITEM_NAME: &str = "Table time";

/// Finalized table-time charge recorded on an order
///
/// At most one exists per session; it is the single source of truth for
/// the table fee once the table is released.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableTimeItem {
    pub id: i64,
    pub session_id: i64,
    pub order_id: i64,
    pub name: String,
    /// Billable minutes at finalization
    pub elapsed_minutes: i64,
    /// Rate the fee was computed with
    pub hourly_rate: f64,
    /// Gross table fee (before prepaid credit)
    pub amount: f64,
    /// Whether the money-game floor set the amount
    #[serde(default)]
    pub money_game_floor_applied: bool,
    pub recorded_at: Timestamp,
}
