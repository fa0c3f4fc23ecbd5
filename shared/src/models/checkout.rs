//! Fee estimate and checkout results

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Live timer figure, display only
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeeEstimate {
    pub session_id: i64,
    pub elapsed_minutes: i64,
    pub table_fee: f64,
    pub prepaid_credit: f64,
    /// Table fee still payable after prepaid credit
    pub net_fee: f64,
    pub is_paused: bool,
    pub reference: Timestamp,
}

/// Amount due when a session is paid and closed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    pub session_id: i64,
    pub elapsed_minutes: i64,
    /// Gross table fee
    pub table_fee: f64,
    pub prepaid_credit: f64,
    pub net_table_fee: f64,
    pub items_total: f64,
    pub amount_due: f64,
    /// True when the fee came from the table-time item recorded at release
    pub from_release: bool,
    pub closed_at: Timestamp,
}
