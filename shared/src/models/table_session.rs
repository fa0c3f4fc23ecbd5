//! Table Session Model (台费计时)

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// How table time is billed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingMode {
    /// Duration unknown in advance, billed in blocks after a grace period
    OpenEnded,
    /// Pre-committed block with per-minute overage
    FixedDuration { target_minutes: u32 },
}

impl BillingMode {
    /// Committed duration in minutes (fixed-duration bookings only)
    pub fn target_minutes(&self) -> Option<u32> {
        match self {
            BillingMode::OpenEnded => None,
            BillingMode::FixedDuration { target_minutes } => Some(*target_minutes),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, BillingMode::FixedDuration { .. })
    }
}

impl Default for BillingMode {
    fn default() -> Self {
        Self::OpenEnded
    }
}

/// Session status
///
/// Running vs. paused is not a status: it is expressed by `paused_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    /// Table occupied, clock running or paused
    Active,
    /// Table freed, table-time charge frozen on a walk-in tab
    Released,
    /// Paid and closed (terminal)
    Closed,
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Table session snapshot
///
/// Owned and persisted by the caller; the billing engine only reads it
/// (lifecycle helpers mutate it in place).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableSession {
    pub id: i64,
    pub table_id: i64,
    pub table_name: String,
    /// When timing started
    pub opened_at: Timestamp,
    /// Set while suspended
    pub paused_at: Option<Timestamp>,
    /// Suspended seconds banked by earlier pause/resume cycles
    #[serde(default)]
    pub accumulated_paused_secs: i64,
    /// Per-hour rate, member discount already applied
    pub hourly_rate: f64,
    #[serde(default)]
    pub billing_mode: BillingMode,
    #[serde(default)]
    pub is_money_game: bool,
    pub bet_amount: Option<f64>,
    /// Committed block already paid through a reservation (fixed-duration only)
    #[serde(default)]
    pub has_prepaid_credit: bool,
    #[serde(default)]
    pub status: SessionStatus,
}

impl TableSession {
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Active with the clock ticking
    pub fn is_running(&self) -> bool {
        self.is_active() && !self.is_paused()
    }
}

/// Open table session payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTableSession {
    pub table_id: i64,
    pub table_name: String,
    pub hourly_rate: f64,
    #[serde(default)]
    pub billing_mode: BillingMode,
    #[serde(default)]
    pub is_money_game: bool,
    pub bet_amount: Option<f64>,
    #[serde(default)]
    pub has_prepaid_credit: bool,
}
