//! Session snapshot validation
//!
//! Upstream guard for call sites that build or accept a snapshot. The
//! calculator assumes validated input and never calls this itself.

use shared::models::{BillingMode, NewTableSession, TableSession};
use shared::{AppError, ErrorCode};
use thiserror::Error;

use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// Maximum allowed hourly rate (€1,000,000)
const MAX_HOURLY_RATE: f64 = 1_000_000.0;
/// Maximum allowed bet (€1,000,000)
const MAX_BET_AMOUNT: f64 = 1_000_000.0;
/// Longest bookable fixed duration (24h)
const MAX_TARGET_MINUTES: u32 = 24 * 60;

/// Snapshot validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BillingError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} exceeds maximum allowed ({max}), got {value}")]
    TooLarge {
        field: &'static str,
        max: f64,
        value: f64,
    },

    #[error("target duration must be between 1 and 1440 minutes, got {0}")]
    InvalidTargetDuration(u32),

    #[error("prepaid credit requires a fixed-duration booking")]
    PrepaidWithoutFixedDuration,

    #[error("paused_at ({paused_at}) is before opened_at ({opened_at})")]
    PausedBeforeOpened { opened_at: i64, paused_at: i64 },

    #[error("accumulated paused time must be non-negative, got {0}s")]
    NegativePausedTime(i64),

    #[error("{reason}")]
    InvalidText { field: &'static str, reason: String },
}

impl BillingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BillingError::InvalidTargetDuration(_) | BillingError::PrepaidWithoutFixedDuration => {
                ErrorCode::InvalidBillingMode
            }
            _ => ErrorCode::ValidationFailed,
        }
    }

    /// Offending snapshot field
    pub fn field(&self) -> &'static str {
        match self {
            BillingError::NotFinite { field, .. }
            | BillingError::Negative { field, .. }
            | BillingError::TooLarge { field, .. }
            | BillingError::InvalidText { field, .. } => *field,
            BillingError::InvalidTargetDuration(_) => "target_minutes",
            BillingError::PrepaidWithoutFixedDuration => "has_prepaid_credit",
            BillingError::PausedBeforeOpened { .. } => "paused_at",
            BillingError::NegativePausedTime(_) => "accumulated_paused_secs",
        }
    }
}

impl From<BillingError> for AppError {
    fn from(err: BillingError) -> Self {
        AppError::with_message(err.code(), err.to_string()).with_detail("field", err.field())
    }
}

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field: &'static str) -> Result<(), BillingError> {
    if !value.is_finite() {
        return Err(BillingError::NotFinite { field, value });
    }
    Ok(())
}

/// Finite, non-negative and at most `max`
fn require_amount(value: f64, field: &'static str, max: f64) -> Result<(), BillingError> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(BillingError::Negative { field, value });
    }
    if value > max {
        return Err(BillingError::TooLarge { field, max, value });
    }
    Ok(())
}

/// Rules shared by new and existing sessions
fn validate_pricing(
    hourly_rate: f64,
    billing_mode: BillingMode,
    bet_amount: Option<f64>,
    has_prepaid_credit: bool,
) -> Result<(), BillingError> {
    require_amount(hourly_rate, "hourly_rate", MAX_HOURLY_RATE)?;

    if let Some(bet) = bet_amount {
        require_amount(bet, "bet_amount", MAX_BET_AMOUNT)?;
    }

    if let BillingMode::FixedDuration { target_minutes } = billing_mode
        && !(1..=MAX_TARGET_MINUTES).contains(&target_minutes)
    {
        return Err(BillingError::InvalidTargetDuration(target_minutes));
    }

    if has_prepaid_credit && !billing_mode.is_fixed() {
        return Err(BillingError::PrepaidWithoutFixedDuration);
    }

    Ok(())
}

/// Validate a session snapshot before it is billed
pub fn validate_session(session: &TableSession) -> Result<(), BillingError> {
    validate_pricing(
        session.hourly_rate,
        session.billing_mode,
        session.bet_amount,
        session.has_prepaid_credit,
    )?;

    if session.accumulated_paused_secs < 0 {
        return Err(BillingError::NegativePausedTime(
            session.accumulated_paused_secs,
        ));
    }

    if let Some(paused_at) = session.paused_at
        && paused_at < session.opened_at
    {
        return Err(BillingError::PausedBeforeOpened {
            opened_at: session.opened_at,
            paused_at,
        });
    }

    Ok(())
}

/// Validate an open-session payload
pub fn validate_new_session(input: &NewTableSession) -> Result<(), BillingError> {
    validate_required_text(&input.table_name, "table_name", MAX_NAME_LEN)
        .map_err(|e| BillingError::InvalidText {
            field: "table_name",
            reason: e.message,
        })?;
    validate_pricing(
        input.hourly_rate,
        input.billing_mode,
        input.bet_amount,
        input.has_prepaid_credit,
    )
}
