//! Member rate adjustment
//!
//! Sessions carry the rate after the member discount. Call sites apply
//! this once when building the snapshot; the calculator never does.

use rust_decimal::prelude::*;

use super::money::{to_decimal, to_f64};

/// Hourly rate after a member's percentage discount
///
/// The percentage is clamped to [0, 100]; `None` or a non-finite value
/// leaves the rate unchanged.
pub fn member_hourly_rate(base_rate: f64, discount_percent: Option<f64>) -> f64 {
    let rate = to_decimal(base_rate);
    let pct = match discount_percent {
        Some(p) if p.is_finite() => to_decimal(p.clamp(0.0, 100.0)),
        _ => return to_f64(rate),
    };
    to_f64(rate * (Decimal::ONE - pct / Decimal::ONE_HUNDRED))
}
