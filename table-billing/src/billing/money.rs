//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for storage/serialization. Rounding happens once, on the way out.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Minutes per hour
pub(crate) const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Convert f64 to Decimal for calculation
///
/// Inputs should be pre-validated at the boundary (`validate_session`).
/// A non-finite value that slips through is logged and treated as zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in table fee calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round to 2 decimal places, midpoint away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Price of `minutes` at a per-hour `rate`
///
/// Multiplies before dividing so rates like 100/h keep full precision.
/// An unvalidated rate large enough to overflow yields zero.
#[inline]
pub(crate) fn minutes_at_rate(minutes: i64, rate: Decimal) -> Decimal {
    Decimal::from(minutes)
        .checked_mul(rate)
        .map(|v| v / MINUTES_PER_HOUR)
        .unwrap_or_default()
}

/// Add two amounts; overflow yields zero
#[inline]
pub(crate) fn add_money(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_default()
}

/// Sum line totals with decimal precision
pub fn sum_amounts(amounts: &[f64]) -> Decimal {
    amounts
        .iter()
        .fold(Decimal::ZERO, |acc, a| add_money(acc, to_decimal(*a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);

        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_half_up_rounding() {
        assert_eq!(to_f64(to_decimal(10.005)), 10.01);
        assert_eq!(to_f64(to_decimal(10.004)), 10.0);
        assert_eq!(to_f64(Decimal::new(125, 3)), 0.13);
    }

    #[test]
    fn test_minutes_at_rate_keeps_precision() {
        // 1 minute at 100/h = 1.6666..., 3 minutes = exactly 5.00
        assert_eq!(to_f64(minutes_at_rate(3, to_decimal(100.0))), 5.0);
        assert_eq!(to_f64(minutes_at_rate(1, to_decimal(100.0))), 1.67);
    }

    #[test]
    fn test_minutes_at_rate_overflow_is_zero() {
        let huge = to_decimal(1e27);
        assert_eq!(minutes_at_rate(i64::MAX, huge), Decimal::ZERO);
        assert_eq!(add_money(Decimal::MAX, Decimal::MAX), Decimal::ZERO);
    }

    #[test]
    fn test_sum_amounts() {
        let total = sum_amounts(&[10.99, 10.99, 10.99]);
        assert_eq!(to_f64(total), 32.97);
        assert_eq!(sum_amounts(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_non_finite_falls_back_to_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }
}
