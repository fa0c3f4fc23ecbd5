//! Live timer estimate
//!
//! Display only. A charge that gets committed goes through
//! [`TableFeeLedger`](super::TableFeeLedger) with its own captured reference.

use shared::Timestamp;
use shared::models::{FeeEstimate, TableSession};

use crate::billing::TableBillingCalculator;

/// Estimate under the default policy
pub fn estimate(session: &TableSession, reference: Timestamp) -> FeeEstimate {
    estimate_with(&TableBillingCalculator::default(), session, reference)
}

/// Estimate with an explicit calculator
pub fn estimate_with(
    calculator: &TableBillingCalculator,
    session: &TableSession,
    reference: Timestamp,
) -> FeeEstimate {
    let breakdown = calculator.fee_breakdown(session, reference);
    FeeEstimate {
        session_id: session.id,
        elapsed_minutes: breakdown.elapsed_minutes,
        table_fee: breakdown.fee,
        prepaid_credit: calculator.prepaid_credit_amount(session),
        net_fee: calculator.net_fee_with_prepaid_credit(breakdown.fee, session),
        is_paused: session.is_paused(),
        reference,
    }
}
