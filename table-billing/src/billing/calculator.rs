//! Table Fee Calculator
//!
//! Converts a session snapshot and a reference instant into a table fee.
//! Stateless: every call re-derives the fee from the snapshot.

use rust_decimal::prelude::*;
use shared::Timestamp;
use shared::models::{BillingMode, TableSession};
use shared::types::{MILLIS_PER_MINUTE, MILLIS_PER_SECOND};

use super::money::{add_money, minutes_at_rate, to_decimal, to_f64};
use super::policy::BillingPolicy;

/// Table fee with its intermediate values
///
/// Sub-amounts are reported rounded; `fee` is computed from the unrounded
/// values and rounded once.
#[derive(Debug, Clone, PartialEq)]
pub struct TableFeeBreakdown {
    /// Billable minutes (pauses excluded)
    pub elapsed_minutes: i64,
    /// Started blocks charged (open-ended only, 0 inside the grace period)
    pub billed_blocks: Option<i64>,
    /// Committed block price (fixed-duration) or block charge (open-ended)
    pub base_fee: f64,
    /// Minutes past the committed duration (fixed-duration only)
    pub excess_minutes: i64,
    pub excess_fee: f64,
    /// Time-based fee before the money-game floor
    pub time_fee: f64,
    /// Minimum fee from the bet, when this is a money game
    pub money_game_floor: Option<f64>,
    /// Whether the floor replaced the time-based fee
    pub floor_applied: bool,
    /// Final fee, 2 decimal places
    pub fee: f64,
}

/// The one fee implementation shared by the live timer, release and checkout
#[derive(Debug, Clone, Default)]
pub struct TableBillingCalculator {
    policy: BillingPolicy,
}

impl TableBillingCalculator {
    pub fn new(policy: BillingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &BillingPolicy {
        &self.policy
    }

    /// Effective billable minutes at `reference`
    ///
    /// While paused the clock stops at `paused_at`. A reference before
    /// `opened_at` yields 0.
    pub fn elapsed_minutes(&self, session: &TableSession, reference: Timestamp) -> i64 {
        let effective = session.paused_at.unwrap_or(reference);
        let paused_ms = session
            .accumulated_paused_secs
            .saturating_mul(MILLIS_PER_SECOND);
        let elapsed_ms = effective
            .saturating_sub(session.opened_at)
            .saturating_sub(paused_ms)
            .max(0);
        elapsed_ms / MILLIS_PER_MINUTE
    }

    /// Table fee at `reference`, rounded to 2 decimal places
    pub fn table_fee(&self, session: &TableSession, reference: Timestamp) -> f64 {
        self.fee_breakdown(session, reference).fee
    }

    /// Table fee at `reference` with intermediate values
    pub fn fee_breakdown(&self, session: &TableSession, reference: Timestamp) -> TableFeeBreakdown {
        let elapsed_minutes = self.elapsed_minutes(session, reference);
        let rate = to_decimal(session.hourly_rate);

        let mut billed_blocks = None;
        let mut excess_minutes = 0;
        let (base, excess) = match session.billing_mode {
            BillingMode::FixedDuration { target_minutes } => {
                // Flat committed block, overage metered per minute
                let target = i64::from(target_minutes);
                excess_minutes = (elapsed_minutes - target).max(0);
                (
                    minutes_at_rate(target, rate),
                    minutes_at_rate(excess_minutes, rate),
                )
            }
            BillingMode::OpenEnded => {
                let blocks = self.open_ended_blocks(elapsed_minutes);
                billed_blocks = Some(blocks);
                (
                    minutes_at_rate(blocks * self.policy.block_minutes, rate),
                    Decimal::ZERO,
                )
            }
        };
        let time_fee = add_money(base, excess);

        let floor = self.money_game_floor(session);
        let floor_applied = floor.is_some_and(|f| f > time_fee);
        let fee = match floor {
            Some(f) => time_fee.max(f),
            None => time_fee,
        };

        TableFeeBreakdown {
            elapsed_minutes,
            billed_blocks,
            base_fee: to_f64(base),
            excess_minutes,
            excess_fee: to_f64(excess),
            time_fee: to_f64(time_fee),
            money_game_floor: floor.map(to_f64),
            floor_applied,
            fee: to_f64(fee),
        }
    }

    /// Credit already paid through a fixed-duration reservation
    pub fn prepaid_credit_amount(&self, session: &TableSession) -> f64 {
        to_f64(self.prepaid_credit(session))
    }

    /// Fee still payable after prepaid credit, never negative
    pub fn net_fee_with_prepaid_credit(&self, fee: f64, session: &TableSession) -> f64 {
        let net = (to_decimal(fee) - self.prepaid_credit(session)).max(Decimal::ZERO);
        to_f64(net)
    }

    /// Started blocks for an open-ended session; 0 inside the grace period
    fn open_ended_blocks(&self, elapsed_minutes: i64) -> i64 {
        if elapsed_minutes <= self.policy.grace_minutes {
            return 0;
        }
        let block = self.policy.block_minutes.max(1);
        (elapsed_minutes + block - 1) / block
    }

    fn money_game_floor(&self, session: &TableSession) -> Option<Decimal> {
        if !session.is_money_game {
            return None;
        }
        session
            .bet_amount
            .map(|bet| to_decimal(bet) * self.policy.money_game_cut())
    }

    /// The committed block price, when the reservation paid for it
    fn prepaid_credit(&self, session: &TableSession) -> Decimal {
        match session.billing_mode.target_minutes() {
            Some(target) if session.has_prepaid_credit => {
                minutes_at_rate(i64::from(target), to_decimal(session.hourly_rate))
            }
            _ => Decimal::ZERO,
        }
    }
}

/// Effective billable minutes at `reference` under the default policy
pub fn compute_elapsed_minutes(session: &TableSession, reference: Timestamp) -> i64 {
    TableBillingCalculator::default().elapsed_minutes(session, reference)
}

/// Table fee at `reference` under the default policy
pub fn compute_table_fee(session: &TableSession, reference: Timestamp) -> f64 {
    TableBillingCalculator::default().table_fee(session, reference)
}

/// Fee minus prepaid reservation credit, floored at zero
pub fn compute_net_fee_with_prepaid_credit(fee: f64, session: &TableSession) -> f64 {
    TableBillingCalculator::default().net_fee_with_prepaid_credit(fee, session)
}
