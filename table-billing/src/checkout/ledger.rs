//! Table fee ledger
//!
//! Records the finalized table-time item and the checkout of each session.
//! Finalization is serialized per session through the map entry lock, so
//! two terminals holding copies of the same snapshot cannot both record a
//! fee or both close the tab.

use dashmap::DashMap;
use shared::Timestamp;
use shared::models::{
    CheckoutSummary, FeeEstimate, SessionStatus, TABLE_TIME_ITEM_NAME, TableSession,
    TableTimeItem,
};
use shared::util::snowflake_id;

use super::estimate::estimate_with;
use crate::billing::money::{add_money, sum_amounts, to_decimal, to_f64};
use crate::billing::{TableBillingCalculator, validate_session};
use crate::core::Config;
use crate::sessions::{SessionError, freeze};

/// Everything finalized for one session
///
/// Release and checkout both read and write this under one entry lock.
#[derive(Debug, Clone, Default)]
struct Finalization {
    item: Option<TableTimeItem>,
    checkout: Option<CheckoutSummary>,
}

/// Per-session finalization registry
#[derive(Debug, Default)]
pub struct TableFeeLedger {
    calculator: TableBillingCalculator,
    /// session_id → recorded item and checkout
    records: DashMap<i64, Finalization>,
}

impl TableFeeLedger {
    pub fn new(calculator: TableBillingCalculator) -> Self {
        Self {
            calculator,
            records: DashMap::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(TableBillingCalculator::new(config.policy()))
    }

    pub fn calculator(&self) -> &TableBillingCalculator {
        &self.calculator
    }

    /// Live display figure
    ///
    /// Once the table is released the recorded item is shown instead of a
    /// recomputed fee.
    pub fn estimate(&self, session: &TableSession, reference: Timestamp) -> FeeEstimate {
        let mut estimate = estimate_with(&self.calculator, session, reference);
        if let Some(item) = self.table_time_item(session.id) {
            estimate.elapsed_minutes = item.elapsed_minutes;
            estimate.table_fee = item.amount;
            estimate.net_fee = self
                .calculator
                .net_fee_with_prepaid_credit(item.amount, session);
        }
        estimate
    }

    /// Release the table: record the table-time item once and freeze the clock
    ///
    /// Idempotent: a session that already has an item gets that item back
    /// and no fee is recomputed.
    pub fn release(
        &self,
        session: &mut TableSession,
        order_id: i64,
        reference: Timestamp,
    ) -> Result<TableTimeItem, SessionError> {
        if session.status == SessionStatus::Closed {
            return Err(SessionError::AlreadyClosed(session.id));
        }

        let mut record = self.records.entry(session.id).or_default();
        if record.checkout.is_some() {
            tracing::warn!(session_id = session.id, "Release rejected: already closed");
            return Err(SessionError::AlreadyClosed(session.id));
        }

        let recorded = record.item.clone();
        let item = match recorded {
            Some(item) => {
                tracing::debug!(
                    session_id = session.id,
                    item_id = item.id,
                    "Table time already recorded, reusing item"
                );
                item
            }
            None => {
                if !session.is_active() {
                    return Err(SessionError::NotActive {
                        session_id: session.id,
                        status: session.status,
                    });
                }
                validate_session(session)?;

                let breakdown = self.calculator.fee_breakdown(session, reference);
                let item = TableTimeItem {
                    id: snowflake_id(),
                    session_id: session.id,
                    order_id,
                    name: TABLE_TIME_ITEM_NAME.to_string(),
                    elapsed_minutes: breakdown.elapsed_minutes,
                    hourly_rate: session.hourly_rate,
                    amount: breakdown.fee,
                    money_game_floor_applied: breakdown.floor_applied,
                    recorded_at: reference,
                };
                record.item = Some(item.clone());

                tracing::info!(
                    session_id = session.id,
                    order_id,
                    elapsed_minutes = item.elapsed_minutes,
                    amount = item.amount,
                    floor_applied = item.money_game_floor_applied,
                    "Table released, table time recorded"
                );
                item
            }
        };
        drop(record);

        freeze(session, item.recorded_at);
        session.status = SessionStatus::Released;
        Ok(item)
    }

    /// Pay and close: compute the amount due once and mark the session closed
    ///
    /// Uses the item recorded at release when there is one; otherwise the
    /// fee is computed here at `reference`.
    pub fn pay_and_close(
        &self,
        session: &mut TableSession,
        item_totals: &[f64],
        reference: Timestamp,
    ) -> Result<CheckoutSummary, SessionError> {
        validate_item_totals(item_totals)?;
        if session.status == SessionStatus::Closed {
            return Err(SessionError::AlreadyClosed(session.id));
        }

        let mut record = self.records.entry(session.id).or_default();
        if record.checkout.is_some() {
            tracing::warn!(session_id = session.id, "Close rejected: already closed");
            return Err(SessionError::AlreadyClosed(session.id));
        }

        let from_release = record.item.is_some();
        let (table_fee, elapsed_minutes) = match record.item.as_ref() {
            Some(item) => (item.amount, item.elapsed_minutes),
            None => {
                validate_session(session)?;
                let breakdown = self.calculator.fee_breakdown(session, reference);
                (breakdown.fee, breakdown.elapsed_minutes)
            }
        };

        let prepaid_credit = self.calculator.prepaid_credit_amount(session);
        let net_table_fee = self
            .calculator
            .net_fee_with_prepaid_credit(table_fee, session);
        let items_total = sum_amounts(item_totals);

        let summary = CheckoutSummary {
            session_id: session.id,
            elapsed_minutes,
            table_fee,
            prepaid_credit,
            net_table_fee,
            items_total: to_f64(items_total),
            amount_due: to_f64(add_money(items_total, to_decimal(net_table_fee))),
            from_release,
            closed_at: reference,
        };
        record.checkout = Some(summary.clone());
        drop(record);

        freeze(session, reference);
        session.status = SessionStatus::Closed;

        tracing::info!(
            session_id = session.id,
            table_fee = summary.table_fee,
            net_table_fee = summary.net_table_fee,
            amount_due = summary.amount_due,
            from_release = summary.from_release,
            "Session paid and closed"
        );
        Ok(summary)
    }

    /// Recorded table-time item for a session
    pub fn table_time_item(&self, session_id: i64) -> Option<TableTimeItem> {
        self.records
            .get(&session_id)
            .and_then(|record| record.item.clone())
    }

    /// Checkout result for a session
    pub fn checkout(&self, session_id: i64) -> Option<CheckoutSummary> {
        self.records
            .get(&session_id)
            .and_then(|record| record.checkout.clone())
    }
}

/// Each line total finite and non-negative
fn validate_item_totals(item_totals: &[f64]) -> Result<(), SessionError> {
    match item_totals
        .iter()
        .position(|value| !value.is_finite() || *value < 0.0)
    {
        Some(index) => Err(SessionError::InvalidAmount {
            index,
            value: item_totals[index],
        }),
        None => Ok(()),
    }
}
