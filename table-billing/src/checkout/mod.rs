//! Fee call sites
//!
//! - [`estimate`] - live timer display, recomputed every tick
//! - [`TableFeeLedger::release`] - freeze the table fee onto the tab
//! - [`TableFeeLedger::pay_and_close`] - amount due at checkout
//!
//! Each takes one captured reference instant and goes through the same
//! [`TableBillingCalculator`](crate::billing::TableBillingCalculator).

mod estimate;
mod ledger;

pub use estimate::{estimate, estimate_with};
pub use ledger::TableFeeLedger;
