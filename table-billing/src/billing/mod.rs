//! Table Billing Module
//!
//! The single implementation of the table-time fee. The live timer, the
//! release action and pay-and-close all go through [`TableBillingCalculator`].

mod calculator;
mod member;
pub mod money;
mod policy;
mod validation;

pub use calculator::*;
pub use member::*;
pub use policy::*;
pub use validation::*;
