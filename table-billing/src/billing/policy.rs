//! Billing policy knobs
//!
//! Defaults match posted house rules: 5 free minutes, half-hour blocks,
//! 10% minimum table cut on money games.

use rust_decimal::Decimal;

/// Default open-ended grace period (minutes)
pub const DEFAULT_GRACE_MINUTES: i64 = 5;
/// Default open-ended billing block (minutes)
pub const DEFAULT_BLOCK_MINUTES: i64 = 30;
/// Default money-game floor (percent of bet)
pub const DEFAULT_MONEY_GAME_CUT_PERCENT: u32 = 10;

/// Billing policy consumed by [`TableBillingCalculator`](super::TableBillingCalculator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingPolicy {
    /// Open-ended sessions at or below this many minutes are free
    pub grace_minutes: i64,
    /// Open-ended block size; a started block is charged in full
    pub block_minutes: i64,
    /// Minimum fee on money games, as a percentage of the bet
    pub money_game_cut_percent: u32,
}

impl BillingPolicy {
    /// Money-game cut as a fraction (10% → 0.10)
    pub fn money_game_cut(&self) -> Decimal {
        Decimal::from(self.money_game_cut_percent) / Decimal::ONE_HUNDRED
    }

    /// Whether every knob is usable (blocks must be at least a minute long)
    pub fn is_valid(&self) -> bool {
        self.grace_minutes >= 0 && self.block_minutes > 0 && self.money_game_cut_percent <= 100
    }
}

impl Default for BillingPolicy {
    fn default() -> Self {
        Self {
            grace_minutes: DEFAULT_GRACE_MINUTES,
            block_minutes: DEFAULT_BLOCK_MINUTES,
            money_game_cut_percent: DEFAULT_MONEY_GAME_CUT_PERCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = BillingPolicy::default();
        assert_eq!(policy.grace_minutes, 5);
        assert_eq!(policy.block_minutes, 30);
        assert_eq!(policy.money_game_cut(), Decimal::new(10, 2));
        assert!(policy.is_valid());
    }

    #[test]
    fn test_zero_block_is_invalid() {
        let policy = BillingPolicy {
            block_minutes: 0,
            ..BillingPolicy::default()
        };
        assert!(!policy.is_valid());
    }
}
