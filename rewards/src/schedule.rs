//! Reward tier schedule

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tiered loyalty schedule
///
/// Defaults match the storefront policy: 5% while a user holds 2 to 10
/// purchases of an app, 10% from the 11th on, nothing below 2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardSchedule {
    /// Per-app purchase count that activates the standard tier
    pub standard_from: usize,

    /// Standard tier rate
    pub standard_rate: Decimal,

    /// Per-app purchase count that activates the elevated tier
    pub elevated_from: usize,

    /// Elevated tier rate
    pub elevated_rate: Decimal,
}

impl Default for RewardSchedule {
    fn default() -> Self {
        Self {
            standard_from: 2,
            standard_rate: Decimal::new(5, 2), // 5%
            elevated_from: 11,
            elevated_rate: Decimal::new(10, 2), // 10%
        }
    }
}

impl RewardSchedule {
    /// Rate for a per-app purchase count, if any tier applies
    pub fn rate_for(&self, count: usize) -> Option<Decimal> {
        if count >= self.elevated_from {
            Some(self.elevated_rate)
        } else if count >= self.standard_from {
            Some(self.standard_rate)
        } else {
            None
        }
    }
}
