use super::decimal::empty_as_zero;
use super::incentive::IncentiveType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rebate agreement as held by the rebate store.
///
/// `amount` drives fixed-cash and per-unit incentives, `percentage` (a fraction,
/// `0.1` is 10%) drives fixed-rate incentives. The unused field is usually zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rebate {
    pub identifier: String,
    pub incentive: IncentiveType,
    #[serde(default, deserialize_with = "empty_as_zero")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "empty_as_zero")]
    pub percentage: Decimal,
}

impl Rebate {
    pub fn new(identifier: impl Into<String>, incentive: IncentiveType) -> Self {
        Self {
            identifier: identifier.into(),
            incentive,
            amount: Decimal::ZERO,
            percentage: Decimal::ZERO,
        }
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = percentage;
        self
    }
}
