use super::decimal::empty_as_zero;
use super::incentive::{IncentiveType, SupportedIncentives};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub identifier: String,
    #[serde(default, deserialize_with = "empty_as_zero")]
    pub price: Decimal,
    #[serde(default)]
    pub supported_incentives: SupportedIncentives,
}

impl Product {
    pub fn new(identifier: impl Into<String>, price: Decimal) -> Self {
        Self {
            identifier: identifier.into(),
            price,
            supported_incentives: SupportedIncentives::NONE,
        }
    }

    pub fn supporting(mut self, incentive: IncentiveType) -> Self {
        self.supported_incentives.insert(incentive);
        self
    }

    pub fn supports(&self, incentive: IncentiveType) -> bool {
        self.supported_incentives.contains(incentive)
    }
}
