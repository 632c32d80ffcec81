use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A caller's request to price a rebate for a product at a given volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    #[serde(rename = "rebate")]
    pub rebate_identifier: String,
    #[serde(rename = "product")]
    pub product_identifier: String,
    #[serde(deserialize_with = "super::decimal::exact")]
    pub volume: Decimal,
}

impl CalculationRequest {
    pub fn new(
        rebate_identifier: impl Into<String>,
        product_identifier: impl Into<String>,
        volume: Decimal,
    ) -> Self {
        Self {
            rebate_identifier: rebate_identifier.into(),
            product_identifier: product_identifier.into(),
            volume,
        }
    }
}

/// Outcome of a single calculation.
///
/// Built only through [`CalculationResult::success`] and [`CalculationResult::failure`]:
/// a success never carries an error message and a failure always carries a zero amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    success: bool,
    amount: Decimal,
    error_message: String,
}

impl CalculationResult {
    pub fn success(amount: Decimal) -> Self {
        Self {
            success: true,
            amount,
            error_message: String::new(),
        }
    }

    pub fn failure(error_message: impl Into<String>) -> Self {
        Self {
            success: false,
            amount: Decimal::ZERO,
            error_message: error_message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}
