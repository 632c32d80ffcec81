//! The per-incentive calculation rules.
//!
//! Each calculator is a stateless unit struct. Validation failures come back as
//! [`RebateError::InvalidCalculation`] carrying a message meant for the caller.

use crate::domain::calculation::CalculationRequest;
use crate::domain::incentive::IncentiveType;
use crate::domain::product::Product;
use crate::domain::rebate::Rebate;
use crate::error::{RebateError, Result};
use rust_decimal::Decimal;

pub trait RebateCalculator: Send + Sync {
    /// The incentive type this calculator handles.
    fn incentive(&self) -> IncentiveType;

    fn calculate(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculationRequest,
    ) -> Result<Decimal>;
}

fn ensure_supported(product: &Product, incentive: IncentiveType) -> Result<()> {
    if product.supports(incentive) {
        Ok(())
    } else {
        Err(RebateError::invalid_calculation(format!(
            "product {} does not support {} incentives",
            product.identifier, incentive
        )))
    }
}

fn ensure_positive(value: Decimal, what: &str) -> Result<()> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err(RebateError::invalid_calculation(format!(
            "{what} must be greater than zero"
        )))
    }
}

fn ensure_in_range(amount: Option<Decimal>) -> Result<Decimal> {
    amount.ok_or_else(|| RebateError::invalid_calculation("rebate amount overflows"))
}

/// Pays the rebate's amount once, whatever the volume.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedCashAmountCalculator;

impl RebateCalculator for FixedCashAmountCalculator {
    fn incentive(&self) -> IncentiveType {
        IncentiveType::FixedCashAmount
    }

    fn calculate(
        &self,
        rebate: &Rebate,
        product: &Product,
        _request: &CalculationRequest,
    ) -> Result<Decimal> {
        ensure_supported(product, self.incentive())?;
        ensure_positive(rebate.amount, "rebate amount")?;
        Ok(rebate.amount)
    }
}

/// Pays a percentage of the product price for every unit.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedRateRebateCalculator;

impl RebateCalculator for FixedRateRebateCalculator {
    fn incentive(&self) -> IncentiveType {
        IncentiveType::FixedRateRebate
    }

    fn calculate(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculationRequest,
    ) -> Result<Decimal> {
        ensure_supported(product, self.incentive())?;
        ensure_positive(rebate.percentage, "rebate percentage")?;
        ensure_positive(product.price, "product price")?;
        ensure_positive(request.volume, "volume")?;
        let amount = product
            .price
            .checked_mul(rebate.percentage)
            .and_then(|per_unit| per_unit.checked_mul(request.volume));
        ensure_in_range(amount)
    }
}

/// Pays the rebate's amount for every unit.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmountPerUnitCalculator;

impl RebateCalculator for AmountPerUnitCalculator {
    fn incentive(&self) -> IncentiveType {
        IncentiveType::AmountPerUnit
    }

    fn calculate(
        &self,
        rebate: &Rebate,
        product: &Product,
        request: &CalculationRequest,
    ) -> Result<Decimal> {
        ensure_supported(product, self.incentive())?;
        ensure_positive(rebate.amount, "rebate amount")?;
        ensure_positive(request.volume, "volume")?;
        ensure_in_range(rebate.amount.checked_mul(request.volume))
    }
}
