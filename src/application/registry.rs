use super::calculators::{
    AmountPerUnitCalculator, FixedCashAmountCalculator, FixedRateRebateCalculator,
    RebateCalculator,
};
use crate::domain::incentive::IncentiveType;
use std::collections::HashMap;

/// Maps each incentive type to the calculator that handles it.
///
/// Built once up front and only read afterwards, so it can be shared freely
/// between concurrent calculations.
pub struct CalculatorRegistry {
    calculators: HashMap<IncentiveType, Box<dyn RebateCalculator>>,
}

impl CalculatorRegistry {
    pub fn empty() -> Self {
        Self {
            calculators: HashMap::new(),
        }
    }

    /// Registry with the built-in calculator for every incentive type.
    pub fn standard() -> Self {
        Self::empty()
            .with(FixedCashAmountCalculator)
            .with(FixedRateRebateCalculator)
            .with(AmountPerUnitCalculator)
    }

    /// Registers `calculator` under its own incentive type, replacing any previous one.
    pub fn with(mut self, calculator: impl RebateCalculator + 'static) -> Self {
        self.calculators
            .insert(calculator.incentive(), Box::new(calculator));
        self
    }

    pub fn get(&self, incentive: IncentiveType) -> Option<&dyn RebateCalculator> {
        self.calculators
            .get(&incentive)
            .map(|calculator| calculator.as_ref())
    }

    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }
}

impl Default for CalculatorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
