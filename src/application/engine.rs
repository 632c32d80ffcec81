use super::registry::CalculatorRegistry;
use crate::domain::calculation::{CalculationRequest, CalculationResult};
use crate::domain::ports::{ProductStoreBox, RebateStoreBox};
use crate::error::{RebateError, Result};

/// The entry point for rebate calculations.
///
/// `RebateEngine` resolves the rebate and product for a request, dispatches to the
/// calculator registered for the rebate's incentive type and persists the amount
/// on success. Every business outcome is reported through [`CalculationResult`];
/// only infrastructure failures and unexpected calculator errors surface as `Err`.
pub struct RebateEngine {
    rebate_store: RebateStoreBox,
    product_store: ProductStoreBox,
    registry: CalculatorRegistry,
}

impl RebateEngine {
    /// Creates a new `RebateEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `rebate_store` - Source of rebates and sink for computed amounts.
    /// * `product_store` - Source of products.
    /// * `registry` - Calculators keyed by incentive type.
    pub fn new(
        rebate_store: RebateStoreBox,
        product_store: ProductStoreBox,
        registry: CalculatorRegistry,
    ) -> Self {
        Self {
            rebate_store,
            product_store,
            registry,
        }
    }

    /// Calculates the rebate for `request`.
    ///
    /// The steps run strictly in order: rebate lookup, product lookup, calculator
    /// dispatch, calculation, persistence. Persistence happens exactly once per
    /// successful calculation and never otherwise.
    pub async fn calculate(&self, request: &CalculationRequest) -> Result<CalculationResult> {
        let Some(rebate) = self
            .rebate_store
            .get_rebate(&request.rebate_identifier)
            .await?
        else {
            tracing::debug!(rebate = %request.rebate_identifier, "rebate not found");
            return Ok(CalculationResult::failure(format!(
                "rebate not found: {}",
                request.rebate_identifier
            )));
        };

        let Some(product) = self
            .product_store
            .get_product(&request.product_identifier)
            .await?
        else {
            tracing::debug!(product = %request.product_identifier, "product not found");
            return Ok(CalculationResult::failure(format!(
                "product not found: {}",
                request.product_identifier
            )));
        };

        let Some(calculator) = self.registry.get(rebate.incentive) else {
            tracing::debug!(incentive = %rebate.incentive, "no calculator registered");
            return Ok(CalculationResult::failure(format!(
                "unsupported incentive type: {}",
                rebate.incentive
            )));
        };

        let amount = match calculator.calculate(&rebate, &product, request) {
            Ok(amount) => amount,
            Err(RebateError::InvalidCalculation(message)) => {
                tracing::debug!(
                    rebate = %rebate.identifier,
                    product = %product.identifier,
                    reason = %message,
                    "calculation rejected"
                );
                return Ok(CalculationResult::failure(message));
            }
            Err(e) => return Err(e),
        };

        self.rebate_store
            .store_calculation_result(&rebate, amount)
            .await?;
        tracing::info!(
            rebate = %rebate.identifier,
            product = %product.identifier,
            %amount,
            "rebate calculated"
        );

        Ok(CalculationResult::success(amount))
    }
}
