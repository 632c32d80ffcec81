use super::product::Product;
use super::rebate::Rebate;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Read/write access to rebate agreements.
///
/// A missing rebate is `Ok(None)`; `Err` is reserved for infrastructure failures.
#[async_trait]
pub trait RebateStore: Send + Sync {
    async fn get_rebate(&self, identifier: &str) -> Result<Option<Rebate>>;
    /// Records the most recent amount computed for `rebate`.
    async fn store_calculation_result(&self, rebate: &Rebate, amount: Decimal) -> Result<()>;
}

/// Read access to products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn get_product(&self, identifier: &str) -> Result<Option<Product>>;
}

pub type RebateStoreBox = Box<dyn RebateStore>;
pub type ProductStoreBox = Box<dyn ProductStore>;
