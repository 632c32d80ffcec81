use crate::domain::ports::{ProductStore, RebateStore};
use crate::domain::product::Product;
use crate::domain::rebate::Rebate;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for rebates and their last computed amounts.
///
/// Uses `Arc<RwLock<..>>` so clones share the same data.
#[derive(Default, Clone)]
pub struct InMemoryRebateStore {
    rebates: Arc<RwLock<HashMap<String, Rebate>>>,
    calculations: Arc<RwLock<HashMap<String, Decimal>>>,
}

impl InMemoryRebateStore {
    /// Creates a new, empty in-memory rebate store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with `rebates`. Later duplicates win.
    pub fn from_rebates(rebates: impl IntoIterator<Item = Rebate>) -> Self {
        let rebates = rebates
            .into_iter()
            .map(|rebate| (rebate.identifier.clone(), rebate))
            .collect();
        Self {
            rebates: Arc::new(RwLock::new(rebates)),
            calculations: Arc::default(),
        }
    }

    pub async fn insert(&self, rebate: Rebate) {
        let mut rebates = self.rebates.write().await;
        rebates.insert(rebate.identifier.clone(), rebate);
    }

    /// The amount most recently stored for `identifier`, if any.
    pub async fn last_calculation(&self, identifier: &str) -> Option<Decimal> {
        let calculations = self.calculations.read().await;
        calculations.get(identifier).copied()
    }
}

#[async_trait]
impl RebateStore for InMemoryRebateStore {
    async fn get_rebate(&self, identifier: &str) -> Result<Option<Rebate>> {
        let rebates = self.rebates.read().await;
        Ok(rebates.get(identifier).cloned())
    }

    async fn store_calculation_result(&self, rebate: &Rebate, amount: Decimal) -> Result<()> {
        let mut calculations = self.calculations.write().await;
        calculations.insert(rebate.identifier.clone(), amount);
        Ok(())
    }
}

/// A thread-safe in-memory store for products.
#[derive(Default, Clone)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryProductStore {
    /// Creates a new, empty in-memory product store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|product| (product.identifier.clone(), product))
            .collect();
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    pub async fn insert(&self, product: Product) {
        let mut products = self.products.write().await;
        products.insert(product.identifier.clone(), product);
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn get_product(&self, identifier: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(identifier).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::incentive::IncentiveType;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_rebate_store() {
        let store = InMemoryRebateStore::new();
        let rebate = Rebate::new("R1", IncentiveType::FixedCashAmount).with_amount(dec!(10));

        store.insert(rebate.clone()).await;
        let retrieved = store.get_rebate("R1").await.unwrap().unwrap();
        assert_eq!(retrieved, rebate);

        assert!(store.get_rebate("R2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_last_calculation_is_overwritten() {
        let rebate = Rebate::new("R1", IncentiveType::AmountPerUnit).with_amount(dec!(2));
        let store = InMemoryRebateStore::from_rebates([rebate.clone()]);
        assert_eq!(store.last_calculation("R1").await, None);

        store.store_calculation_result(&rebate, dec!(4)).await.unwrap();
        store.store_calculation_result(&rebate, dec!(6)).await.unwrap();

        assert_eq!(store.last_calculation("R1").await, Some(dec!(6)));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryProductStore::new();
        let clone = store.clone();
        clone
            .insert(Product::new("P1", dec!(5)).supporting(IncentiveType::FixedRateRebate))
            .await;

        let product = store.get_product("P1").await.unwrap().unwrap();
        assert!(product.supports(IncentiveType::FixedRateRebate));
        assert!(store.get_product("P2").await.unwrap().is_none());
    }
}
