use crate::domain::ports::{ProductStore, RebateStore};
use crate::domain::product::Product;
use crate::domain::rebate::Rebate;
use crate::error::{RebateError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;

/// Column Family for rebate agreements.
pub const CF_REBATES: &str = "rebates";
/// Column Family for products.
pub const CF_PRODUCTS: &str = "products";
/// Column Family for the last computed amount of each rebate.
pub const CF_CALCULATIONS: &str = "calculations";

/// A persistent store implementation using RocksDB.
///
/// Rebates, products and calculation results live in separate Column Families,
/// all keyed by identifier. Entities are stored as JSON; calculation results as
/// the decimal's string form.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the required column families exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let descriptors = [CF_REBATES, CF_PRODUCTS, CF_CALCULATIONS]
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()));

        let db = DB::open_cf_descriptors(&opts, path, descriptors)?;

        Ok(Self { db: Arc::new(db) })
    }

    pub fn put_rebate(&self, rebate: &Rebate) -> Result<()> {
        self.put_json(CF_REBATES, &rebate.identifier, rebate)
    }

    pub fn put_product(&self, product: &Product) -> Result<()> {
        self.put_json(CF_PRODUCTS, &product.identifier, product)
    }

    /// The amount most recently stored for `identifier`, if any.
    pub fn last_calculation(&self, identifier: &str) -> Result<Option<Decimal>> {
        let cf = self.cf(CF_CALCULATIONS)?;
        let Some(bytes) = self.db.get_cf(cf, identifier.as_bytes())? else {
            return Ok(None);
        };
        let text = String::from_utf8(bytes).map_err(|e| RebateError::InternalError(Box::new(e)))?;
        let amount = text
            .parse::<Decimal>()
            .map_err(|e| RebateError::InternalError(Box::new(e)))?;
        Ok(Some(amount))
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily> {
        self.db.cf_handle(name).ok_or_else(|| {
            RebateError::InternalError(Box::new(std::io::Error::other(format!(
                "Column family '{}' not found",
                name
            ))))
        })
    }

    fn put_json<T: Serialize>(&self, cf_name: &str, key: &str, value: &T) -> Result<()> {
        let cf = self.cf(cf_name)?;
        let value = serde_json::to_vec(value).map_err(|e| {
            RebateError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;
        self.db.put_cf(cf, key.as_bytes(), value)?;
        Ok(())
    }

    fn get_json<T: DeserializeOwned>(&self, cf_name: &str, key: &str) -> Result<Option<T>> {
        let cf = self.cf(cf_name)?;
        let Some(bytes) = self.db.get_cf(cf, key.as_bytes())? else {
            return Ok(None);
        };
        let value = serde_json::from_slice(&bytes).map_err(|e| {
            RebateError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Deserialization error: {}", e),
            )))
        })?;
        Ok(Some(value))
    }
}

#[async_trait]
impl RebateStore for RocksDBStore {
    async fn get_rebate(&self, identifier: &str) -> Result<Option<Rebate>> {
        self.get_json(CF_REBATES, identifier)
    }

    async fn store_calculation_result(&self, rebate: &Rebate, amount: Decimal) -> Result<()> {
        let cf = self.cf(CF_CALCULATIONS)?;
        self.db
            .put_cf(cf, rebate.identifier.as_bytes(), amount.to_string().as_bytes())?;
        Ok(())
    }
}

#[async_trait]
impl ProductStore for RocksDBStore {
    async fn get_product(&self, identifier: &str) -> Result<Option<Product>> {
        self.get_json(CF_PRODUCTS, identifier)
    }
}
