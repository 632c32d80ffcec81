#![cfg(feature = "storage-rocksdb")]

use assert_cmd::cargo_bin;
use rebate_engine::domain::incentive::IncentiveType;
use rebate_engine::domain::ports::{ProductStore, RebateStore};
use rebate_engine::domain::product::Product;
use rebate_engine::domain::rebate::Rebate;
use rebate_engine::infrastructure::rocksdb::RocksDBStore;
use rust_decimal_macros::dec;
use std::process::Command;
use tempfile::tempdir;

mod common;

#[test]
fn test_rocksdb_catalogue_survives_restart() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    // 1. First run seeds a custom rebate into the database.
    let rebates = common::rebates_file(&["LOYALTY,amount_per_unit,2,"]).unwrap();
    let products = common::products_file(&["WIDGET,10,amount_per_unit"]).unwrap();
    let requests = common::requests_file(&["LOYALTY,WIDGET,3"]).unwrap();

    let output1 = Command::new(cargo_bin!("rebate-engine"))
        .arg(requests.path())
        .arg("--rebates")
        .arg(rebates.path())
        .arg("--products")
        .arg(products.path())
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output1.status.success());
    assert!(String::from_utf8_lossy(&output1.stdout).contains("LOYALTY,WIDGET,3,true,6,"));

    // 2. Second run only seeds the demo catalogue; the custom entries must still resolve.
    let requests = common::requests_file(&["LOYALTY,WIDGET,5"]).unwrap();
    let output2 = Command::new(cargo_bin!("rebate-engine"))
        .arg(requests.path())
        .arg("--db-path")
        .arg(&db_path)
        .output()
        .expect("Failed to execute command");
    assert!(output2.status.success());
    assert!(String::from_utf8_lossy(&output2.stdout).contains("LOYALTY,WIDGET,5,true,10,"));

    // 3. The last computed amount was persisted.
    let store = RocksDBStore::open(&db_path).unwrap();
    assert_eq!(store.last_calculation("LOYALTY").unwrap(), Some(dec!(10)));
}

#[tokio::test]
async fn test_rocksdb_reopen_keeps_entities() {
    let dir = tempdir().unwrap();
    let rebate = Rebate::new("R1", IncentiveType::FixedCashAmount).with_amount(dec!(7));
    let product = Product::new("P1", dec!(3)).supporting(IncentiveType::FixedCashAmount);

    {
        let store = RocksDBStore::open(dir.path()).unwrap();
        store.put_rebate(&rebate).unwrap();
        store.put_product(&product).unwrap();
        store.store_calculation_result(&rebate, dec!(7)).await.unwrap();
    }

    let store = RocksDBStore::open(dir.path()).unwrap();
    assert_eq!(store.get_rebate("R1").await.unwrap(), Some(rebate));
    assert_eq!(store.get_product("P1").await.unwrap(), Some(product));
    assert_eq!(store.last_calculation("R1").unwrap(), Some(dec!(7)));
}
