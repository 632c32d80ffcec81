//! Built-in sample catalogue covering the success and rejection path of every
//! incentive type. Used when no catalogue files are supplied.

use crate::domain::incentive::IncentiveType;
use crate::domain::product::Product;
use crate::domain::rebate::Rebate;
use rust_decimal_macros::dec;

pub fn demo_rebates() -> Vec<Rebate> {
    vec![
        Rebate::new("REBATE_FIXEDCASH_001", IncentiveType::FixedCashAmount),
        Rebate::new("REBATE_FIXEDCASH_002", IncentiveType::FixedCashAmount).with_amount(dec!(100)),
        Rebate::new("REBATE_FIXEDRATE_001", IncentiveType::FixedRateRebate),
        Rebate::new("REBATE_FIXEDRATE_002", IncentiveType::FixedRateRebate)
            .with_percentage(dec!(0.05)),
        Rebate::new("REBATE_AMOUNTUOM_001", IncentiveType::AmountPerUnit),
        Rebate::new("REBATE_AMOUNTUOM_002", IncentiveType::AmountPerUnit).with_amount(dec!(5)),
    ]
}

pub fn demo_products() -> Vec<Product> {
    vec![
        Product::new("PRODUCT_FIXEDCASH_001", dec!(1000)),
        Product::new("PRODUCT_FIXEDCASH_002", dec!(500)).supporting(IncentiveType::FixedCashAmount),
        Product::new("PRODUCT_FIXEDRATE_001", dec!(0)).supporting(IncentiveType::FixedRateRebate),
        Product::new("PRODUCT_FIXEDRATE_002", dec!(1500)),
        Product::new("PRODUCT_FIXEDRATE_003", dec!(10000))
            .supporting(IncentiveType::FixedRateRebate),
        Product::new("PRODUCT_AMOUNTUOM_001", dec!(50)),
        Product::new("PRODUCT_AMOUNTUOM_002", dec!(75)).supporting(IncentiveType::AmountPerUnit),
    ]
}
