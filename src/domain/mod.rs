//! Domain types shared by the calculators, the orchestrator and the stores.

pub mod calculation;
mod decimal;
pub mod incentive;
pub mod ports;
pub mod product;
pub mod rebate;
