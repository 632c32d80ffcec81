//! Application layer containing the rebate calculation logic.
//!
//! `calculators` holds one rule per incentive type, `registry` maps incentive
//! types to those rules, and `engine` orchestrates a full calculation against
//! the stores.

pub mod calculators;
pub mod engine;
pub mod registry;
