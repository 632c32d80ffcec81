//! Store implementations for the domain ports.

pub mod demo;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
