//! Take-Profit Aggregates

mod order_target_store;

pub use order_target_store::OrderTargetStore;
