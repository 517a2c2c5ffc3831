//! Take-Profit Entities

mod take_profit_target;

pub use take_profit_target::TakeProfitTarget;
