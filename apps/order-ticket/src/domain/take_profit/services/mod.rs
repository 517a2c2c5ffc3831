//! Take-Profit Domain Services

mod profit_calculator;
mod target_validator;

pub use profit_calculator::ProfitCalculator;
pub use target_validator::TargetValidator;
