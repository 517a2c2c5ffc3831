//! Take-Profit Bounded Context
//!
//! Manages the take-profit targets attached to an order being entered.
//!
//! # Key Concepts
//!
//! - **OrderTargetStore Aggregate**: Owns order parameters and the ordered target list
//! - **Targets**: Profit/price pairs plus the fraction of the position each one closes
//! - **Validation**: Rule violations are recorded per target field, never raised as errors

pub mod aggregate;
pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use aggregate::OrderTargetStore;
pub use entities::TakeProfitTarget;
pub use errors::TakeProfitError;
pub use services::{ProfitCalculator, TargetValidator};
pub use value_objects::{OrderSide, TakeProfitRules, TargetId, TargetIssue};
