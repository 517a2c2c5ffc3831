// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value
    )
)]

//! Order Ticket - Take-Profit Target Core
//!
//! State and business rules behind the take-profit section of an order-entry
//! form. A user attaches up to N price/amount targets to an order so that
//! portions of the position close automatically as price moves in their favour.
//!
//! # Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `take_profit`: `OrderTargetStore` aggregate, targets, validation rules
//!
//! - **Application**: Boundary types for the presentation layer
//!   - `dto`: Read-only, display-rounded snapshot of the ticket
//!
//! - **Config**: YAML configuration with environment interpolation
//!
//! - **Observability**: Structured logging setup
//!
//! # Example
//!
//! ```rust
//! use order_ticket::{OrderSide, OrderTargetStore};
//!
//! let mut store = OrderTargetStore::new();
//! store.set_side(OrderSide::Buy);
//! store.set_price(100.0);
//! store.set_amount(2.0);
//! store.set_take_profit_enabled(true);
//!
//! let second = store.add_target();
//! store.set_target_profit(&second, 0.05).unwrap();
//!
//! store.validate();
//! assert!(store.is_form_valid());
//! assert!(store.projected_profit() > 0.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Layers
// =============================================================================

/// Domain layer - Core business logic with no infrastructure dependencies.
pub mod domain;

/// Application layer - DTOs consumed by the presentation layer.
pub mod application;

/// Configuration loading and validation.
pub mod config;

/// Logging initialization.
pub mod observability;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::dto::{OrderTicketDto, TargetRowDto};
pub use config::{Config, ConfigError, DisplayConfig, LoggingConfig, TakeProfitConfig};
pub use domain::take_profit::{
    OrderSide, OrderTargetStore, ProfitCalculator, TakeProfitError, TakeProfitRules,
    TakeProfitTarget, TargetId, TargetIssue, TargetValidator,
};
pub use observability::{LoggingError, init_logging};
