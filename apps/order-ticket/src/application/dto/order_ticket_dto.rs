//! Order Ticket DTOs

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::domain::take_profit::{OrderSide, OrderTargetStore, TakeProfitTarget, TargetId};

/// One row of the take-profit table.
///
/// Profit and amount are in percent (2.00 = 2%). Non-finite values are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRowDto {
    /// Target ID, used to address edits.
    pub target_id: TargetId,
    /// Profit in percent.
    pub profit_percent: Option<Decimal>,
    /// Target price.
    pub target_price: Option<Decimal>,
    /// Amount to close, in percent.
    pub amount_percent: Option<Decimal>,
    /// Message for the profit input.
    pub profit_error: Option<String>,
    /// Message for the target price input.
    pub target_price_error: Option<String>,
    /// Message for the amount input.
    pub amount_error: Option<String>,
}

impl TargetRowDto {
    /// Create from a domain target.
    #[must_use]
    pub fn from_target(target: &TakeProfitTarget, scale: u32) -> Self {
        Self {
            target_id: target.id().clone(),
            profit_percent: rounded(target.profit_percent() * 100.0, scale),
            target_price: rounded(target.target_price(), scale),
            amount_percent: rounded(target.amount_percent() * 100.0, scale),
            profit_error: target.profit_issue().map(ToString::to_string),
            target_price_error: target.price_issue().map(ToString::to_string),
            amount_error: target.amount_issue().map(ToString::to_string),
        }
    }
}

/// Snapshot of the whole ticket for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTicketDto {
    /// Order price.
    pub price: Option<Decimal>,
    /// Order amount, unrounded.
    pub amount: Option<Decimal>,
    /// Order side.
    pub side: OrderSide,
    /// Side of the orders closing the position at each target.
    pub closing_side: OrderSide,
    /// Whether the take-profit section is shown.
    pub take_profit_enabled: bool,
    /// Target rows in order.
    pub targets: Vec<TargetRowDto>,
    /// Maximum number of targets.
    pub max_targets: usize,
    /// Whether the "add target" action is available.
    pub can_add_target: bool,
    /// Order value.
    pub total: Option<Decimal>,
    /// Projected profit if every target fires.
    pub projected_profit: Option<Decimal>,
    /// Quote currency for prices and profit.
    pub quote_currency: String,
    /// Outcome of the last validation.
    pub is_form_valid: bool,
}

impl OrderTicketDto {
    /// Create from the domain store.
    #[must_use]
    pub fn from_store(store: &OrderTargetStore, display: &DisplayConfig) -> Self {
        let scale = display.decimal_scale;
        Self {
            price: rounded(store.price(), scale),
            amount: Decimal::from_f64(store.amount()),
            side: store.side(),
            closing_side: store.closing_side(),
            take_profit_enabled: store.take_profit_enabled(),
            targets: store
                .targets()
                .iter()
                .map(|t| TargetRowDto::from_target(t, scale))
                .collect(),
            max_targets: store.max_targets(),
            can_add_target: store.can_add_target(),
            total: rounded(store.total(), scale),
            projected_profit: rounded(store.projected_profit(), scale),
            quote_currency: display.quote_currency.clone(),
            is_form_valid: store.is_form_valid(),
        }
    }

    /// "Add profit target n/N" label for the add action.
    #[must_use]
    pub fn add_target_label(&self) -> String {
        format!(
            "Add profit target {}/{}",
            self.targets.len(),
            self.max_targets
        )
    }
}

/// Round the exact binary value half away from zero, so 1.005 (stored just
/// below) shows as 1.00 like the form's fixed-point display.
fn rounded(value: f64, scale: u32) -> Option<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero))
}
