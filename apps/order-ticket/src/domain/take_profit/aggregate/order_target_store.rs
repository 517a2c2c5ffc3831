//! Order Target Store Aggregate Root
//!
//! Holds the order parameters being entered and the ordered list of
//! take-profit targets attached to them. All mutation goes through the
//! operations below; derived values are recomputed on every read.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::take_profit::entities::TakeProfitTarget;
use crate::domain::take_profit::errors::TakeProfitError;
use crate::domain::take_profit::services::{ProfitCalculator, TargetValidator};
use crate::domain::take_profit::value_objects::{OrderSide, TakeProfitRules, TargetId};

/// Order Target Store Aggregate Root.
///
/// Invariants such as "amounts sum to at most 100%" are checked by
/// [`validate`](Self::validate), not enforced on every edit. Edits clear the
/// edited target's own issues immediately; a fresh validation is needed to
/// surface any remaining problem.
#[derive(Debug, Clone, Serialize)]
pub struct OrderTargetStore {
    price: f64,
    amount: f64,
    side: OrderSide,
    take_profit_enabled: bool,
    targets: Vec<TakeProfitTarget>,
    is_form_valid: bool,
    rules: TakeProfitRules,
}

impl Default for OrderTargetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderTargetStore {
    /// Create an empty Buy ticket with default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(TakeProfitRules::default())
    }

    /// Create an empty Buy ticket with custom rules.
    #[must_use]
    pub const fn with_rules(rules: TakeProfitRules) -> Self {
        Self {
            price: 0.0,
            amount: 0.0,
            side: OrderSide::Buy,
            take_profit_enabled: false,
            targets: Vec::new(),
            is_form_valid: true,
            rules,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Order price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Order amount (instrument quantity).
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Order side.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Side of the orders that close the position at a target.
    #[must_use]
    pub const fn closing_side(&self) -> OrderSide {
        self.side.opposite()
    }

    /// Whether the take-profit section is active.
    #[must_use]
    pub const fn take_profit_enabled(&self) -> bool {
        self.take_profit_enabled
    }

    /// Targets in insertion order.
    #[must_use]
    pub fn targets(&self) -> &[TakeProfitTarget] {
        &self.targets
    }

    /// Look up a target by ID.
    #[must_use]
    pub fn target(&self, id: &TargetId) -> Option<&TakeProfitTarget> {
        self.targets.iter().find(|t| t.id() == id)
    }

    /// Maximum number of targets.
    #[must_use]
    pub const fn max_targets(&self) -> usize {
        self.rules.max_targets
    }

    /// Whether another target fits under [`max_targets`](Self::max_targets).
    #[must_use]
    pub fn can_add_target(&self) -> bool {
        self.targets.len() < self.rules.max_targets
    }

    /// Outcome of the last [`validate`](Self::validate) call.
    #[must_use]
    pub const fn is_form_valid(&self) -> bool {
        self.is_form_valid
    }

    /// Rules this store applies.
    #[must_use]
    pub const fn rules(&self) -> &TakeProfitRules {
        &self.rules
    }

    /// Order value: `price * amount`.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.price * self.amount
    }

    /// Profit if every target fires at its price with its amount fraction.
    #[must_use]
    pub fn projected_profit(&self) -> f64 {
        ProfitCalculator::projected_profit(self.price, self.amount, self.side, &self.targets)
    }

    // =========================================================================
    // Order parameters
    // =========================================================================

    /// Set the order side.
    ///
    /// Changing side discards every target and disables take-profit, since
    /// existing target prices point the wrong way.
    pub fn set_side(&mut self, side: OrderSide) {
        let changed = self.side != side;
        self.side = side;

        if changed {
            debug!(%side, discarded = self.targets.len(), "Order side changed");
            self.take_profit_enabled = false;
            self.targets.clear();
        }
    }

    /// Set the order price. Existing targets keep their price/profit pair.
    pub fn set_price(&mut self, price: f64) {
        debug!(price, "Order price set");
        self.price = price;
    }

    /// Set the order amount.
    pub fn set_amount(&mut self, amount: f64) {
        debug!(amount, "Order amount set");
        self.amount = amount;
    }

    /// Set the amount from an order value. Yields zero amount when price is not positive.
    pub fn set_total(&mut self, total: f64) {
        self.amount = if self.price > 0.0 {
            total / self.price
        } else {
            0.0
        };
        debug!(total, amount = self.amount, "Order total set");
    }

    // =========================================================================
    // Target collection
    // =========================================================================

    /// Enable or disable take-profit.
    ///
    /// Enabling with no targets creates the first one. Disabling keeps the
    /// targets for the next time the section is enabled.
    pub fn set_take_profit_enabled(&mut self, enabled: bool) {
        debug!(enabled, "Take-profit toggled");
        self.take_profit_enabled = enabled;

        if enabled && self.targets.is_empty() {
            self.add_target();
        }
    }

    /// Append a target one profit step above the last one and return its ID.
    ///
    /// The first target closes the whole position; later ones take the default
    /// share, and any overflow above 100% is taken from the largest allocation
    /// (the later target on ties).
    pub fn add_target(&mut self) -> TargetId {
        // A NaN profit left by a zero-price edit restarts the step from zero
        let prev_profit = self
            .targets
            .last()
            .map(TakeProfitTarget::profit_percent)
            .filter(|p| !p.is_nan())
            .unwrap_or(0.0);
        let profit_percent = prev_profit + self.rules.profit_step;
        let target_price =
            ProfitCalculator::price_from_profit_signed(self.price, self.side, profit_percent);
        let amount_percent = if self.targets.is_empty() {
            self.rules.first_amount_percent
        } else {
            self.rules.default_amount_percent
        };

        let target = TakeProfitTarget::new(profit_percent, target_price, amount_percent);
        let id = target.id().clone();
        self.targets.push(target);

        if self.targets.len() > 1 {
            self.absorb_amount_overflow();
        }

        debug!(
            target_id = %id,
            profit_percent,
            target_price,
            count = self.targets.len(),
            "Take-profit target added"
        );
        id
    }

    /// Remove a target. Removing the last one disables take-profit.
    pub fn remove_target(&mut self, id: &TargetId) -> Result<TakeProfitTarget, TakeProfitError> {
        let index = self.index_of(id)?;
        let removed = self.targets.remove(index);
        debug!(target_id = %id, remaining = self.targets.len(), "Take-profit target removed");

        if self.targets.is_empty() {
            self.set_take_profit_enabled(false);
        }
        Ok(removed)
    }

    /// Set a target's profit and re-derive its price as `price * (1 + profit)`.
    pub fn set_target_profit(
        &mut self,
        id: &TargetId,
        profit_percent: f64,
    ) -> Result<(), TakeProfitError> {
        let target_price = ProfitCalculator::price_from_profit(self.price, profit_percent);
        let target = self.target_mut(id)?;
        target.reprice(profit_percent, target_price);
        debug!(target_id = %id, profit_percent, target_price, "Target profit set");
        Ok(())
    }

    /// Set a target's price and re-derive its profit from the order price.
    pub fn set_target_price(
        &mut self,
        id: &TargetId,
        target_price: f64,
    ) -> Result<(), TakeProfitError> {
        let profit_percent = ProfitCalculator::profit_from_price(self.price, target_price);
        let target = self.target_mut(id)?;
        target.reprice(profit_percent, target_price);
        debug!(target_id = %id, profit_percent, target_price, "Target price set");
        Ok(())
    }

    /// Set a target's amount fraction. Other targets are not rebalanced.
    pub fn set_target_amount(
        &mut self,
        id: &TargetId,
        amount_percent: f64,
    ) -> Result<(), TakeProfitError> {
        let target = self.target_mut(id)?;
        target.set_amount_percent(amount_percent);
        debug!(target_id = %id, amount_percent, "Target amount set");
        Ok(())
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Re-check every rule, replacing all target issues and `is_form_valid`.
    pub fn validate(&mut self) {
        let validator = TargetValidator::new(self.rules);
        self.is_form_valid = validator.validate(&mut self.targets);

        let flagged = self.targets.iter().filter(|t| t.has_issues()).count();
        info!(
            is_valid = self.is_form_valid,
            targets = self.targets.len(),
            flagged,
            "Take-profit targets validated"
        );
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn index_of(&self, id: &TargetId) -> Result<usize, TakeProfitError> {
        self.targets
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| TakeProfitError::TargetNotFound {
                target_id: id.clone(),
            })
    }

    fn target_mut(&mut self, id: &TargetId) -> Result<&mut TakeProfitTarget, TakeProfitError> {
        self.targets
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| TakeProfitError::TargetNotFound {
                target_id: id.clone(),
            })
    }

    fn absorb_amount_overflow(&mut self) {
        let mut sum = 0.0;
        let mut largest = 0;
        for (index, target) in self.targets.iter().enumerate() {
            sum += target.amount_percent();
            if self.targets[largest].amount_percent() <= target.amount_percent() {
                largest = index;
            }
        }

        if sum > 1.0 {
            let overflow = sum - 1.0;
            debug!(
                target_id = %self.targets[largest].id(),
                overflow,
                "Reducing largest allocation to absorb overflow"
            );
            self.targets[largest].reduce_amount_percent(overflow);
        }
    }
}
