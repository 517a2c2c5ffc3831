//! Price/profit conversions and projected profit.

use crate::domain::take_profit::entities::TakeProfitTarget;
use crate::domain::take_profit::value_objects::OrderSide;

/// Stateless price and profit arithmetic for take-profit targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitCalculator;

impl ProfitCalculator {
    /// Target price for a newly created target.
    ///
    /// Direction-aware: Buy targets rise with profit, Sell targets fall.
    #[must_use]
    pub fn price_from_profit_signed(price: f64, side: OrderSide, profit_percent: f64) -> f64 {
        price + side.sign() * price * profit_percent
    }

    /// Target price after the user edits a target's profit.
    ///
    /// Ignores the order side; Sell targets still move up with profit here.
    // TODO: unify with `price_from_profit_signed` once Sell-side edits are confirmed to be a defect.
    #[must_use]
    pub fn price_from_profit(price: f64, profit_percent: f64) -> f64 {
        price * (1.0 + profit_percent)
    }

    /// Profit fraction implied by an edited target price.
    ///
    /// Computed in percent space and scaled back. Non-finite when `price` is zero.
    #[must_use]
    pub fn profit_from_price(price: f64, target_price: f64) -> f64 {
        (target_price / price * 100.0 - 100.0) / 100.0
    }

    /// Profit if every target fires at its price with its amount fraction.
    #[must_use]
    pub fn projected_profit(
        price: f64,
        amount: f64,
        side: OrderSide,
        targets: &[TakeProfitTarget],
    ) -> f64 {
        targets
            .iter()
            .map(|target| {
                let closed = amount * target.amount_percent();
                match side {
                    OrderSide::Buy => closed * (target.target_price() - price),
                    OrderSide::Sell => closed * (price - target.target_price()),
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn signed_price_buy_rises() {
        assert!(approx(
            ProfitCalculator::price_from_profit_signed(100.0, OrderSide::Buy, 0.02),
            102.0
        ));
    }

    #[test]
    fn signed_price_sell_falls() {
        assert!(approx(
            ProfitCalculator::price_from_profit_signed(100.0, OrderSide::Sell, 0.02),
            98.0
        ));
    }

    #[test]
    fn unsigned_price_ignores_side() {
        assert!(approx(ProfitCalculator::price_from_profit(100.0, 0.05), 105.0));
    }

    #[test]
    fn profit_from_price_round_trips() {
        let profit = ProfitCalculator::profit_from_price(250.0, 262.5);
        assert!(approx(profit, 0.05));
        assert!(approx(250.0 * (1.0 + profit), 262.5));
    }

    #[test]
    fn profit_from_price_zero_price_is_not_finite() {
        assert!(!ProfitCalculator::profit_from_price(0.0, 10.0).is_finite());
    }

    #[test]
    fn projected_profit_buy_and_sell() {
        let targets = vec![
            TakeProfitTarget::new(0.02, 102.0, 0.5),
            TakeProfitTarget::new(0.04, 104.0, 0.5),
        ];
        // 10 * 0.5 * 2 + 10 * 0.5 * 4
        assert!(approx(
            ProfitCalculator::projected_profit(100.0, 10.0, OrderSide::Buy, &targets),
            30.0
        ));

        let targets = vec![TakeProfitTarget::new(0.02, 98.0, 1.0)];
        assert!(approx(
            ProfitCalculator::projected_profit(100.0, 10.0, OrderSide::Sell, &targets),
            20.0
        ));
    }

    #[test]
    fn projected_profit_empty_is_zero() {
        assert_eq!(
            ProfitCalculator::projected_profit(100.0, 10.0, OrderSide::Buy, &[]),
            0.0
        );
    }
}
