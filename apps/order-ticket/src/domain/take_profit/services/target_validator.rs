//! Target list validation.

use crate::domain::take_profit::entities::TakeProfitTarget;
use crate::domain::take_profit::value_objects::{TakeProfitRules, TargetIssue};

/// Checks a target list against [`TakeProfitRules`] and records issues on it.
#[derive(Debug, Clone, Default)]
pub struct TargetValidator {
    rules: TakeProfitRules,
}

impl TargetValidator {
    /// Create a validator for the given rules.
    #[must_use]
    pub const fn new(rules: TakeProfitRules) -> Self {
        Self { rules }
    }

    /// Re-validate every target, replacing all previously recorded issues.
    ///
    /// Per-target checks:
    /// - profit below the floor, or else profit below the previous target's profit
    /// - target price not above zero
    ///
    /// Aggregate checks, at most one of which applies:
    /// - summed profit above the cap flags every target's profit field
    /// - otherwise summed amount above 1 flags every target's amount field
    ///
    /// Returns `true` when no check failed.
    pub fn validate(&self, targets: &mut [TakeProfitTarget]) -> bool {
        let mut is_valid = true;
        let mut total_profit = 0.0;
        let mut total_amount = 0.0;
        let mut prev_profit = 0.0;

        for target in targets.iter_mut() {
            target.clear_issues();

            total_profit += target.profit_percent();
            total_amount += target.amount_percent();

            if target.profit_percent() < self.rules.min_profit_percent {
                target.flag_profit(TargetIssue::BelowMinimumProfit {
                    minimum: self.rules.min_profit_percent,
                });
                is_valid = false;
            } else if target.profit_percent() < prev_profit {
                target.flag_profit(TargetIssue::ProfitNotIncreasing);
                is_valid = false;
            }

            if target.target_price() <= 0.0 {
                target.flag_price(TargetIssue::NonPositivePrice);
                is_valid = false;
            }

            prev_profit = target.profit_percent();
        }

        if total_profit > self.rules.max_profit_sum {
            let issue = TargetIssue::profit_sum_exceeded(self.rules.max_profit_sum);
            for target in targets.iter_mut() {
                target.flag_profit(issue.clone());
            }
            is_valid = false;
        } else if total_amount > 1.0 {
            let issue = TargetIssue::amount_over_allocated(total_amount);
            for target in targets.iter_mut() {
                target.flag_amount(issue.clone());
            }
            is_valid = false;
        }

        is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(profit: f64, price: f64, amount: f64) -> TakeProfitTarget {
        TakeProfitTarget::new(profit, price, amount)
    }

    #[test]
    fn empty_list_is_valid() {
        let validator = TargetValidator::default();
        assert!(validator.validate(&mut []));
    }

    #[test]
    fn increasing_targets_are_valid() {
        let validator = TargetValidator::default();
        let mut targets = vec![target(0.02, 102.0, 0.8), target(0.04, 104.0, 0.2)];

        assert!(validator.validate(&mut targets));
        assert!(targets.iter().all(|t| !t.has_issues()));
    }

    #[test]
    fn floor_takes_precedence_over_monotonicity() {
        let validator = TargetValidator::default();
        let mut targets = vec![target(0.05, 105.0, 0.5), target(0.005, 100.5, 0.5)];

        assert!(!validator.validate(&mut targets));
        assert_eq!(
            targets[1].profit_issue(),
            Some(&TargetIssue::BelowMinimumProfit { minimum: 0.01 })
        );
    }

    #[test]
    fn decreasing_profit_is_flagged() {
        let validator = TargetValidator::default();
        let mut targets = vec![target(0.03, 103.0, 0.5), target(0.02, 102.0, 0.5)];

        assert!(!validator.validate(&mut targets));
        assert!(targets[0].profit_issue().is_none());
        assert_eq!(
            targets[1].profit_issue(),
            Some(&TargetIssue::ProfitNotIncreasing)
        );
    }

    #[test]
    fn equal_profit_is_allowed() {
        let validator = TargetValidator::default();
        let mut targets = vec![target(0.02, 102.0, 0.5), target(0.02, 102.0, 0.5)];

        assert!(validator.validate(&mut targets));
    }

    #[test]
    fn profit_and_price_issues_can_coexist() {
        let validator = TargetValidator::default();
        let mut targets = vec![target(0.0, -1.0, 1.0)];

        assert!(!validator.validate(&mut targets));
        assert!(targets[0].profit_issue().is_some());
        assert_eq!(targets[0].price_issue(), Some(&TargetIssue::NonPositivePrice));
    }

    #[test]
    fn profit_cap_overrides_per_target_profit_issues() {
        let validator = TargetValidator::default();
        let mut targets = vec![
            target(3.0, 400.0, 0.5),
            target(2.5, 350.0, 0.5), // also decreasing
        ];

        assert!(!validator.validate(&mut targets));
        for t in &targets {
            assert_eq!(t.profit_issue(), Some(&TargetIssue::profit_sum_exceeded(5.0)));
        }
    }

    #[test]
    fn profit_cap_suppresses_amount_overflow_check() {
        let validator = TargetValidator::default();
        let mut targets = vec![target(3.0, 400.0, 0.7), target(3.0, 400.0, 0.7)];

        assert!(!validator.validate(&mut targets));
        assert!(targets.iter().all(|t| t.amount_issue().is_none()));
    }

    #[test]
    fn amount_overflow_flags_every_target() {
        let validator = TargetValidator::default();
        let mut targets = vec![target(0.02, 102.0, 0.7), target(0.04, 104.0, 0.5)];

        assert!(!validator.validate(&mut targets));
        for t in &targets {
            assert_eq!(
                t.amount_issue().map(ToString::to_string).as_deref(),
                Some("120% out of 100% selected. Please decrease by 20%")
            );
        }
    }

    #[test]
    fn revalidation_replaces_stale_issues() {
        let validator = TargetValidator::default();
        let mut targets = vec![target(0.03, 103.0, 0.5), target(0.02, 102.0, 0.5)];
        assert!(!validator.validate(&mut targets));

        targets[1].reprice(0.04, 104.0);
        targets[1].flag_amount(TargetIssue::NonPositivePrice);

        assert!(validator.validate(&mut targets));
        assert!(targets.iter().all(|t| !t.has_issues()));
    }

    #[test]
    fn custom_rules_are_applied() {
        let validator = TargetValidator::new(TakeProfitRules {
            min_profit_percent: 0.05,
            ..TakeProfitRules::default()
        });
        let mut targets = vec![target(0.02, 102.0, 1.0)];

        assert!(!validator.validate(&mut targets));
        assert_eq!(
            targets[0].profit_issue().map(ToString::to_string).as_deref(),
            Some("Minimum value is 0.05")
        );
    }
}
