//! Tunable take-profit rules.

use serde::{Deserialize, Serialize};

/// Constants governing target creation and validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TakeProfitRules {
    /// Upper bound on the number of targets.
    pub max_targets: usize,
    /// Profit added on top of the previous target when a target is created.
    pub profit_step: f64,
    /// Amount fraction given to the first target.
    pub first_amount_percent: f64,
    /// Amount fraction given to every subsequent target.
    pub default_amount_percent: f64,
    /// Minimum profit fraction accepted for any target.
    pub min_profit_percent: f64,
    /// Maximum profit fraction summed over all targets.
    pub max_profit_sum: f64,
}

impl Default for TakeProfitRules {
    fn default() -> Self {
        Self {
            max_targets: 5,
            profit_step: 0.02,
            first_amount_percent: 1.0,
            default_amount_percent: 0.2,
            min_profit_percent: 0.01,
            max_profit_sum: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let rules = TakeProfitRules::default();
        assert_eq!(rules.max_targets, 5);
        assert!((rules.profit_step - 0.02).abs() < f64::EPSILON);
        assert!((rules.first_amount_percent - 1.0).abs() < f64::EPSILON);
        assert!((rules.default_amount_percent - 0.2).abs() < f64::EPSILON);
        assert!((rules.min_profit_percent - 0.01).abs() < f64::EPSILON);
        assert!((rules.max_profit_sum - 5.0).abs() < f64::EPSILON);
    }
}
