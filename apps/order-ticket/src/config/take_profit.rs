//! Take-profit rule configuration.

use serde::{Deserialize, Serialize};

use crate::domain::take_profit::TakeProfitRules;

/// Take-profit configuration as read from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeProfitConfig {
    /// Maximum number of targets per order.
    #[serde(default = "default_max_targets")]
    pub max_targets: usize,
    /// Profit step between consecutive new targets (fraction).
    #[serde(default = "default_profit_step")]
    pub profit_step: f64,
    /// Amount fraction for the first target.
    #[serde(default = "default_first_amount_percent")]
    pub first_amount_percent: f64,
    /// Amount fraction for every later target.
    #[serde(default = "default_amount_percent")]
    pub default_amount_percent: f64,
    /// Minimum profit fraction per target.
    #[serde(default = "default_min_profit_percent")]
    pub min_profit_percent: f64,
    /// Maximum profit fraction summed over all targets.
    #[serde(default = "default_max_profit_sum")]
    pub max_profit_sum: f64,
}

impl Default for TakeProfitConfig {
    fn default() -> Self {
        Self {
            max_targets: default_max_targets(),
            profit_step: default_profit_step(),
            first_amount_percent: default_first_amount_percent(),
            default_amount_percent: default_amount_percent(),
            min_profit_percent: default_min_profit_percent(),
            max_profit_sum: default_max_profit_sum(),
        }
    }
}

impl TakeProfitConfig {
    /// Convert to the domain rules applied by the store.
    #[must_use]
    pub const fn to_rules(&self) -> TakeProfitRules {
        TakeProfitRules {
            max_targets: self.max_targets,
            profit_step: self.profit_step,
            first_amount_percent: self.first_amount_percent,
            default_amount_percent: self.default_amount_percent,
            min_profit_percent: self.min_profit_percent,
            max_profit_sum: self.max_profit_sum,
        }
    }
}

const fn default_max_targets() -> usize {
    5
}

const fn default_profit_step() -> f64 {
    0.02 // 2%
}

const fn default_first_amount_percent() -> f64 {
    1.0
}

const fn default_amount_percent() -> f64 {
    0.2 // 20%
}

const fn default_min_profit_percent() -> f64 {
    0.01
}

const fn default_max_profit_sum() -> f64 {
    5.0 // 500%
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_domain_rules() {
        assert_eq!(TakeProfitConfig::default().to_rules(), TakeProfitRules::default());
    }

    #[test]
    fn to_rules_copies_every_field() {
        let config = TakeProfitConfig {
            max_targets: 3,
            profit_step: 0.05,
            first_amount_percent: 0.5,
            default_amount_percent: 0.25,
            min_profit_percent: 0.02,
            max_profit_sum: 2.0,
        };
        let rules = config.to_rules();

        assert_eq!(rules.max_targets, 3);
        assert_eq!(rules.profit_step, 0.05);
        assert_eq!(rules.first_amount_percent, 0.5);
        assert_eq!(rules.default_amount_percent, 0.25);
        assert_eq!(rules.min_profit_percent, 0.02);
        assert_eq!(rules.max_profit_sum, 2.0);
    }
}
