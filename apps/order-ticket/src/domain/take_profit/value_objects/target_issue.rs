//! Validation issues attached to individual target fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A rule violation recorded against one field of a take-profit target.
///
/// The `Display` output is the exact message shown next to the offending input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetIssue {
    /// Profit is below the configured floor.
    BelowMinimumProfit {
        /// Minimum profit fraction.
        minimum: f64,
    },

    /// Profit is lower than the previous target's profit.
    ProfitNotIncreasing,

    /// Target price is zero or negative.
    NonPositivePrice,

    /// Profit summed over all targets exceeds the cap.
    ProfitSumExceeded {
        /// Cap expressed in percent (5.0 -> 500).
        max_percent: f64,
    },

    /// Amount summed over all targets exceeds 100%.
    AmountOverAllocated {
        /// Total allocation in percent.
        selected_percent: f64,
        /// Allocation above 100, in percent.
        excess_percent: f64,
    },
}

impl TargetIssue {
    /// Build the over-allocation issue from the summed amount fraction.
    #[must_use]
    pub fn amount_over_allocated(total_amount: f64) -> Self {
        Self::AmountOverAllocated {
            selected_percent: total_amount * 100.0,
            excess_percent: total_amount * 100.0 - 100.0,
        }
    }

    /// Build the profit-cap issue from the cap expressed as a fraction.
    #[must_use]
    pub fn profit_sum_exceeded(max_profit_sum: f64) -> Self {
        Self::ProfitSumExceeded {
            max_percent: max_profit_sum * 100.0,
        }
    }
}

impl fmt::Display for TargetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimumProfit { minimum } => write!(f, "Minimum value is {minimum}"),
            Self::ProfitNotIncreasing => {
                write!(f, "Each target's profit should be greater than the previous one")
            }
            Self::NonPositivePrice => write!(f, "Price must be greater than 0"),
            Self::ProfitSumExceeded { max_percent } => {
                write!(f, "Maximum profit sum is {max_percent}%")
            }
            Self::AmountOverAllocated {
                selected_percent,
                excess_percent,
            } => write!(
                f,
                "{selected_percent}% out of 100% selected. Please decrease by {excess_percent}%"
            ),
        }
    }
}
