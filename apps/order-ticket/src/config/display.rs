//! Display configuration for ticket snapshots.

use serde::{Deserialize, Serialize};

/// How numbers are presented to the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Quote currency shown next to prices and projected profit.
    #[serde(default = "default_quote_currency")]
    pub quote_currency: String,
    /// Decimal places for displayed values.
    #[serde(default = "default_decimal_scale")]
    pub decimal_scale: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            quote_currency: default_quote_currency(),
            decimal_scale: default_decimal_scale(),
        }
    }
}

fn default_quote_currency() -> String {
    "USDT".to_string()
}

const fn default_decimal_scale() -> u32 {
    2
}
