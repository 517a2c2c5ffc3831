//! Take-Profit Target Entity

use serde::{Deserialize, Serialize};

use crate::domain::take_profit::value_objects::{TargetId, TargetIssue};

/// One take-profit level: closes `amount_percent` of the position at `target_price`.
///
/// `profit_percent` and `target_price` are two views of the same level. Whichever
/// was edited last is authoritative and the other is re-derived from it.
/// Targets are owned by [`OrderTargetStore`](crate::domain::take_profit::OrderTargetStore)
/// and can only be changed through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeProfitTarget {
    id: TargetId,
    profit_percent: f64,
    target_price: f64,
    amount_percent: f64,
    profit_issue: Option<TargetIssue>,
    price_issue: Option<TargetIssue>,
    amount_issue: Option<TargetIssue>,
}

impl TakeProfitTarget {
    pub(crate) fn new(profit_percent: f64, target_price: f64, amount_percent: f64) -> Self {
        Self {
            id: TargetId::generate(),
            profit_percent,
            target_price,
            amount_percent,
            profit_issue: None,
            price_issue: None,
            amount_issue: None,
        }
    }

    /// Target identifier.
    #[must_use]
    pub const fn id(&self) -> &TargetId {
        &self.id
    }

    /// Profit relative to the order price, as a fraction (0.02 = 2%).
    #[must_use]
    pub const fn profit_percent(&self) -> f64 {
        self.profit_percent
    }

    /// Absolute price at which this target fires.
    #[must_use]
    pub const fn target_price(&self) -> f64 {
        self.target_price
    }

    /// Fraction of the order amount closed at this target.
    #[must_use]
    pub const fn amount_percent(&self) -> f64 {
        self.amount_percent
    }

    /// Issue on the profit field from the last validation.
    #[must_use]
    pub const fn profit_issue(&self) -> Option<&TargetIssue> {
        self.profit_issue.as_ref()
    }

    /// Issue on the target price field from the last validation.
    #[must_use]
    pub const fn price_issue(&self) -> Option<&TargetIssue> {
        self.price_issue.as_ref()
    }

    /// Issue on the amount field from the last validation.
    #[must_use]
    pub const fn amount_issue(&self) -> Option<&TargetIssue> {
        self.amount_issue.as_ref()
    }

    /// Whether any field currently carries an issue.
    #[must_use]
    pub const fn has_issues(&self) -> bool {
        self.profit_issue.is_some() || self.price_issue.is_some() || self.amount_issue.is_some()
    }

    /// Replace the profit/price pair. Clears the profit and price issues.
    pub(crate) fn reprice(&mut self, profit_percent: f64, target_price: f64) {
        self.profit_percent = profit_percent;
        self.target_price = target_price;
        self.profit_issue = None;
        self.price_issue = None;
    }

    /// Replace the amount fraction. Clears the amount issue.
    pub(crate) fn set_amount_percent(&mut self, amount_percent: f64) {
        self.amount_percent = amount_percent;
        self.amount_issue = None;
    }

    /// Shrink the amount fraction without touching issues.
    pub(crate) fn reduce_amount_percent(&mut self, by: f64) {
        self.amount_percent -= by;
    }

    pub(crate) fn clear_issues(&mut self) {
        self.profit_issue = None;
        self.price_issue = None;
        self.amount_issue = None;
    }

    pub(crate) fn flag_profit(&mut self, issue: TargetIssue) {
        self.profit_issue = Some(issue);
    }

    pub(crate) fn flag_price(&mut self, issue: TargetIssue) {
        self.price_issue = Some(issue);
    }

    pub(crate) fn flag_amount(&mut self, issue: TargetIssue) {
        self.amount_issue = Some(issue);
    }
}
