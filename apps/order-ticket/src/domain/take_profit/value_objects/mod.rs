//! Take-Profit Value Objects

mod order_side;
mod rules;
mod target_id;
mod target_issue;

pub use order_side::OrderSide;
pub use rules::TakeProfitRules;
pub use target_id::TargetId;
pub use target_issue::TargetIssue;
