//! Take-Profit Errors

use thiserror::Error;

use super::value_objects::TargetId;

/// Errors that can occur when addressing take-profit targets.
///
/// Rule violations are not errors; they are recorded on the targets by validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TakeProfitError {
    /// No target with this ID exists in the store.
    #[error("Take-profit target not found: {target_id}")]
    TargetNotFound {
        /// The missing target ID.
        target_id: TargetId,
    },
}
