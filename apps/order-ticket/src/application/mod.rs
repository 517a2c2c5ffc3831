//! Application Layer
//!
//! Boundary types handed to the presentation layer. The form renders these
//! snapshots and sends edits back through `OrderTargetStore` operations.

pub mod dto;

pub use dto::*;
