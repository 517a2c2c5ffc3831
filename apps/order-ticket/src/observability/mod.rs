//! Observability module for structured logging.
//!
//! The domain emits `tracing` events on every ticket mutation; this module
//! installs the subscriber that renders them.

mod logging;

pub use logging::{LoggingError, init_logging};
