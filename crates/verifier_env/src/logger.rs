//!
//! Logger of the system.
//!

pub mod setup;
pub mod types;

pub use setup::{setup, TelemetryGuard};
pub use tracing::{debug, error, info, instrument, warn};
pub use types::{Flow, FlowMetric, Tag};
