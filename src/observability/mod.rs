//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Event handlers produce:
//!     → logging.rs (structured log events with tab/request fields)
//!     → metrics.rs (verdict and rejection counters, store gauge)
//! ```

pub mod logging;
pub mod metrics;
