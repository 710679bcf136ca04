//! Passive HSTS observation for top-level page loads.
//!
//! Watches the response headers of each tab's main-frame navigation, follows
//! an optional HTTP→HTTPS redirect, and reports whether either leg sets
//! `Strict-Transport-Security` through a toolbar icon and tooltip.

pub mod classify;
pub mod config;
pub mod correlation;
pub mod events;
pub mod inspect;
pub mod observability;
pub mod presentation;
pub mod verdict;

pub use config::WatchConfig;
pub use correlation::CorrelationStore;
pub use events::{EventLoop, Handlers, HostEvent};
pub use verdict::{Severity, Verdict};
