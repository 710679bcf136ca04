//! Request classification subsystem.
//!
//! # Data Flow
//! ```text
//! Host navigation event (tab id, URL, frame type)
//!     → classifier.rs (tab check → frame check → denylist)
//!     → eligible: handed to the correlation store
//!     → rejected: dropped, counted by reason
//! ```

pub mod classifier;
pub mod types;

pub use classifier::{ContainsMatcher, PrefixMatcher, Rejection, RequestClassifier, UrlMatcher};
pub use types::{FrameType, RequestId, Scheme, TabId};
