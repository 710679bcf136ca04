//! Correlation of HSTS observations across a redirect chain.

pub mod store;

pub use store::{CorrelationStore, RequestRecord};
