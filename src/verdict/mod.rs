//! Verdict computation.

pub mod engine;

pub use engine::{evaluate, evaluate_record, Severity, Verdict};
