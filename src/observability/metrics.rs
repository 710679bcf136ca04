//! Metrics collection.
//!
//! # Metrics
//! - `hsts_verdicts_total` (counter): emitted verdicts by severity
//! - `hsts_events_rejected_total` (counter): events dropped by the classifier, by reason
//! - `hsts_inflight_records` (gauge): records currently held by the correlation store
//!
//! # Design Decisions
//! - Uses the `metrics` facade; without an installed recorder every call is a no-op

use metrics::{counter, gauge};

use crate::classify::Rejection;
use crate::verdict::Severity;

pub fn record_verdict(severity: Severity) {
    counter!("hsts_verdicts_total", "severity" => severity.as_str()).increment(1);
}

pub fn record_rejected(reason: Rejection) {
    counter!("hsts_events_rejected_total", "reason" => reason.as_str()).increment(1);
}

pub fn record_inflight(count: usize) {
    gauge!("hsts_inflight_records").set(count as f64);
}
