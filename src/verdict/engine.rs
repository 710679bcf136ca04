//! HSTS verdict decision table.
//!
//! # Decision Table
//! ```text
//! http         https        → verdict
//! ----------   ----------     -------------------------------------------
//! off          off            Danger   neither leg sets HSTS
//! on           off            Success  HTTP sets HSTS, no HTTPS redirect
//! off          on             Success  HTTPS sets HSTS after redirect
//! on           on             Unknown  (no verdict defined)
//! absent       on             Success  HTTP leg unverified
//! absent       off            Warning  HTTP leg unverified
//! on           absent         Success  no SSL redirect
//! off          absent         Danger   no SSL redirect
//! absent       absent         Unknown
//! ```
//!
//! # Design Decisions
//! - Pure function of the two slots; evaluated once per completed navigation
//! - `Unknown` means "leave the current icon and tooltip alone"
//! - Both legs enabled has no product-defined verdict and stays `Unknown`

use serde::{Deserialize, Serialize};

use crate::correlation::RequestRecord;
use crate::inspect::HstsObservation;

pub const LABEL_NEITHER: &str = "neither HTTP nor HTTPS sets HSTS";
pub const LABEL_HTTP_ONLY_WITH_HTTPS: &str = "HTTP sets HSTS; no HTTPS redirect observed";
pub const LABEL_HTTPS_AFTER_REDIRECT: &str =
    "HTTP lacks HSTS but HTTPS sets it and redirect occurred";
pub const LABEL_HTTPS_ONLY_ON: &str = "HTTPS sets HSTS; HTTP leg unverified";
pub const LABEL_HTTPS_ONLY_OFF: &str = "HTTPS lacks HSTS; HTTP leg unverified";
pub const LABEL_HTTP_ONLY_ON: &str = "HTTP sets HSTS; no SSL redirect observed";
pub const LABEL_HTTP_ONLY_OFF: &str = "HTTP lacks HSTS and no SSL redirect";

/// How the verdict is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Danger,
    Warning,
    Success,
    Unknown,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Unknown => "unknown",
        }
    }
}

/// Security classification of one completed navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub label: String,
    pub severity: Severity,
}

impl Verdict {
    fn new(severity: Severity, label: &str) -> Self {
        Self {
            label: label.to_string(),
            severity,
        }
    }

    /// The "no verdict" result.
    pub fn unknown() -> Self {
        Self {
            label: String::new(),
            severity: Severity::Unknown,
        }
    }

    /// True if this verdict should be shown.
    pub fn is_known(&self) -> bool {
        self.severity != Severity::Unknown
    }
}

/// Classify a pair of observations.
pub fn evaluate(http: Option<&HstsObservation>, https: Option<&HstsObservation>) -> Verdict {
    let http = http.map(|o| o.enabled);
    let https = https.map(|o| o.enabled);

    match (http, https) {
        (Some(false), Some(false)) => Verdict::new(Severity::Danger, LABEL_NEITHER),
        (Some(true), Some(false)) => Verdict::new(Severity::Success, LABEL_HTTP_ONLY_WITH_HTTPS),
        (Some(false), Some(true)) => Verdict::new(Severity::Success, LABEL_HTTPS_AFTER_REDIRECT),
        (Some(true), Some(true)) => {
            tracing::debug!("Both HTTP and HTTPS legs set HSTS; no verdict defined");
            Verdict::unknown()
        }
        (None, Some(true)) => Verdict::new(Severity::Success, LABEL_HTTPS_ONLY_ON),
        (None, Some(false)) => Verdict::new(Severity::Warning, LABEL_HTTPS_ONLY_OFF),
        (Some(true), None) => Verdict::new(Severity::Success, LABEL_HTTP_ONLY_ON),
        (Some(false), None) => Verdict::new(Severity::Danger, LABEL_HTTP_ONLY_OFF),
        (None, None) => Verdict::unknown(),
    }
}

/// Classify a completed navigation's record, if it had one.
pub fn evaluate_record(record: Option<&RequestRecord>) -> Verdict {
    match record {
        Some(r) => evaluate(r.http.as_ref(), r.https.as_ref()),
        None => Verdict::unknown(),
    }
}
