//! Strict-Transport-Security header extraction.
//!
//! # Responsibilities
//! - Find the HSTS header in a response's header list
//! - Report presence plus the raw header value
//! - Parse the value's directives for diagnostics
//!
//! # Design Decisions
//! - Header names compare case-insensitively
//! - When the header repeats, the last occurrence wins
//! - Absence is a normal outcome, never an error
//! - Directive parsing is lenient and never affects presence

use serde::{Deserialize, Serialize};

/// Name of the header this module looks for.
pub const HSTS_HEADER: &str = "strict-transport-security";

/// One response header as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeader {
    pub name: String,
    /// Hosts may omit the textual value for binary headers.
    #[serde(default)]
    pub value: String,
}

impl ResponseHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// HSTS status of a single response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HstsObservation {
    /// True when the response carried the header at all.
    pub enabled: bool,
    /// Raw header value, empty when absent.
    pub value: String,
}

impl HstsObservation {
    /// Observation for a response that had no HSTS header.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Observation for a response carrying the given header value.
    pub fn present(value: impl Into<String>) -> Self {
        Self {
            enabled: true,
            value: value.into(),
        }
    }

    /// Parsed directives of the header value.
    pub fn directives(&self) -> HstsDirectives {
        HstsDirectives::parse(&self.value)
    }
}

/// Directives carried by an HSTS header value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HstsDirectives {
    /// `max-age` in seconds; `None` if missing or malformed.
    pub max_age: Option<u64>,
    pub include_subdomains: bool,
    pub preload: bool,
}

impl HstsDirectives {
    /// Parse a header value such as `max-age=31536000; includeSubDomains`.
    pub fn parse(value: &str) -> Self {
        let mut directives = Self::default();

        for part in value.split(';') {
            let (name, arg) = match part.split_once('=') {
                Some((name, arg)) => (name.trim(), Some(arg.trim().trim_matches('"'))),
                None => (part.trim(), None),
            };

            if name.eq_ignore_ascii_case("max-age") {
                directives.max_age = arg.and_then(|a| a.parse().ok());
            } else if name.eq_ignore_ascii_case("includesubdomains") {
                directives.include_subdomains = true;
            } else if name.eq_ignore_ascii_case("preload") {
                directives.preload = true;
            }
        }

        directives
    }
}

/// Extract the HSTS observation from a response's headers.
pub fn inspect_headers(headers: &[ResponseHeader]) -> HstsObservation {
    headers
        .iter()
        .rev()
        .find(|h| h.name.eq_ignore_ascii_case(HSTS_HEADER))
        .map(|h| HstsObservation::present(h.value.clone()))
        .unwrap_or_default()
}
