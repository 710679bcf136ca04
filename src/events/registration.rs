//! Listener registrations the host must install.

use serde::Serialize;

use crate::classify::FrameType;

/// URL patterns every listener is restricted to.
pub const URL_PATTERNS: &[&str] = &["http://*/*", "https://*/*"];

/// Host navigation listeners the core subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Listener {
    BeforeRedirect,
    HeadersReceived,
    Completed,
    ErrorOccurred,
}

/// Filter and extra-info request for one listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub listener: Listener,
    pub urls: Vec<String>,
    pub types: Vec<FrameType>,
    pub extra_info: Vec<String>,
}

impl Registration {
    fn new(listener: Listener, needs_headers: bool) -> Self {
        let extra_info = if needs_headers {
            vec!["responseHeaders".to_string()]
        } else {
            Vec::new()
        };
        Self {
            listener,
            urls: URL_PATTERNS.iter().map(|p| p.to_string()).collect(),
            types: vec![FrameType::MainFrame],
            extra_info,
        }
    }
}

/// All registrations, in the order the host should install them.
pub fn registrations() -> Vec<Registration> {
    vec![
        Registration::new(Listener::BeforeRedirect, true),
        Registration::new(Listener::HeadersReceived, true),
        Registration::new(Listener::Completed, false),
        Registration::new(Listener::ErrorOccurred, false),
    ]
}
