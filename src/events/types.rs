//! Host notification payloads.
//!
//! Field names are snake_case; the camelCase names used by browser
//! `webRequest`/`tabs` APIs are accepted as aliases so captured event logs
//! replay unchanged.

use serde::{Deserialize, Serialize};

use crate::classify::{FrameType, RequestId, TabId};
use crate::inspect::ResponseHeader;

/// A response notification (before-redirect or headers-received).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEvent {
    #[serde(alias = "tabId")]
    pub tab_id: TabId,
    #[serde(alias = "requestId")]
    pub request_id: RequestId,
    pub url: String,
    #[serde(default, alias = "responseHeaders")]
    pub response_headers: Vec<ResponseHeader>,
    #[serde(alias = "type")]
    pub frame_type: FrameType,
}

/// A navigation-completed notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedEvent {
    #[serde(alias = "tabId")]
    pub tab_id: TabId,
    #[serde(alias = "requestId")]
    pub request_id: RequestId,
    #[serde(default)]
    pub url: String,
    #[serde(alias = "type")]
    pub frame_type: FrameType,
}

/// A navigation-failed notification (network error, abort, blocked load).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEvent {
    #[serde(alias = "tabId")]
    pub tab_id: TabId,
    #[serde(alias = "requestId")]
    pub request_id: RequestId,
    #[serde(default)]
    pub url: String,
    #[serde(alias = "type")]
    pub frame_type: FrameType,
    /// Host error string, e.g. `net::ERR_ABORTED`.
    #[serde(default)]
    pub error: String,
}

/// Load status reported with a tab update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabStatus {
    Loading,
    Complete,
    #[serde(other)]
    Other,
}

/// Every notification the host delivers to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    BeforeRedirect(ResponseEvent),
    HeadersReceived(ResponseEvent),
    Completed(CompletedEvent),
    ErrorOccurred(ErrorEvent),
    TabCreated {
        #[serde(alias = "tabId")]
        tab_id: TabId,
    },
    TabActivated {
        #[serde(alias = "tabId")]
        tab_id: TabId,
    },
    TabUpdated {
        #[serde(alias = "tabId")]
        tab_id: TabId,
        #[serde(default)]
        status: Option<TabStatus>,
    },
    TabRemoved {
        #[serde(alias = "tabId")]
        tab_id: TabId,
    },
}

impl HostEvent {
    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            HostEvent::BeforeRedirect(_) => "before_redirect",
            HostEvent::HeadersReceived(_) => "headers_received",
            HostEvent::Completed(_) => "completed",
            HostEvent::ErrorOccurred(_) => "error_occurred",
            HostEvent::TabCreated { .. } => "tab_created",
            HostEvent::TabActivated { .. } => "tab_activated",
            HostEvent::TabUpdated { .. } => "tab_updated",
            HostEvent::TabRemoved { .. } => "tab_removed",
        }
    }
}
