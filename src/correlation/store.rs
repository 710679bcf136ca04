//! In-flight navigation records.
//!
//! # Responsibilities
//! - Hold the HTTP and HTTPS HSTS observations of each top-level navigation
//! - Merge a post-redirect HTTPS leg into the HTTP leg that preceded it
//! - Hand the record over exactly once when the navigation completes
//!
//! # Lifecycle
//! ```text
//! before-redirect (http)    → record = { http }
//! headers-received (http)   → record = { http }            (replaces)
//! headers-received (https)  → record = { http?, https }    (merges)
//! completed / error         → take_and_clear → record gone
//! tab created               → reset_tab
//! tab loaded                → clear_tab
//! tab removed               → remove_tab
//! ```
//!
//! # Design Decisions
//! - Keyed by the host's request id, which hosts keep across a redirect
//! - Owned by a single event handler; no interior locking
//! - Unknown tab/request lookups yield `None`, never a fault

use std::collections::HashMap;

use crate::classify::{RequestId, Scheme, TabId};
use crate::inspect::HstsObservation;

/// Observations collected for one top-level navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestRecord {
    /// Observation from the plain-HTTP leg, if one was seen.
    pub http: Option<HstsObservation>,
    /// Observation from the HTTPS leg, if one was seen.
    pub https: Option<HstsObservation>,
}

impl RequestRecord {
    /// Record holding only an HTTP leg.
    pub fn from_http(observation: HstsObservation) -> Self {
        Self {
            http: Some(observation),
            https: None,
        }
    }

    /// Set the HTTPS leg, keeping whatever HTTP leg is already present.
    pub fn merge_https(&mut self, observation: HstsObservation) {
        self.https = Some(observation);
    }
}

/// Per-tab map of in-flight navigation records.
#[derive(Debug, Default)]
pub struct CorrelationStore {
    tabs: HashMap<TabId, HashMap<RequestId, RequestRecord>>,
}

impl CorrelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the response that is about to redirect a navigation.
    ///
    /// Only an HTTP origin starts a chain; it replaces any earlier record for
    /// the request, dropping a stale HTTPS leg.
    pub fn record_redirect_origin(
        &mut self,
        tab_id: TabId,
        request_id: RequestId,
        observation: HstsObservation,
        scheme: Scheme,
    ) {
        if scheme != Scheme::Http {
            return;
        }
        self.tabs
            .entry(tab_id)
            .or_default()
            .insert(request_id, RequestRecord::from_http(observation));
    }

    /// Record the headers of a top-level response.
    ///
    /// HTTPS merges into the existing record; HTTP starts a fresh one.
    pub fn record_headers_received(
        &mut self,
        tab_id: TabId,
        request_id: RequestId,
        observation: HstsObservation,
        scheme: Scheme,
    ) {
        match scheme {
            Scheme::Https => self
                .tabs
                .entry(tab_id)
                .or_default()
                .entry(request_id)
                .or_default()
                .merge_https(observation),
            Scheme::Http => {
                self.tabs
                    .entry(tab_id)
                    .or_default()
                    .insert(request_id, RequestRecord::from_http(observation));
            }
            Scheme::Other => {}
        }
    }

    /// Remove and return the record of a completed navigation.
    pub fn take_and_clear(
        &mut self,
        tab_id: TabId,
        request_id: &RequestId,
    ) -> Option<RequestRecord> {
        let requests = self.tabs.get_mut(&tab_id)?;
        requests.remove(request_id)
    }

    /// Start a newly created tab with no in-flight records.
    pub fn reset_tab(&mut self, tab_id: TabId) {
        self.tabs.insert(tab_id, HashMap::new());
    }

    /// Drop the in-flight records of a tab that finished loading.
    ///
    /// Unknown tabs are left unknown.
    pub fn clear_tab(&mut self, tab_id: TabId) {
        if let Some(requests) = self.tabs.get_mut(&tab_id) {
            requests.clear();
        }
    }

    /// Forget a closed tab entirely.
    pub fn remove_tab(&mut self, tab_id: TabId) {
        self.tabs.remove(&tab_id);
    }

    /// Look at a record without removing it.
    pub fn get(&self, tab_id: TabId, request_id: &RequestId) -> Option<&RequestRecord> {
        self.tabs.get(&tab_id)?.get(request_id)
    }

    /// Number of records across all tabs.
    pub fn in_flight(&self) -> usize {
        self.tabs.values().map(HashMap::len).sum()
    }

    /// Number of tabs with an entry, empty or not.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
