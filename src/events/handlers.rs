//! Host event handlers.
//!
//! # Responsibilities
//! - Gate every navigation event through the request classifier
//! - Feed observations into the correlation store
//! - Evaluate and present the verdict when a navigation completes
//! - Keep per-tab state in step with the tab lifecycle
//!
//! # Design Decisions
//! - State is owned here and injected at construction; no globals
//! - Each handler runs to completion; nothing suspends mid-event
//! - A navigation's record is removed before its completion or error
//!   handler returns, even when the final URL is an internal page

use crate::classify::{FrameType, Rejection, RequestClassifier, RequestId, Scheme, TabId};
use crate::config::WatchConfig;
use crate::correlation::{CorrelationStore, RequestRecord};
use crate::events::types::{CompletedEvent, ErrorEvent, HostEvent, ResponseEvent, TabStatus};
use crate::inspect::inspect_headers;
use crate::observability::metrics;
use crate::presentation::{ActionSurface, Presenter};
use crate::verdict::{evaluate_record, Verdict};

/// The core's complete event-handling state.
pub struct Handlers<S> {
    store: CorrelationStore,
    classifier: RequestClassifier,
    presenter: Presenter<S>,
}

impl<S: ActionSurface> Handlers<S> {
    pub fn new(classifier: RequestClassifier, presenter: Presenter<S>) -> Self {
        Self {
            store: CorrelationStore::new(),
            classifier,
            presenter,
        }
    }

    pub fn from_config(config: &WatchConfig, surface: S) -> Self {
        Self::new(
            RequestClassifier::from_config(&config.classifier),
            Presenter::new(surface, config.presentation.clone()),
        )
    }

    pub fn store(&self) -> &CorrelationStore {
        &self.store
    }

    pub fn presenter(&self) -> &Presenter<S> {
        &self.presenter
    }

    pub fn into_presenter(self) -> Presenter<S> {
        self.presenter
    }

    /// Route one host notification. Returns the verdict if one was shown.
    pub fn dispatch(&mut self, event: HostEvent) -> Option<Verdict> {
        match event {
            HostEvent::BeforeRedirect(e) => self.on_before_redirect(&e),
            HostEvent::HeadersReceived(e) => self.on_headers_received(&e),
            HostEvent::Completed(e) => return self.on_completed(&e),
            HostEvent::ErrorOccurred(e) => self.on_error_occurred(&e),
            HostEvent::TabCreated { tab_id } => self.on_tab_created(tab_id),
            HostEvent::TabActivated { tab_id } => self.on_tab_activated(tab_id),
            HostEvent::TabUpdated { tab_id, status } => self.on_tab_updated(tab_id, status),
            HostEvent::TabRemoved { tab_id } => self.on_tab_removed(tab_id),
        }
        None
    }

    fn admit(&self, tab_id: TabId, url: &str, frame: FrameType) -> bool {
        match self.classifier.check(tab_id, url, frame) {
            Ok(()) => true,
            Err(reason) => {
                tracing::trace!(
                    tab_id = %tab_id,
                    url,
                    reason = reason.as_str(),
                    "Event not tracked"
                );
                metrics::record_rejected(reason);
                false
            }
        }
    }

    /// Remove the record of a navigation that ended, whatever its URL.
    ///
    /// A chain can start on a tracked URL and end on an internal one, so only
    /// the tab and frame decide whether the navigation owns a record.
    fn evict(
        &mut self,
        tab_id: TabId,
        request_id: &RequestId,
        frame: FrameType,
    ) -> Option<RequestRecord> {
        if let Err(reason) = self.classifier.check_target(tab_id, frame) {
            metrics::record_rejected(reason);
            return None;
        }
        let record = self.store.take_and_clear(tab_id, request_id);
        metrics::record_inflight(self.store.in_flight());
        record
    }

    /// A top-level response is about to redirect.
    pub fn on_before_redirect(&mut self, event: &ResponseEvent) {
        if !self.admit(event.tab_id, &event.url, event.frame_type) {
            return;
        }
        let observation = inspect_headers(&event.response_headers);
        let scheme = Scheme::of(&event.url);

        tracing::debug!(
            tab_id = %event.tab_id,
            request_id = %event.request_id,
            scheme = ?scheme,
            hsts = observation.enabled,
            "Redirect origin observed"
        );
        self.store
            .record_redirect_origin(event.tab_id, event.request_id.clone(), observation, scheme);
        metrics::record_inflight(self.store.in_flight());
    }

    /// Top-level response headers arrived.
    pub fn on_headers_received(&mut self, event: &ResponseEvent) {
        if !self.admit(event.tab_id, &event.url, event.frame_type) {
            return;
        }
        let observation = inspect_headers(&event.response_headers);
        let scheme = Scheme::of(&event.url);
        let directives = observation.directives();

        tracing::debug!(
            tab_id = %event.tab_id,
            request_id = %event.request_id,
            scheme = ?scheme,
            hsts = observation.enabled,
            max_age = ?directives.max_age,
            include_subdomains = directives.include_subdomains,
            preload = directives.preload,
            "Response headers observed"
        );
        self.store
            .record_headers_received(event.tab_id, event.request_id.clone(), observation, scheme);
        metrics::record_inflight(self.store.in_flight());
    }

    /// A top-level navigation finished; evaluate and show its verdict.
    pub fn on_completed(&mut self, event: &CompletedEvent) -> Option<Verdict> {
        let record = self.evict(event.tab_id, &event.request_id, event.frame_type)?;
        if self.classifier.is_internal(&event.url) {
            tracing::debug!(
                tab_id = %event.tab_id,
                request_id = %event.request_id,
                url = %event.url,
                "Navigation ended on an internal page; verdict suppressed"
            );
            metrics::record_rejected(Rejection::InternalUrl);
            return None;
        }

        let verdict = evaluate_record(Some(&record));
        if !self.presenter.apply(&verdict) {
            tracing::debug!(
                tab_id = %event.tab_id,
                request_id = %event.request_id,
                "Navigation completed without a verdict"
            );
            return None;
        }

        tracing::info!(
            tab_id = %event.tab_id,
            request_id = %event.request_id,
            url = %event.url,
            severity = verdict.severity.as_str(),
            label = %verdict.label,
            "HSTS verdict"
        );
        metrics::record_verdict(verdict.severity);
        Some(verdict)
    }

    /// A top-level navigation failed or was aborted; drop its record.
    pub fn on_error_occurred(&mut self, event: &ErrorEvent) {
        if self
            .evict(event.tab_id, &event.request_id, event.frame_type)
            .is_some()
        {
            tracing::debug!(
                tab_id = %event.tab_id,
                request_id = %event.request_id,
                error = %event.error,
                "Navigation failed; record dropped"
            );
        }
    }

    pub fn on_tab_created(&mut self, tab_id: TabId) {
        tracing::debug!(tab_id = %tab_id, "Tab created");
        self.store.reset_tab(tab_id);
        self.presenter.tab_created(tab_id);
    }

    pub fn on_tab_activated(&mut self, tab_id: TabId) {
        if tab_id.is_valid() {
            self.presenter.enable(tab_id);
        }
    }

    /// A finished page load enables the action and starts the tab afresh.
    pub fn on_tab_updated(&mut self, tab_id: TabId, status: Option<TabStatus>) {
        if status == Some(TabStatus::Complete) && tab_id.is_valid() {
            self.store.clear_tab(tab_id);
            self.presenter.enable(tab_id);
        }
    }

    pub fn on_tab_removed(&mut self, tab_id: TabId) {
        tracing::debug!(tab_id = %tab_id, "Tab removed");
        self.store.remove_tab(tab_id);
        metrics::record_inflight(self.store.in_flight());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::ResponseHeader;
    use crate::presentation::RecordingSurface;
    use crate::verdict::Severity;

    fn handlers() -> Handlers<RecordingSurface> {
        Handlers::from_config(&WatchConfig::default(), RecordingSurface::new())
    }

    fn response(tab: i64, request: &str, url: &str, hsts: Option<&str>) -> ResponseEvent {
        ResponseEvent {
            tab_id: TabId(tab),
            request_id: RequestId::from(request),
            url: url.to_string(),
            response_headers: hsts
                .map(|v| vec![ResponseHeader::new("Strict-Transport-Security", v)])
                .unwrap_or_default(),
            frame_type: FrameType::MainFrame,
        }
    }

    fn completed(tab: i64, request: &str, url: &str) -> CompletedEvent {
        CompletedEvent {
            tab_id: TabId(tab),
            request_id: RequestId::from(request),
            url: url.to_string(),
            frame_type: FrameType::MainFrame,
        }
    }

    #[test]
    fn test_rejected_events_leave_store_empty() {
        let mut h = handlers();
        h.on_headers_received(&response(-1, "1", "https://example.com/", None));
        let mut sub = response(1, "2", "https://example.com/", None);
        sub.frame_type = FrameType::SubFrame;
        h.on_headers_received(&sub);
        h.on_before_redirect(&response(1, "3", "http://www.google.com/chrome/newtab?x=1", None));

        assert_eq!(h.store().in_flight(), 0);
    }

    #[test]
    fn test_completed_evicts_record() {
        let mut h = handlers();
        h.on_headers_received(&response(1, "5", "http://example.com/", Some("max-age=60")));
        assert_eq!(h.store().in_flight(), 1);

        let verdict = h.on_completed(&completed(1, "5", "http://example.com/")).unwrap();
        assert_eq!(verdict.severity, Severity::Success);
        assert_eq!(h.store().in_flight(), 0);
        assert!(h.on_completed(&completed(1, "5", "http://example.com/")).is_none());
    }

    #[test]
    fn test_redirect_into_internal_page_is_evicted_silently() {
        let mut h = handlers();
        h.on_tab_created(TabId(1));
        h.on_before_redirect(&response(1, "50", "http://ogs.google.com/widget", None));
        h.on_headers_received(&response(1, "50", "https://ogs.google.com/widget", None));
        assert_eq!(h.store().in_flight(), 1);

        assert!(h.on_completed(&completed(1, "50", "https://ogs.google.com/widget")).is_none());
        assert_eq!(h.store().in_flight(), 0);
        assert_eq!(h.presenter().surface().title(), Some("Empty"));
    }

    #[test]
    fn test_error_drops_record_without_presenting() {
        let mut h = handlers();
        h.on_headers_received(&response(1, "7", "https://example.com/file.zip", None));
        assert_eq!(h.store().in_flight(), 1);

        h.on_error_occurred(&ErrorEvent {
            tab_id: TabId(1),
            request_id: RequestId::from("7"),
            url: "https://example.com/file.zip".into(),
            frame_type: FrameType::MainFrame,
            error: "net::ERR_ABORTED".into(),
        });
        assert_eq!(h.store().in_flight(), 0);
        assert!(h.presenter().surface().calls().is_empty());
        assert!(h.on_completed(&completed(1, "7", "https://example.com/file.zip")).is_none());
    }

    #[test]
    fn test_completion_of_sub_frame_keeps_main_record() {
        let mut h = handlers();
        h.on_headers_received(&response(1, "8", "https://example.com/", None));
        let mut sub = completed(1, "8", "https://example.com/");
        sub.frame_type = FrameType::SubFrame;

        assert!(h.on_completed(&sub).is_none());
        assert_eq!(h.store().in_flight(), 1);
    }

    #[test]
    fn test_both_legs_enabled_keeps_previous_state() {
        let mut h = handlers();
        h.on_tab_created(TabId(1));
        h.on_before_redirect(&response(1, "5", "http://example.com/", Some("max-age=1")));
        h.on_headers_received(&response(1, "5", "https://example.com/", Some("max-age=1")));

        assert!(h.on_completed(&completed(1, "5", "https://example.com/")).is_none());
        assert_eq!(h.store().in_flight(), 0);
        assert_eq!(h.presenter().surface().title(), Some("Empty"));
    }

    #[test]
    fn test_tab_update_complete_resets_and_enables() {
        let mut h = handlers();
        h.on_headers_received(&response(2, "9", "https://example.com/", None));
        h.on_tab_updated(TabId(2), Some(TabStatus::Loading));
        assert_eq!(h.store().in_flight(), 1);

        h.on_tab_updated(TabId(2), Some(TabStatus::Complete));
        assert_eq!(h.store().in_flight(), 0);
        assert!(h.presenter().surface().state().enabled_tabs.contains(&TabId(2)));
    }

    #[test]
    fn test_tab_update_complete_does_not_register_unknown_tab() {
        let mut h = handlers();
        for tab in 1..=5 {
            h.on_tab_updated(TabId(tab), Some(TabStatus::Complete));
        }
        assert_eq!(h.store().tab_count(), 0);
    }

    #[test]
    fn test_activation_of_invalid_tab_ignored() {
        let mut h = handlers();
        h.on_tab_activated(TabId(-1));
        h.on_tab_activated(TabId(6));
        let calls = h.presenter().surface().calls().len();
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_dispatch_routes_events() {
        let mut h = handlers();
        h.dispatch(HostEvent::TabCreated { tab_id: TabId(1) });
        h.dispatch(HostEvent::HeadersReceived(response(1, "1", "http://example.com/", None)));
        let verdict = h.dispatch(HostEvent::Completed(completed(1, "1", "http://example.com/")));

        assert_eq!(verdict.map(|v| v.severity), Some(Severity::Danger));
        h.dispatch(HostEvent::TabRemoved { tab_id: TabId(1) });
        assert_eq!(h.store().tab_count(), 0);
    }

    #[test]
    fn test_dispatch_routes_error_event() {
        let mut h = handlers();
        h.dispatch(HostEvent::HeadersReceived(response(2, "3", "https://example.com/", None)));
        let verdict = h.dispatch(HostEvent::ErrorOccurred(ErrorEvent {
            tab_id: TabId(2),
            request_id: RequestId::from("3"),
            url: "https://example.com/".into(),
            frame_type: FrameType::MainFrame,
            error: "net::ERR_NAME_NOT_RESOLVED".into(),
        }));

        assert!(verdict.is_none());
        assert_eq!(h.store().in_flight(), 0);
    }
}
