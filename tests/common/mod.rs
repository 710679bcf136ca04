//! Shared builders for integration tests.

#![allow(dead_code)]

use hsts_watch::classify::{FrameType, RequestId, TabId};
use hsts_watch::config::WatchConfig;
use hsts_watch::events::{
    CompletedEvent, ErrorEvent, EventLoop, Handlers, HostEvent, ResponseEvent,
};
use hsts_watch::inspect::ResponseHeader;
use hsts_watch::presentation::RecordingSurface;
use tokio::sync::broadcast;

pub const ONE_YEAR: &str = "max-age=31536000";

/// Headers of a plain response, optionally carrying HSTS.
pub fn headers(hsts: Option<&str>) -> Vec<ResponseHeader> {
    let mut headers = vec![
        ResponseHeader::new("Content-Type", "text/html; charset=utf-8"),
        ResponseHeader::new("Server", "nginx"),
    ];
    if let Some(value) = hsts {
        headers.push(ResponseHeader::new("Strict-Transport-Security", value));
    }
    headers
}

fn response(tab: i64, request: &str, url: &str, hsts: Option<&str>) -> ResponseEvent {
    ResponseEvent {
        tab_id: TabId(tab),
        request_id: RequestId::from(request),
        url: url.to_string(),
        response_headers: headers(hsts),
        frame_type: FrameType::MainFrame,
    }
}

pub fn before_redirect(tab: i64, request: &str, url: &str, hsts: Option<&str>) -> HostEvent {
    HostEvent::BeforeRedirect(response(tab, request, url, hsts))
}

pub fn headers_received(tab: i64, request: &str, url: &str, hsts: Option<&str>) -> HostEvent {
    HostEvent::HeadersReceived(response(tab, request, url, hsts))
}

pub fn completed(tab: i64, request: &str, url: &str) -> HostEvent {
    HostEvent::Completed(CompletedEvent {
        tab_id: TabId(tab),
        request_id: RequestId::from(request),
        url: url.to_string(),
        frame_type: FrameType::MainFrame,
    })
}

/// A main-frame navigation that failed with a network error.
pub fn error_occurred(tab: i64, request: &str, url: &str) -> HostEvent {
    HostEvent::ErrorOccurred(ErrorEvent {
        tab_id: TabId(tab),
        request_id: RequestId::from(request),
        url: url.to_string(),
        frame_type: FrameType::MainFrame,
        error: "net::ERR_ABORTED".to_string(),
    })
}

pub fn handlers() -> Handlers<RecordingSurface> {
    Handlers::from_config(&WatchConfig::default(), RecordingSurface::new())
}

/// Push `events` through a fresh event loop and return the final handlers.
pub async fn run_events(events: Vec<HostEvent>) -> Handlers<RecordingSurface> {
    let (event_loop, tx) = EventLoop::new(handlers());
    let (_shutdown_tx, shutdown_rx) = broadcast::channel(1);

    for event in events {
        tx.send(event).unwrap();
    }
    drop(tx);

    event_loop.run(shutdown_rx).await
}
