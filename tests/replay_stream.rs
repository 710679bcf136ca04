//! Replaying a captured, browser-shaped event stream.

use hsts_watch::events::{read_events, HostEvent};
use hsts_watch::presentation::SurfaceCall;
use hsts_watch::verdict::engine::LABEL_HTTPS_ONLY_ON;

mod common;

const CAPTURE: &str = r#"
# tab 7: direct HTTPS load, plus an XHR and a prefetch that must be ignored
{"event":"tab_created","tabId":7}
{"event":"headers_received","tabId":7,"requestId":"501","url":"https://secure.example/","type":"main_frame","responseHeaders":[{"name":"strict-transport-security","value":"max-age=63072000; includeSubDomains; preload"}]}
{"event":"headers_received","tabId":7,"requestId":"502","url":"https://secure.example/api","type":"xmlhttprequest","responseHeaders":[]}
{"event":"headers_received","tabId":-1,"requestId":"503","url":"https://secure.example/next","type":"main_frame","responseHeaders":[]}
{"event":"completed","tabId":7,"requestId":"501","url":"https://secure.example/","type":"main_frame"}
{"event":"tab_updated","tabId":7,"status":"complete"}
# tab 7: a download link that aborts
{"event":"headers_received","tabId":7,"requestId":"504","url":"http://secure.example/dl","type":"main_frame","responseHeaders":[]}
{"event":"error_occurred","tabId":7,"requestId":"504","url":"http://secure.example/dl","type":"main_frame","error":"net::ERR_ABORTED"}
not json at all
"#;

#[tokio::test]
async fn test_replay_capture() {
    let events = read_events(CAPTURE.as_bytes()).unwrap();
    assert_eq!(events.len(), 8);
    assert!(matches!(events[0], HostEvent::TabCreated { .. }));

    let handlers = common::run_events(events).await;
    assert_eq!(handlers.store().in_flight(), 0);

    let surface = handlers.into_presenter().into_surface();
    assert_eq!(surface.title(), Some(LABEL_HTTPS_ONLY_ON));
    assert_eq!(surface.icon(38), Some("icons/success/38.png"));

    let titles: Vec<_> = surface
        .calls()
        .iter()
        .filter_map(|c| match c {
            SurfaceCall::SetTitle { title } => Some(title.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(titles, vec!["Empty", LABEL_HTTPS_ONLY_ON]);
}
