//! Recorded event streams.
//!
//! A stream is JSON Lines: one [`HostEvent`] per line. Blank lines and lines
//! starting with `#` are skipped. A line that fails to decode is logged and
//! skipped so one bad capture does not hide the rest of a session.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::events::types::HostEvent;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read event stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("event queue closed before replay finished")]
    QueueClosed,
}

/// Decode every valid event from a JSON Lines reader.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<HostEvent>, ReplayError> {
    let mut events = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match serde_json::from_str::<HostEvent>(trimmed) {
            Ok(event) => events.push(event),
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "Skipping malformed event");
            }
        }
    }

    Ok(events)
}

/// Decode an event stream from a file.
pub fn read_events_file(path: &Path) -> Result<Vec<HostEvent>, ReplayError> {
    let file = File::open(path)?;
    read_events(BufReader::new(file))
}
