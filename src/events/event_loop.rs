//! Single-consumer event queue.
//!
//! # Responsibilities
//! - Drain host notifications from an unbounded queue in arrival order
//! - Run each handler to completion before taking the next event
//! - Stop when every sender is gone or shutdown is signalled
//!
//! # Design Decisions
//! - One task owns the handlers, so the store needs no locking
//! - Queued events are preferred over the shutdown signal (`biased` select)

use tokio::sync::{broadcast, mpsc};

use crate::events::handlers::Handlers;
use crate::events::types::HostEvent;
use crate::presentation::ActionSurface;

/// Sender half handed to the host side.
pub type EventSender = mpsc::UnboundedSender<HostEvent>;

/// Runs [`Handlers`] over a queue of host events.
pub struct EventLoop<S> {
    handlers: Handlers<S>,
    events: mpsc::UnboundedReceiver<HostEvent>,
}

impl<S: ActionSurface> EventLoop<S> {
    /// Create a loop and the sender that feeds it.
    pub fn new(handlers: Handlers<S>) -> (Self, EventSender) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { handlers, events: rx }, tx)
    }

    /// Process events until the queue closes or shutdown fires.
    ///
    /// Returns the handlers so callers can inspect the final state.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) -> Handlers<S> {
        let mut processed: u64 = 0;

        loop {
            tokio::select! {
                biased;
                event = self.events.recv() => match event {
                    Some(event) => {
                        let kind = event.kind();
                        tracing::debug_span!("event", kind)
                            .in_scope(|| self.handlers.dispatch(event));
                        processed += 1;
                    }
                    None => {
                        tracing::debug!("Event queue closed");
                        break;
                    }
                },
                _ = shutdown.recv() => {
                    tracing::info!("Event loop received shutdown signal, exiting loop");
                    break;
                }
            }
        }

        tracing::info!(
            processed,
            in_flight = self.handlers.store().in_flight(),
            "Event loop stopped"
        );
        self.handlers
    }
}
