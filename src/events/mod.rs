//! Event bindings between the host and the core.
//!
//! # Data Flow
//! ```text
//! Host notifications (types.rs)
//!     → event_loop.rs (unbounded queue, one consumer)
//!     → handlers.rs
//!         → classify (eligible?)
//!         → inspect (HSTS observation)
//!         → correlation (record / take_and_clear on completion or error)
//!         → verdict (on completion)
//!         → presentation (icon + tooltip)
//!
//! registration.rs: filters the host installs before delivering anything
//! replay.rs: JSON Lines event streams for headless hosts
//! ```

pub mod event_loop;
pub mod handlers;
pub mod registration;
pub mod replay;
pub mod types;

pub use event_loop::{EventLoop, EventSender};
pub use handlers::Handlers;
pub use registration::{registrations, Listener, Registration};
pub use replay::{read_events, read_events_file, ReplayError};
pub use types::{CompletedEvent, ErrorEvent, HostEvent, ResponseEvent, TabStatus};
