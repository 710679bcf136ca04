//! Toolbar presentation subsystem.
//!
//! # Data Flow
//! ```text
//! Verdict / tab lifecycle
//!     → adapter.rs (pick icon set, tooltip)
//!     → surface.rs (host ActionSurface: set_icon, set_title, enable)
//! ```

pub mod adapter;
pub mod surface;

pub use adapter::{IconSet, Presenter};
pub use surface::{ActionSurface, IconPaths, RecordingSurface, SurfaceCall, SurfaceState};
