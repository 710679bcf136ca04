//! Host action surface.
//!
//! The toolbar button is owned by the host; the core only issues the three
//! calls below. `RecordingSurface` keeps them in memory for headless hosts
//! and tests.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::classify::TabId;

/// Icon image paths keyed by pixel size.
pub type IconPaths = BTreeMap<u32, String>;

/// The toolbar action exposed by the host.
pub trait ActionSurface {
    /// Replace the toolbar icon.
    fn set_icon(&mut self, paths: IconPaths);

    /// Replace the tooltip text.
    fn set_title(&mut self, title: &str);

    /// Enable the action for a tab.
    fn enable(&mut self, tab_id: TabId);
}

/// One call made against the surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum SurfaceCall {
    SetIcon { paths: IconPaths },
    SetTitle { title: String },
    Enable { tab_id: TabId },
}

/// Visible state after all calls so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurfaceState {
    pub icon: IconPaths,
    pub title: Option<String>,
    pub enabled_tabs: BTreeSet<TabId>,
}

/// In-memory surface that remembers every call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    state: SurfaceState,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    /// Current tooltip, if one was ever set.
    pub fn title(&self) -> Option<&str> {
        self.state.title.as_deref()
    }

    /// Path of the current icon at `size`.
    pub fn icon(&self, size: u32) -> Option<&str> {
        self.state.icon.get(&size).map(String::as_str)
    }
}

impl ActionSurface for RecordingSurface {
    fn set_icon(&mut self, paths: IconPaths) {
        tracing::debug!(paths = ?paths, "set_icon");
        self.state.icon = paths.clone();
        self.calls.push(SurfaceCall::SetIcon { paths });
    }

    fn set_title(&mut self, title: &str) {
        tracing::debug!(title, "set_title");
        self.state.title = Some(title.to_string());
        self.calls.push(SurfaceCall::SetTitle {
            title: title.to_string(),
        });
    }

    fn enable(&mut self, tab_id: TabId) {
        tracing::debug!(tab_id = %tab_id, "enable");
        self.state.enabled_tabs.insert(tab_id);
        self.calls.push(SurfaceCall::Enable { tab_id });
    }
}
