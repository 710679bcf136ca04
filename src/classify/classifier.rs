//! Navigation eligibility.
//!
//! # Responsibilities
//! - Accept only top-level document requests from real tabs
//! - Reject the browser's own internal pages (new tab, instant search,
//!   account widgets) so they never drive the displayed verdict
//!
//! # Design Decisions
//! - Denylist entries are plain substring/prefix matchers, no regex
//! - A URL is rejected if any matcher hits (OR over the denylist)
//! - Pure predicate: no logging, callers record the outcome

use crate::classify::types::{FrameType, TabId};
use crate::config::ClassifierConfig;

/// Trait for matching URLs against a denylist entry.
pub trait UrlMatcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the URL hits this entry.
    fn matches(&self, url: &str) -> bool;
}

/// Matches URLs containing a fixed substring.
#[derive(Debug, Clone)]
pub struct ContainsMatcher {
    needle: String,
}

impl ContainsMatcher {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }
}

impl UrlMatcher for ContainsMatcher {
    fn matches(&self, url: &str) -> bool {
        url.contains(&self.needle)
    }
}

/// Matches URLs starting with a fixed prefix.
#[derive(Debug, Clone)]
pub struct PrefixMatcher {
    prefix: String,
}

impl PrefixMatcher {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl UrlMatcher for PrefixMatcher {
    fn matches(&self, url: &str) -> bool {
        url.starts_with(&self.prefix)
    }
}

/// Why an event was not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NoTab,
    NotMainFrame,
    InternalUrl,
}

impl Rejection {
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::NoTab => "no_tab",
            Rejection::NotMainFrame => "not_main_frame",
            Rejection::InternalUrl => "internal_url",
        }
    }
}

/// Decides which navigation events are tracked.
#[derive(Debug)]
pub struct RequestClassifier {
    denylist: Vec<Box<dyn UrlMatcher>>,
}

impl RequestClassifier {
    /// Build a classifier from an explicit denylist.
    pub fn new(denylist: Vec<Box<dyn UrlMatcher>>) -> Self {
        Self { denylist }
    }

    /// Build the denylist from configuration.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let mut denylist: Vec<Box<dyn UrlMatcher>> = Vec::new();
        for needle in &config.deny_substrings {
            denylist.push(Box::new(ContainsMatcher::new(needle.clone())));
        }
        for prefix in &config.deny_prefixes {
            denylist.push(Box::new(PrefixMatcher::new(prefix.clone())));
        }
        Self::new(denylist)
    }

    /// Check the tab and frame of an event, ignoring its URL.
    ///
    /// Navigations that pass this check own a store record; eviction on
    /// completion or error depends only on it.
    pub fn check_target(&self, tab_id: TabId, frame: FrameType) -> Result<(), Rejection> {
        if !tab_id.is_valid() {
            return Err(Rejection::NoTab);
        }
        if frame != FrameType::MainFrame {
            return Err(Rejection::NotMainFrame);
        }
        Ok(())
    }

    /// Returns true if the URL belongs to the browser's own pages.
    pub fn is_internal(&self, url: &str) -> bool {
        self.denylist.iter().any(|m| m.matches(url))
    }

    /// Check an event, reporting the first reason it is not tracked.
    pub fn check(&self, tab_id: TabId, url: &str, frame: FrameType) -> Result<(), Rejection> {
        self.check_target(tab_id, frame)?;
        if self.is_internal(url) {
            return Err(Rejection::InternalUrl);
        }
        Ok(())
    }

    /// Returns true if the event should be tracked.
    pub fn is_eligible(&self, tab_id: TabId, url: &str, frame: FrameType) -> bool {
        self.check(tab_id, url, frame).is_ok()
    }
}

impl Default for RequestClassifier {
    fn default() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }
}
