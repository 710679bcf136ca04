//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the watcher.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the HSTS watcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WatchConfig {
    /// Which navigations are eligible for tracking.
    pub classifier: ClassifierConfig,

    /// Toolbar icon and tooltip settings.
    pub presentation: PresentationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Request classifier configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// URL substrings identifying the browser's own internal pages.
    pub deny_substrings: Vec<String>,

    /// URL prefixes identifying the browser's own internal pages.
    pub deny_prefixes: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            deny_substrings: vec![
                "sourceid=chrome-instant".to_string(),
                "async/newtab?async=".to_string(),
                "chrome/newtab?".to_string(),
            ],
            deny_prefixes: vec!["https://ogs.google.com".to_string()],
        }
    }
}

/// Presentation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Directory holding one sub-directory per icon set.
    pub icon_root: String,

    /// Icon sizes (pixels) the host is given a path for.
    pub icon_sizes: Vec<u32>,

    /// Icon set shown before any verdict exists.
    pub neutral_icon_set: String,

    /// Tooltip shown on a freshly created tab.
    pub empty_title: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            icon_root: "icons".to_string(),
            icon_sizes: vec![19, 38],
            neutral_icon_set: ".".to_string(),
            empty_title: "Empty".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
