//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject blank denylist patterns, which would match every URL
//! - Validate icon settings and log level
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: WatchConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::WatchConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("classifier.{field}[{index}] is blank")]
    BlankPattern { field: &'static str, index: usize },

    #[error("presentation.icon_sizes must not be empty")]
    NoIconSizes,

    #[error("presentation.icon_sizes contains 0")]
    ZeroIconSize,

    #[error("presentation.neutral_icon_set must not be empty")]
    NoNeutralIconSet,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &WatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let patterns = [
        ("deny_substrings", &config.classifier.deny_substrings),
        ("deny_prefixes", &config.classifier.deny_prefixes),
    ];
    for (field, list) in patterns {
        for (index, pattern) in list.iter().enumerate() {
            if pattern.trim().is_empty() {
                errors.push(ValidationError::BlankPattern { field, index });
            }
        }
    }

    let presentation = &config.presentation;
    if presentation.icon_sizes.is_empty() {
        errors.push(ValidationError::NoIconSizes);
    } else if presentation.icon_sizes.contains(&0) {
        errors.push(ValidationError::ZeroIconSize);
    }
    if presentation.neutral_icon_set.is_empty() {
        errors.push(ValidationError::NoNeutralIconSet);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
