//! Verdict presentation.
//!
//! # Responsibilities
//! - Map a verdict's severity to an icon set and its label to the tooltip
//! - Put a new tab into the neutral "Empty" state
//! - Enable the action on tab activation and completed loads
//!
//! # Design Decisions
//! - Icon paths follow `<root>/<set>/<size>.png`
//! - Unknown verdicts leave the surface untouched

use crate::classify::TabId;
use crate::config::PresentationConfig;
use crate::presentation::surface::{ActionSurface, IconPaths};
use crate::verdict::{Severity, Verdict};

/// The fixed icon sets shipped with the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    Danger,
    Warning,
    Success,
    Neutral,
}

impl IconSet {
    /// Icon set for a severity; `Unknown` has none.
    pub fn for_severity(severity: Severity) -> Option<Self> {
        match severity {
            Severity::Danger => Some(IconSet::Danger),
            Severity::Warning => Some(IconSet::Warning),
            Severity::Success => Some(IconSet::Success),
            Severity::Unknown => None,
        }
    }
}

/// Applies verdicts and tab lifecycle changes to an action surface.
pub struct Presenter<S> {
    surface: S,
    config: PresentationConfig,
}

impl<S: ActionSurface> Presenter<S> {
    pub fn new(surface: S, config: PresentationConfig) -> Self {
        Self { surface, config }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Size-keyed image paths for an icon set.
    pub fn icon_paths(&self, set: IconSet) -> IconPaths {
        let dir = match set {
            IconSet::Danger => "danger",
            IconSet::Warning => "warning",
            IconSet::Success => "success",
            IconSet::Neutral => self.config.neutral_icon_set.as_str(),
        };
        self.config
            .icon_sizes
            .iter()
            .map(|size| (*size, format!("{}/{}/{}.png", self.config.icon_root, dir, size)))
            .collect()
    }

    /// Show a verdict. Returns false if it was `Unknown` and nothing changed.
    pub fn apply(&mut self, verdict: &Verdict) -> bool {
        let Some(set) = IconSet::for_severity(verdict.severity) else {
            return false;
        };
        self.surface.set_title(&verdict.label);
        let paths = self.icon_paths(set);
        self.surface.set_icon(paths);
        true
    }

    /// Neutral state for a newly created tab.
    pub fn tab_created(&mut self, tab_id: TabId) {
        self.surface.enable(tab_id);
        self.surface.set_title(&self.config.empty_title);
        let paths = self.icon_paths(IconSet::Neutral);
        self.surface.set_icon(paths);
    }

    /// Enable the action without touching the verdict.
    pub fn enable(&mut self, tab_id: TabId) {
        self.surface.enable(tab_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::HstsObservation;
    use crate::presentation::surface::{RecordingSurface, SurfaceCall};
    use crate::verdict::evaluate;

    fn presenter() -> Presenter<RecordingSurface> {
        Presenter::new(RecordingSurface::new(), PresentationConfig::default())
    }

    #[test]
    fn test_icon_paths() {
        let p = presenter();
        let paths = p.icon_paths(IconSet::Danger);
        assert_eq!(paths.get(&19).map(String::as_str), Some("icons/danger/19.png"));
        assert_eq!(paths.get(&38).map(String::as_str), Some("icons/danger/38.png"));
        assert_eq!(paths.len(), 2);

        let neutral = p.icon_paths(IconSet::Neutral);
        assert_eq!(neutral.get(&19).map(String::as_str), Some("icons/./19.png"));
    }

    #[test]
    fn test_apply_verdict() {
        let mut p = presenter();
        let verdict = evaluate(None, Some(&HstsObservation::absent()));
        assert!(p.apply(&verdict));

        let surface = p.surface();
        assert_eq!(surface.title(), Some(verdict.label.as_str()));
        assert_eq!(surface.icon(38), Some("icons/warning/38.png"));
    }

    #[test]
    fn test_unknown_verdict_is_noop() {
        let mut p = presenter();
        assert!(!p.apply(&Verdict::unknown()));
        assert!(p.surface().calls().is_empty());
    }

    #[test]
    fn test_tab_created_resets() {
        let mut p = presenter();
        p.tab_created(TabId(4));

        let surface = p.into_surface();
        assert_eq!(surface.calls()[0], SurfaceCall::Enable { tab_id: TabId(4) });
        assert_eq!(surface.title(), Some("Empty"));
        assert_eq!(surface.icon(19), Some("icons/./19.png"));
        assert!(surface.state().enabled_tabs.contains(&TabId(4)));
    }

    #[test]
    fn test_custom_icon_layout() {
        let config = PresentationConfig {
            icon_root: "assets".into(),
            icon_sizes: vec![16],
            neutral_icon_set: "idle".into(),
            empty_title: "Idle".into(),
        };
        let p = Presenter::new(RecordingSurface::new(), config);
        let paths = p.icon_paths(IconSet::Neutral);
        assert_eq!(
            paths.into_iter().collect::<Vec<_>>(),
            vec![(16, "assets/idle/16.png".to_string())]
        );
    }
}
