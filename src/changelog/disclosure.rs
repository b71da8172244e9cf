// SPDX-License-Identifier: MPL-2.0
//! Expand/collapse state for the releases of one changelog view.
//!
//! Every release starts collapsed. `toggle` is the only transition and it
//! flips exactly one version, so any number of releases can be open at once.
//! The state belongs to a single view and is never persisted.

use std::collections::HashSet;

/// Tracks which release versions are currently expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureState {
    /// Versions that are expanded. Absent means collapsed.
    expanded: HashSet<String>,
}

impl DisclosureState {
    /// Create a disclosure state with every release collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the release with `version` is expanded.
    pub fn is_open(&self, version: &str) -> bool {
        self.expanded.contains(version)
    }

    /// Flip the expanded state of `version`.
    pub fn toggle(&mut self, version: &str) {
        if !self.expanded.remove(version) {
            self.expanded.insert(version.to_owned());
        }
    }

    /// Number of expanded releases.
    pub fn open_count(&self) -> usize {
        self.expanded.len()
    }

    /// Return every release to the collapsed state.
    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_start_collapsed() {
        let state = DisclosureState::new();
        for version in ["1.0.0", "0.9.1", "", "not-a-version"] {
            assert!(!state.is_open(version));
        }
        assert_eq!(state.open_count(), 0);
    }

    #[test]
    fn toggle_expands_and_collapses() {
        let mut state = DisclosureState::new();

        state.toggle("1.0.0");
        assert!(state.is_open("1.0.0"));

        state.toggle("1.0.0");
        assert!(!state.is_open("1.0.0"));
    }

    #[test]
    fn toggle_only_affects_its_version() {
        let mut state = DisclosureState::new();
        state.toggle("2.0.0");

        state.toggle("1.0.0");
        assert!(state.is_open("2.0.0"));
        assert!(!state.is_open("1.1.0"));

        state.toggle("1.0.0");
        assert!(state.is_open("2.0.0"));
    }

    #[test]
    fn multiple_releases_can_be_expanded() {
        let mut state = DisclosureState::new();
        state.toggle("1.0.0");
        state.toggle("1.1.0");
        state.toggle("1.2.0");

        assert!(state.is_open("1.0.0"));
        assert!(state.is_open("1.1.0"));
        assert!(state.is_open("1.2.0"));
        assert_eq!(state.open_count(), 3);
    }

    #[test]
    fn collapse_all_restores_initial_state() {
        let mut state = DisclosureState::new();
        state.toggle("1.0.0");
        state.toggle("1.1.0");

        state.collapse_all();
        assert_eq!(state, DisclosureState::new());
        assert!(!state.is_open("1.0.0"));
    }
}
