// SPDX-License-Identifier: MPL-2.0
//! Resolves a catalog into the tree of text that the changelog screen shows.
//!
//! Rendering is a pure function of the catalog, the language code and the
//! disclosure state. Localized content is looked up by exact language key; a
//! missing key leaves that piece out (no title, no label, no items) instead of
//! falling back to another language.

use super::catalog::ReleaseCatalog;
use super::date::format_release_date;
use super::disclosure::DisclosureState;
use super::model::{Release, Section};

/// Separator between the version and the date in a header.
pub const DATE_SEPARATOR: &str = "•";

/// Separator between the version/date block and the title in a header.
pub const TITLE_SEPARATOR: &str = "—";

/// Resolved changelog, one entry per catalog release, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogTree {
    pub releases: Vec<ReleaseEntry>,
}

/// One rendered release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseEntry {
    pub header: ReleaseHeader,
    /// Sections of an expanded release; `None` while collapsed.
    pub body: Option<Vec<SectionEntry>>,
}

impl ReleaseEntry {
    pub fn is_open(&self) -> bool {
        self.header.open
    }
}

/// Header row of a release. Clicking it toggles the release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseHeader {
    pub version: String,
    /// Formatted date; empty when the release has no usable date.
    pub date: String,
    pub title: Option<String>,
    pub open: bool,
}

impl ReleaseHeader {
    /// Version as shown in the header badge.
    pub fn version_label(&self) -> String {
        format!("v{}", self.version)
    }

    /// Expand/collapse indicator for the current state.
    pub fn indicator(&self) -> &'static str {
        if self.open {
            "▼"
        } else {
            "▶"
        }
    }

    /// Single-line header text, e.g. `1.0.0 • Jan 10, 2024 — Fix`.
    pub fn summary(&self) -> String {
        let mut line = self.version.clone();
        if !self.date.is_empty() {
            line.push_str(&format!(" {DATE_SEPARATOR} {}", self.date));
        }
        if let Some(title) = &self.title {
            line.push_str(&format!(" {TITLE_SEPARATOR} {title}"));
        }
        line
    }
}

/// One rendered section of an expanded release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub label: Option<String>,
    /// Items for the requested language in authored order. Empty when the
    /// section has no list for that language.
    pub items: Vec<String>,
}

/// Renders every release of `catalog` for `language`.
pub fn render(catalog: &ReleaseCatalog, language: &str, state: &DisclosureState) -> ChangelogTree {
    ChangelogTree {
        releases: catalog
            .iter()
            .map(|release| render_release(release, language, state))
            .collect(),
    }
}

/// Renders a single release.
pub fn render_release(release: &Release, language: &str, state: &DisclosureState) -> ReleaseEntry {
    let open = state.is_open(&release.version);
    let header = ReleaseHeader {
        version: release.version.clone(),
        date: format_release_date(release.date.as_deref(), language),
        title: release.title.get(language).map(str::to_owned),
        open,
    };
    let body = open.then(|| {
        release
            .sections
            .iter()
            .map(|section| render_section(section, language))
            .collect()
    });

    ReleaseEntry { header, body }
}

/// Resolves one section for `language`.
pub fn render_section(section: &Section, language: &str) -> SectionEntry {
    SectionEntry {
        label: section.label.get(language).map(str::to_owned),
        items: section
            .items
            .get(language)
            .map(<[String]>::to_vec)
            .unwrap_or_default(),
    }
}
