// SPDX-License-Identifier: MPL-2.0
//! Release records as supplied by the catalog source.
//!
//! Every type here is plain, immutable data. Localized values are keyed by a
//! short language code (`en`, `tr`, `de`, ...) and are looked up by exact key
//! only: a missing key means "nothing to show", never "use another language".

use serde::Deserialize;
use std::collections::BTreeMap;

/// One versioned entry of the release-notes feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Release {
    /// Dotted version string, e.g. `1.4.2`.
    pub version: String,
    /// ISO calendar date (`YYYY-MM-DD`). Absent dates render no date text.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Release {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: None,
            title: LocalizedText::default(),
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: LocalizedText) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}

/// A labelled group of bullet items inside a release.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub label: LocalizedText,
    #[serde(default)]
    pub items: LocalizedList,
}

impl Section {
    pub fn new(label: LocalizedText, items: LocalizedList) -> Self {
        Self { label, items }
    }
}

/// Language code → display string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    /// Direct lookup for `language`. No fallback.
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(lang, text)| (lang.into(), text.into()))
                .collect(),
        )
    }
}

/// Language code → ordered items.
///
/// Lists for different languages are authored independently and need not
/// have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct LocalizedList(BTreeMap<String, Vec<String>>);

impl LocalizedList {
    /// Direct lookup for `language`. No fallback.
    pub fn get(&self, language: &str) -> Option<&[String]> {
        self.0.get(language).map(Vec::as_slice)
    }
}

impl<K, I, S> FromIterator<(K, I)> for LocalizedList
where
    K: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(lang, items)| (lang.into(), items.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_text_lookup_is_exact() {
        let title: LocalizedText = [("en", "Fix"), ("tr", "Düzeltme")].into_iter().collect();
        assert_eq!(title.get("en"), Some("Fix"));
        assert_eq!(title.get("tr"), Some("Düzeltme"));
        assert_eq!(title.get("de"), None);
        assert_eq!(title.get("en-US"), None);
    }

    #[test]
    fn localized_list_allows_uneven_lengths() {
        let items: LocalizedList = [("en", vec!["A", "B", "C"]), ("de", vec!["X"])]
            .into_iter()
            .collect();
        assert_eq!(items.get("en").map(<[String]>::len), Some(3));
        assert_eq!(items.get("de").map(<[String]>::len), Some(1));
        assert!(items.get("tr").is_none());
    }

    #[test]
    fn release_deserializes_with_missing_optional_fields() {
        let release: Release = toml::from_str(r#"version = "0.9.0""#).expect("valid toml");
        assert_eq!(release.version, "0.9.0");
        assert!(release.date.is_none());
        assert!(release.title.is_empty());
        assert!(release.sections.is_empty());
    }
}
