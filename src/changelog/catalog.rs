// SPDX-License-Identifier: MPL-2.0
//! Read-only, ordered sequence of releases.
//!
//! A catalog is built once and never mutated. Loading deserializes the TOML
//! source and nothing more: releases keep their authored order, duplicates are
//! kept, and dates are not validated. [`ReleaseCatalog::duplicate_versions`]
//! and [`ReleaseCatalog::invalid_dates`] let the caller report such data
//! problems without changing what is rendered.
//!
//! # Format
//!
//! ```toml
//! [[release]]
//! version = "1.0.0"
//! date = "2024-01-10"
//! title = { en = "Fix", tr = "Düzeltme" }
//!
//! [[release.sections]]
//! label = { en = "Fixes" }
//! items = { en = ["A", "B"] }
//! ```

use super::date::parse_release_date;
use super::model::Release;
use crate::error::{CatalogError, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/changelog/"]
struct Asset;

/// File name of the catalog bundled into the binary.
pub const BUNDLED_CATALOG: &str = "releases.toml";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "release")]
    releases: Vec<Release>,
}

/// Ordered, immutable list of releases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseCatalog {
    releases: Vec<Release>,
}

impl ReleaseCatalog {
    pub fn new(releases: Vec<Release>) -> Self {
        Self { releases }
    }

    /// Parses a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Ok(Self::new(file.releases))
    }

    /// Loads a catalog from a TOML file on disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads the catalog embedded in the binary.
    pub fn bundled() -> Result<Self> {
        let asset = Asset::get(BUNDLED_CATALOG)
            .ok_or_else(|| CatalogError::MissingAsset(BUNDLED_CATALOG.to_string()))?;
        Self::from_toml_str(&String::from_utf8_lossy(asset.data.as_ref()))
    }

    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Release> {
        self.releases.iter()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// First release carrying `version`.
    pub fn get(&self, version: &str) -> Option<&Release> {
        self.releases.iter().find(|release| release.version == version)
    }

    /// Versions that appear more than once, in order of their second
    /// appearance. Each version is listed once.
    pub fn duplicate_versions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.releases
            .iter()
            .map(|release| release.version.as_str())
            .filter(|version| !seen.insert(*version) && reported.insert(*version))
            .collect()
    }

    /// `(version, date)` pairs whose non-empty date does not parse.
    pub fn invalid_dates(&self) -> Vec<(&str, &str)> {
        self.releases
            .iter()
            .filter_map(|release| {
                let date = release.date.as_deref().filter(|date| !date.is_empty())?;
                parse_release_date(date)
                    .is_err()
                    .then_some((release.version.as_str(), date))
            })
            .collect()
    }

    /// Prints data problems to stderr. Rendering is not affected by them.
    pub fn report_problems(&self) {
        for version in self.duplicate_versions() {
            eprintln!("[WARN] Duplicate release version in catalog: {version}");
        }
        for (version, date) in self.invalid_dates() {
            eprintln!("[WARN] Release {version} has an unparseable date: {date:?}");
        }
    }
}

impl<'a> IntoIterator for &'a ReleaseCatalog {
    type Item = &'a Release;
    type IntoIter = std::slice::Iter<'a, Release>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Release> for ReleaseCatalog {
    fn from_iter<I: IntoIterator<Item = Release>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
