// SPDX-License-Identifier: MPL-2.0
//! `iced_changelog` is a localized release-notes viewer built with the Iced
//! GUI framework.
//!
//! Releases are read from a TOML catalog and shown as a list of collapsible
//! headers. Titles, section labels, items and dates follow the selected
//! language (English, Turkish or German); text not available in that language
//! is left out rather than replaced by another language.

#![doc(html_root_url = "https://docs.rs/iced_changelog/0.1.0")]

pub mod app;
pub mod changelog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
