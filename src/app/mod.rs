// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the release-notes window.
//!
//! The `App` struct wires together the catalog, localization and persisted
//! preferences, and translates messages into side effects like config
//! persistence. Startup policy (which catalog, which language) lives here so
//! user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod persistence;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::changelog::{DisclosureState, ReleaseCatalog};
use crate::config::{
    self, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::error::Error;
use crate::i18n::fluent::{resolve_content_language, I18n};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// i18n key of the notice shown when a catalog file cannot be opened.
pub const CATALOG_UNREADABLE_KEY: &str = "catalog-error-unreadable";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: ReleaseCatalog,
    /// Language code used for release content and dates.
    language: String,
    disclosure: DisclosureState,
    theme_mode: ThemeMode,
    /// i18n key of a startup problem shown above the release list.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.language)
            .field("releases", &self.catalog.len())
            .field("open_releases", &self.disclosure.open_count())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            catalog: ReleaseCatalog::default(),
            language: config::DEFAULT_LANGUAGE.to_string(),
            disclosure: DisclosureState::new(),
            theme_mode: ThemeMode::System,
            notice: None,
        }
    }
}

impl App {
    /// Loads preferences, translations and the release catalog.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        let language =
            resolve_content_language(flags.lang.as_deref(), &config, i18n.current_locale());

        let catalog_path = flags
            .catalog
            .map(PathBuf::from)
            .or_else(|| config.changelog.catalog_path.clone());
        let (catalog, catalog_warning) = load_catalog(catalog_path.as_deref());
        catalog.report_problems();

        let app = App {
            i18n,
            catalog,
            language,
            disclosure: DisclosureState::new(),
            theme_mode: config.general.theme_mode,
            notice: config_warning.or(catalog_warning),
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Changelog(changelog_message) => {
                let mut ctx = update::UpdateContext {
                    i18n: &mut self.i18n,
                    language: &mut self.language,
                    disclosure: &mut self.disclosure,
                };
                update::handle_changelog_message(&mut ctx, changelog_message)
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            language: &self.language,
            disclosure: &self.disclosure,
            notice: self.notice.as_deref(),
        })
    }
}

/// Loads the catalog at `path`, falling back to the bundled one.
///
/// Returns the catalog and the i18n key of a notice when something went
/// wrong. An empty catalog is returned only when the bundled one is unusable.
pub fn load_catalog(path: Option<&Path>) -> (ReleaseCatalog, Option<String>) {
    let mut warning = None;

    if let Some(path) = path {
        match ReleaseCatalog::load_from_path(path) {
            Ok(catalog) => return (catalog, None),
            Err(err) => {
                eprintln!("[WARN] Cannot load catalog {}: {err}", path.display());
                warning = Some(catalog_error_key(&err).to_string());
            }
        }
    }

    match ReleaseCatalog::bundled() {
        Ok(catalog) => (catalog, warning),
        Err(err) => {
            eprintln!("[WARN] Cannot load bundled catalog: {err}");
            (
                ReleaseCatalog::default(),
                warning.or_else(|| Some(catalog_error_key(&err).to_string())),
            )
        }
    }
}

fn catalog_error_key(err: &Error) -> &'static str {
    match err {
        Error::Catalog(catalog_error) => catalog_error.i18n_key(),
        _ => CATALOG_UNREADABLE_KEY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::{LocalizedList, LocalizedText, Release, Section};
    use crate::ui::changelog::{self, LanguageOption};
    use tempfile::tempdir;

    const CATALOG: &str = r#"
[[release]]
version = "2.0.0"
date = "2024-01-10"
title = { en = "Fix", tr = "Düzeltme" }

[[release.sections]]
label = { en = "Fixes" }
items = { en = ["A", "B"] }
"#;

    fn app_with_catalog() -> App {
        let title: LocalizedText = [("en", "Fix"), ("tr", "Düzeltme")].into_iter().collect();
        let label: LocalizedText = [("en", "Fixes")].into_iter().collect();
        let items: LocalizedList = [("en", ["A", "B"])].into_iter().collect();
        App {
            catalog: ReleaseCatalog::new(vec![
                Release::new("1.0.0")
                    .with_date("2024-01-10")
                    .with_title(title)
                    .with_section(Section::new(label, items)),
                Release::new("0.9.0"),
            ]),
            ..App::default()
        }
    }

    #[test]
    fn default_app_uses_default_language() {
        let app = App::default();
        assert_eq!(app.language, config::DEFAULT_LANGUAGE);
        assert_eq!(app.disclosure.open_count(), 0);
        assert!(app.notice.is_none());
    }

    #[test]
    fn title_is_localized() {
        let mut app = App::default();
        app.i18n.set_locale("en-US".parse().unwrap());
        assert_eq!(app.title(), "Release Notes");
    }

    #[test]
    fn toggling_release_updates_disclosure() {
        let mut app = app_with_catalog();
        let _ = app.update(Message::Changelog(changelog::Message::ToggleRelease(
            "1.0.0".into(),
        )));
        assert!(app.disclosure.is_open("1.0.0"));
        assert!(!app.disclosure.is_open("0.9.0"));

        let _ = app.update(Message::Changelog(changelog::Message::ToggleRelease(
            "1.0.0".into(),
        )));
        assert!(!app.disclosure.is_open("1.0.0"));
    }

    #[test]
    fn language_change_keeps_open_releases() {
        let mut app = app_with_catalog();
        let _ = app.update(Message::Changelog(changelog::Message::ToggleRelease(
            "1.0.0".into(),
        )));
        let _ = app.update(Message::Changelog(changelog::Message::LanguageSelected(
            LanguageOption {
                code: "tr".into(),
                label: "Türkçe".into(),
            },
        )));

        assert_eq!(app.language, "tr");
        assert_eq!(app.i18n.current_locale().to_string(), "tr");
        assert!(app.disclosure.is_open("1.0.0"));
    }

    #[test]
    fn dismiss_notice_clears_it() {
        let mut app = App {
            notice: Some(CATALOG_UNREADABLE_KEY.to_string()),
            ..App::default()
        };
        let _ = app.update(Message::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn view_renders_with_and_without_notice() {
        let mut app = app_with_catalog();
        drop(app.view());
        app.notice = Some(config::CONFIG_LOAD_WARNING_KEY.to_string());
        drop(app.view());
    }

    #[test]
    fn load_catalog_reads_given_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("releases.toml");
        std::fs::write(&path, CATALOG).expect("failed to write catalog");

        let (catalog, warning) = load_catalog(Some(&path));
        assert!(warning.is_none());
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("2.0.0").is_some());
    }

    #[test]
    fn load_catalog_without_path_uses_bundled() {
        let (catalog, warning) = load_catalog(None);
        assert!(warning.is_none());
        assert_eq!(catalog, ReleaseCatalog::bundled().expect("bundled catalog"));
    }

    #[test]
    fn invalid_catalog_falls_back_with_notice() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("releases.toml");
        std::fs::write(&path, "[[release]]\nversion = 1\n").expect("failed to write catalog");

        let (catalog, warning) = load_catalog(Some(&path));
        assert!(!catalog.is_empty());
        assert_eq!(warning.as_deref(), Some("catalog-error-invalid"));
    }

    #[test]
    fn missing_catalog_file_falls_back_with_notice() {
        let dir = tempdir().expect("failed to create temp dir");
        let (catalog, warning) = load_catalog(Some(&dir.path().join("missing.toml")));
        assert!(!catalog.is_empty());
        assert_eq!(warning.as_deref(), Some(CATALOG_UNREADABLE_KEY));
    }

    #[test]
    fn cli_flags_select_language_and_catalog() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("releases.toml");
        std::fs::write(&path, CATALOG).expect("failed to write catalog");

        let (app, _task) = App::new(Flags {
            lang: Some("tr".into()),
            catalog: Some(path.to_string_lossy().into_owned()),
            ..Flags::default()
        });
        assert_eq!(app.language, "tr");
        assert_eq!(app.catalog.len(), 1);
    }

    #[test]
    fn window_settings_respect_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size is set");
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }
}
