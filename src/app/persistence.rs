// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Saves the language chosen in the picker to `settings.toml` so the next
//! session starts with it.

use super::Message;
use crate::config;
use crate::i18n::fluent::I18n;
use iced::Task;

/// Applies the newly selected language to both the interface and the release
/// content, then persists it to config.
///
/// A language without bundled translations still switches the content: the
/// interface keeps its current locale while dates use the default format and
/// untranslated release text is left out.
pub fn apply_language_change(i18n: &mut I18n, language: &mut String, code: String) -> Task<Message> {
    if let Some(locale) = i18n.locale_for_language(&code) {
        i18n.set_locale(locale);
    }
    *language = code;

    persist_language(language);
    Task::none()
}

/// Writes the language to `settings.toml`.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling `apply_language_change` directly.
fn persist_language(language: &str) {
    if cfg!(test) {
        return;
    }

    let (mut cfg, warning) = config::load();
    if warning.is_some() {
        // Keep the unreadable file for the user to fix rather than replace it.
        eprintln!("[WARN] Not saving language: settings.toml could not be read");
        return;
    }
    cfg.general.language = Some(language.to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("[WARN] Failed to save config: {error}");
    }
}
