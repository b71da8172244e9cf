// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::changelog;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Changelog(changelog::Message),
    /// Hide the startup notice (config or catalog problem).
    DismissNotice,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional language override (e.g. `tr`, `de-DE`). Drives both the
    /// interface locale and the release-notes content.
    pub lang: Option<String>,
    /// Optional TOML catalog shown instead of the configured or bundled one.
    pub catalog: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CHANGELOG_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
