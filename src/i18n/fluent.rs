// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded translations, then any `.ftl` files found in
    /// `i18n_dir` (a file for an already known locale replaces it).
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: Vec<(LanguageIdentifier, String)> = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale) = locale_from_filename(filename) {
                if let Some(content) = Asset::get(filename) {
                    sources.push((locale, String::from_utf8_lossy(content.data.as_ref()).into_owned()));
                }
            }
        }

        if let Some(dir) = i18n_dir {
            sources.extend(read_ftl_dir(Path::new(&dir)));
        }

        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();
        for (locale, content) in sources {
            if !available_locales.contains(&locale) {
                available_locales.push(locale.clone());
            }
            bundles.insert(locale.clone(), build_bundle(locale, content));
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let current_locale = resolve_locale(cli_lang.as_deref(), config, &available_locales)
            .unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Finds the bundled locale serving `language` (e.g. `en` → `en-US`).
    pub fn locale_for_language(&self, language: &str) -> Option<LanguageIdentifier> {
        let requested = language.parse::<LanguageIdentifier>().ok()?;
        match_available(&requested, &self.available_locales)
    }

    /// Whether the current locale defines `key`.
    pub fn has_message(&self, key: &str) -> bool {
        self.bundles
            .get(&self.current_locale)
            .is_some_and(|bundle| bundle.has_message(key))
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, FluentValue<'_>)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn read_ftl_dir(dir: &Path) -> Vec<(LanguageIdentifier, String)> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("[WARN] Cannot read translations from {}: {err}", dir.display());
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let path = entry.path();
            let locale = locale_from_filename(path.file_name()?.to_str()?)?;
            match fs::read_to_string(&path) {
                Ok(content) => Some((locale, content)),
                Err(err) => {
                    eprintln!("[WARN] Cannot read {}: {err}", path.display());
                    None
                }
            }
        })
        .collect()
}

fn build_bundle(locale: LanguageIdentifier, content: String) -> FluentBundle<FluentResource> {
    let resource = match FluentResource::try_new(content) {
        Ok(resource) => resource,
        Err((partial, errors)) => {
            eprintln!("[WARN] {} syntax errors in {locale}.ftl", errors.len());
            partial
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Placeables are shown in plain text widgets; no bidi isolation marks.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        eprintln!("[WARN] {} duplicate messages in {locale}.ftl", errors.len());
    }
    bundle
}

/// Exact match first, then the first available locale with the same language.
fn match_available(
    requested: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.contains(requested) {
        return Some(requested.clone());
    }
    available
        .iter()
        .find(|locale| locale.language == requested.language)
        .cloned()
}

fn resolve_locale(
    cli_lang: Option<&str>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    // 2. Check config file
    // 3. Check OS locale
    let os_locale = sys_locale::get_locale();
    // Bound to a local so the iterator is dropped before `os_locale`.
    let found = [cli_lang, config.general.language.as_deref(), os_locale.as_deref()]
        .into_iter()
        .flatten()
        .filter_map(|lang| lang.parse::<LanguageIdentifier>().ok())
        .find_map(|lang| match_available(&lang, available));
    found
}

/// Determines the language code used for catalog lookups and date formatting.
///
/// An explicit code from the CLI or the config wins even when no bundled UI
/// translation exists for it: release content then degrades by itself (default
/// date format, omitted text). Without one, the UI locale's language is used.
pub fn resolve_content_language(
    cli_lang: Option<&str>,
    config: &Config,
    ui_locale: &LanguageIdentifier,
) -> String {
    [cli_lang, config.general.language.as_deref()]
        .into_iter()
        .flatten()
        .find_map(normalize_language_code)
        .unwrap_or_else(|| language_of(ui_locale))
}

/// Primary language subtag of `locale`, e.g. `tr` for `tr-TR`.
pub fn language_of(locale: &LanguageIdentifier) -> String {
    locale.language.as_str().to_string()
}

/// Reduces a user-supplied code such as `de-DE` or `TR` to its primary
/// language subtag. Blank or unparseable codes yield `None`.
pub fn normalize_language_code(code: &str) -> Option<String> {
    let code = code.trim();
    if code.is_empty() {
        return None;
    }
    code.parse::<LanguageIdentifier>()
        .ok()
        .map(|locale| language_of(&locale))
}
