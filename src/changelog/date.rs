// SPDX-License-Identifier: MPL-2.0
//! Locale-aware formatting of release dates.
//!
//! The locale policy is a closed three-way choice made on the exact language
//! code: `tr` renders Turkish, `de` renders German, and every other code
//! (including `en` and codes we do not know) renders the English default.
//!
//! | Code    | Example (`2024-01-10`) |
//! |---------|------------------------|
//! | `tr`    | `10 Oca 2024`          |
//! | `de`    | `10. Jan 2024`         |
//! | default | `Jan 10, 2024`         |

use chrono::{DateTime, Locale, NaiveDate, NaiveTime, ParseError};

/// Date rendering conventions selectable by language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLocale {
    Turkish,
    German,
    English,
}

impl DateLocale {
    /// Picks the conventions for `language`. Only exact `tr` and `de` select
    /// a non-default locale.
    pub fn from_language(language: &str) -> Self {
        match language {
            "tr" => DateLocale::Turkish,
            "de" => DateLocale::German,
            _ => DateLocale::English,
        }
    }

    /// `%b` takes the glibc-derived abbreviations bundled with chrono
    /// (`Oca`, `Mär`), not the dotted forms of print style guides.
    fn pattern(self) -> &'static str {
        match self {
            DateLocale::Turkish => "%-d %b %Y",
            DateLocale::German => "%-d. %b %Y",
            DateLocale::English => "%b %-d, %Y",
        }
    }

    fn chrono_locale(self) -> Locale {
        match self {
            DateLocale::Turkish => Locale::tr_TR,
            DateLocale::German => Locale::de_DE,
            DateLocale::English => Locale::en_US,
        }
    }

    /// Renders an already-parsed date.
    pub fn format(self, date: NaiveDate) -> String {
        date.and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(self.pattern(), self.chrono_locale())
            .to_string()
    }
}

/// Parses `YYYY-MM-DD`, or the date part of an RFC 3339 timestamp.
pub fn parse_release_date(date: &str) -> Result<NaiveDate, ParseError> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d").or_else(|err| {
        DateTime::parse_from_rfc3339(date)
            .map(|dt| dt.date_naive())
            .map_err(|_| err)
    })
}

/// Formats `date` for display in `language`.
///
/// Absent or empty dates yield an empty string. Unparseable dates also yield
/// an empty string; use [`try_format_release_date`] to observe the failure.
pub fn format_release_date(date: Option<&str>, language: &str) -> String {
    match date {
        Some(date) if !date.is_empty() => {
            try_format_release_date(date, language).unwrap_or_default()
        }
        _ => String::new(),
    }
}

/// Like [`format_release_date`] for a present date, but reports parse errors.
pub fn try_format_release_date(date: &str, language: &str) -> Result<String, ParseError> {
    let parsed = parse_release_date(date)?;
    Ok(DateLocale::from_language(language).format(parsed))
}
