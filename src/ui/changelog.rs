// SPDX-License-Identifier: MPL-2.0
//! Release-notes screen.
//!
//! Shows the catalog as a list of collapsible releases. Each header displays
//! the version, the localized date and the title; clicking it toggles the
//! release body, which lists the localized sections and their items. Content
//! missing for the current language is simply left out.

use crate::changelog::render::{DATE_SEPARATOR, TITLE_SEPARATOR};
use crate::changelog::{
    render, ChangelogTree, DisclosureState, ReleaseCatalog, ReleaseEntry, ReleaseHeader,
    SectionEntry,
};
use crate::config::{CONTENT_MAX_WIDTH, SUPPORTED_LANGUAGES};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, pick_list, scrollable, text, Column, Container, Row, Text},
    Element, Font, Length, Theme,
};
use std::fmt;

/// Contextual data needed to render the changelog screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a ReleaseCatalog,
    /// Language code used for content lookups and date formatting.
    pub language: &'a str,
    pub disclosure: &'a DisclosureState,
}

/// Messages emitted by the changelog screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A release header was clicked.
    ToggleRelease(String),
    CollapseAll,
    LanguageSelected(LanguageOption),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LanguageChanged(String),
}

/// Entry of the language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    pub code: String,
    pub label: String,
}

impl fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Process a changelog message and return the corresponding event.
pub fn update(disclosure: &mut DisclosureState, message: Message) -> Event {
    match message {
        Message::ToggleRelease(version) => {
            disclosure.toggle(&version);
            Event::None
        }
        Message::CollapseAll => {
            disclosure.collapse_all();
            Event::None
        }
        Message::LanguageSelected(option) => Event::LanguageChanged(option.code),
    }
}

/// Language picker entries, labelled in the current UI language.
pub fn language_options(i18n: &I18n) -> Vec<LanguageOption> {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|code| {
            let key = format!("language-name-{code}");
            let label = if i18n.has_message(&key) {
                i18n.tr(&key)
            } else {
                (*code).to_string()
            };
            LanguageOption {
                code: (*code).to_string(),
                label,
            }
        })
        .collect()
}

/// Render the changelog screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tree = render(ctx.catalog, ctx.language, ctx.disclosure);

    let content = Column::new()
        .width(Length::Fill)
        .max_width(CONTENT_MAX_WIDTH)
        .spacing(spacing::SM)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(build_toolbar(&ctx, &tree))
        .push(build_release_list(ctx.i18n, tree));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

/// Title, release count, collapse-all action and language picker.
fn build_toolbar<'a>(ctx: &ViewContext<'a>, tree: &ChangelogTree) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("changelog-title")).size(typography::TITLE_LG);

    let count = i64::try_from(tree.releases.len()).unwrap_or(i64::MAX);
    let subtitle = Text::new(
        ctx.i18n
            .tr_with_args("changelog-release-count", &[("count", count.into())]),
    )
    .size(typography::BODY)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    });

    let collapse_all = button(text(ctx.i18n.tr("changelog-collapse-all")).size(typography::BODY))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::toolbar)
        .on_press_maybe((ctx.disclosure.open_count() > 0).then_some(Message::CollapseAll));

    let options = language_options(ctx.i18n);
    let selected = options
        .iter()
        .find(|option| option.code == ctx.language)
        .cloned();
    let picker = pick_list(options, selected, Message::LanguageSelected)
        .placeholder(ctx.i18n.tr("changelog-language-placeholder"))
        .text_size(typography::BODY)
        .width(Length::Fixed(sizing::LANGUAGE_PICKER_WIDTH));

    let heading = Column::new().spacing(spacing::XXS).push(title).push(subtitle);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(heading).width(Length::Fill))
        .push(collapse_all)
        .push(picker)
        .into()
}

fn build_release_list<'a>(i18n: &I18n, tree: ChangelogTree) -> Element<'a, Message> {
    if tree.releases.is_empty() {
        return Text::new(i18n.tr("changelog-empty"))
            .size(typography::BODY)
            .into();
    }

    tree.releases
        .into_iter()
        .fold(Column::new().spacing(spacing::SM), |column, release| {
            column.push(build_release(release))
        })
        .into()
}

/// Build a collapsible release with header and, when open, its sections.
fn build_release<'a>(release: ReleaseEntry) -> Element<'a, Message> {
    let ReleaseEntry { header, body } = release;
    let mut release_column = Column::new()
        .spacing(spacing::XS)
        .push(build_header(&header));

    if let Some(sections) = body {
        let sections = sections
            .into_iter()
            .fold(Column::new().spacing(spacing::SM), |column, section| {
                column.push(build_section(section))
            });
        release_column = release_column.push(
            Container::new(sections)
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::release_body),
        );
    }

    release_column.into()
}

fn build_header<'a>(header: &ReleaseHeader) -> Element<'a, Message> {
    let indicator = Container::new(Text::new(header.indicator()).size(typography::BODY))
        .width(Length::Fixed(sizing::INDICATOR_WIDTH));

    let badge = Container::new(
        Text::new(header.version_label())
            .size(typography::CAPTION)
            .font(Font {
                weight: Weight::Bold,
                ..Font::default()
            }),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::version_badge);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(indicator)
        .push(badge);

    for (piece, size) in header_pieces(header) {
        row = row.push(Text::new(piece.to_string()).size(size));
    }

    button(row)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::disclosure_header)
        .on_press(Message::ToggleRelease(header.version.clone()))
        .into()
}

/// Date and title shown after the version badge, with their separators and
/// text sizes. Empty pieces are left out together with their separator.
fn header_pieces(header: &ReleaseHeader) -> Vec<(&str, f32)> {
    let mut pieces = Vec::new();
    if !header.date.is_empty() {
        pieces.push((DATE_SEPARATOR, typography::CAPTION));
        pieces.push((header.date.as_str(), typography::CAPTION));
    }
    if let Some(title) = &header.title {
        pieces.push((TITLE_SEPARATOR, typography::CAPTION));
        pieces.push((title.as_str(), typography::TITLE_SM));
    }
    pieces
}

fn build_section<'a>(section: SectionEntry) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS);

    if let Some(label) = section.label {
        column = column.push(
            Text::new(label)
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().primary.strong.color),
                }),
        );
    }

    section
        .items
        .into_iter()
        .fold(column, |column, item| column.push(build_bullet(item)))
        .into()
}

/// Build a bullet point.
fn build_bullet<'a>(content: String) -> Element<'a, Message> {
    Text::new(format!("  • {content}"))
        .size(typography::BODY)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::{LocalizedList, LocalizedText, Release, Section};

    fn sample_catalog() -> ReleaseCatalog {
        let title: LocalizedText = [("en", "Fix"), ("tr", "Düzeltme")].into_iter().collect();
        let label: LocalizedText = [("en", "Fixes")].into_iter().collect();
        let items: LocalizedList = [("en", ["A", "B"])].into_iter().collect();
        ReleaseCatalog::new(vec![
            Release::new("1.0.0")
                .with_date("2024-01-10")
                .with_title(title)
                .with_section(Section::new(label, items)),
            Release::new("0.9.0"),
        ])
    }

    #[test]
    fn changelog_view_renders() {
        let i18n = I18n::default();
        let catalog = sample_catalog();
        let mut disclosure = DisclosureState::new();
        disclosure.toggle("1.0.0");

        for language in ["en", "tr", "de", "fr"] {
            let _element = view(ViewContext {
                i18n: &i18n,
                catalog: &catalog,
                language,
                disclosure: &disclosure,
            });
        }
    }

    fn header_line(header: &ReleaseHeader) -> String {
        std::iter::once(header.version.as_str())
            .chain(header_pieces(header).into_iter().map(|(piece, _)| piece))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn drawn_header_matches_summary() {
        let catalog = sample_catalog();
        let disclosure = DisclosureState::new();

        for language in ["en", "tr", "de", "fr"] {
            for release in render(&catalog, language, &disclosure).releases {
                assert_eq!(header_line(&release.header), release.header.summary());
            }
        }

        let tree = render(&catalog, "en", &disclosure);
        assert_eq!(header_line(&tree.releases[0].header), "1.0.0 • Jan 10, 2024 — Fix");
    }

    #[test]
    fn empty_catalog_renders() {
        let i18n = I18n::default();
        let catalog = ReleaseCatalog::default();
        let disclosure = DisclosureState::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            catalog: &catalog,
            language: "en",
            disclosure: &disclosure,
        });
    }

    #[test]
    fn toggle_release_expands_and_collapses() {
        let mut disclosure = DisclosureState::new();
        assert!(!disclosure.is_open("1.0.0"));

        let event = update(&mut disclosure, Message::ToggleRelease("1.0.0".into()));
        assert_eq!(event, Event::None);
        assert!(disclosure.is_open("1.0.0"));

        update(&mut disclosure, Message::ToggleRelease("1.0.0".into()));
        assert!(!disclosure.is_open("1.0.0"));
    }

    #[test]
    fn collapse_all_closes_every_release() {
        let mut disclosure = DisclosureState::new();
        update(&mut disclosure, Message::ToggleRelease("1.0.0".into()));
        update(&mut disclosure, Message::ToggleRelease("0.9.0".into()));

        update(&mut disclosure, Message::CollapseAll);
        assert_eq!(disclosure.open_count(), 0);
    }

    #[test]
    fn language_selection_emits_event_without_touching_disclosure() {
        let mut disclosure = DisclosureState::new();
        disclosure.toggle("1.0.0");

        let event = update(
            &mut disclosure,
            Message::LanguageSelected(LanguageOption {
                code: "tr".into(),
                label: "Türkçe".into(),
            }),
        );
        assert_eq!(event, Event::LanguageChanged("tr".into()));
        assert!(disclosure.is_open("1.0.0"));
    }

    #[test]
    fn language_options_follow_supported_languages() {
        let i18n = I18n::default();
        let codes: Vec<_> = language_options(&i18n)
            .into_iter()
            .map(|option| option.code)
            .collect();
        assert_eq!(codes, SUPPORTED_LANGUAGES);
    }

    #[test]
    fn language_options_fall_back_to_codes_without_names() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("fr.ftl"), "changelog-title = Notes\n")
            .expect("failed to write ftl");
        let i18n = I18n::new(
            Some("fr".into()),
            Some(dir.path().to_string_lossy().into_owned()),
            &crate::config::Config::default(),
        );

        let labels: Vec<_> = language_options(&i18n)
            .into_iter()
            .map(|option| option.label)
            .collect();
        assert_eq!(labels, SUPPORTED_LANGUAGES);
    }

    #[test]
    fn language_options_are_labelled() {
        let i18n = I18n::new(Some("en".into()), None, &crate::config::Config::default());
        let labels: Vec<_> = language_options(&i18n)
            .into_iter()
            .map(|option| option.to_string())
            .collect();
        assert_eq!(labels, ["English", "Türkçe", "Deutsch"]);
    }
}
