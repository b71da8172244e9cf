// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Stacks the optional startup notice above the changelog screen.

use super::Message;
use crate::changelog::{DisclosureState, ReleaseCatalog};
use crate::i18n::fluent::I18n;
use crate::ui::changelog::{self, ViewContext as ChangelogViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text, Column, Container, Row, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a ReleaseCatalog,
    pub language: &'a str,
    pub disclosure: &'a DisclosureState,
    /// i18n key of the notice to show, if any.
    pub notice: Option<&'a str>,
}

/// Renders the application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let changelog_view = changelog::view(ChangelogViewContext {
        i18n: ctx.i18n,
        catalog: ctx.catalog,
        language: ctx.language,
        disclosure: ctx.disclosure,
    })
    .map(Message::Changelog);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.notice {
        column = column.push(view_notice(ctx.i18n, key));
    }
    column = column.push(
        Container::new(changelog_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_notice<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let dismiss = button(text(i18n.tr("notice-dismiss")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::toolbar)
        .on_press(Message::DismissNotice);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(i18n.tr(key)).size(typography::BODY)).width(Length::Fill),
        )
        .push(dismiss);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::notice)
        .into()
}
