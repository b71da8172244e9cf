// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Full-width clickable header of a collapsible block.
pub fn disclosure_header(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.weak.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Secondary toolbar action; greyed out while disabled.
pub fn toolbar(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base.text;
    match status {
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette::GRAY_400,
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: base,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        },
    }
}
