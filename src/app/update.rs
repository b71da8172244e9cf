// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::{persistence, Message};
use crate::changelog::DisclosureState;
use crate::i18n::fluent::I18n;
use crate::ui::changelog::{self, Event as ChangelogEvent};
use iced::Task;

/// Mutable application state a handler may touch.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub language: &'a mut String,
    pub disclosure: &'a mut DisclosureState,
}

/// Handles changelog screen messages.
pub fn handle_changelog_message(
    ctx: &mut UpdateContext<'_>,
    message: changelog::Message,
) -> Task<Message> {
    match changelog::update(ctx.disclosure, message) {
        ChangelogEvent::None => Task::none(),
        ChangelogEvent::LanguageChanged(code) => {
            persistence::apply_language_change(ctx.i18n, ctx.language, code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::changelog::LanguageOption;

    #[test]
    fn collapse_all_goes_through_disclosure() {
        let mut i18n = I18n::default();
        let mut language = "en".to_string();
        let mut disclosure = DisclosureState::new();
        disclosure.toggle("1.0.0");

        let mut ctx = UpdateContext {
            i18n: &mut i18n,
            language: &mut language,
            disclosure: &mut disclosure,
        };
        let _ = handle_changelog_message(&mut ctx, changelog::Message::CollapseAll);

        assert_eq!(disclosure.open_count(), 0);
        assert_eq!(language, "en");
    }

    #[test]
    fn language_selection_switches_content_language() {
        let mut i18n = I18n::default();
        let mut language = "en".to_string();
        let mut disclosure = DisclosureState::new();

        let mut ctx = UpdateContext {
            i18n: &mut i18n,
            language: &mut language,
            disclosure: &mut disclosure,
        };
        let _ = handle_changelog_message(
            &mut ctx,
            changelog::Message::LanguageSelected(LanguageOption {
                code: "de".into(),
                label: "Deutsch".into(),
            }),
        );

        assert_eq!(language, "de");
        assert_eq!(i18n.current_locale().to_string(), "de");
    }
}
