// SPDX-License-Identifier: MPL-2.0
//! Contact screen: the print and licensing enquiry form.
//!
//! The form is a local stub: submitting never performs network I/O.
//! The composed enquiry is handed to the application root as an event
//! and the form resets with a local confirmation line.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, column, text, text_input, Column};
use iced::{Alignment, Element, Length};

/// Form field state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    name: String,
    email: String,
    message: String,
    /// Set after a submission until the form is edited again.
    sent: bool,
}

/// Messages emitted by the contact screen.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The form was submitted with the given contents.
    Submitted {
        name: String,
        email: String,
        message: String,
    },
}

impl State {
    /// Returns `true` when every field has content and the form can be
    /// submitted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Returns `true` after a submission, until the form is edited.
    #[must_use]
    pub fn is_sent(&self) -> bool {
        self.sent
    }

    /// Handle a contact screen message.
    #[allow(clippy::needless_pass_by_value)] // follows Iced's update(message) pattern
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(name) => {
                self.name = name;
                self.sent = false;
                Event::None
            }
            Message::EmailChanged(email) => {
                self.email = email;
                self.sent = false;
                Event::None
            }
            Message::MessageChanged(message) => {
                self.message = message;
                self.sent = false;
                Event::None
            }
            Message::Submit => {
                if !self.is_complete() {
                    return Event::None;
                }
                let event = Event::Submitted {
                    name: std::mem::take(&mut self.name),
                    email: std::mem::take(&mut self.email),
                    message: std::mem::take(&mut self.message),
                };
                self.sent = true;
                event
            }
        }
    }

    /// Render the contact screen.
    #[must_use]
    pub fn view<'a>(&'a self, i18n: &'a I18n, scheme: &'a ColorScheme) -> Element<'a, Message> {
        let title = text(i18n.tr("contact-title")).size(typography::TITLE_LG);
        let subtitle = text(i18n.tr("contact-subtitle"))
            .size(typography::BODY)
            .color(scheme.text_secondary);

        let name = text_input(&i18n.tr("contact-name-placeholder"), &self.name)
            .on_input(Message::NameChanged)
            .style(styles::input(scheme))
            .padding(spacing::SM);
        let email = text_input(&i18n.tr("contact-email-placeholder"), &self.email)
            .on_input(Message::EmailChanged)
            .style(styles::input(scheme))
            .padding(spacing::SM);
        let message = text_input(&i18n.tr("contact-message-placeholder"), &self.message)
            .on_input(Message::MessageChanged)
            .style(styles::input(scheme))
            .padding(spacing::SM);

        let submit = button(text(i18n.tr("contact-send-button")).size(typography::BODY))
            .style(styles::primary(scheme))
            .padding([spacing::XS, spacing::LG])
            .on_press_maybe(self.is_complete().then_some(Message::Submit));

        let mut form = Column::new()
            .push(title)
            .push(subtitle)
            .push(name)
            .push(email)
            .push(message)
            .push(submit)
            .spacing(spacing::MD)
            .max_width(sizing::FORM_WIDTH);

        if self.sent {
            form = form.push(
                text(i18n.tr("contact-sent"))
                    .size(typography::BODY)
                    .color(scheme.success),
            );
        }

        column![form]
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .padding(spacing::XL)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> State {
        let mut state = State::default();
        state.update(Message::NameChanged("Wren Alder".into()));
        state.update(Message::EmailChanged("wren@example.com".into()));
        state.update(Message::MessageChanged("Print enquiry".into()));
        state
    }

    #[test]
    fn incomplete_form_does_not_submit() {
        let mut state = State::default();
        state.update(Message::NameChanged("Wren Alder".into()));
        let event = state.update(Message::Submit);
        assert!(matches!(event, Event::None));
        assert!(!state.is_sent());
    }

    #[test]
    fn submit_emits_contents_and_clears_the_form() {
        let mut state = filled_form();
        let event = state.update(Message::Submit);

        match event {
            Event::Submitted {
                name,
                email,
                message,
            } => {
                assert_eq!(name, "Wren Alder");
                assert_eq!(email, "wren@example.com");
                assert_eq!(message, "Print enquiry");
            }
            Event::None => panic!("expected a submission event"),
        }

        assert_eq!(
            state,
            State {
                sent: true,
                ..State::default()
            }
        );
    }

    #[test]
    fn editing_after_submission_clears_the_confirmation() {
        let mut state = filled_form();
        state.update(Message::Submit);
        assert!(state.is_sent());

        state.update(Message::NameChanged("W".into()));
        assert!(!state.is_sent());
    }
}
