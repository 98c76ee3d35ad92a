// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! While the lightbox is open the keyboard drives it: Escape closes,
//! ArrowRight advances, ArrowLeft steps back. Every other key is
//! ignored, and with the lightbox closed no native events are routed
//! at all.

use super::Message;
use crate::ui::lightbox;
use iced::{event, keyboard, Subscription};

/// Creates the keyboard subscription for the current lightbox state.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        // Don't steal keys a focused widget already handled.
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::Lightbox(lightbox::Message::Close)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => Some(Message::Lightbox(lightbox::Message::ShowNext)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => Some(Message::Lightbox(lightbox::Message::ShowPrevious)),
            _ => None,
        }
    })
}
