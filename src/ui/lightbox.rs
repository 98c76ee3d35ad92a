// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: the modal photograph viewer.
//!
//! Renders the controller's overlay projection over a darkened backdrop
//! with previous/next arrows, a close control, and a position counter.
//! Clicking the backdrop outside the photograph closes the viewer, as do
//! the Escape key and the close control; arrow keys are wired up by the
//! application subscription.

use crate::gallery::OverlayContent;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, column, container, mouse_area, row, stack, text, tooltip};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    /// Projection of the current snapshot photograph.
    pub overlay: OverlayContent<'a>,
    /// Zero-based position within the snapshot and the snapshot length.
    pub position: (usize, usize),
}

/// Messages emitted by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    ShowNext,
    ShowPrevious,
    /// A press on the photograph or caption. Swallowed so it does not
    /// reach the backdrop and close the viewer.
    PhotoPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Close,
    ShowNext,
    ShowPrevious,
}

/// Process a lightbox message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Close => Event::Close,
        Message::ShowNext => Event::ShowNext,
        Message::ShowPrevious => Event::ShowPrevious,
        Message::PhotoPressed => Event::None,
    }
}

/// Render the lightbox overlay. Expected to be stacked over the
/// portfolio screen so it occludes everything beneath it.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let backdrop = mouse_area(
        container(iced::widget::Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::backdrop(ctx.scheme)),
    )
    .on_press(Message::Close);

    let (index, total) = ctx.position;
    let counter = text(format!("{} / {}", index + 1, total))
        .size(typography::CAPTION)
        .color(ctx.scheme.overlay_text);

    let photo: Element<'_, Message> = Image::new(Handle::from_path(ctx.overlay.image))
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    // The alt text has no native slot in a desktop toolkit; surface it on hover.
    let photo: Element<'_, Message> = if ctx.overlay.alt.is_empty() {
        photo
    } else {
        tooltip(
            photo,
            text(ctx.overlay.alt.to_owned()).size(typography::CAPTION),
            tooltip::Position::Bottom,
        )
        .style(styles::card(ctx.scheme))
        .into()
    };

    let caption = text(ctx.overlay.caption.clone())
        .size(typography::BODY)
        .color(ctx.scheme.overlay_text);

    let center = mouse_area(
        column![photo, caption, counter]
            .spacing(spacing::SM)
            .align_x(Alignment::Center)
            .padding(spacing::LG),
    )
    .on_press(Message::PhotoPressed);
    let center = container(center)
        .width(Length::FillPortion(8))
        .height(Length::Fill)
        .align_y(Alignment::Center);

    let viewer = row![
        arrow(&ctx, "‹", Message::ShowPrevious),
        center,
        arrow(&ctx, "›", Message::ShowNext),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD);

    let close = container(
        button(text("✕").size(typography::TITLE_SM))
            .style(styles::overlay_control(
                ctx.scheme.overlay_text,
                opacity::OVERLAY_SUBTLE,
                opacity::OVERLAY_HOVER,
            ))
            .padding(spacing::XS)
            .on_press(Message::Close),
    )
    .width(Length::Fill)
    .align_x(Alignment::End)
    .padding(spacing::MD);

    stack![backdrop, viewer, close].into()
}

fn arrow<'a>(ctx: &ViewContext<'a>, glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        text(glyph)
            .size(sizing::OVERLAY_ARROW)
            .align_x(Alignment::Center),
    )
    .style(styles::overlay_control(
        ctx.scheme.overlay_text,
        opacity::OVERLAY_SUBTLE,
        opacity::OVERLAY_HOVER,
    ))
    .padding([spacing::XXS, spacing::SM])
    .on_press(message)
    .into()
}
