// SPDX-License-Identifier: MPL-2.0
//! About screen: the photographer's story.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToGallery,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    BackToGallery,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToGallery => Event::BackToGallery,
    }
}

/// Render the about screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("about-back-button"))).size(typography::BODY),
    )
    .style(styles::nav_button(ctx.scheme))
    .on_press(Message::BackToGallery);

    let title = text(ctx.i18n.tr("about-title")).size(typography::TITLE_LG);

    let story = column![
        text(ctx.i18n.tr("about-story-1")).size(typography::BODY),
        text(ctx.i18n.tr("about-story-2")).size(typography::BODY),
    ]
    .spacing(spacing::MD)
    .max_width(sizing::FORM_WIDTH * 1.5);

    let stats = row![
        stat(&ctx, "about-stat-species"),
        stat(&ctx, "about-stat-years"),
        stat(&ctx, "about-stat-expeditions"),
    ]
    .spacing(spacing::LG);

    let content = Column::new()
        .push(back_button)
        .push(title)
        .push(story)
        .push(stats)
        .spacing(spacing::LG)
        .align_x(Alignment::Start)
        .padding(spacing::XL);

    scrollable(content).width(Length::Fill).height(Length::Fill).into()
}

/// One figure/label card. The figure lives under `<key>-value`.
fn stat<'a>(ctx: &ViewContext<'a>, key: &str) -> Element<'a, Message> {
    let value = text(ctx.i18n.tr(&format!("{key}-value")))
        .size(typography::TITLE_MD)
        .color(ctx.scheme.brand_primary);
    let label = text(ctx.i18n.tr(key))
        .size(typography::CAPTION)
        .color(ctx.scheme.text_secondary);

    container(
        column![value, label]
            .spacing(spacing::XXS)
            .align_x(Alignment::Center),
    )
    .padding(spacing::MD)
    .style(styles::card(ctx.scheme))
    .into()
}
