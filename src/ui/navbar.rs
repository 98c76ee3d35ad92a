// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Carries the brand line, the section links (Portfolio, About, Contact),
//! the light/dark theme toggle, and the open-catalog action. The bar owns
//! no state; it emits events the application root acts on.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, space, text, Row};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
    /// Currently displayed screen, rendered with brand emphasis.
    pub screen: Screen,
    /// Whether the effective theme is dark (selects the toggle glyph).
    pub dark: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ShowGallery,
    ShowAbout,
    ShowContact,
    ToggleTheme,
    OpenCatalog,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ShowScreen(Screen),
    ToggleTheme,
    OpenCatalog,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ShowGallery => Event::ShowScreen(Screen::Gallery),
        Message::ShowAbout => Event::ShowScreen(Screen::About),
        Message::ShowContact => Event::ShowScreen(Screen::Contact),
        Message::ToggleTheme => Event::ToggleTheme,
        Message::OpenCatalog => Event::OpenCatalog,
    }
}

/// Render the navigation bar.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let brand = text(ctx.i18n.tr("app-title"))
        .size(typography::TITLE_MD)
        .color(ctx.scheme.brand_primary);

    let bar = Row::new()
        .push(brand)
        .push(space::horizontal())
        .push(section_link(
            &ctx,
            "navbar-portfolio",
            Screen::Gallery,
            Message::ShowGallery,
        ))
        .push(section_link(
            &ctx,
            "navbar-about",
            Screen::About,
            Message::ShowAbout,
        ))
        .push(section_link(
            &ctx,
            "navbar-contact",
            Screen::Contact,
            Message::ShowContact,
        ))
        .push(
            button(text(if ctx.dark { "☀" } else { "☾" }).size(typography::BODY))
                .style(styles::nav_button(ctx.scheme))
                .on_press(Message::ToggleTheme),
        )
        .push(
            button(text(ctx.i18n.tr("navbar-open-catalog")).size(typography::BODY))
                .style(styles::nav_button(ctx.scheme))
                .on_press(Message::OpenCatalog),
        )
        .spacing(spacing::MD)
        .align_y(Alignment::Center)
        .padding(spacing::MD);

    container(bar)
        .width(Length::Fill)
        .style(styles::card(ctx.scheme))
        .into()
}

fn section_link<'a>(
    ctx: &ViewContext<'a>,
    key: &str,
    target: Screen,
    message: Message,
) -> Element<'a, Message> {
    let label = text(ctx.i18n.tr(key)).size(typography::BODY);
    let label = if ctx.screen == target {
        label.color(ctx.scheme.brand_primary)
    } else {
        label
    };

    button(label)
        .style(styles::nav_button(ctx.scheme))
        .on_press(message)
        .into()
}
