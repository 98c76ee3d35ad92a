// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current
//! screen based on application state, stacking the lightbox overlay on
//! top of the portfolio whenever it is open.

use super::{Message, Screen};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::contact;
use crate::ui::gallery_screen::{self, ViewContext as GalleryViewContext};
use crate::ui::lightbox::{self, ViewContext as LightboxViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{container, stack, Column};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub scheme: &'a ColorScheme,
    pub dark: bool,
    pub gallery: &'a Gallery,
    pub contact: &'a contact::State,
    pub catalog_error: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        scheme: ctx.scheme,
        screen: ctx.screen,
        dark: ctx.dark,
    })
    .map(Message::Navbar);

    let body: Element<'_, Message> = match ctx.screen {
        Screen::Gallery => gallery_screen::view(GalleryViewContext {
            i18n: ctx.i18n,
            scheme: ctx.scheme,
            gallery: ctx.gallery,
            error: ctx.catalog_error,
            modal: ctx.gallery.is_open(),
        })
        .map(Message::GalleryScreen),
        Screen::About => about::view(AboutViewContext {
            i18n: ctx.i18n,
            scheme: ctx.scheme,
        })
        .map(Message::About),
        Screen::Contact => ctx.contact.view(ctx.i18n, ctx.scheme).map(Message::Contact),
    };

    let page = container(
        Column::new()
            .push(navbar_view)
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::page(ctx.scheme));

    // The lightbox occludes the page, mirroring the modal scroll lock of
    // the web rendition; the controller separately freezes the filter.
    match (ctx.gallery.overlay(), ctx.gallery.overlay_position()) {
        (Some(overlay), Some(position)) => stack![
            page,
            lightbox::view(LightboxViewContext {
                scheme: ctx.scheme,
                overlay,
                position,
            })
            .map(Message::Lightbox)
        ]
        .into(),
        _ => page.into(),
    }
}
