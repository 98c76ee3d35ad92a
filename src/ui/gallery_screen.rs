// SPDX-License-Identifier: MPL-2.0
//! Portfolio screen: the category filter bar and the photograph grid.
//!
//! Renders from the [`Gallery`] controller and reports clicks back to the
//! application root as events; it holds no state of its own. While the
//! lightbox is modal the filter pills and tiles are rendered inert, which
//! complements the controller's own filter freeze.

use crate::gallery::{Filter, Gallery};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, column, container, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the portfolio screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
    pub gallery: &'a Gallery,
    /// Set when the last catalog load failed; shown above the grid.
    pub error: Option<&'a str>,
    /// True while the lightbox is open and the screen must not react.
    pub modal: bool,
}

/// Messages emitted by the portfolio screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// A filter pill was pressed.
    FilterSelected(Filter),
    /// A photograph tile was pressed, identified by catalog index.
    ItemPressed(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ApplyFilter(Filter),
    OpenLightbox(usize),
}

/// Process a portfolio screen message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::FilterSelected(filter) => Event::ApplyFilter(filter),
        Message::ItemPressed(index) => Event::OpenLightbox(index),
    }
}

/// Render the portfolio screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = column![
        text(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG),
        text(ctx.i18n.tr("gallery-subtitle"))
            .size(typography::BODY)
            .color(ctx.scheme.text_secondary),
    ]
    .spacing(spacing::XS)
    .align_x(Alignment::Center);

    let mut content = Column::new()
        .push(header)
        .push(filter_bar(&ctx))
        .spacing(spacing::LG)
        .align_x(Alignment::Center)
        .padding(spacing::LG);

    if let Some(error) = ctx.error {
        content = content.push(
            text(format!("{}: {error}", ctx.i18n.tr("gallery-load-error")))
                .size(typography::BODY)
                .color(ctx.scheme.error),
        );
    }

    content = if ctx.gallery.visible().is_empty() {
        content.push(
            container(
                text(ctx.i18n.tr("gallery-empty"))
                    .size(typography::BODY)
                    .color(ctx.scheme.text_secondary),
            )
            .padding(spacing::XL),
        )
    } else {
        content.push(grid(&ctx))
    };

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One pill per category, preceded by the `All` sentinel pill.
fn filter_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut bar = Row::new()
        .push(filter_pill(
            ctx,
            ctx.i18n.tr("gallery-filter-all"),
            Filter::All,
        ))
        .spacing(spacing::XS);

    for category in ctx.gallery.catalog().categories() {
        let filter = Filter::Category(category.clone());
        bar = bar.push(filter_pill(ctx, category, filter));
    }

    bar.into()
}

fn filter_pill<'a>(
    ctx: &ViewContext<'a>,
    label: String,
    filter: Filter,
) -> Element<'a, Message> {
    let active = ctx.gallery.filter() == &filter;
    button(text(label).size(typography::BODY))
        .style(styles::filter_pill(ctx.scheme, active))
        .padding([spacing::XXS, spacing::MD])
        .on_press_maybe((!ctx.modal).then_some(Message::FilterSelected(filter)))
        .into()
}

/// Visible photographs laid out in fixed-width rows, catalog order.
fn grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = ctx
        .gallery
        .visible_items()
        .map(|item| tile(ctx, item.index, &item.image, &item.title, &item.location))
        .collect();

    let mut rows = Column::new().spacing(spacing::MD);
    let mut chunk: Vec<Element<'a, Message>> = Vec::new();
    for element in tiles {
        chunk.push(element);
        if chunk.len() == sizing::GRID_COLUMNS {
            rows = rows.push(Row::with_children(std::mem::take(&mut chunk)).spacing(spacing::MD));
        }
    }
    if !chunk.is_empty() {
        rows = rows.push(Row::with_children(chunk).spacing(spacing::MD));
    }

    rows.into()
}

fn tile<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    image: &std::path::Path,
    title: &str,
    location: &str,
) -> Element<'a, Message> {
    let photo = Image::new(Handle::from_path(image))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::GRID_TILE_HEIGHT));

    let caption = column![
        text(title.to_owned()).size(typography::TITLE_SM),
        text(location.to_owned())
            .size(typography::CAPTION)
            .color(ctx.scheme.text_secondary),
    ]
    .spacing(spacing::XXS)
    .padding(spacing::SM);

    button(column![photo, caption])
        .style(styles::tile(ctx.scheme))
        .width(Length::Fixed(sizing::GRID_TILE_WIDTH))
        .padding(0)
        .on_press_maybe((!ctx.modal).then_some(Message::ItemPressed(index)))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_message_becomes_apply_filter_event() {
        let event = update(Message::FilterSelected(Filter::Category("raptors".into())));
        match event {
            Event::ApplyFilter(Filter::Category(tag)) => assert_eq!(tag, "raptors"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn item_press_becomes_open_lightbox_event() {
        assert!(matches!(
            update(Message::ItemPressed(4)),
            Event::OpenLightbox(4)
        ));
    }
}
