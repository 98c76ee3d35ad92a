// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.
//!
//! Style closures capture the active [`ColorScheme`] so every widget
//! follows the effective light/dark theme without consulting the Iced
//! theme object.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Theme};

/// Pill-shaped category filter button. The active pill is filled with the
/// brand color; inactive pills are outlined.
pub fn filter_pill(
    scheme: &ColorScheme,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let brand = scheme.brand_primary;
    let brand_hover = scheme.brand_secondary;
    let text = scheme.text_secondary;
    let surface = scheme.surface_primary;

    move |_theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered);
        if active {
            button::Style {
                background: Some(Background::Color(if hovered { brand_hover } else { brand })),
                text_color: Color::WHITE,
                border: Border {
                    color: brand,
                    width: border::WIDTH_SM,
                    radius: radius::FULL.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        } else {
            button::Style {
                background: Some(Background::Color(surface)),
                text_color: if hovered { brand } else { text },
                border: Border {
                    color: if hovered { brand } else { text },
                    width: border::WIDTH_SM,
                    radius: radius::FULL.into(),
                },
                ..button::Style::default()
            }
        }
    }
}

/// Flat navigation-bar button.
pub fn nav_button(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let text = scheme.text_primary;
    let brand = scheme.brand_primary;

    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => brand,
            _ => text,
        },
        border: Border::default(),
        ..button::Style::default()
    }
}

/// Card-like portfolio tile.
pub fn tile(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface = scheme.surface_secondary;
    let text = scheme.text_primary;

    move |_theme: &Theme, status: button::Status| button::Style {
        background: Some(Background::Color(surface)),
        text_color: text,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        shadow: match status {
            button::Status::Hovered => shadow::MD,
            _ => shadow::SM,
        },
        snap: true,
    }
}

/// Lightbox control (arrows, close) rendered over the darkened backdrop.
pub fn overlay_control(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..Color::BLACK
            })),
            text_color,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Primary action button (contact form submit).
pub fn primary(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let brand = scheme.brand_primary;
    let brand_hover = scheme.brand_secondary;

    move |_theme: &Theme, status: button::Status| button::Style {
        background: Some(Background::Color(match status {
            button::Status::Hovered | button::Status::Pressed => brand_hover,
            _ => brand,
        })),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Full-window page background.
pub fn page(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface_primary;
    let text = scheme.text_primary;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        ..container::Style::default()
    }
}

/// Raised card on the page surface.
pub fn card(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let surface = scheme.surface_secondary;
    let text = scheme.text_primary;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(text),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MD.into(),
        },
        ..container::Style::default()
    }
}

/// Darkened full-window lightbox backdrop.
pub fn backdrop(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.overlay_background;
    let text = scheme.overlay_text;

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..container::Style::default()
    }
}

/// Single-line and multi-line form inputs.
pub fn input(scheme: &ColorScheme) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let surface = scheme.surface_secondary;
    let text = scheme.text_primary;
    let muted = scheme.text_secondary;
    let brand = scheme.brand_primary;

    move |_theme: &Theme, status: text_input::Status| text_input::Style {
        background: Background::Color(surface),
        border: Border {
            color: match status {
                text_input::Status::Focused { .. } => brand,
                _ => muted,
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        icon: muted,
        placeholder: muted,
        value: text,
        selection: brand,
    }
}
