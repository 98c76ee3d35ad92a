// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::{opacity, palette};
use dark_light;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            overlay_background: Color {
                a: opacity::OVERLAY_PRESSED,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            overlay_background: Color {
                a: opacity::OVERLAY_PRESSED,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark() // Default to dark for Dark mode or on error
        }
    }
}

/// Persisted theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Flips to the opposite of the current effective theme.
    ///
    /// From System mode the system preference is resolved first and then
    /// inverted, so the first toggle always produces a visible change.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Color scheme for the effective theme.
    #[must_use]
    pub fn scheme(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        }
    }
}
