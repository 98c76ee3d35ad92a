// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Single source of truth for the colors, spacing, sizing, and typography
//! constants used across the UI. Keep ratios intact when adjusting values
//! (e.g. `spacing::MD` = `spacing::XS` * 2).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (fern scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.87, 0.95, 0.88); // Very light fern
    pub const PRIMARY_400: Color = Color::from_rgb(0.45, 0.72, 0.5); // Medium light fern
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.38); // Primary fern
    pub const PRIMARY_600: Color = Color::from_rgb(0.22, 0.48, 0.3); // Medium dark fern
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.38, 0.23); // Dark fern

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Portfolio grid
    pub const GRID_TILE_WIDTH: f32 = 280.0;
    pub const GRID_TILE_HEIGHT: f32 = 200.0;
    pub const GRID_COLUMNS: usize = 3;

    // Lightbox overlay controls
    pub const OVERLAY_ARROW: f32 = 48.0;
    pub const OVERLAY_CLOSE: f32 = 36.0;

    // Contact form
    pub const FORM_WIDTH: f32 = 480.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Main page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Section headers, brand name
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Tile titles
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Locations, counters, hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    // Grid validation
    assert!(sizing::GRID_COLUMNS > 0);
    assert!(sizing::GRID_TILE_WIDTH > sizing::GRID_TILE_HEIGHT);
};
