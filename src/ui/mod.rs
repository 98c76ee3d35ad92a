// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery_screen`] - Portfolio grid with the category filter bar
//! - [`lightbox`] - Modal photograph viewer stacked over the grid
//! - [`about`] - The photographer's story
//! - [`contact`] - Print and licensing enquiry form (local stub)
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Top navigation bar with section links and theme toggle
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod contact;
pub mod design_tokens;
pub mod gallery_screen;
pub mod lightbox;
pub mod navbar;
pub mod styles;
pub mod theming;
