// SPDX-License-Identifier: MPL-2.0
//! `aviary` is a bird photography portfolio gallery built with the Iced
//! GUI framework.
//!
//! It presents a category-filterable grid of photographs with a modal
//! lightbox viewer, and demonstrates internationalization with Fluent,
//! user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/aviary/0.2.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
