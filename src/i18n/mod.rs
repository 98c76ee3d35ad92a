// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! UI strings live in Fluent `.ftl` resources embedded in the binary.
//! The active locale is resolved from the command line, then the saved
//! configuration, then the OS locale, falling back to `en-US`.

pub mod fluent;
