// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::ui::about;
use crate::ui::contact;
use crate::ui::gallery_screen;
use crate::ui::lightbox;
use crate::ui::navbar;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    GalleryScreen(gallery_screen::Message),
    Lightbox(lightbox::Message),
    About(about::Message),
    Contact(contact::Message),
    /// Result from async catalog loading.
    CatalogLoaded(Result<Catalog, Error>),
    /// Result from the open-catalog file dialog.
    CatalogDialogResult(Option<PathBuf>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog file to load instead of the embedded portfolio.
    pub catalog_path: Option<PathBuf>,
}
