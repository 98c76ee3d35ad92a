// SPDX-License-Identifier: MPL-2.0
//! Photograph catalog: the ordered list of exhibited photographs.
//!
//! The catalog is loaded once at startup, either from the portfolio
//! document embedded in the binary or from a user-supplied TOML file, and
//! is never mutated afterwards. Display order is the document order.
//!
//! # Document format
//!
//! ```toml
//! [[photographs]]
//! category = "raptors"
//! image = "assets/photos/red-tailed-hawk.jpg"
//! alt = "Red-tailed hawk banking against an overcast sky"
//! title = "Red-tailed Hawk"
//! location = "Hawk Mountain, Pennsylvania"
//! ```

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

/// File name of the embedded default portfolio.
const DEFAULT_CATALOG: &str = "default.toml";

/// One exhibited photograph. Immutable after catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Stable display index, assigned in document order at load time.
    pub index: usize,
    /// Category tag used by the portfolio filter.
    pub category: String,
    /// Image file the grid and lightbox display.
    pub image: PathBuf,
    /// Alternative text describing the photograph.
    pub alt: String,
    pub title: String,
    pub location: String,
}

impl GalleryItem {
    /// Caption shown under the photograph in the lightbox.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} — {}", self.title, self.location)
    }
}

/// Ordered, read-only collection of [`GalleryItem`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    items: Vec<GalleryItem>,
}

/// Serde shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    photographs: Vec<PhotographEntry>,
}

#[derive(Debug, Deserialize)]
struct PhotographEntry {
    category: String,
    image: PathBuf,
    #[serde(default)]
    alt: String,
    title: String,
    location: String,
}

impl Catalog {
    /// Parses a catalog from TOML text, assigning display indices in
    /// document order.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| Error::Catalog(e.to_string()))?;

        let items = file
            .photographs
            .into_iter()
            .enumerate()
            .map(|(index, entry)| GalleryItem {
                index,
                category: entry.category,
                image: entry.image,
                alt: entry.alt,
                title: entry.title,
                location: entry.location,
            })
            .collect();

        Ok(Self { items })
    }

    /// Loads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// catalog document.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Async variant of [`Catalog::load_from_path`], used to keep file
    /// reads off the UI event loop.
    pub async fn load_from_path_async(path: PathBuf) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path).await?;
        Self::from_toml(&content)
    }

    /// Returns the portfolio embedded in the binary.
    #[must_use]
    pub fn embedded() -> Self {
        let asset = Asset::get(DEFAULT_CATALOG).expect("embedded catalog is missing");
        let content = String::from_utf8_lossy(asset.data.as_ref());
        Self::from_toml(&content).expect("embedded catalog does not parse")
    }

    /// Number of photographs in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the catalog holds no photographs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the photograph at the given display index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    /// Iterates over the photographs in display order.
    pub fn iter(&self) -> impl Iterator<Item = &GalleryItem> {
        self.items.iter()
    }

    /// Distinct category tags in first-appearance order, used to build
    /// the filter control surface.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in &self.items {
            if !categories.iter().any(|c| c == &item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }
}
