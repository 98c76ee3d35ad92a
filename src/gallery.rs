// SPDX-License-Identifier: MPL-2.0
//! Gallery view state: the category filter, the derived visible set, and
//! the lightbox modal viewer.
//!
//! This module provides a single [`Gallery`] that owns all portfolio view
//! state, acting as the one source of truth shared by the grid and the
//! lightbox overlay. The UI layer translates clicks and key presses into
//! method calls here and renders from the accessors; it never keeps a
//! parallel copy of filter or lightbox state.
//!
//! # Lightbox snapshot
//!
//! Opening the lightbox freezes the visible set into a snapshot that
//! navigation wraps around until the lightbox closes. While the lightbox
//! is open the filter is immutable: [`Gallery::apply_filter`] is a no-op,
//! so the snapshot can never go stale behind the overlay.

use crate::catalog::{Catalog, GalleryItem};
use std::path::Path;

/// Currently active category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Show every photograph.
    #[default]
    All,
    /// Show only photographs tagged with the given category.
    Category(String),
}

impl Filter {
    /// Returns `true` if a photograph with the given category tag passes
    /// this filter.
    ///
    /// Matching is a plain string comparison: a tag that appears nowhere
    /// in the catalog is allowed and simply matches nothing.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => tag == category,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

/// Content projected into the lightbox overlay's display slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayContent<'a> {
    /// Image file to display.
    pub image: &'a Path,
    /// Alternative text for the image.
    pub alt: &'a str,
    /// Caption line under the image.
    pub caption: String,
}

/// Lightbox open/closed flag plus the frozen visible set it navigates.
///
/// Invariant: `current < snapshot.len()` whenever `open` is true.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Lightbox {
    open: bool,
    /// Catalog indices frozen from the visible set at open time.
    snapshot: Vec<usize>,
    /// Position within `snapshot`.
    current: usize,
}

/// Portfolio view-state controller.
///
/// Owns the catalog, the active [`Filter`], the derived visible set, and
/// the [lightbox](Gallery::open_lightbox) state. Constructed once at
/// startup; all mutation happens through the operation methods, which run
/// synchronously on the UI event loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    catalog: Catalog,
    filter: Filter,
    /// Catalog indices matching `filter`, in catalog order.
    visible: Vec<usize>,
    lightbox: Lightbox,
}

impl Gallery {
    /// Creates a controller over the given catalog with no filter active
    /// and the lightbox closed.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let visible = (0..catalog.len()).collect();
        Self {
            catalog,
            filter: Filter::All,
            visible,
            lightbox: Lightbox::default(),
        }
    }

    /// Returns the catalog this controller was built over.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the active filter.
    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Catalog indices of the currently visible photographs, in catalog
    /// order.
    #[must_use]
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Iterates over the currently visible photographs in catalog order.
    pub fn visible_items(&self) -> impl Iterator<Item = &GalleryItem> {
        self.visible.iter().filter_map(|&i| self.catalog.get(i))
    }

    /// Returns `true` if the photograph at the given catalog index passes
    /// the active filter.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    /// Sets the active filter and recomputes the visible set.
    ///
    /// Always succeeds, even when the resulting visible set is empty.
    /// While the lightbox is open this is a no-op: the filter is frozen
    /// until the overlay closes.
    pub fn apply_filter(&mut self, filter: Filter) {
        if self.lightbox.open {
            return;
        }

        self.visible = self
            .catalog
            .iter()
            .filter(|item| filter.matches(&item.category))
            .map(|item| item.index)
            .collect();
        self.filter = filter;
    }

    /// Opens the lightbox on the photograph at the given catalog index.
    ///
    /// The visible set is frozen into the navigation snapshot and the
    /// viewer is positioned on the clicked photograph. A no-op if the
    /// photograph is not currently visible, which also guarantees the
    /// snapshot is never empty while open.
    pub fn open_lightbox(&mut self, index: usize) {
        let Some(position) = self.visible.iter().position(|&i| i == index) else {
            return;
        };

        self.lightbox = Lightbox {
            open: true,
            snapshot: self.visible.clone(),
            current: position,
        };
    }

    /// Closes the lightbox. Idempotent.
    pub fn close_lightbox(&mut self) {
        self.lightbox = Lightbox::default();
    }

    /// Advances the lightbox to the next photograph, wrapping around to
    /// the first. A no-op while the lightbox is closed.
    pub fn show_next(&mut self) {
        let n = self.lightbox.snapshot.len();
        if !self.lightbox.open || n == 0 {
            return;
        }
        self.lightbox.current = (self.lightbox.current + 1) % n;
    }

    /// Steps the lightbox back to the previous photograph, wrapping
    /// around to the last. A no-op while the lightbox is closed.
    pub fn show_previous(&mut self) {
        let n = self.lightbox.snapshot.len();
        if !self.lightbox.open || n == 0 {
            return;
        }
        self.lightbox.current = (self.lightbox.current + n - 1) % n;
    }

    /// Returns `true` while the lightbox overlay is open.
    ///
    /// While open the gallery is modal: grid scrolling is suspended and
    /// the filter controls are inert, mirroring the page-level scroll
    /// lock of the web rendition.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lightbox.open
    }

    /// Projects the current snapshot photograph into overlay content.
    ///
    /// Pure read: callable any number of times without mutating state.
    /// Returns `None` while the lightbox is closed.
    #[must_use]
    pub fn overlay(&self) -> Option<OverlayContent<'_>> {
        if !self.lightbox.open {
            return None;
        }
        let catalog_index = *self.lightbox.snapshot.get(self.lightbox.current)?;
        let item = self.catalog.get(catalog_index)?;
        Some(OverlayContent {
            image: &item.image,
            alt: &item.alt,
            caption: item.caption(),
        })
    }

    /// Position within the snapshot while open, as
    /// `(zero-based index, snapshot length)`. Drives the `4 / 9` counter
    /// in the overlay.
    #[must_use]
    pub fn overlay_position(&self) -> Option<(usize, usize)> {
        if !self.lightbox.open {
            return None;
        }
        Some((self.lightbox.current, self.lightbox.snapshot.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    /// Catalog of §8's concrete scenario: two raptors and a songbird.
    fn three_bird_catalog() -> Catalog {
        catalog_from(&[
            ("raptors", "Osprey", "Chesapeake Bay"),
            ("raptors", "Bald Eagle", "Skagit River"),
            ("songbirds", "Wood Thrush", "Great Smoky Mountains"),
        ])
    }

    fn catalog_from(entries: &[(&str, &str, &str)]) -> Catalog {
        let mut doc = String::new();
        for (category, title, location) in entries {
            doc.push_str(&format!(
                "[[photographs]]\ncategory = \"{category}\"\nimage = \"photos/x.jpg\"\n\
                 title = \"{title}\"\nlocation = \"{location}\"\n\n"
            ));
        }
        Catalog::from_toml(&doc).expect("test catalog should parse")
    }

    #[test]
    fn new_gallery_shows_everything() {
        let gallery = Gallery::new(three_bird_catalog());
        assert_eq!(gallery.filter(), &Filter::All);
        assert_eq!(gallery.visible(), &[0, 1, 2]);
        assert!(!gallery.is_open());
    }

    #[test]
    fn filter_yields_matching_items_in_catalog_order() {
        let mut gallery = Gallery::new(three_bird_catalog());
        gallery.apply_filter(Filter::Category("raptors".into()));
        assert_eq!(gallery.visible(), &[0, 1]);

        let titles: Vec<&str> = gallery.visible_items().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Osprey", "Bald Eagle"]);
    }

    #[test]
    fn filter_all_restores_full_catalog_regardless_of_prior_state() {
        let mut gallery = Gallery::new(three_bird_catalog());
        gallery.apply_filter(Filter::Category("songbirds".into()));
        assert_eq!(gallery.visible(), &[2]);

        gallery.apply_filter(Filter::All);
        assert_eq!(gallery.visible(), &[0, 1, 2]);
    }

    #[test]
    fn unknown_category_matches_nothing_without_error() {
        let mut gallery = Gallery::new(three_bird_catalog());
        gallery.apply_filter(Filter::Category("waterfowl".into()));
        assert!(gallery.visible().is_empty());
        assert!(gallery.visible_items().next().is_none());
    }

    #[test]
    fn open_lightbox_positions_on_clicked_item() {
        let mut gallery = Gallery::new(three_bird_catalog());
        gallery.open_lightbox(1);
        assert!(gallery.is_open());
        assert_eq!(gallery.overlay_position(), Some((1, 3)));
    }

    #[test]
    fn open_lightbox_on_hidden_item_is_a_no_op() {
        let mut gallery = Gallery::new(three_bird_catalog());
        gallery.apply_filter(Filter::Category("songbirds".into()));

        // Index 0 is a raptor, filtered out.
        gallery.open_lightbox(0);
        assert!(!gallery.is_open());
        assert_eq!(gallery.overlay(), None);
    }

    #[test]
    fn open_lightbox_indexes_within_the_filtered_snapshot() {
        let mut gallery = Gallery::new(three_bird_catalog());
        gallery.apply_filter(Filter::Category("raptors".into()));
        gallery.open_lightbox(1);

        // Second raptor, but first position is the Osprey at catalog index 0.
        assert_eq!(gallery.overlay_position(), Some((1, 2)));
        let overlay = gallery.overlay().expect("lightbox is open");
        assert_eq!(overlay.caption, "Bald Eagle — Skagit River");
    }

    #[test]
    fn close_lightbox_is_idempotent() {
        let mut gallery = Gallery::new(three_bird_catalog());
        gallery.open_lightbox(0);
        gallery.close_lightbox();
        let once = gallery.clone();
        gallery.close_lightbox();
        assert_eq!(gallery, once);
        assert!(!gallery.is_open());
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        // §8 concrete scenario: five items, default filter, open at 3.
        let mut gallery = Gallery::new(catalog_from(&[
            ("raptors", "Osprey", "Chesapeake Bay"),
            ("raptors", "Bald Eagle", "Skagit River"),
            ("songbirds", "Wood Thrush", "Great Smoky Mountains"),
            ("waterfowl", "Common Loon", "Boundary Waters"),
            ("shorebirds", "American Avocet", "Great Salt Lake"),
        ]));

        gallery.open_lightbox(3);
        assert_eq!(gallery.overlay_position(), Some((3, 5)));

        gallery.show_next();
        assert_eq!(gallery.overlay_position(), Some((4, 5)));

        gallery.show_next(); // wraps
        assert_eq!(gallery.overlay_position(), Some((0, 5)));

        gallery.show_previous(); // wraps back
        assert_eq!(gallery.overlay_position(), Some((4, 5)));
    }

    #[test]
    fn next_applied_snapshot_length_times_closes_the_cycle() {
        let mut gallery = Gallery::new(three_bird_catalog());
        for start in 0..3 {
            gallery.close_lightbox();
            gallery.open_lightbox(start);
            for _ in 0..3 {
                gallery.show_next();
            }
            assert_eq!(gallery.overlay_position(), Some((start, 3)));
        }
    }

    #[test]
    fn previous_applied_snapshot_length_times_closes_the_cycle() {
        let mut gallery = Gallery::new(three_bird_catalog());
        gallery.open_lightbox(2);
        for _ in 0..3 {
            gallery.show_previous();
        }
        assert_eq!(gallery.overlay_position(), Some((2, 3)));
    }

    #[test]
    fn next_then_previous_returns_to_start_from_any_index() {
        let mut gallery = Gallery::new(three_bird_catalog());
        for start in 0..3 {
            gallery.close_lightbox();
            gallery.open_lightbox(start);
            gallery.show_next();
            gallery.show_previous();
            assert_eq!(gallery.overlay_position(), Some((start, 3)));

            gallery.show_previous();
            gallery.show_next();
            assert_eq!(gallery.overlay_position(), Some((start, 3)));
        }
    }

    #[test]
    fn single_item_snapshot_cycles_to_itself() {
        // §8 concrete scenario: filter down to one songbird, open it,
        // navigate, and confirm the index never moves.
        let mut gallery = Gallery::new(three_bird_catalog());
        gallery.apply_filter(Filter::Category("songbirds".into()));
        assert_eq!(gallery.visible(), &[2]);

        gallery.open_lightbox(2);
        assert_eq!(gallery.overlay_position(), Some((0, 1)));

        gallery.show_next();
        assert_eq!(gallery.overlay_position(), Some((0, 1)));
        gallery.show_previous();
        assert_eq!(gallery.overlay_position(), Some((0, 1)));
    }

    #[test]
    fn filter_is_frozen_while_lightbox_is_open() {
        let mut gallery = Gallery::new(three_bird_catalog());
        gallery.apply_filter(Filter::Category("songbirds".into()));
        gallery.open_lightbox(2);

        gallery.apply_filter(Filter::All);
        assert_eq!(gallery.filter(), &Filter::Category("songbirds".into()));
        assert_eq!(gallery.visible(), &[2]);
        assert_eq!(gallery.overlay_position(), Some((0, 1)));

        // After closing, the filter thaws.
        gallery.close_lightbox();
        gallery.apply_filter(Filter::All);
        assert_eq!(gallery.visible(), &[0, 1, 2]);
    }

    #[test]
    fn navigation_while_closed_is_a_no_op() {
        let mut gallery = Gallery::new(three_bird_catalog());
        let before = gallery.clone();
        gallery.show_next();
        gallery.show_previous();
        assert_eq!(gallery, before);
    }

    #[test]
    fn empty_catalog_can_never_be_navigated() {
        let mut gallery = Gallery::new(Catalog::default());
        gallery.open_lightbox(0);
        assert!(!gallery.is_open());

        gallery.show_next();
        gallery.show_previous();
        assert_eq!(gallery.overlay(), None);
        assert_eq!(gallery.overlay_position(), None);
    }

    #[test]
    fn overlay_projects_image_alt_and_caption() {
        let catalog = Catalog::from_toml(
            "[[photographs]]\ncategory = \"raptors\"\nimage = \"photos/osprey.jpg\"\n\
             alt = \"An osprey carrying a fish\"\ntitle = \"Osprey\"\nlocation = \"Chesapeake Bay\"\n",
        )
        .expect("catalog should parse");

        let mut gallery = Gallery::new(catalog);
        gallery.open_lightbox(0);

        let overlay = gallery.overlay().expect("lightbox is open");
        assert_eq!(overlay.image, Path::new("photos/osprey.jpg"));
        assert_eq!(overlay.alt, "An osprey carrying a fish");
        assert_eq!(overlay.caption, "Osprey — Chesapeake Bay");

        // Pure projection: repeated reads leave the state untouched.
        let before = gallery.clone();
        let _ = gallery.overlay();
        let _ = gallery.overlay();
        assert_eq!(gallery, before);
    }
}
