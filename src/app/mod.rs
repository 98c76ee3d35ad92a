// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the gallery controller, localization,
//! and persisted preferences, and translates messages into controller
//! calls or side effects like config persistence and catalog loading.
//! Policy decisions (window sizing, persistence format, what happens on
//! a failed catalog load) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::Catalog;
use crate::config::{self, Config};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::contact;
use crate::ui::gallery_screen;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state bridging the gallery controller, the UI
/// components, localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    gallery: Gallery,
    contact: contact::State,
    theme_mode: ThemeMode,
    /// Color scheme for the effective theme, refreshed on every theme
    /// change so views can borrow it.
    scheme: ColorScheme,
    /// Message of the last failed catalog load, shown on the portfolio
    /// screen while the previous catalog stays up.
    catalog_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("photographs", &self.gallery.catalog().len())
            .field("lightbox_open", &self.gallery.is_open())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Gallery,
            gallery: Gallery::new(Catalog::embedded()),
            contact: contact::State::default(),
            theme_mode: ThemeMode::System,
            scheme: ThemeMode::System.scheme(),
            catalog_error: None,
        }
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates the application state from CLI flags, loading saved
    /// preferences and kicking off the catalog load when a path was
    /// given on the command line.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let saved = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &saved);

        let app = Self {
            i18n,
            theme_mode: saved.theme_mode,
            scheme: saved.theme_mode.scheme(),
            ..Self::default()
        };

        let task = match flags.catalog_path {
            Some(path) => load_catalog(path),
            None => Task::none(),
        };

        (app, task)
    }

    /// Window title.
    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    /// Maps the persisted theme mode onto an Iced theme.
    pub fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Keyboard routing; active only while the lightbox is open.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.gallery.is_open())
    }

    /// Handle application messages and update state.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(msg) => match navbar::update(&msg) {
                navbar::Event::ShowScreen(screen) => {
                    self.screen = screen;
                    Task::none()
                }
                navbar::Event::ToggleTheme => {
                    self.theme_mode = self.theme_mode.toggled();
                    self.scheme = self.theme_mode.scheme();
                    self.persist_preferences();
                    Task::none()
                }
                navbar::Event::OpenCatalog => Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .set_title("Open portfolio catalog")
                            .add_filter("TOML catalog", &["toml"])
                            .pick_file()
                            .await
                            .map(|file| file.path().to_path_buf())
                    },
                    Message::CatalogDialogResult,
                ),
            },
            Message::GalleryScreen(msg) => {
                match gallery_screen::update(msg) {
                    gallery_screen::Event::ApplyFilter(filter) => {
                        self.gallery.apply_filter(filter);
                    }
                    gallery_screen::Event::OpenLightbox(index) => {
                        self.gallery.open_lightbox(index);
                    }
                }
                Task::none()
            }
            Message::Lightbox(msg) => {
                match lightbox::update(&msg) {
                    lightbox::Event::None => {}
                    lightbox::Event::Close => self.gallery.close_lightbox(),
                    lightbox::Event::ShowNext => self.gallery.show_next(),
                    lightbox::Event::ShowPrevious => self.gallery.show_previous(),
                }
                Task::none()
            }
            Message::About(msg) => {
                match about::update(&msg) {
                    about::Event::BackToGallery => self.screen = Screen::Gallery,
                }
                Task::none()
            }
            Message::Contact(msg) => {
                if let contact::Event::Submitted {
                    name,
                    email,
                    message,
                } = self.contact.update(msg)
                {
                    // The form is a stub: the enquiry goes to stdout only.
                    println!("Contact enquiry from {name} <{email}>: {message}");
                }
                Task::none()
            }
            Message::CatalogLoaded(Ok(catalog)) => {
                self.gallery = Gallery::new(catalog);
                self.catalog_error = None;
                self.screen = Screen::Gallery;
                Task::none()
            }
            Message::CatalogLoaded(Err(err)) => {
                self.catalog_error = Some(err.to_string());
                self.screen = Screen::Gallery;
                Task::none()
            }
            Message::CatalogDialogResult(Some(path)) => load_catalog(path),
            Message::CatalogDialogResult(None) => Task::none(),
        }
    }

    /// Build the user interface.
    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            scheme: &self.scheme,
            dark: self.theme_mode.is_dark(),
            gallery: &self.gallery,
            contact: &self.contact,
            catalog_error: self.catalog_error.as_deref(),
        })
    }

    /// Best-effort preference persistence; the app keeps running on
    /// in-memory state if the config file cannot be written.
    fn persist_preferences(&self) {
        let config = Config {
            language: Some(self.i18n.current_locale().to_string()),
            theme_mode: self.theme_mode,
        };
        if let Err(err) = config::save(&config) {
            eprintln!("Failed to save preferences: {err}");
        }
    }
}

fn load_catalog(path: PathBuf) -> Task<Message> {
    Task::perform(Catalog::load_from_path_async(path), Message::CatalogLoaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::gallery::Filter;

    #[test]
    fn filter_message_narrows_the_gallery() {
        let mut app = App::default();
        let total = app.gallery.catalog().len();

        let _ = app.update(Message::GalleryScreen(
            gallery_screen::Message::FilterSelected(Filter::Category("raptors".into())),
        ));

        assert!(app.gallery.visible().len() < total);
        assert!(app
            .gallery
            .visible_items()
            .all(|item| item.category == "raptors"));
    }

    #[test]
    fn lightbox_round_trip_through_messages() {
        let mut app = App::default();
        let first_visible = app.gallery.visible()[0];

        let _ = app.update(Message::GalleryScreen(gallery_screen::Message::ItemPressed(
            first_visible,
        )));
        assert!(app.gallery.is_open());

        let _ = app.update(Message::Lightbox(lightbox::Message::ShowNext));
        let _ = app.update(Message::Lightbox(lightbox::Message::Close));
        assert!(!app.gallery.is_open());
    }

    #[test]
    fn failed_catalog_load_keeps_previous_catalog() {
        let mut app = App::default();
        let before = app.gallery.catalog().clone();

        let _ = app.update(Message::CatalogLoaded(Err(Error::Catalog(
            "missing title".into(),
        ))));

        assert_eq!(app.gallery.catalog(), &before);
        assert!(app.catalog_error.is_some());
    }

    #[test]
    fn successful_catalog_load_replaces_gallery_and_clears_error() {
        let mut app = App::default();
        app.catalog_error = Some("stale".into());

        let catalog = Catalog::from_toml(
            "[[photographs]]\ncategory = \"waders\"\nimage = \"x.jpg\"\n\
             title = \"Great Egret\"\nlocation = \"Everglades\"\n",
        )
        .expect("catalog should parse");

        let _ = app.update(Message::CatalogLoaded(Ok(catalog)));

        assert_eq!(app.gallery.catalog().len(), 1);
        assert!(app.catalog_error.is_none());
    }

    #[test]
    fn navbar_switches_screens() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ShowContact));
        assert_eq!(app.screen, Screen::Contact);

        let _ = app.update(Message::About(about::Message::BackToGallery));
        assert_eq!(app.screen, Screen::Gallery);
    }
}
