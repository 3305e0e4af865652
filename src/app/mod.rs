// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the domains (menu, carousel, page scroll,
//! localization) and translates component events into cross-component
//! effects like smooth scrolling. This file intentionally keeps policy
//! decisions (window sizing, theme resolution, content fallback) close to
//! the main update loop so it is easy to audit user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::content::SiteContent;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::theming::ThemeMode;
use crate::ui::{hero, navbar, page};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state that bridges the UI components,
/// localization, and the loaded site content.
pub struct App {
    pub i18n: I18n,
    content: SiteContent,
    navbar: navbar::State,
    hero: hero::State,
    page: page::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("brand", &self.content.brand)
            .field("menu_open", &self.navbar.is_open())
            .field("slide", &self.hero.current_index())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
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

impl Default for App {
    fn default() -> Self {
        Self::with_content(SiteContent::embedded(), I18n::default(), ThemeMode::System)
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// content loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let app = Self::with_content(SiteContent::embedded(), i18n, config.theme_mode);

        let task = if let Some(path) = flags.content_path {
            let path = std::path::PathBuf::from(path);
            Task::perform(
                async move { SiteContent::load_from_path(&path) },
                Message::ContentLoaded,
            )
        } else {
            Task::none()
        };

        (app, task)
    }

    /// Builds the component states for a content document.
    fn with_content(content: SiteContent, i18n: I18n, theme_mode: ThemeMode) -> Self {
        let hero = hero::State::new(content.slides.clone());
        let page = page::State::new(
            content.sections.iter().map(|s| s.id.clone()).collect(),
            WINDOW_DEFAULT_HEIGHT as f32 - sizing::NAVBAR_HEIGHT,
        );
        let navbar = navbar::State::new(WINDOW_DEFAULT_WIDTH as f32);

        Self {
            i18n,
            content,
            navbar,
            hero,
            page,
            theme_mode,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        if self.content.brand.is_empty() {
            app_name
        } else {
            format!("{} - {}", self.content.brand, app_name)
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let autoplay_sub = subscription::create_autoplay_subscription(&self.hero);
        let scroll_sub = subscription::create_scroll_subscription(&self.page);

        Subscription::batch([event_sub, autoplay_sub, scroll_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            navbar: &mut self.navbar,
            hero: &mut self.hero,
            page: &mut self.page,
            content: &mut self.content,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::ContentLoaded(result) => update::handle_content_loaded(&mut ctx, result),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            content: &self.content,
            navbar: &self.navbar,
            hero: &self.hero,
            page: &self.page,
        })
    }
}
