// SPDX-License-Identifier: MPL-2.0
//! Hero carousel sub-component.
//!
//! Cycles a fixed, ordered list of slides with wraparound, renders the
//! active slide's text overlay, and auto-advances on a fixed cadence.
//! The auto-advance "timer" is a single armed deadline: arming replaces any
//! previous deadline, so duplicate concurrent timers cannot exist. Manual
//! navigation and pointer-hover transitions re-arm or disarm that deadline,
//! which is exactly the stop/start discipline of a single interval handle.

use crate::content::{HeroSlide, SlideOverlay};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, mouse_area, tooltip, Column, Container, Row, Text};
use iced::{Element, Length, Theme};
use std::time::{Duration, Instant};

/// Time between automatic slide advances.
pub const SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// Cadence of the deadline-checking tick while autoplay is armed.
pub const AUTOPLAY_TICK: Duration = Duration::from_millis(100);

/// Carousel state.
#[derive(Debug, Clone)]
pub struct State {
    slides: Vec<HeroSlide>,
    current: usize,
    /// The armed auto-advance deadline. `None` means autoplay is stopped
    /// (no slides to cycle, or a pointer is hovering the carousel).
    auto_advance_at: Option<Instant>,
}

/// Messages for the carousel sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The "previous" control was pressed.
    PrevPressed,
    /// The "next" control was pressed.
    NextPressed,
    /// Periodic deadline check while autoplay is armed.
    AutoplayTick(Instant),
    /// Pointer entered the carousel surface.
    CursorEntered,
    /// Pointer left the carousel surface.
    CursorExited,
    /// The overlay call-to-action was pressed.
    CtaPressed(String),
}

/// Effects produced by carousel updates.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Request navigation to the given link target.
    Navigate(String),
}

impl State {
    /// Creates a carousel over the given slides, starting on slide 0.
    ///
    /// Autoplay is armed only when there is more than one slide; with zero
    /// or one slide there is nothing to cycle and no controls are shown.
    pub fn new(slides: Vec<HeroSlide>) -> Self {
        let auto_advance_at = if slides.len() > 1 {
            Some(Instant::now() + SLIDE_INTERVAL)
        } else {
            None
        };
        Self {
            slides,
            current: 0,
            auto_advance_at,
        }
    }

    /// Index of the active slide. Always in range while slides exist.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The active slide, if any.
    #[must_use]
    pub fn active_slide(&self) -> Option<&HeroSlide> {
        self.slides.get(self.current)
    }

    /// The resolved overlay for the active slide.
    #[must_use]
    pub fn overlay(&self) -> Option<SlideOverlay> {
        self.active_slide().map(HeroSlide::overlay)
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the carousel has no slides at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Whether navigation controls exist (and with them, autoplay).
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.slides.len() > 1
    }

    /// Whether the autoplay tick subscription should run.
    #[must_use]
    pub fn autoplay_armed(&self) -> bool {
        self.auto_advance_at.is_some()
    }

    /// Handle a carousel message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::PrevPressed => {
                self.step_back();
                self.restart_autoplay(Instant::now());
                Effect::None
            }
            Message::NextPressed => {
                self.step_forward();
                self.restart_autoplay(Instant::now());
                Effect::None
            }
            Message::AutoplayTick(now) => {
                if let Some(deadline) = self.auto_advance_at {
                    if now >= deadline {
                        self.step_forward();
                        self.auto_advance_at = Some(now + SLIDE_INTERVAL);
                    }
                }
                Effect::None
            }
            Message::CursorEntered => {
                self.auto_advance_at = None;
                Effect::None
            }
            Message::CursorExited => {
                self.restart_autoplay(Instant::now());
                Effect::None
            }
            Message::CtaPressed(link) => Effect::Navigate(link),
        }
    }

    /// Advance to the next slide with wraparound.
    fn step_forward(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.slides.len();
    }

    /// Retreat to the previous slide with wraparound.
    fn step_back(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        let len = self.slides.len();
        self.current = (self.current + len - 1) % len;
    }

    /// Stop-then-start: replaces any armed deadline with a full interval
    /// from `now`, so the next automatic advance is never early.
    fn restart_autoplay(&mut self, now: Instant) {
        if self.has_controls() {
            self.auto_advance_at = Some(now + SLIDE_INTERVAL);
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the hero carousel: active slide surface, text overlay, and
/// prev/next controls when they exist.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let overlay = match ctx.state.overlay() {
        Some(overlay) => overlay,
        // No slides: the feature is absent from this page.
        None => {
            return Container::new(Column::new())
                .width(Length::Fill)
                .height(0.0)
                .into()
        }
    };

    let headline = Text::new(overlay.title)
        .size(typography::TITLE_LG)
        .color(palette::WHITE);
    let subtitle = Text::new(overlay.subtitle)
        .size(typography::BODY_LG)
        .color(palette::GRAY_100);
    let cta = button(Text::new(overlay.button_text))
        .on_press(Message::CtaPressed(overlay.button_link))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button_primary);

    let text_block = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(headline)
        .push(subtitle)
        .push(cta);

    let mut layers: Vec<Element<'a, Message>> = Vec::new();
    layers.push(slide_surface(ctx.state.active_slide()));
    layers.push(
        Container::new(text_block)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    );

    if ctx.state.has_controls() {
        layers.push(controls(ctx.i18n));
    }

    let surface = Container::new(iced::widget::stack(layers))
        .width(Length::Fill)
        .height(sizing::HERO_HEIGHT);

    mouse_area(surface)
        .on_enter(Message::CursorEntered)
        .on_exit(Message::CursorExited)
        .into()
}

/// The visual background of a slide: its image when one is set, otherwise a
/// themed brand surface.
fn slide_surface<'a>(slide: Option<&HeroSlide>) -> Element<'a, Message> {
    if let Some(path) = slide.and_then(|s| s.image.as_ref()) {
        let image = Image::new(Handle::from_path(path.clone()))
            .width(Length::Fill)
            .height(Length::Fill);
        Container::new(image)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(palette::BRAND_700.into()),
                ..Default::default()
            })
            .into()
    }
}

/// Prev/next controls, vertically centered at the hero edges.
fn controls<'a>(i18n: &I18n) -> Element<'a, Message> {
    let control = |glyph: &str, label: String, msg: Message| {
        let btn = button(Text::new(glyph.to_string()).size(typography::TITLE_MD))
            .on_press(msg)
            .width(sizing::CAROUSEL_CONTROL)
            .height(sizing::CAROUSEL_CONTROL)
            .style(styles::button_overlay(palette::WHITE, 0.35, 0.6));
        tooltip(btn, Text::new(label), tooltip::Position::Top)
    };

    let row = Row::new()
        .width(Length::Fill)
        .padding(spacing::MD)
        .push(control("‹", i18n.tr("hero-previous"), Message::PrevPressed))
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(control("›", i18n.tr("hero-next"), Message::NextPressed));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .into()
}
