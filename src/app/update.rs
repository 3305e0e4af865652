// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler owns one component's messages and translates the component
//! events into cross-component effects (a nav link or hero call-to-action
//! becoming a smooth scroll, a resize reaching both the menu breakpoint and
//! the scroll bounds).

use super::Message;
use crate::content::SiteContent;
use crate::error::Error;
use crate::ui::design_tokens::sizing;
use crate::ui::{hero, navbar, page};
use iced::Task;

/// Mutable view over the pieces of `App` the handlers work with.
pub struct UpdateContext<'a> {
    pub navbar: &'a mut navbar::State,
    pub hero: &'a mut hero::State,
    pub page: &'a mut page::State,
    pub content: &'a mut SiteContent,
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.navbar) {
        navbar::Event::None => Task::none(),
        navbar::Event::NavigateTo(target) => ctx
            .page
            .handle(page::Message::JumpTo(target))
            .map(Message::Page),
    }
}

pub fn handle_hero_message(
    ctx: &mut UpdateContext<'_>,
    message: hero::Message,
) -> Task<Message> {
    match ctx.hero.handle(message) {
        hero::Effect::None => Task::none(),
        hero::Effect::Navigate(link) => ctx
            .page
            .handle(page::Message::JumpTo(link))
            .map(Message::Page),
    }
}

pub fn handle_page_message(
    ctx: &mut UpdateContext<'_>,
    message: page::Message,
) -> Task<Message> {
    ctx.page.handle(message).map(Message::Page)
}

/// Window resizes feed the menu breakpoint check and the scroll bounds.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: iced::Size) -> Task<Message> {
    let _ = navbar::update(navbar::Message::ViewportResized(size.width), ctx.navbar);
    ctx.page
        .handle(page::Message::ViewportResized(
            (size.height - sizing::NAVBAR_HEIGHT).max(0.0),
        ))
        .map(Message::Page)
}

/// Swaps in a content document loaded from the command-line path. A load
/// failure keeps the built-in page: content problems are never fatal.
pub fn handle_content_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<SiteContent, Error>,
) -> Task<Message> {
    if let Ok(content) = result {
        *ctx.hero = hero::State::new(content.slides.clone());
        *ctx.page = page::State::new(
            content.sections.iter().map(|s| s.id.clone()).collect(),
            ctx.page.viewport_height(),
        );
        *ctx.content = content;
    }
    Task::none()
}
