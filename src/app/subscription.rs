// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events (Escape, window resize) are routed into the owning
//! controllers; the two tick subscriptions exist only while their controller
//! needs them, so a stopped carousel or a settled page costs nothing.

use super::Message;
use crate::ui::{hero, navbar, page};
use iced::{event, keyboard, time, window, Subscription};

/// Routes native window and keyboard events to the controllers.
///
/// Escape is only forwarded while no widget captured it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => match status {
            event::Status::Ignored => {
                Some(Message::Navbar(navbar::Message::EscapePressed))
            }
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Periodic deadline check for the hero carousel, active only while
/// autoplay is armed.
pub fn create_autoplay_subscription(hero: &hero::State) -> Subscription<Message> {
    if hero.autoplay_armed() {
        time::every(hero::AUTOPLAY_TICK)
            .map(|now| Message::Hero(hero::Message::AutoplayTick(now)))
    } else {
        Subscription::none()
    }
}

/// Fine-grained animation tick for smooth scrolling, active only while a
/// scroll animation is in flight.
pub fn create_scroll_subscription(page: &page::State) -> Subscription<Message> {
    if page.is_animating() {
        time::every(page::SCROLL_TICK)
            .map(|now| Message::Page(page::Message::AnimationTick(now)))
    } else {
        Subscription::none()
    }
}
