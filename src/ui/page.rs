// SPDX-License-Identifier: MPL-2.0
//! Page body and smooth in-page scrolling.
//!
//! The page is one vertical scrollable: the hero carousel followed by the
//! content sections. Section layout uses fixed heights, so every section has
//! a deterministic scroll offset and fragment targets (`#services`) resolve
//! without measuring widgets.
//!
//! Smooth scrolling is a small tween: a `ScrollAnimation` interpolates the
//! scrollable offset from the current position to the target with cubic
//! ease-in-out, driven by a fine tick subscription while in flight. A user
//! scroll that deviates from the animation's last written offset cancels the
//! animation; fragments that resolve to nothing are silently ignored.

use crate::content::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Column, Container, Id, Text};
use iced::{Element, Length, Task};
use std::time::{Duration, Instant};

/// Id of the page scrollable, shared between the view and scroll tasks.
const SCROLLABLE_ID: &str = "kiosk-page";

/// Fragment id that scrolls back to the top of the page (the hero).
pub const TOP_FRAGMENT_ID: &str = "home";

/// Duration of a smooth scroll.
pub const SCROLL_DURATION: Duration = Duration::from_millis(400);

/// Cadence of the animation tick while a smooth scroll is in flight.
pub const SCROLL_TICK: Duration = Duration::from_millis(16);

/// Offsets reported by `on_scroll` within this distance of the animation's
/// last written offset are treated as animation feedback, anything farther
/// as a user scroll.
const USER_SCROLL_EPSILON: f32 = 1.0;

/// An in-flight smooth scroll.
#[derive(Debug, Clone, PartialEq)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
}

/// Page scroll state.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    section_ids: Vec<String>,
    offset: AbsoluteOffset,
    viewport_height: f32,
    animation: Option<ScrollAnimation>,
}

/// Messages for the page sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The scrollable reported a new offset.
    Scrolled(AbsoluteOffset),
    /// Periodic animation step while a smooth scroll is in flight.
    AnimationTick(Instant),
    /// Request to scroll to the target of the given fragment/link.
    JumpTo(String),
    /// The window height changed (bounds scroll clamping).
    ViewportResized(f32),
}

impl State {
    /// Creates scroll state over the given sections.
    pub fn new(section_ids: Vec<String>, viewport_height: f32) -> Self {
        Self {
            section_ids,
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            viewport_height,
            animation: None,
        }
    }

    /// Whether the animation tick subscription should run.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Current scroll offset as last reported or written.
    #[must_use]
    pub fn offset(&self) -> AbsoluteOffset {
        self.offset
    }

    /// Current viewport height used for scroll clamping.
    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Resolves a fragment (`#services`) or route-style link (`/booking`)
    /// to its target scroll offset. `"#"`, empty links, and unknown targets
    /// resolve to `None`.
    #[must_use]
    pub fn resolve_target(&self, link: &str) -> Option<f32> {
        let id = link
            .strip_prefix('#')
            .or_else(|| link.strip_prefix('/'))
            .unwrap_or(link);
        if id.is_empty() {
            return None;
        }
        if id == TOP_FRAGMENT_ID {
            return Some(0.0);
        }
        self.section_ids
            .iter()
            .position(|s| s == id)
            .map(section_offset)
    }

    /// Handle a page message, returning any scroll task to run.
    pub fn handle(&mut self, msg: Message) -> Task<Message> {
        match msg {
            Message::Scrolled(offset) => {
                // Deviation from the animation's last written offset means
                // the user grabbed the page; the user wins.
                if self.animation.is_some()
                    && (offset.y - self.offset.y).abs() > USER_SCROLL_EPSILON
                {
                    self.animation = None;
                }
                self.offset = offset;
                Task::none()
            }
            Message::AnimationTick(now) => {
                let Some(animation) = self.animation.clone() else {
                    return Task::none();
                };

                let elapsed = now.saturating_duration_since(animation.started_at);
                let progress =
                    (elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32()).clamp(0.0, 1.0);
                let eased = ease_in_out(progress);
                let y = animation.from + (animation.to - animation.from) * eased;

                if progress >= 1.0 {
                    self.animation = None;
                }

                self.offset = AbsoluteOffset { x: 0.0, y };
                operation::scroll_to(Id::new(SCROLLABLE_ID), self.offset)
            }
            Message::JumpTo(link) => {
                if let Some(target) = self.resolve_target(&link) {
                    let to = target.min(self.max_offset());
                    self.animation = Some(ScrollAnimation {
                        from: self.offset.y,
                        to,
                        started_at: Instant::now(),
                    });
                }
                Task::none()
            }
            Message::ViewportResized(height) => {
                self.viewport_height = height;
                Task::none()
            }
        }
    }

    /// Total height of the scrollable content.
    fn content_height(&self) -> f32 {
        sizing::HERO_HEIGHT + self.section_ids.len() as f32 * sizing::SECTION_HEIGHT
    }

    /// Largest reachable scroll offset.
    fn max_offset(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Vec::new(), 0.0)
    }
}

/// Scroll offset of the section at `index` within the page scrollable.
fn section_offset(index: usize) -> f32 {
    sizing::HERO_HEIGHT + index as f32 * sizing::SECTION_HEIGHT
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// The id the page scrollable must carry for scroll tasks to reach it.
pub fn scrollable_id() -> Id {
    Id::new(SCROLLABLE_ID)
}

/// Render the content sections as a vertical sequence of fixed-height
/// surfaces. Sections alternate their background for visual rhythm.
pub fn sections_view<'a>(sections: &'a [Section]) -> Element<'a, Message> {
    let mut column = Column::new().width(Length::Fill);

    for (index, section) in sections.iter().enumerate() {
        let title = Text::new(section.title.clone()).size(typography::TITLE_MD);
        let body = Text::new(section.body.clone()).size(typography::BODY);

        let inner = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::XL)
            .push(title)
            .push(body);

        let surface = Container::new(inner)
            .width(Length::Fill)
            .height(sizing::SECTION_HEIGHT)
            .style(move |theme: &iced::Theme| {
                let extended = theme.extended_palette();
                let background = if index % 2 == 0 {
                    extended.background.base.color
                } else {
                    extended.background.weak.color
                };
                iced::widget::container::Style {
                    background: Some(background.into()),
                    ..Default::default()
                }
            });

        column = column.push(surface);
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(
            vec![
                "services".to_string(),
                "booking".to_string(),
                "contact".to_string(),
            ],
            720.0,
        )
    }

    #[test]
    fn bare_hash_resolves_to_nothing() {
        let state = state();
        assert_eq!(state.resolve_target("#"), None);
        assert_eq!(state.resolve_target(""), None);
    }

    #[test]
    fn unknown_fragment_resolves_to_nothing() {
        let state = state();
        assert_eq!(state.resolve_target("#pricing"), None);
    }

    #[test]
    fn known_fragments_resolve_in_document_order() {
        let state = state();
        let services = state.resolve_target("#services").expect("resolved");
        let booking = state.resolve_target("#booking").expect("resolved");
        let contact = state.resolve_target("#contact").expect("resolved");

        assert_eq!(services, sizing::HERO_HEIGHT);
        assert!(booking > services);
        assert!(contact > booking);
    }

    #[test]
    fn route_style_links_resolve_like_fragments() {
        let state = state();
        assert_eq!(
            state.resolve_target("/booking"),
            state.resolve_target("#booking")
        );
    }

    #[test]
    fn top_fragment_resolves_to_origin() {
        let state = state();
        assert_eq!(state.resolve_target("#home"), Some(0.0));
    }

    #[test]
    fn easing_hits_boundaries_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn easing_is_monotone() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = ease_in_out(step as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn jump_to_known_fragment_starts_animation() {
        let mut state = state();
        let _ = state.handle(Message::JumpTo("#booking".to_string()));
        assert!(state.is_animating());
    }

    #[test]
    fn jump_to_unknown_fragment_is_ignored() {
        let mut state = state();
        let _ = state.handle(Message::JumpTo("#pricing".to_string()));
        assert!(!state.is_animating());

        let _ = state.handle(Message::JumpTo("#".to_string()));
        assert!(!state.is_animating());
    }

    #[test]
    fn animation_completes_exactly_on_target() {
        let mut state = state();
        let _ = state.handle(Message::JumpTo("#services".to_string()));

        let started_at = state.animation.as_ref().expect("animating").started_at;
        let _ = state.handle(Message::AnimationTick(started_at + SCROLL_DURATION));

        assert!(!state.is_animating());
        assert_eq!(state.offset().y, sizing::HERO_HEIGHT);
    }

    #[test]
    fn animation_midpoint_is_halfway() {
        let mut state = state();
        let _ = state.handle(Message::JumpTo("#services".to_string()));

        let started_at = state.animation.as_ref().expect("animating").started_at;
        let _ = state.handle(Message::AnimationTick(started_at + SCROLL_DURATION / 2));

        assert!(state.is_animating());
        assert!((state.offset().y - sizing::HERO_HEIGHT / 2.0).abs() < 0.5);
    }

    #[test]
    fn user_scroll_cancels_animation() {
        let mut state = state();
        let _ = state.handle(Message::JumpTo("#contact".to_string()));
        assert!(state.is_animating());

        let _ = state.handle(Message::Scrolled(AbsoluteOffset { x: 0.0, y: 37.0 }));
        assert!(!state.is_animating());
        assert_eq!(state.offset().y, 37.0);
    }

    #[test]
    fn matching_scroll_feedback_keeps_animation() {
        let mut state = state();
        let _ = state.handle(Message::JumpTo("#contact".to_string()));

        // Feedback equal to the last written offset is the scrollable
        // echoing the animation, not a user action.
        let echoed = state.offset();
        let _ = state.handle(Message::Scrolled(echoed));
        assert!(state.is_animating());
    }

    #[test]
    fn target_is_clamped_to_reachable_offsets() {
        // Viewport taller than the content: nothing to scroll.
        let mut state = State::new(vec!["services".to_string()], 2000.0);
        let _ = state.handle(Message::JumpTo("#services".to_string()));

        let animation = state.animation.as_ref().expect("animating");
        assert_eq!(animation.to, 0.0);
    }
}
