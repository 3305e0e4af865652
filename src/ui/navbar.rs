// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Provides the top bar with the brand name, the hamburger toggle, and the
//! slide-out navigation panel with its backdrop. The open/closed state is a
//! single flag; the bar, the panel, and the backdrop all derive their visual
//! state from it, so they can never disagree.
//!
//! Behavior contract:
//! - the hamburger and the backdrop both toggle the panel
//! - a nav link closes the panel only on narrow viewports (mobile navigation)
//! - Escape closes the panel but never opens it
//! - resizing past the desktop breakpoint force-resets to closed

use crate::content::NavLink;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, mouse_area, opaque, tooltip, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Viewport width at which the layout switches between the inline link row
/// and the hamburger/panel pair.
pub const MOBILE_BREAKPOINT: f32 = 992.0;

/// Navigation state.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    open: bool,
    viewport_width: f32,
}

impl State {
    /// Creates a closed menu for the given initial viewport width.
    pub fn new(viewport_width: f32) -> Self {
        Self {
            open: false,
            viewport_width,
        }
    }

    /// Whether the panel (and its backdrop) is currently shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the current viewport uses the hamburger/panel layout.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= MOBILE_BREAKPOINT
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(1280.0)
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    BackdropPressed,
    LinkPressed(String),
    EscapePressed,
    ViewportResized(f32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    NavigateTo(String),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::ToggleMenu | Message::BackdropPressed => {
            state.open = !state.open;
            Event::None
        }
        Message::LinkPressed(target) => {
            // Mobile navigation auto-closes the panel; on desktop the links
            // live in the bar and there is nothing to close.
            if state.is_mobile() {
                state.open = !state.open;
            }
            Event::NavigateTo(target)
        }
        Message::EscapePressed => {
            // Guarded toggle: Escape may close the menu, never open it.
            if state.open {
                state.open = false;
            }
            Event::None
        }
        Message::ViewportResized(width) => {
            state.viewport_width = width;
            if width > MOBILE_BREAKPOINT {
                state.open = false;
            }
            Event::None
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub brand: &'a str,
    pub nav_links: &'a [NavLink],
}

/// Render the top bar. On desktop widths the links are inline; on narrow
/// widths only the hamburger toggle is shown.
pub fn view_bar<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.brand.to_string()).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::MD])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.state.is_mobile() {
        let (glyph, label_key) = if ctx.state.is_open() {
            ("✕", "navbar-menu-close")
        } else {
            ("☰", "navbar-menu-open")
        };
        let toggle = button(Text::new(glyph).size(typography::TITLE_MD))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::menu_item);
        row = row.push(tooltip(
            toggle,
            Text::new(ctx.i18n.tr(label_key)),
            tooltip::Position::Bottom,
        ));
    } else {
        for link in ctx.nav_links {
            row = row.push(
                button(Text::new(link.label.clone()))
                    .on_press(Message::LinkPressed(link.target.clone()))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::menu_item),
            );
        }
    }

    Container::new(row)
        .width(Length::Fill)
        .height(sizing::NAVBAR_HEIGHT)
        .style(styles::navbar)
        .into()
}

/// Render the backdrop and slide-out panel. Only meaningful while open; the
/// caller stacks the result over the page, which is what locks page
/// scrolling underneath.
pub fn view_panel<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut items = Column::new().spacing(spacing::XXS).padding(spacing::XS);

    for link in ctx.nav_links {
        items = items.push(
            button(Text::new(link.label.clone()))
                .on_press(Message::LinkPressed(link.target.clone()))
                .padding([spacing::XS, spacing::SM])
                .width(Length::Fill)
                .style(styles::menu_item),
        );
    }

    let close_label = ctx.i18n.tr("navbar-menu-close");
    let close = button(Text::new(close_label))
        .on_press(Message::ToggleMenu)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::menu_item);

    // The panel itself is opaque so presses over it never fall through to
    // the backdrop handler below.
    let panel = opaque(
        Container::new(items.push(close))
            .width(sizing::NAV_PANEL_WIDTH)
            .height(Length::Fill)
            .style(styles::menu_panel),
    );

    let backdrop = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .style(styles::menu_backdrop);

    mouse_area(backdrop)
        .on_press(Message::BackdropPressed)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn links() -> Vec<NavLink> {
        vec![
            NavLink {
                label: "Home".into(),
                target: "#home".into(),
            },
            NavLink {
                label: "Services".into(),
                target: "#services".into(),
            },
        ]
    }

    #[test]
    fn toggle_parity_holds() {
        let mut state = State::default();
        assert!(!state.is_open());

        for round in 1..=5 {
            update(Message::ToggleMenu, &mut state);
            assert_eq!(state.is_open(), round % 2 == 1);
        }
    }

    #[test]
    fn backdrop_press_closes_like_toggle() {
        let mut state = State::default();
        update(Message::ToggleMenu, &mut state);
        assert!(state.is_open());

        update(Message::BackdropPressed, &mut state);
        assert!(!state.is_open());
    }

    #[test]
    fn escape_never_opens_the_menu() {
        let mut state = State::default();
        update(Message::EscapePressed, &mut state);
        assert!(!state.is_open());

        update(Message::ToggleMenu, &mut state);
        update(Message::EscapePressed, &mut state);
        assert!(!state.is_open());
    }

    #[test]
    fn resize_past_breakpoint_forces_closed() {
        let mut state = State::new(600.0);
        update(Message::ToggleMenu, &mut state);
        assert!(state.is_open());

        update(Message::ViewportResized(1200.0), &mut state);
        assert!(!state.is_open());

        // Idempotent: still closed on repeated resizes.
        update(Message::ViewportResized(1300.0), &mut state);
        assert!(!state.is_open());
    }

    #[test]
    fn resize_within_breakpoint_keeps_state() {
        let mut state = State::new(600.0);
        update(Message::ToggleMenu, &mut state);

        update(Message::ViewportResized(700.0), &mut state);
        assert!(state.is_open());
    }

    #[test]
    fn link_press_closes_on_mobile_only() {
        let mut state = State::new(600.0);
        update(Message::ToggleMenu, &mut state);

        let event = update(Message::LinkPressed("#services".into()), &mut state);
        assert!(!state.is_open());
        assert!(matches!(event, Event::NavigateTo(t) if t == "#services"));

        let mut desktop = State::new(1280.0);
        let event = update(Message::LinkPressed("#services".into()), &mut desktop);
        assert!(!desktop.is_open());
        assert!(matches!(event, Event::NavigateTo(_)));
    }

    #[test]
    fn bar_renders_in_both_layouts() {
        let i18n = I18n::default();
        let links = links();

        let mobile = State::new(600.0);
        let _element = view_bar(ViewContext {
            i18n: &i18n,
            state: &mobile,
            brand: "Ezana Services",
            nav_links: &links,
        });

        let desktop = State::new(1280.0);
        let _element = view_bar(ViewContext {
            i18n: &i18n,
            state: &desktop,
            brand: "Ezana Services",
            nav_links: &links,
        });
    }

    #[test]
    fn panel_renders_with_links() {
        let i18n = I18n::default();
        let links = links();
        let mut state = State::new(600.0);
        update(Message::ToggleMenu, &mut state);

        let _element = view_panel(ViewContext {
            i18n: &i18n,
            state: &state,
            brand: "Ezana Services",
            nav_links: &links,
        });
    }
}
