// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the top bar, the page scrollable (hero carousel followed by the
//! content sections), and, while the menu is open, the opaque panel layer
//! stacked over the page. The opaque layer is what locks page scrolling:
//! wheel and drag events cannot reach the scrollable underneath it.

use super::Message;
use crate::content::SiteContent;
use crate::i18n::fluent::I18n;
use crate::ui::hero;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::page;
use iced::widget::scrollable::Viewport;
use iced::widget::{opaque, stack, Column, Container, Scrollable};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: &'a SiteContent,
    pub navbar: &'a navbar::State,
    pub hero: &'a hero::State,
    pub page: &'a page::State,
}

/// Renders the full application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let has_menu = !ctx.content.nav_links.is_empty();

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    // The menu feature exists only when the content declares nav links.
    if has_menu {
        let bar = navbar::view_bar(NavbarViewContext {
            i18n: ctx.i18n,
            state: ctx.navbar,
            brand: &ctx.content.brand,
            nav_links: &ctx.content.nav_links,
        })
        .map(Message::Navbar);
        column = column.push(bar);
    }

    column = column.push(page_scrollable(&ctx));

    let base: Element<'_, Message> = Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    if has_menu && ctx.navbar.is_open() {
        let panel = navbar::view_panel(NavbarViewContext {
            i18n: ctx.i18n,
            state: ctx.navbar,
            brand: &ctx.content.brand,
            nav_links: &ctx.content.nav_links,
        })
        .map(Message::Navbar);

        // Opaque layer: scroll lock for the page underneath.
        stack([base, opaque(panel)]).into()
    } else {
        base
    }
}

/// The single page scrollable: hero on top, sections below.
fn page_scrollable<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hero_view = hero::view(hero::ViewContext {
        i18n: ctx.i18n,
        state: ctx.hero,
    })
    .map(Message::Hero);

    let sections = page::sections_view(&ctx.content.sections).map(Message::Page);

    let body = Column::new().width(Length::Fill).push(hero_view).push(sections);

    Scrollable::new(body)
        .id(page::scrollable_id())
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| {
            Message::Page(page::Message::Scrolled(viewport.absolute_offset()))
        })
        .into()
}
