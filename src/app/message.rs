// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::SiteContent;
use crate::error::Error;
use crate::ui::{hero, navbar, page};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Page(page::Message),
    /// Result of loading a site-content file given on the command line.
    ContentLoaded(Result<SiteContent, Error>),
    /// The window was resized (drives the menu breakpoint and scroll bounds).
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `am`, `en-US`).
    pub lang: Option<String>,
    /// Optional path to a site-content TOML file replacing the built-in page.
    pub content_path: Option<String>,
}
