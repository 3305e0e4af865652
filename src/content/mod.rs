// SPDX-License-Identifier: MPL-2.0
//! Site content model for the kiosk page.
//!
//! The page is data-driven: brand name, navigation links, hero slides, and
//! content sections all come from a TOML document. A built-in document is
//! embedded in the binary; a replacement can be passed on the command line.
//! Empty collections simply disable the corresponding feature (no nav links
//! means no menu, no slides means no carousel).

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback overlay title when a slide does not provide one.
pub const DEFAULT_SLIDE_TITLE: &str = "Experience Authentic Cultural Events";
/// Fallback overlay subtitle.
pub const DEFAULT_SLIDE_SUBTITLE: &str =
    "Ezana Service brings you the finest diversified services";
/// Fallback call-to-action label.
pub const DEFAULT_BUTTON_TEXT: &str = "Book Now";
/// Fallback call-to-action link.
pub const DEFAULT_BUTTON_LINK: &str = "/booking";

const DEFAULT_CONTENT: &str = include_str!("../../assets/content/default.toml");

/// One hero carousel entry. All text fields are optional; the overlay
/// resolution substitutes the documented fallback literals.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HeroSlide {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    /// Optional image shown behind the overlay. Slides without one render
    /// a themed surface instead.
    pub image: Option<PathBuf>,
}

/// The resolved text block rendered over the active slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideOverlay {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
}

impl HeroSlide {
    /// Resolves the overlay for this slide, substituting the fallback
    /// literals for any field that is absent or empty.
    pub fn overlay(&self) -> SlideOverlay {
        SlideOverlay {
            title: field_or(&self.title, DEFAULT_SLIDE_TITLE),
            subtitle: field_or(&self.subtitle, DEFAULT_SLIDE_SUBTITLE),
            button_text: field_or(&self.button_text, DEFAULT_BUTTON_TEXT),
            button_link: field_or(&self.button_link, DEFAULT_BUTTON_LINK),
        }
    }
}

fn field_or(field: &Option<String>, fallback: &str) -> String {
    match field {
        Some(value) if !value.is_empty() => value.clone(),
        _ => fallback.to_string(),
    }
}

/// A navigation menu entry pointing at a page fragment (`#services`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

/// One content section of the page; its `id` is what fragments resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// The full page description.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    #[serde(default, rename = "nav")]
    pub nav_links: Vec<NavLink>,
    #[serde(default, rename = "slide")]
    pub slides: Vec<HeroSlide>,
    #[serde(default, rename = "section")]
    pub sections: Vec<Section>,
}

impl SiteContent {
    /// The content document embedded in the binary.
    pub fn embedded() -> Self {
        // The embedded document is validated by tests; a parse failure here
        // is a packaging bug, not a runtime condition.
        toml::from_str(DEFAULT_CONTENT).unwrap_or_default()
    }

    /// Loads a content document from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::Content(e.to_string()))
    }

    /// Looks up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}
