// SPDX-License-Identifier: MPL-2.0
//! `ezana_kiosk` is a promotional landing kiosk built with the Iced GUI framework.
//!
//! It renders the Ezana Services front page as a desktop application: a
//! collapsible navigation menu, an auto-advancing hero carousel with text
//! overlay, and smooth in-page scrolling between content sections. It also
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod ui;
