// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//!
//! The project SVG is embedded in the binary and rasterized at runtime into
//! the RGBA buffer the window title bar wants. Any parse or render failure
//! yields `None` and the platform default icon is used instead.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/ezana_kiosk.svg");
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon for the window title bar.
pub fn load_window_icon() -> Option<Icon> {
    let pixmap = rasterize(SVG_SOURCE, ICON_SIZE)?;
    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}

/// Render an SVG document into a square pixmap of the given edge length.
fn rasterize(svg: &str, size: u32) -> Option<tiny_skia::Pixmap> {
    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).ok()?;

    let source_size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / source_size.width(),
        size as f32 / source_size.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_svg_rasterizes() {
        let pixmap = rasterize(SVG_SOURCE, 64).expect("embedded icon should render");
        assert_eq!(pixmap.width(), 64);
        // The brand square fills most of the canvas, so the result cannot be
        // fully transparent.
        assert!(pixmap.data().iter().any(|&byte| byte != 0));
    }

    #[test]
    fn malformed_svg_is_rejected() {
        assert!(rasterize("<not-svg>", 64).is_none());
    }

    #[test]
    fn window_icon_loads() {
        assert!(load_window_icon().is_some());
    }
}
