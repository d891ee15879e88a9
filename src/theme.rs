//! The icon's fixed color scheme.
//!
//! All colors and opacities are design constants; nothing here is derived
//! or configurable at runtime.

use image::Rgba;
use palette::Srgb;

/// Deep indigo canvas background.
pub const BACKGROUND: Srgb<u8> = Srgb::new(0x1a, 0x23, 0x7e);

/// Golden amber shared by both bars of the cross.
pub const CROSS: Srgb<u8> = Srgb::new(0xff, 0xc1, 0x07);

/// White used for the notebook ruling.
pub const RULED_LINE: Srgb<u8> = Srgb::new(0xff, 0xff, 0xff);

/// Light blue used for the bookmark accent.
pub const BOOKMARK: Srgb<u8> = Srgb::new(0x64, 0xb5, 0xf6);

/// Ruling coverage, roughly 20% (51 of 255).
pub const RULED_LINE_OPACITY: u8 = 51;

/// Bookmark coverage, roughly 60% (153 of 255).
pub const BOOKMARK_OPACITY: u8 = 153;

/// Full coverage for opaque fills.
pub const OPAQUE: u8 = 255;

/// Pairs a scheme color with an alpha value as an `image` pixel.
pub fn rgba(color: Srgb<u8>, alpha: u8) -> Rgba<u8> {
    Rgba([color.red, color.green, color.blue, alpha])
}
