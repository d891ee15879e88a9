//! The canvas the icon is composited onto.

use image::{DynamicImage, RgbImage, Rgba, RgbaImage};
use palette::Srgb;

use crate::geom::SizePx;
use crate::raster::composite_over;
use crate::theme;

/// The primary raster buffer for the image under construction.
///
/// The canvas starts fully opaque and stays opaque: overlays are merged with
/// source-over blending against an opaque base, so the final flatten to RGB
/// is a lossless channel drop.
pub struct Canvas {
    data: RgbaImage,
}

impl Canvas {
    /// Allocates an opaque canvas filled with the background color.
    pub fn new(size: SizePx, background: Srgb<u8>) -> Self {
        let fill = theme::rgba(background, theme::OPAQUE);
        Self {
            data: RgbaImage::from_pixel(size.width, size.height, fill),
        }
    }

    /// Returns the canvas dimensions.
    pub fn size(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Alpha-composites a canvas-sized overlay onto the canvas.
    pub fn composite(&mut self, overlay: &RgbaImage) {
        composite_over(&mut self.data, overlay);
    }

    /// Returns the pixel at the given coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.data.get_pixel(x, y)
    }

    /// Flattens to 3-channel RGB, dropping the (fully opaque) alpha channel.
    pub fn into_rgb(self) -> RgbImage {
        DynamicImage::ImageRgba8(self.data).to_rgb8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_opaque_background() {
        let canvas = Canvas::new(SizePx::new(16, 16), theme::BACKGROUND);
        assert_eq!(canvas.pixel(8, 8).0, [0x1a, 0x23, 0x7e, 0xff]);
    }

    #[test]
    fn composite_blends_overlay_over_background() {
        let mut canvas = Canvas::new(SizePx::new(4, 4), Srgb::new(0, 0, 0));
        let overlay = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 51]));

        canvas.composite(&overlay);

        // 20% white over black lands at 51 per channel.
        assert_eq!(canvas.pixel(1, 1).0, [51, 51, 51, 255]);
    }

    #[test]
    fn into_rgb_drops_alpha_losslessly() {
        let canvas = Canvas::new(SizePx::new(8, 4), theme::BACKGROUND);
        let rgb = canvas.into_rgb();
        assert_eq!(rgb.dimensions(), (8, 4));
        assert_eq!(rgb.get_pixel(3, 3).0, [0x1a, 0x23, 0x7e]);
    }
}
