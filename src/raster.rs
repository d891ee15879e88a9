//! Rasterization and compositing utilities built on resvg's tiny-skia.
//!
//! Shapes are drawn into transparent [`Overlay`] buffers and merged onto the
//! canvas with standard source-over blending. Opaque content goes through
//! the same machinery; full coverage makes the blend a plain replacement.

use image::{Rgba, RgbaImage};
use palette::Srgb;
use resvg::tiny_skia::{FillRule, Paint, Path, Pixmap, Stroke, Transform};

use crate::error::RenderError;
use crate::geom::SizePx;

// ============================================================================
// Overlay
// ============================================================================

/// A transient, fully-transparent raster buffer for drawing shapes.
///
/// Drawn shapes accumulate in the overlay's pixmap; [`Overlay::into_rgba`]
/// converts the result to straight-alpha RGBA so it can be composited onto
/// the canvas and the overlay discarded.
pub struct Overlay {
    pixmap: Pixmap,
}

impl Overlay {
    /// Allocates a transparent overlay of the given size.
    pub fn new(size: SizePx) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(size.width, size.height).ok_or_else(|| {
            RenderError::backend(format!(
                "cannot allocate a {}x{} overlay surface",
                size.width, size.height
            ))
        })?;
        Ok(Self { pixmap })
    }

    /// Fills a path with a solid color at the given alpha.
    pub fn fill_path(&mut self, path: &Path, color: Srgb<u8>, alpha: u8) {
        let paint = solid_paint(color, alpha);
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Strokes a path with a solid color at the given alpha and width.
    ///
    /// The stroke is centered on the path, butt-capped.
    pub fn stroke_path(&mut self, path: &Path, color: Srgb<u8>, alpha: u8, width: f32) {
        let paint = solid_paint(color, alpha);
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }

    /// Converts the overlay into a straight-alpha RGBA image.
    ///
    /// tiny-skia stores premultiplied alpha; each pixel is demultiplied on
    /// the way out.
    pub fn into_rgba(self) -> RgbaImage {
        let mut img = RgbaImage::new(self.pixmap.width(), self.pixmap.height());
        for (pixel, out) in self.pixmap.pixels().iter().zip(img.pixels_mut()) {
            let c = pixel.demultiply();
            *out = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        img
    }
}

fn solid_paint(color: Srgb<u8>, alpha: u8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red, color.green, color.blue, alpha);
    paint.anti_alias = true;
    paint
}

// ============================================================================
// Compositing
// ============================================================================

/// Alpha-composites `src` over `dest`.
///
/// Both images must have identical dimensions. Uses the standard
/// source-over operator per channel.
pub fn composite_over(dest: &mut RgbaImage, src: &RgbaImage) {
    debug_assert_eq!(dest.dimensions(), src.dimensions());

    for (dst_pixel, src_pixel) in dest.pixels_mut().zip(src.pixels()) {
        if src_pixel[3] == 0 {
            continue;
        }
        *dst_pixel = blend_over(*src_pixel, *dst_pixel);
    }
}

/// Source-over blend of two straight-alpha pixels.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;

    let out_a = sa + da * (1.0 - sa);
    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}
