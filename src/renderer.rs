//! One-shot icon rendering and persistence.

use std::path::Path;

use image::RgbImage;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use tempfile::NamedTempFile;

use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::geom::SizePx;
use crate::layer::LayerPipeline;
use crate::theme;

/// Edge length of the square icon, in pixels.
pub const ICON_SIZE: u32 = 1024;

/// File name the icon is written under.
pub const OUTPUT_FILE: &str = "icon.png";

/// Renders the application icon and writes it out as a PNG.
///
/// The renderer is a pure function of its built-in constants: rendering
/// twice yields identical pixels, and writing twice yields identical files.
///
/// # Example
///
/// ```
/// use crest_renderer::IconRenderer;
///
/// let image = IconRenderer::new().render().expect("render");
/// assert_eq!(image.dimensions(), (1024, 1024));
/// ```
pub struct IconRenderer {
    size: SizePx,

    /// The layer stack. See [`LayerPipeline`] for the stage order.
    pub pipeline: LayerPipeline,
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRenderer {
    /// Creates a renderer for the standard 1024x1024 icon.
    pub fn new() -> Self {
        Self {
            size: SizePx::new(ICON_SIZE, ICON_SIZE),
            pipeline: LayerPipeline::default(),
        }
    }

    /// Renders the icon and returns the flattened RGB image.
    pub fn render(&self) -> Result<RgbImage, RenderError> {
        log::debug!(
            "compositing layer stack onto a {}x{} canvas",
            self.size.width,
            self.size.height
        );
        let mut canvas = Canvas::new(self.size, theme::BACKGROUND);
        self.pipeline.compose(&mut canvas)?;
        Ok(canvas.into_rgb())
    }

    /// Renders the icon and writes it to `path` as an RGB PNG.
    ///
    /// The image is encoded into a temporary file in the destination
    /// directory and renamed into place, so a failed run never leaves a
    /// partial file behind. An existing file at `path` is replaced silently.
    pub fn write_png(&self, path: &Path) -> Result<(), RenderError> {
        let image = self.render()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir).map_err(|e| RenderError::io(path, e))?;

        let encoder =
            PngEncoder::new_with_quality(&mut file, CompressionType::Best, FilterType::Adaptive);
        image.write_with_encoder(encoder)?;

        file.persist(path).map_err(|e| RenderError::io(path, e.error))?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ColorType;

    const INDIGO: [u8; 3] = [0x1a, 0x23, 0x7e];
    const AMBER: [u8; 3] = [0xff, 0xc1, 0x07];

    fn assert_close(actual: [u8; 3], expected: [u8; 3], tolerance: i16) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                (*a as i16 - *e as i16).abs() <= tolerance,
                "expected {expected:?} within {tolerance}, got {actual:?}"
            );
        }
    }

    #[test]
    fn output_is_a_1024_square() {
        let image = IconRenderer::new().render().unwrap();
        assert_eq!(image.dimensions(), (ICON_SIZE, ICON_SIZE));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let first = IconRenderer::new().render().unwrap();
        let second = IconRenderer::new().render().unwrap();
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn background_region_is_indigo() {
        let image = IconRenderer::new().render().unwrap();
        assert_eq!(image.get_pixel(100, 500).0, INDIGO);
        assert_eq!(image.get_pixel(512, 900).0, INDIGO);
    }

    #[test]
    fn bars_and_their_intersection_are_solid_amber() {
        let image = IconRenderer::new().render().unwrap();
        // Vertical bar, horizontal bar, and the overlap.
        assert_eq!(image.get_pixel(512, 300).0, AMBER);
        assert_eq!(image.get_pixel(350, 450).0, AMBER);
        assert_eq!(image.get_pixel(512, 450).0, AMBER);
    }

    #[test]
    fn bar_corner_is_rounded() {
        let image = IconRenderer::new().render().unwrap();
        assert_eq!(image.get_pixel(454, 252).0, INDIGO);
    }

    #[test]
    fn ruling_shows_as_faint_white_blend() {
        let image = IconRenderer::new().render().unwrap();
        assert_close(image.get_pixel(250, 700).0, [72, 79, 152], 2);
    }

    #[test]
    fn bars_cover_the_ruling_where_they_cross_it() {
        let image = IconRenderer::new().render().unwrap();
        // Row 700 is ruled, but the vertical bar is drawn on top of it.
        assert_eq!(image.get_pixel(512, 700).0, AMBER);
    }

    #[test]
    fn bookmark_shows_as_light_blue_blend() {
        let image = IconRenderer::new().render().unwrap();
        assert_close(image.get_pixel(890, 175).0, [70, 123, 198], 3);
    }

    #[test]
    fn write_png_creates_a_decodable_rgb_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);

        IconRenderer::new().write_png(&path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width(), ICON_SIZE);
        assert_eq!(decoded.height(), ICON_SIZE);
        assert_eq!(decoded.color(), ColorType::Rgb8);
    }

    #[test]
    fn write_png_replaces_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        std::fs::write(&path, b"stale contents").unwrap();

        IconRenderer::new().write_png(&path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width(), ICON_SIZE);
    }

    #[test]
    fn write_png_to_a_missing_directory_fails_with_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(OUTPUT_FILE);

        let err = IconRenderer::new().write_png(&path).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
        assert!(err.to_string().contains("icon.png"));
    }
}
