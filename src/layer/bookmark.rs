//! Bookmark layer: translucent accent near the top-right corner.

use super::Layer;
use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::raster::Overlay;
use crate::shape::Triangle;
use crate::theme;

/// Vertices of the bookmark triangle.
const VERTICES: [(f32, f32); 3] = [(900.0, 100.0), (900.0, 250.0), (850.0, 200.0)];

/// Draws the translucent bookmark triangle.
///
/// Composed last so the accent stays on top of every other element.
#[derive(Debug, Clone)]
pub struct BookmarkLayer {
    pub triangle: Triangle,
}

impl Default for BookmarkLayer {
    fn default() -> Self {
        Self {
            triangle: Triangle::new(VERTICES),
        }
    }
}

impl Layer for BookmarkLayer {
    fn compose(&self, canvas: &mut Canvas) -> Result<(), RenderError> {
        let mut overlay = Overlay::new(canvas.size())?;

        if let Some(path) = self.triangle.to_path() {
            overlay.fill_path(&path, theme::BOOKMARK, theme::BOOKMARK_OPACITY);
        }

        canvas.composite(&overlay.into_rgba());
        Ok(())
    }
}
