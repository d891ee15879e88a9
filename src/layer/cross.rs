//! Cross layer: two opaque rounded bars.

use super::Layer;
use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::geom::RectPx;
use crate::raster::Overlay;
use crate::shape::RoundedRect;
use crate::theme;

/// Bounds of the vertical bar.
const VERTICAL_BAR: RectPx = RectPx {
    x: 452,
    y: 250,
    width: 120,
    height: 500,
};

/// Bounds of the horizontal bar.
const HORIZONTAL_BAR: RectPx = RectPx {
    x: 312,
    y: 390,
    width: 400,
    height: 120,
};

/// Corner radius shared by both bars.
const CORNER_RADIUS: f32 = 20.0;

/// Draws the two rounded bars of the cross.
///
/// Both bars share one fully opaque fill, so the overlap region needs no
/// special handling. The horizontal bar's vertical center (y = 450) falls
/// inside the vertical bar's span, which is what makes the two bars read
/// as a cross.
#[derive(Debug, Clone)]
pub struct CrossLayer {
    /// The upright bar.
    pub vertical: RoundedRect,
    /// The crossing bar.
    pub horizontal: RoundedRect,
}

impl Default for CrossLayer {
    fn default() -> Self {
        Self {
            vertical: RoundedRect::new(VERTICAL_BAR, CORNER_RADIUS),
            horizontal: RoundedRect::new(HORIZONTAL_BAR, CORNER_RADIUS),
        }
    }
}

impl Layer for CrossLayer {
    fn compose(&self, canvas: &mut Canvas) -> Result<(), RenderError> {
        let mut overlay = Overlay::new(canvas.size())?;

        for bar in [&self.vertical, &self.horizontal] {
            if let Some(path) = bar.to_path() {
                overlay.fill_path(&path, theme::CROSS, theme::OPAQUE);
            }
        }

        canvas.composite(&overlay.into_rgba());
        Ok(())
    }
}
