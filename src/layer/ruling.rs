//! Notebook-ruling layer: faint horizontal lines in the lower half.

use super::Layer;
use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::raster::Overlay;
use crate::shape::LineSegment;
use crate::theme;

/// Rows the ruling sits on.
const ROWS: [u32; 3] = [650, 700, 750];

/// Horizontal extent of every line.
const SPAN_X: (f32, f32) = (200.0, 824.0);

/// Stroke width in pixels.
const STROKE_WIDTH: f32 = 3.0;

/// Draws the faint notebook ruling.
///
/// The lines are stroked at 20% white into a transparent overlay and then
/// alpha-composited, so everything drawn afterwards sits visually on top of
/// them.
#[derive(Debug, Clone)]
pub struct RulingLayer {
    /// Y coordinates of the ruled rows.
    pub rows: Vec<u32>,
    /// Left and right x coordinates shared by all rows.
    pub span_x: (f32, f32),
    /// Stroke width in pixels.
    pub stroke_width: f32,
}

impl Default for RulingLayer {
    fn default() -> Self {
        Self {
            rows: ROWS.to_vec(),
            span_x: SPAN_X,
            stroke_width: STROKE_WIDTH,
        }
    }
}

impl Layer for RulingLayer {
    fn compose(&self, canvas: &mut Canvas) -> Result<(), RenderError> {
        let mut overlay = Overlay::new(canvas.size())?;

        for &row in &self.rows {
            // Center the stroke on the pixel row so a 3px line covers
            // exactly three rows.
            let y = row as f32 + 0.5;
            let segment = LineSegment::new((self.span_x.0, y), (self.span_x.1, y));
            if let Some(path) = segment.to_path() {
                overlay.stroke_path(
                    &path,
                    theme::RULED_LINE,
                    theme::RULED_LINE_OPACITY,
                    self.stroke_width,
                );
            }
        }

        canvas.composite(&overlay.into_rgba());
        Ok(())
    }
}
