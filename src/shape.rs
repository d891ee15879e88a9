//! Constant shape descriptors and their conversion to drawable paths.
//!
//! Every shape in the icon is described by literal pixel coordinates; the
//! descriptors here just turn those constants into `tiny_skia` paths for
//! the rasterizer.

use resvg::tiny_skia::{Path, PathBuilder};

use crate::geom::RectPx;

/// Control-point offset, as a fraction of the radius, for a cubic Bezier
/// approximation of a quarter circle.
const ARC_CONTROL: f32 = 0.552_284_75;

// ============================================================================
// RoundedRect
// ============================================================================

/// A rectangle whose corners are replaced with circular arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    /// The outer bounds of the rectangle.
    pub rect: RectPx,
    /// Corner radius in pixels.
    pub radius: f32,
}

impl RoundedRect {
    /// Creates a rounded rectangle.
    ///
    /// The radius is clamped to half the smaller side so opposite arcs
    /// cannot overlap.
    pub fn new(rect: RectPx, radius: f32) -> Self {
        let max_radius = rect.width.min(rect.height) as f32 / 2.0;
        Self {
            rect,
            radius: radius.clamp(0.0, max_radius),
        }
    }

    /// Builds the closed outline path.
    ///
    /// Returns `None` for a degenerate (zero-area) rectangle.
    pub fn to_path(&self) -> Option<Path> {
        if self.rect.width == 0 || self.rect.height == 0 {
            return None;
        }

        let x = self.rect.x as f32;
        let y = self.rect.y as f32;
        let w = self.rect.width as f32;
        let h = self.rect.height as f32;
        let r = self.radius;
        let c = r * ARC_CONTROL;

        // Clockwise from the top edge, one arc per corner.
        let mut pb = PathBuilder::new();
        pb.move_to(x + r, y);
        pb.line_to(x + w - r, y);
        pb.cubic_to(x + w - r + c, y, x + w, y + r - c, x + w, y + r);
        pb.line_to(x + w, y + h - r);
        pb.cubic_to(x + w, y + h - r + c, x + w - r + c, y + h, x + w - r, y + h);
        pb.line_to(x + r, y + h);
        pb.cubic_to(x + r - c, y + h, x, y + h - r + c, x, y + h - r);
        pb.line_to(x, y + r);
        pb.cubic_to(x, y + r - c, x + r - c, y, x + r, y);
        pb.close();
        pb.finish()
    }
}

// ============================================================================
// LineSegment
// ============================================================================

/// A straight segment between two points, meant to be stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

impl LineSegment {
    /// Creates a segment between two points.
    pub fn new(from: (f32, f32), to: (f32, f32)) -> Self {
        Self { from, to }
    }

    /// Builds the open two-point path.
    pub fn to_path(&self) -> Option<Path> {
        let mut pb = PathBuilder::new();
        pb.move_to(self.from.0, self.from.1);
        pb.line_to(self.to.0, self.to.1);
        pb.finish()
    }
}

// ============================================================================
// Triangle
// ============================================================================

/// A closed triangle, meant to be filled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [(f32, f32); 3],
}

impl Triangle {
    /// Creates a triangle from three vertices.
    pub fn new(vertices: [(f32, f32); 3]) -> Self {
        Self { vertices }
    }

    /// Builds the closed outline path.
    pub fn to_path(&self) -> Option<Path> {
        let [a, b, c] = self.vertices;
        let mut pb = PathBuilder::new();
        pb.move_to(a.0, a.1);
        pb.line_to(b.0, b.1);
        pb.line_to(c.0, c.1);
        pb.close();
        pb.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_rect_path_spans_its_bounds() {
        let shape = RoundedRect::new(RectPx::new(10, 20, 100, 50), 8.0);
        let bounds = shape.to_path().unwrap().bounds();
        assert_eq!(bounds.left(), 10.0);
        assert_eq!(bounds.top(), 20.0);
        assert_eq!(bounds.right(), 110.0);
        assert_eq!(bounds.bottom(), 70.0);
    }

    #[test]
    fn rounded_rect_clamps_radius_to_half_smaller_side() {
        let shape = RoundedRect::new(RectPx::new(0, 0, 100, 50), 80.0);
        assert_eq!(shape.radius, 25.0);
    }

    #[test]
    fn rounded_rect_degenerate_has_no_path() {
        assert!(RoundedRect::new(RectPx::new(0, 0, 0, 50), 5.0).to_path().is_none());
    }

    #[test]
    fn line_segment_path_endpoints() {
        let segment = LineSegment::new((200.0, 650.5), (824.0, 650.5));
        let bounds = segment.to_path().unwrap().bounds();
        assert_eq!(bounds.left(), 200.0);
        assert_eq!(bounds.right(), 824.0);
    }

    #[test]
    fn triangle_path_spans_its_vertices() {
        let triangle = Triangle::new([(900.0, 100.0), (900.0, 250.0), (850.0, 200.0)]);
        let bounds = triangle.to_path().unwrap().bounds();
        assert_eq!(bounds.left(), 850.0);
        assert_eq!(bounds.top(), 100.0);
        assert_eq!(bounds.right(), 900.0);
        assert_eq!(bounds.bottom(), 250.0);
    }
}
