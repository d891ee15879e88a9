//! crest-renderer: deterministic application-icon renderer.
//!
//! This crate procedurally draws the app icon — a golden cross over faint
//! notebook ruling on a deep indigo background, with a translucent bookmark
//! accent near the top-right corner — by compositing a fixed stack of layers
//! onto a 1024x1024 canvas, then flattening to RGB and encoding a PNG.
//!
//! The render has no inputs: every coordinate, color, and opacity is a
//! design constant, so the output is reproducible bit for bit.
//!
//! # Example
//!
//! ```
//! use crest_renderer::IconRenderer;
//!
//! let renderer = IconRenderer::new();
//! let image = renderer.render().expect("render");
//! assert_eq!(image.dimensions(), (1024, 1024));
//! ```

mod canvas;
mod error;
mod geom;
mod layer;
mod raster;
mod renderer;
mod shape;
pub mod theme;

pub use canvas::Canvas;
pub use error::RenderError;
pub use geom::{RectPx, SizePx};
pub use layer::{BookmarkLayer, CrossLayer, Layer, LayerPipeline, RulingLayer};
pub use raster::{Overlay, composite_over};
pub use renderer::{ICON_SIZE, IconRenderer, OUTPUT_FILE};
pub use shape::{LineSegment, RoundedRect, Triangle};
