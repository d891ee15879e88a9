//! Error types for rendering and persisting the icon.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering the icon or writing it to disk.
///
/// Every variant is fatal: the render either completes and the output file
/// appears, or the process reports the failure and nothing usable is left
/// behind.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The raster backend could not allocate a surface or complete a draw call.
    #[error("raster backend error: {0}")]
    Backend(String),

    /// PNG encoding failed.
    #[error("failed to encode PNG")]
    Encode(#[from] image::ImageError),

    /// Creating, writing, or replacing the output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// The destination the write was aimed at.
        path: PathBuf,
        source: io::Error,
    },
}

impl RenderError {
    /// Creates a backend error from any displayable message.
    pub(crate) fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Creates an I/O error tagged with the destination path.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
