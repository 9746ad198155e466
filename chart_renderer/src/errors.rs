use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or persisting a figure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A requested ticker is absent from the collection.
    #[error("Ticker {ticker} is not in the collection")]
    MissingTicker { ticker: String },

    /// The plotting backend failed.
    #[error("Drawing failed: {0}")]
    Draw(String),

    /// Turning the vector drawing into pixels failed.
    #[error("Rasterization failed: {0}")]
    Raster(String),

    /// The destination extension names no supported format.
    #[error("Unsupported output format for {}: expected .png or .svg", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// PNG encoding failed.
    #[error("Image encoding failed")]
    Image(#[from] image::ImageError),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
