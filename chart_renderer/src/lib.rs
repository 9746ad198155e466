//! Comparative line charts of per-ticker features.
//!
//! [`render`] turns a [`TickerCollection`](feature_builder::TickerCollection)
//! into a [`Figure`]: one labeled line per ticker on a shared date axis. The
//! figure is drawn once as SVG; PNG output rasterizes that drawing at the
//! requested resolution.

pub mod draw;
pub mod errors;
pub mod figure;
pub mod persist;
pub mod raster;
pub mod render;

pub use errors::RenderError;
pub use figure::{DATE_FORMAT, FIGURE_DPI, FIGURE_SIZE_INCHES, Figure, LinePlot};
pub use persist::OutputFormat;
pub use render::render;
