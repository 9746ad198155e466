//! SVG to pixel conversion.

use image::{DynamicImage, RgbImage, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::errors::RenderError;

/// Rasterizes `svg` onto a white canvas of `size` pixels, scaling the drawing by `scale`.
pub fn rasterize_svg(svg: &str, size: (u32, u32), scale: f32) -> Result<RgbImage, RenderError> {
    let (width, height) = size;

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree =
        usvg::Tree::from_str(svg, &options).map_err(|e| RenderError::Raster(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| RenderError::Raster(format!("cannot allocate a {width}x{height} canvas")))?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // Opaque canvas: premultiplied and straight alpha agree.
    let rgba = RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| RenderError::Raster("canvas size mismatch".to_string()))?;
    Ok(DynamicImage::ImageRgba8(rgba).to_rgb8())
}
