//! Writing figures to disk.

use std::{fs, path::Path};

use image::ImageFormat;
use tracing::{debug, info};

use crate::{errors::RenderError, figure::Figure};

/// Output encodings, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(RenderError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

pub(crate) fn save_figure(figure: &Figure, path: &Path, dpi: u32) -> Result<(), RenderError> {
    let format = OutputFormat::from_path(path)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    match format {
        OutputFormat::Svg => fs::write(path, figure.to_svg()?)?,
        OutputFormat::Png => {
            let image = figure.rasterize(dpi)?;
            debug!(width = image.width(), height = image.height(), "Rasterized figure");
            image.save_with_format(path, ImageFormat::Png)?;
        }
    }

    info!(path = %path.display(), ?format, lines = figure.lines().len(), "Figure written");
    Ok(())
}
