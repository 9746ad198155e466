//! In-memory figure handle.

use std::path::Path;

use chrono::NaiveDate;
use feature_builder::{Feature, FeatureTable};
use image::RgbImage;

use crate::{draw, errors::RenderError, persist, raster};

/// Resolution used when a figure is written to disk.
pub const FIGURE_DPI: u32 = 500;

/// Figure width and height in inches.
pub const FIGURE_SIZE_INCHES: (f64, f64) = (12.0, 5.0);

/// Format of date tick labels.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolution of the vector drawing; rasterization scales from it.
pub(crate) const BASE_DPI: u32 = 100;

/// One ticker's line.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlot {
    pub label: String,
    pub points: Vec<(NaiveDate, f64)>,
}

impl LinePlot {
    /// Pairs the table's dates with one of its feature columns.
    pub fn from_table(ticker: &str, table: &FeatureTable, feature: Feature) -> Self {
        Self {
            label: feature.line_label(ticker),
            points: table
                .dates()
                .iter()
                .copied()
                .zip(table.column(feature).iter().copied())
                .collect(),
        }
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|(d, _)| *d)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|(d, _)| *d)
    }
}

/// Lines sharing one plot area, plus axis labels and physical size.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    feature: Feature,
    x_label: String,
    y_label: String,
    size_inches: (f64, f64),
    lines: Vec<LinePlot>,
}

impl Figure {
    pub fn new(feature: Feature) -> Self {
        Self {
            feature,
            x_label: "date".to_string(),
            y_label: feature.axis_label().to_string(),
            size_inches: FIGURE_SIZE_INCHES,
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: LinePlot) {
        self.lines.push(line);
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn size_inches(&self) -> (f64, f64) {
        self.size_inches
    }

    pub fn lines(&self) -> &[LinePlot] {
        &self.lines
    }

    /// Pixel dimensions at `dpi`.
    pub fn pixel_size(&self, dpi: u32) -> (u32, u32) {
        let (w, h) = self.size_inches;
        (
            (w * dpi as f64).round() as u32,
            (h * dpi as f64).round() as u32,
        )
    }

    /// Earliest and latest date over all lines.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.lines.iter().filter_map(LinePlot::first_date).min()?;
        let last = self.lines.iter().filter_map(LinePlot::last_date).max()?;
        Some((first, last))
    }

    /// Minimum and maximum finite value over all lines.
    pub fn value_span(&self) -> Option<(f64, f64)> {
        self.lines
            .iter()
            .flat_map(|l| l.points.iter().map(|(_, v)| *v))
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Vector rendering of the figure.
    pub fn to_svg(&self) -> Result<String, RenderError> {
        draw::figure_to_svg(self, self.pixel_size(BASE_DPI))
    }

    /// Raster rendering at `dpi`.
    pub fn rasterize(&self, dpi: u32) -> Result<RgbImage, RenderError> {
        let svg = self.to_svg()?;
        raster::rasterize_svg(&svg, self.pixel_size(dpi), dpi as f32 / BASE_DPI as f32)
    }

    /// Writes the figure at [`FIGURE_DPI`]; the format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        self.save_at(path, FIGURE_DPI)
    }

    pub fn save_at(&self, path: impl AsRef<Path>, dpi: u32) -> Result<(), RenderError> {
        persist::save_figure(self, path.as_ref(), dpi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn labels_follow_the_feature() {
        let fig = Figure::new(Feature::LogVolatility20);
        assert_eq!(fig.x_label(), "date");
        assert_eq!(fig.y_label(), "20-day log-volatility");
        assert!(fig.lines().is_empty());
    }

    #[test]
    fn pixel_size_scales_with_dpi() {
        let fig = Figure::new(Feature::NormalizedPrice);
        assert_eq!(fig.pixel_size(FIGURE_DPI), (6000, 2500));
        assert_eq!(fig.pixel_size(BASE_DPI), (1200, 500));
    }

    #[test]
    fn spans_cover_every_line() {
        let mut fig = Figure::new(Feature::NormalizedPrice);
        fig.add_line(LinePlot {
            label: "a".into(),
            points: vec![(day(3), 1.0), (day(9), 1.4)],
        });
        fig.add_line(LinePlot {
            label: "b".into(),
            points: vec![(day(1), 0.8), (day(5), f64::NAN)],
        });
        fig.add_line(LinePlot {
            label: "empty".into(),
            points: vec![],
        });

        assert_eq!(fig.date_span(), Some((day(1), day(9))));
        assert_eq!(fig.value_span(), Some((0.8, 1.4)));
    }

    #[test]
    fn empty_figure_has_no_spans() {
        let fig = Figure::new(Feature::NormalizedPrice);
        assert_eq!(fig.date_span(), None);
        assert_eq!(fig.value_span(), None);
    }
}
