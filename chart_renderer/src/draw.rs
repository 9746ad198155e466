//! Plotting of a [`Figure`] through plotters.

use chrono::{Datelike, NaiveDate};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::{
    errors::RenderError,
    figure::{DATE_FORMAT, Figure},
};

/// Font list handed to the SVG; the first installed family wins.
const FONT_FAMILY: &str = "DejaVu Sans, Liberation Sans, Arial, Helvetica, sans-serif";

/// Line colors, cycled per ticker.
const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

const LINE_WIDTH: u32 = 2;
const PAD_FRACTION: f64 = 0.05;

pub(crate) fn line_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Renders `figure` into an SVG document of `size` pixels.
pub(crate) fn figure_to_svg(figure: &Figure, size: (u32, u32)) -> Result<String, RenderError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_figure(figure, &root).map_err(|e| RenderError::Draw(e.to_string()))?;
        root.present().map_err(|e| RenderError::Draw(e.to_string()))?;
    }
    Ok(svg)
}

/// Draws axes, one line per [`LinePlot`](crate::LinePlot) and the legend.
fn draw_figure(
    figure: &Figure,
    root: &DrawingArea<SVGBackend<'_>, Shift>,
) -> Result<(), DrawingAreaErrorKind<std::io::Error>> {
    root.fill(&WHITE)?;

    let (x0, x1) = x_range(figure);
    let (y0, y1) = y_range(figure);

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_labels(8)
        .y_labels(8)
        .x_label_formatter(&format_day)
        .x_desc(figure.x_label())
        .y_desc(figure.y_label())
        .label_style((FONT_FAMILY, 12.0).into_font())
        .axis_desc_style((FONT_FAMILY, 14.0).into_font())
        .draw()?;

    for (index, line) in figure.lines().iter().enumerate() {
        let color = line_color(index);
        let points = line
            .points
            .iter()
            .filter(|(_, v)| v.is_finite())
            .map(|(d, v)| (day_number(*d), *v));
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(LINE_WIDTH)))?
            .label(line.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });
    }

    if !figure.lines().is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((FONT_FAMILY, 12.0).into_font())
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    Ok(())
}

fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn format_day(x: &f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn x_range(figure: &Figure) -> (f64, f64) {
    match figure.date_span() {
        Some((first, last)) if first < last => (day_number(first), day_number(last)),
        Some((first, _)) => (day_number(first) - 1.0, day_number(first) + 1.0),
        None => (0.0, 1.0),
    }
}

fn y_range(figure: &Figure) -> (f64, f64) {
    match figure.value_span() {
        Some((lo, hi)) if lo < hi => {
            let pad = (hi - lo) * PAD_FRACTION;
            (lo - pad, hi + pad)
        }
        Some((v, _)) => {
            let pad = if v == 0.0 { 1.0 } else { v.abs() * PAD_FRACTION };
            (v - pad, v + pad)
        }
        None => (0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinePlot;
    use feature_builder::Feature;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn figure_with(points: Vec<(NaiveDate, f64)>) -> Figure {
        let mut fig = Figure::new(Feature::NormalizedPrice);
        fig.add_line(LinePlot {
            label: "normalized close price of AAA".into(),
            points,
        });
        fig
    }

    #[test]
    fn date_labels_round_trip_day_numbers() {
        assert_eq!(format_day(&day_number(day(15))), "2024-01-15");
        assert_eq!(format_day(&(day_number(day(15)) + 0.4)), "2024-01-15");
    }

    #[test]
    fn degenerate_ranges_are_widened() {
        let fig = figure_with(vec![(day(2), 1.0)]);
        let (x0, x1) = x_range(&fig);
        let (y0, y1) = y_range(&fig);
        assert!(x0 < x1);
        assert!(y0 < 1.0 && 1.0 < y1);

        let zero = figure_with(vec![(day(2), 0.0), (day(3), 0.0)]);
        assert_eq!(y_range(&zero), (-1.0, 1.0));
    }

    #[test]
    fn value_range_is_padded() {
        let fig = figure_with(vec![(day(1), 1.0), (day(2), 2.0)]);
        let (y0, y1) = y_range(&fig);
        assert!((y0 - 0.95).abs() < 1e-12);
        assert!((y1 - 2.05).abs() < 1e-12);
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(line_color(0), line_color(PALETTE.len()));
        assert_ne!(line_color(0), line_color(1));
    }

    #[test]
    fn svg_carries_labels() {
        let fig = figure_with(vec![(day(1), 1.0), (day(2), 1.1), (day(3), 0.9)]);
        let svg = figure_to_svg(&fig, (600, 250)).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("normalized close price of AAA"));
        assert!(svg.contains("2024-01-0"));
        assert!(svg.lines().any(|l| l.trim() == "date"));
    }

    #[test]
    fn empty_figure_still_draws() {
        let fig = Figure::new(Feature::LogVolatility20);
        let svg = figure_to_svg(&fig, (600, 250)).unwrap();
        assert!(svg.contains("20-day log-volatility"));
    }
}
