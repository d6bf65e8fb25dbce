use std::path::Path;

use plotters::element::Pie;
use plotters::prelude::*;

use super::{write_svg, ChartConfig};
use crate::color::Palette;
use crate::data::model::Breakdown;
use crate::error::{ChartError, Result};

/// One pie slice.
#[derive(Debug, Clone)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Share of the whole, in `0.0..=1.0`.
    pub fraction: f64,
    pub color: RGBColor,
}

/// Proportional chart with one slice per breakdown entry, in file order.
#[derive(Debug, Clone)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
    size: (u32, u32),
}

impl PieChart {
    /// Build the chart model. Fails when there is nothing proportional to
    /// draw: no entries, a negative or non-finite value, or a zero total.
    pub fn from_breakdown(breakdown: &Breakdown, config: &ChartConfig) -> Result<Self> {
        if breakdown.is_empty() {
            return Err(ChartError::InvalidChart("breakdown has no entries".into()));
        }
        if let Some(bad) = breakdown
            .entries
            .iter()
            .find(|e| !e.value.is_finite() || e.value < 0.0)
        {
            return Err(ChartError::InvalidChart(format!(
                "slice '{}' has value {}, expected a finite non-negative number",
                bad.label, bad.value
            )));
        }
        let total = breakdown.total();
        if total <= 0.0 {
            return Err(ChartError::InvalidChart("breakdown values sum to zero".into()));
        }

        let palette = Palette::SLICES.colors(breakdown.len());
        let slices = breakdown
            .entries
            .iter()
            .zip(palette)
            .map(|(entry, color)| Slice {
                label: entry.label.clone(),
                value: entry.value,
                fraction: entry.value / total,
                color,
            })
            .collect();

        Ok(PieChart {
            title: config.title.clone(),
            slices,
            size: config.size,
        })
    }

    /// Draw the chart into an SVG document.
    pub fn render_svg(&self) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE)?;
            let root = root.titled(&self.title, ("sans-serif", 30))?;

            let (width, height) = root.dim_in_pixel();
            let center = ((width / 2) as i32, (height / 2) as i32);
            let radius = f64::from(width.min(height)) * 0.32;

            let sizes: Vec<f64> = self.slices.iter().map(|s| s.value).collect();
            let colors: Vec<RGBColor> = self.slices.iter().map(|s| s.color).collect();
            let labels: Vec<&str> = self.slices.iter().map(|s| s.label.as_str()).collect();

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            // Clockwise from twelve o'clock.
            pie.start_angle(-90.0);
            pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
            pie.percentages(("sans-serif", radius * 0.07).into_font().color(&BLACK));
            root.draw(&pie)?;
            root.present()?;
        }
        Ok(svg)
    }

    /// Draw the chart and write it to `path`.
    pub fn render(&self, path: &Path) -> Result<()> {
        let svg = self.render_svg()?;
        write_svg(path, &svg)
    }
}
