use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{write_svg, ChartConfig};
use crate::color::Palette;
use crate::data::model::TimingTable;
use crate::error::Result;

/// Fraction of a category slot covered by its bars; the rest is padding.
const GROUP_WIDTH: f64 = 0.8;

/// One legend entry with its bars.
#[derive(Debug, Clone)]
pub struct BarSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub color: RGBColor,
}

/// Grouped bar chart: one group per category, one bar per series.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub y_range: Range<f64>,
    pub y_desc: String,
    /// Number of bar groups on the x axis, at least `categories.len()`.
    pub groups: usize,
    size: (u32, u32),
}

impl BarChart {
    pub fn from_table(table: &TimingTable, config: &ChartConfig) -> Result<Self> {
        config.validate_y_range()?;

        let palette = Palette::BARS.colors(table.series.len());
        let series = table
            .series
            .iter()
            .zip(palette)
            .map(|(s, color)| BarSeries {
                label: s.label.clone(),
                values: s.values.clone(),
                color,
            })
            .collect();

        let y_desc = match table.time_unit {
            Some(unit) => format!("real time ({unit})"),
            None => "real time".to_string(),
        };

        Ok(BarChart {
            title: config.title.clone(),
            categories: table.categories.clone(),
            series,
            y_range: config.y_range.clone(),
            y_desc,
            groups: table.group_count(),
            size: config.size,
        })
    }

    /// Horizontal extent of bar `series` within group `group`.
    pub fn bar_span(&self, group: usize, series: usize) -> Range<f64> {
        let width = GROUP_WIDTH / self.series.len().max(1) as f64;
        let start = group as f64 + (1.0 - GROUP_WIDTH) / 2.0 + series as f64 * width;
        start..start + width
    }

    /// Draw the chart into an SVG document.
    pub fn render_svg(&self) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE)?;

            let groups = self.groups.max(1);
            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, ("sans-serif", 30))
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(0f64..groups as f64, self.y_range.clone())?;

            // Category names are drawn under each group below, not at the
            // mesh's own tick positions.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_label_formatter(&|_| String::new())
                .y_desc(self.y_desc.as_str())
                .draw()?;

            let base = 0f64.clamp(self.y_range.start, self.y_range.end);
            for (s_idx, s) in self.series.iter().enumerate() {
                let style = s.color.filled();
                chart
                    .draw_series(s.values.iter().enumerate().map(|(group, &value)| {
                        let span = self.bar_span(group, s_idx);
                        Rectangle::new([(span.start, base), (span.end, value)], style)
                    }))?
                    .label(s.label.as_str())
                    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], style));
            }

            let label_style = TextStyle::from(("sans-serif", 13).into_font())
                .pos(Pos::new(HPos::Center, VPos::Top));
            for (i, name) in self.categories.iter().enumerate() {
                let (x, y) = chart.backend_coord(&(i as f64 + 0.5, self.y_range.start));
                root.draw(&Text::new(name.as_str(), (x, y + 8), label_style.clone()))?;
            }

            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;

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
