/// Chart layer: data model → SVG.
///
/// Each chart is first built as a plain model (slices, bars) that can be
/// inspected, then drawn into an in-memory SVG string. The output file is
/// only written once drawing has succeeded.

pub mod bar;
pub mod pie;

use std::ops::Range;
use std::path::{Path, PathBuf};

use log::info;
use plotters::drawing::DrawingAreaErrorKind;

use crate::error::{ChartError, Result};

/// Canvas size used by both renderers.
pub const DEFAULT_SIZE: (u32, u32) = (800, 600);

/// Fixed vertical axis of the timing chart.
pub const DEFAULT_Y_RANGE: Range<f64> = 0.0..600.0;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Per-run chart settings. The constructors hold the defaults each CLI
/// starts from; flags override individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub title: String,
    /// Output SVG path.
    pub output: PathBuf,
    /// Canvas size in pixels.
    pub size: (u32, u32),
    /// Vertical axis range. Ignored by the pie chart.
    pub y_range: Range<f64>,
}

impl ChartConfig {
    /// Defaults for the CG breakdown pie chart.
    pub fn breakdown() -> Self {
        ChartConfig {
            title: "CG breakdown".to_string(),
            output: PathBuf::from("cg_breakdown.svg"),
            size: DEFAULT_SIZE,
            y_range: DEFAULT_Y_RANGE,
        }
    }

    /// Defaults for the solver timing bar chart.
    pub fn timings() -> Self {
        ChartConfig {
            title: "Solver performance".to_string(),
            output: PathBuf::from("benchmarks.svg"),
            size: DEFAULT_SIZE,
            y_range: DEFAULT_Y_RANGE,
        }
    }

    /// Check that the vertical range is finite and non-empty.
    pub fn validate_y_range(&self) -> Result<()> {
        let Range { start, end } = self.y_range;
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(ChartError::InvalidChart(format!(
                "vertical range {start}..{end} is empty or not finite"
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Render(err.to_string())
    }
}

/// Write a rendered SVG document to `path`.
pub(crate) fn write_svg(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg).map_err(|e| ChartError::io(path, e))?;
    info!("wrote {}", path.display());
    Ok(())
}
