//! Chart renderers for solver performance data.
//!
//! * [`chart::pie`] turns a CG breakdown file (`label: value` lines) into a pie chart.
//! * [`chart::bar`] turns one or more Google Benchmark result files into a
//!   grouped bar chart, one series per file.
//!
//! Both write SVG through `plotters`.

pub mod chart;
pub mod color;
pub mod data;
pub mod error;

pub use error::{ChartError, Result};
