use std::fmt;

use log::warn;
use serde::Deserialize;

use crate::error::{ChartError, Result};

// ---------------------------------------------------------------------------
// Breakdown – one line of a CG breakdown file
// ---------------------------------------------------------------------------

/// A single `label: value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownEntry {
    pub label: String,
    pub value: f64,
}

/// All entries of a breakdown file, in line order.
/// Duplicate labels are kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Breakdown {
    pub entries: Vec<BreakdownEntry>,
}

impl Breakdown {
    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Benchmark report – Google Benchmark output
// ---------------------------------------------------------------------------

/// Unit of `real_time` / `cpu_time` as reported by the benchmark runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "ns")]
    Nanoseconds,
    #[serde(rename = "us")]
    Microseconds,
    #[serde(rename = "ms")]
    Milliseconds,
    #[serde(rename = "s")]
    Seconds,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
        };
        f.write_str(s)
    }
}

/// One timed benchmark. Only `name` and `real_time` are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkRecord {
    pub name: String,
    pub real_time: f64,
    #[serde(default)]
    pub cpu_time: Option<f64>,
    #[serde(default)]
    pub time_unit: Option<TimeUnit>,
    #[serde(default)]
    pub iterations: Option<u64>,
}

/// Host information block emitted ahead of the results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BenchmarkContext {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub host_name: Option<String>,
    #[serde(default)]
    pub executable: Option<String>,
    #[serde(default)]
    pub num_cpus: Option<u32>,
}

/// A complete benchmark result file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BenchmarkReport {
    #[serde(default)]
    pub context: Option<BenchmarkContext>,
    pub benchmarks: Vec<BenchmarkRecord>,
}

impl BenchmarkReport {
    /// Benchmark names in record order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.benchmarks.iter().map(|b| b.name.as_str())
    }

    /// Unit of the first record that declares one.
    pub fn time_unit(&self) -> Option<TimeUnit> {
        self.benchmarks.iter().find_map(|b| b.time_unit)
    }
}

// ---------------------------------------------------------------------------
// TimingTable – categories × series for the grouped bar chart
// ---------------------------------------------------------------------------

/// Values plotted together under one legend label.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

/// Benchmark names of the first report on the x axis, one series per report.
///
/// Series values are positional: value `i` of every series is drawn under
/// category `i`, whatever benchmark it actually came from.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingTable {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub time_unit: Option<TimeUnit>,
    /// Benchmark names per series, kept to detect misalignment.
    names: Vec<Vec<String>>,
}

impl TimingTable {
    /// Build the table from `(identifier, report)` pairs in input order.
    pub fn from_reports(reports: &[(String, BenchmarkReport)]) -> Result<Self> {
        let (_, first) = reports
            .first()
            .ok_or_else(|| ChartError::InvalidChart("no benchmark reports".into()))?;

        let categories: Vec<String> = first.names().map(str::to_string).collect();

        let mut series = Vec::with_capacity(reports.len());
        let mut names = Vec::with_capacity(reports.len());
        for (label, report) in reports {
            series.push(Series {
                label: label.clone(),
                values: report.benchmarks.iter().map(|b| b.real_time).collect(),
            });
            names.push(report.names().map(str::to_string).collect());
        }

        let table = TimingTable {
            categories,
            series,
            time_unit: first.time_unit(),
            names,
        };
        for label in table.misaligned_series() {
            warn!("{label}: benchmarks differ from the first file, values are plotted by position");
        }
        Ok(table)
    }

    /// Labels of series whose benchmark names differ (in count or order)
    /// from the category axis.
    pub fn misaligned_series(&self) -> Vec<&str> {
        self.series
            .iter()
            .zip(&self.names)
            .filter(|(_, names)| **names != self.categories)
            .map(|(s, _)| s.label.as_str())
            .collect()
    }

    /// Number of bar groups needed to show every value of every series.
    pub fn group_count(&self) -> usize {
        self.series
            .iter()
            .map(|s| s.values.len())
            .chain(std::iter::once(self.categories.len()))
            .max()
            .unwrap_or(0)
    }
}
