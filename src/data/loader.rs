use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::model::{BenchmarkRecord, BenchmarkReport, Breakdown, BreakdownEntry};
use crate::error::{ChartError, Result};

/// Separates the label from the value on a breakdown line.
pub const BREAKDOWN_DELIMITER: char = ':';

// ---------------------------------------------------------------------------
// Breakdown loader
// ---------------------------------------------------------------------------

/// Load a breakdown file: one `label: value` pair per line.
pub fn load_breakdown(path: &Path) -> Result<Breakdown> {
    let text = std::fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
    let breakdown = parse_breakdown(&text)?;
    debug!("{}: {} breakdown entries", path.display(), breakdown.len());
    Ok(breakdown)
}

/// Parse breakdown text. Every line must hold exactly one delimiter and a
/// value that parses as `f64` once surrounding whitespace is stripped.
/// The label is kept verbatim.
pub fn parse_breakdown(text: &str) -> Result<Breakdown> {
    let entries = text
        .lines()
        .enumerate()
        .map(|(i, line)| parse_breakdown_line(line, i + 1))
        .collect::<Result<Vec<_>>>()?;
    Ok(Breakdown { entries })
}

fn parse_breakdown_line(line: &str, line_no: usize) -> Result<BreakdownEntry> {
    let malformed = |reason: String| ChartError::MalformedLine {
        line: line_no,
        reason,
    };

    let delimiters = line.matches(BREAKDOWN_DELIMITER).count();
    if delimiters != 1 {
        return Err(malformed(format!(
            "expected one '{BREAKDOWN_DELIMITER}' delimiter, found {delimiters}"
        )));
    }
    // Checked above.
    let (label, value) = line.split_once(BREAKDOWN_DELIMITER).unwrap_or((line, ""));
    let value = value.trim();
    let value = value
        .parse::<f64>()
        .map_err(|_| malformed(format!("'{value}' is not a number")))?;

    Ok(BreakdownEntry {
        label: label.to_string(),
        value,
    })
}

// ---------------------------------------------------------------------------
// Benchmark report loader
// ---------------------------------------------------------------------------

/// Load a benchmark result file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – `--benchmark_format=csv` output, `name` and `real_time` columns
/// * anything else – `--benchmark_format=json` output with a `benchmarks` list
pub fn load_report(path: &Path) -> Result<BenchmarkReport> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let report = match ext.as_str() {
        "csv" => load_csv_report(path)?,
        _ => load_json_report(path)?,
    };
    log_report(path, &report);
    Ok(report)
}

/// Load every report in argument order, keyed by the path as given.
/// A path repeated on the command line is loaded once.
pub fn load_reports(paths: &[PathBuf]) -> Result<Vec<(String, BenchmarkReport)>> {
    let mut reports: Vec<(String, BenchmarkReport)> = Vec::with_capacity(paths.len());
    for path in paths {
        let id = path.display().to_string();
        if reports.iter().any(|(seen, _)| *seen == id) {
            warn!("{id} given more than once, loading it once");
            continue;
        }
        let report = load_report(path)?;
        reports.push((id, report));
    }
    Ok(reports)
}

fn log_report(path: &Path, report: &BenchmarkReport) {
    debug!("{}: {} benchmarks", path.display(), report.benchmarks.len());
    if let Some(ctx) = &report.context {
        debug!(
            "{}: run on {} ({} cpus) at {}, binary {}",
            path.display(),
            ctx.host_name.as_deref().unwrap_or("unknown host"),
            ctx.num_cpus.map_or_else(|| "?".to_string(), |n| n.to_string()),
            ctx.date.as_deref().unwrap_or("unknown date"),
            ctx.executable.as_deref().unwrap_or("unknown"),
        );
    }
    for b in &report.benchmarks {
        debug!(
            "  {}: real {} cpu {} over {} iterations",
            b.name,
            b.real_time,
            b.cpu_time.map_or_else(|| "-".to_string(), |t| t.to_string()),
            b.iterations.map_or_else(|| "-".to_string(), |n| n.to_string()),
        );
    }
}

/// Expected JSON schema (Google Benchmark):
///
/// ```json
/// {
///   "context": { "date": "...", "num_cpus": 8, ... },
///   "benchmarks": [
///     { "name": "CG", "real_time": 312.5, "cpu_time": 310.0, "time_unit": "ms" },
///     ...
///   ]
/// }
/// ```
fn load_json_report(path: &Path) -> Result<BenchmarkReport> {
    let text = std::fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| ChartError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// CSV layout: header row, one benchmark per row. Columns other than the
/// ones on [`BenchmarkRecord`] are ignored; empty optional cells read as
/// absent. `real_time` must hold a number on every row: the runner leaves
/// it empty for runs that reported an error, and such a file fails as a
/// whole.
fn load_csv_report(path: &Path) -> Result<BenchmarkReport> {
    let csv_err = |source| ChartError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(|e| ChartError::io(path, e))?;
    let mut reader = csv::Reader::from_reader(file);
    let benchmarks = reader
        .deserialize::<BenchmarkRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(csv_err)?;

    Ok(BenchmarkReport {
        context: None,
        benchmarks,
    })
}
