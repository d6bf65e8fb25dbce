//! End-to-end tests: files on disk in, SVG files on disk out.

use std::path::{Path, PathBuf};

use tempfile::tempdir;

use vortex_charts::chart::bar::BarChart;
use vortex_charts::chart::pie::PieChart;
use vortex_charts::chart::ChartConfig;
use vortex_charts::data::loader::{load_breakdown, load_reports};
use vortex_charts::data::model::TimingTable;
use vortex_charts::ChartError;

fn write_report(path: &Path, entries: &[(&str, f64)]) {
    let benchmarks: Vec<String> = entries
        .iter()
        .map(|(name, t)| {
            format!(
                r#"{{ "name": "{name}", "iterations": 1, "real_time": {t}, "cpu_time": {t}, "time_unit": "ms" }}"#
            )
        })
        .collect();
    let doc = format!(
        r#"{{ "context": {{ "date": "2017-05-01 10:00:00", "num_cpus": 8 }}, "benchmarks": [{}] }}"#,
        benchmarks.join(",")
    );
    std::fs::write(path, doc).unwrap();
}

fn render_breakdown(input: &Path, output: &Path) -> Result<PieChart, ChartError> {
    let breakdown = load_breakdown(input)?;
    let chart = PieChart::from_breakdown(&breakdown, &ChartConfig::breakdown())?;
    chart.render(output)?;
    Ok(chart)
}

fn render_timings(inputs: &[&Path], output: &Path) -> Result<BarChart, ChartError> {
    let paths: Vec<PathBuf> = inputs.iter().map(|p| p.to_path_buf()).collect();
    let reports = load_reports(&paths)?;
    let table = TimingTable::from_reports(&reports)?;
    let chart = BarChart::from_table(&table, &ChartConfig::timings())?;
    chart.render(output)?;
    Ok(chart)
}

#[test]
fn test_breakdown_writes_pie_svg() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("breakdown.txt");
    let output = dir.path().join("cg_breakdown.svg");
    std::fs::write(&input, "Apply matrix: 40.5\nPreconditioner: 35\nDot product: 24.5\n").unwrap();

    let chart = render_breakdown(&input, &output).unwrap();
    assert_eq!(chart.slices.len(), 3);
    let total: f64 = chart.slices.iter().map(|s| s.fraction).sum();
    assert!((total - 1.0).abs() < 1e-9);

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("Apply matrix"));
    assert!(svg.contains("Preconditioner"));
}

#[test]
fn test_malformed_breakdown_writes_nothing() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("cg_breakdown.svg");

    let no_delim = dir.path().join("no_delim.txt");
    std::fs::write(&no_delim, "Apply matrix: 40\nPreconditioner 35\n").unwrap();
    assert!(matches!(
        render_breakdown(&no_delim, &output),
        Err(ChartError::MalformedLine { line: 2, .. })
    ));

    let not_numeric = dir.path().join("not_numeric.txt");
    std::fs::write(&not_numeric, "Apply matrix: forty\n").unwrap();
    assert!(matches!(
        render_breakdown(&not_numeric, &output),
        Err(ChartError::MalformedLine { line: 1, .. })
    ));

    assert!(!output.exists());
}

#[test]
fn test_missing_breakdown_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("cg_breakdown.svg");
    let err = render_breakdown(&dir.path().join("absent.txt"), &output).unwrap_err();
    assert!(matches!(err, ChartError::Io { .. }));
    assert!(!output.exists());
}

#[test]
fn test_timings_one_series_per_file() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    let c = dir.path().join("c.json");
    let names = ["ICCG", "SOR", "CG", "DiagonalCG"];
    for (i, path) in [&a, &b, &c].into_iter().enumerate() {
        let entries: Vec<(&str, f64)> = names
            .iter()
            .enumerate()
            .map(|(j, n)| (*n, 100.0 * (i + 1) as f64 + j as f64))
            .collect();
        write_report(path, &entries);
    }
    let output = dir.path().join("benchmarks.svg");

    let chart = render_timings(&[a.as_path(), b.as_path(), c.as_path()], &output).unwrap();
    assert_eq!(chart.categories, names);
    assert_eq!(chart.series.len(), 3);
    for (i, s) in chart.series.iter().enumerate() {
        assert_eq!(s.values.len(), names.len());
        assert_eq!(s.values[0], 100.0 * (i + 1) as f64);
    }
    assert_eq!(chart.series[2].label, c.display().to_string());

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("DiagonalCG"));
}

#[test]
fn test_timings_two_files_two_benchmarks() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    write_report(&a, &[("x", 10.0), ("y", 20.0)]);
    write_report(&b, &[("x", 15.0), ("y", 25.0)]);

    let chart = render_timings(&[a.as_path(), b.as_path()], &dir.path().join("out.svg")).unwrap();
    assert_eq!(chart.categories, vec!["x", "y"]);
    assert_eq!(chart.series[0].values, vec![10.0, 20.0]);
    assert_eq!(chart.series[1].values, vec![15.0, 25.0]);
}

#[test]
fn test_timings_repeated_file_is_one_series() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    write_report(&a, &[("x", 10.0), ("y", 20.0)]);
    write_report(&b, &[("x", 15.0), ("y", 25.0)]);

    let chart = render_timings(
        &[a.as_path(), b.as_path(), a.as_path()],
        &dir.path().join("out.svg"),
    )
    .unwrap();
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.series[0].label, a.display().to_string());
    assert_eq!(chart.series[1].label, b.display().to_string());
    assert_eq!(chart.series[0].values, vec![10.0, 20.0]);
}

#[test]
fn test_timings_mismatched_files_still_render() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.json");
    let b = dir.path().join("b.json");
    write_report(&a, &[("x", 10.0), ("y", 20.0), ("z", 30.0)]);
    write_report(&b, &[("z", 35.0), ("x", 15.0)]);
    let output = dir.path().join("out.svg");

    let chart = render_timings(&[a.as_path(), b.as_path()], &output).unwrap();
    assert_eq!(chart.categories, vec!["x", "y", "z"]);
    // Positional: 35.0 sits under "x" although it was measured for "z".
    assert_eq!(chart.series[1].values, vec![35.0, 15.0]);
    assert!(output.exists());
}

#[test]
fn test_timings_mixed_json_and_csv() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("gpu.json");
    let csv = dir.path().join("cpu.csv");
    write_report(&json, &[("CG", 120.0), ("SOR", 80.0)]);
    std::fs::write(
        &csv,
        "name,iterations,real_time,cpu_time,time_unit\nCG,3,240,238,ms\nSOR,5,160,159,ms\n",
    )
    .unwrap();

    let chart = render_timings(&[json.as_path(), csv.as_path()], &dir.path().join("out.svg")).unwrap();
    assert_eq!(chart.series[1].values, vec![240.0, 160.0]);
}

#[test]
fn test_timings_bad_json_writes_nothing() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    write_report(&good, &[("x", 1.0)]);
    std::fs::write(&bad, r#"{ "benchmarks": [ { "real_time": 1.0 } ] }"#).unwrap();
    let output = dir.path().join("out.svg");

    let err = render_timings(&[good.as_path(), bad.as_path()], &output).unwrap_err();
    assert!(matches!(err, ChartError::Json { .. }));
    assert!(!output.exists());
}
