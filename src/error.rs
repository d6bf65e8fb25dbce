use std::path::PathBuf;

/// Errors produced while loading chart data or drawing a chart.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Input could not be read, or output could not be written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A breakdown line with the wrong delimiter count or a non-numeric value.
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// Benchmark JSON that does not match the expected document shape.
    #[error("invalid benchmark JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Benchmark CSV that does not match the expected columns.
    #[error("invalid benchmark CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Nothing sensible to draw.
    #[error("cannot build chart: {0}")]
    InvalidChart(String),

    /// Drawing backend failure.
    #[error("rendering failed: {0}")]
    Render(String),
}

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChartError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
