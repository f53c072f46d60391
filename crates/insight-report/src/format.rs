//! Report format selection.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use insight_model::{InsightRecord, InsightSink};
use serde::{Deserialize, Serialize};

use crate::common::WriteMode;
use crate::csv_writer::CsvInsightWriter;
use crate::error::{ReportError, Result};
use crate::json_writer::JsonInsightWriter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }

    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            other => Err(ReportError::config(format!("unknown report format '{other}'"))),
        }
    }
}

/// Either writer behind one type, so callers can pick at runtime.
#[derive(Debug, Clone)]
pub enum ReportWriter {
    Csv(CsvInsightWriter),
    Json(JsonInsightWriter),
}

impl ReportWriter {
    pub fn new(format: ReportFormat, path: impl Into<PathBuf>, mode: WriteMode) -> Result<Self> {
        Ok(match format {
            ReportFormat::Csv => Self::Csv(CsvInsightWriter::new(path)?.with_mode(mode)),
            ReportFormat::Json => Self::Json(JsonInsightWriter::new(path)?.with_mode(mode)),
        })
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Csv(writer) => writer.path(),
            Self::Json(writer) => writer.path(),
        }
    }
}

impl InsightSink for ReportWriter {
    type Error = ReportError;

    fn name(&self) -> &str {
        match self {
            Self::Csv(writer) => writer.name(),
            Self::Json(writer) => writer.name(),
        }
    }

    fn write(&mut self, records: &[InsightRecord]) -> Result<()> {
        match self {
            Self::Csv(writer) => writer.write(records),
            Self::Json(writer) => writer.write(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ReportFormat::from_path(Path::new("out/insights.CSV")),
            Some(ReportFormat::Csv)
        );
        assert_eq!(
            ReportFormat::from_path(Path::new("insights.json")),
            Some(ReportFormat::Json)
        );
        assert_eq!(ReportFormat::from_path(Path::new("insights.xlsx")), None);
        assert_eq!(ReportFormat::from_path(Path::new("insights")), None);
    }

    #[test]
    fn test_unknown_format_is_config_error() {
        assert!(matches!(
            "parquet".parse::<ReportFormat>(),
            Err(ReportError::Config { .. })
        ));
    }
}
