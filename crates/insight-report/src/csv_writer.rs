//! Flat CSV table of insight records.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use insight_model::{InsightRecord, InsightSink};
use tracing::debug;

use crate::common::{WriteMode, ensure_parent_dir, has_content, validate_path};
use crate::error::{ReportError, Result};

/// Writes records as CSV rows with the header
/// `date,dataset,insight_text,p_val,magnitude,col_1,col_2,analysis,analysis_type,statistic`.
///
/// A missing magnitude is written as an empty cell. In append mode the
/// header is only written when the file is new or empty.
#[derive(Debug, Clone)]
pub struct CsvInsightWriter {
    path: PathBuf,
    mode: WriteMode,
}

impl CsvInsightWriter {
    /// # Errors
    ///
    /// Returns [`ReportError::Config`] when `path` is empty.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            path: validate_path(path)?,
            mode: WriteMode::Replace,
        })
    }

    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn csv_error(&self, source: csv::Error) -> ReportError {
        ReportError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

impl InsightSink for CsvInsightWriter {
    type Error = ReportError;

    fn name(&self) -> &str {
        "csv"
    }

    fn write(&mut self, records: &[InsightRecord]) -> Result<()> {
        ensure_parent_dir(&self.path)?;
        let appending = self.mode == WriteMode::Append && has_content(&self.path);

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .append(appending)
            .truncate(!appending)
            .open(&self.path)
            .map_err(|e| ReportError::io(&self.path, e))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(!appending)
            .from_writer(file);
        for record in records {
            writer.serialize(record).map_err(|e| self.csv_error(e))?;
        }
        writer.flush().map_err(|e| ReportError::io(&self.path, e))?;

        debug!(path = %self.path.display(), records = records.len(), appending, "wrote CSV report");
        Ok(())
    }
}

/// Reads back a table written by [`CsvInsightWriter`].
pub fn read_csv_records(path: &Path) -> Result<Vec<InsightRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<InsightRecord>, _>>()
        .map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })
}
