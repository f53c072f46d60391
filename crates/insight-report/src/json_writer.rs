//! JSON array of insight records.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use insight_model::{InsightRecord, InsightSink};
use tracing::debug;

use crate::common::{WriteMode, ensure_parent_dir, has_content, validate_path};
use crate::error::{ReportError, Result};

/// Writes records as one pretty-printed JSON array.
///
/// In append mode an existing array is read first and the new records are
/// added after it.
#[derive(Debug, Clone)]
pub struct JsonInsightWriter {
    path: PathBuf,
    mode: WriteMode,
}

impl JsonInsightWriter {
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

    fn json_error(&self, source: serde_json::Error) -> ReportError {
        ReportError::Json {
            path: self.path.clone(),
            source,
        }
    }
}

impl InsightSink for JsonInsightWriter {
    type Error = ReportError;

    fn name(&self) -> &str {
        "json"
    }

    fn write(&mut self, records: &[InsightRecord]) -> Result<()> {
        ensure_parent_dir(&self.path)?;

        let mut all = if self.mode == WriteMode::Append && has_content(&self.path) {
            read_json_records(&self.path)?
        } else {
            Vec::new()
        };
        let existing = all.len();
        all.extend_from_slice(records);

        let file = File::create(&self.path).map_err(|e| ReportError::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &all).map_err(|e| self.json_error(e))?;
        writeln!(writer).map_err(|e| ReportError::io(&self.path, e))?;
        writer.flush().map_err(|e| ReportError::io(&self.path, e))?;

        debug!(path = %self.path.display(), records = records.len(), existing, "wrote JSON report");
        Ok(())
    }
}

/// Reads back an array written by [`JsonInsightWriter`].
pub fn read_json_records(path: &Path) -> Result<Vec<InsightRecord>> {
    let file = File::open(path).map_err(|e| ReportError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ReportError::Json {
        path: path.to_path_buf(),
        source,
    })
}
