//! Insight record writers.
//!
//! Records are written as a flat table with one row per finding. Both
//! writers implement [`insight_model::InsightSink`] and support replacing
//! or appending to an existing file.
//!
//! # Example
//!
//! ```ignore
//! use insight_model::InsightSink;
//! use insight_report::{CsvInsightWriter, WriteMode};
//!
//! let mut writer = CsvInsightWriter::new("out/insights.csv")?.with_mode(WriteMode::Append);
//! writer.write(&output.records)?;
//! ```

mod common;
mod csv_writer;
mod error;
mod format;
mod json_writer;

// === Error Types ===
pub use error::{ReportError, Result};

// === Writers ===
pub use common::{WriteMode, ensure_parent_dir};
pub use csv_writer::{CsvInsightWriter, read_csv_records};
pub use format::{ReportFormat, ReportWriter};
pub use json_writer::{JsonInsightWriter, read_json_records};
