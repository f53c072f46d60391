//! Dataset ingestion for insight discovery.
//!
//! # Features
//!
//! - **CSV Loading**: read a CSV file into a Polars `DataFrame`, with size,
//!   encoding and shape checks
//! - **Column Profiling**: [`DefaultProfiler`] assigns each column a type
//!   code, distinct count, uniqueness flag, mode and value counts
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use insight_ingest::{DefaultProfiler, read_csv_table};
//! use insight_model::ColumnProfiler;
//!
//! let df = read_csv_table(Path::new("customers.csv"))?;
//! let profiles = DefaultProfiler::default().profile(&df)?;
//! ```

mod csv;
mod error;
mod profiler;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    MAX_CSV_FILE_SIZE, check_file_size, normalize_boolean_columns, read_csv_table,
    validate_dataframe_shape, validate_encoding,
};

// === Profiling ===
pub use profiler::{DefaultProfiler, ProfilerOptions, looks_like_date};
