//! Collaborator seams: where profiles come from and where records go.

use polars::prelude::DataFrame;

use crate::error::Result;
use crate::insight::InsightRecord;
use crate::profile::ColumnProfile;

/// Produces one [`ColumnProfile`] per column, in column order.
pub trait ColumnProfiler {
    fn profile(&self, df: &DataFrame) -> Result<Vec<ColumnProfile>>;
}

/// Receives the records of a finished run.
pub trait InsightSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Short name used in log output.
    fn name(&self) -> &str;

    fn write(&mut self, records: &[InsightRecord]) -> std::result::Result<(), Self::Error>;
}
