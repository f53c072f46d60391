//! End-to-end run: load, profile, discover, persist.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use insight_core::{InsightPipeline, PipelineOutput};
use insight_ingest::{DefaultProfiler, ProfilerOptions, read_csv_table};
use insight_model::{ColumnProfile, ColumnProfiler, InsightRecord, InsightSink, PipelineOptions};
use insight_report::{ReportFormat, ReportWriter, WriteMode};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

/// Where and how to persist records.
#[derive(Debug, Clone)]
pub struct OutputTarget {
    pub path: PathBuf,
    pub format: ReportFormat,
    pub mode: WriteMode,
}

impl OutputTarget {
    /// Uses `format` when given, otherwise the file extension, otherwise CSV.
    pub fn new(path: PathBuf, format: Option<ReportFormat>, mode: WriteMode) -> Self {
        let format = format
            .or_else(|| ReportFormat::from_path(&path))
            .unwrap_or(ReportFormat::Csv);
        Self { path, format, mode }
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub pipeline: PipelineOptions,
    pub profiler: ProfilerOptions,
    /// `None` skips persistence.
    pub output: Option<OutputTarget>,
}

/// A loaded dataset with its column profiles.
#[derive(Debug, Clone)]
pub struct ProfiledDataset {
    pub data: DataFrame,
    pub profiles: Vec<ColumnProfile>,
}

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub dataset_id: String,
    pub rows: usize,
    pub columns: usize,
    pub profiles: Vec<ColumnProfile>,
    pub output: PipelineOutput,
    pub report: Option<PathBuf>,
}

/// Loads a CSV file and profiles every column.
pub fn profile_dataset(input: &Path, options: ProfilerOptions) -> Result<ProfiledDataset> {
    let _span = info_span!("ingest", input = %input.display()).entered();
    let data = read_csv_table(input).with_context(|| format!("load {}", input.display()))?;
    let profiles = DefaultProfiler::new(options)
        .profile(&data)
        .with_context(|| format!("profile {}", input.display()))?;
    Ok(ProfiledDataset { data, profiles })
}

/// Runs the whole pipeline over one input file.
pub fn run_analysis(config: &RunConfig) -> Result<RunResult> {
    let start = Instant::now();
    let pipeline =
        InsightPipeline::new(config.pipeline.clone()).context("invalid pipeline options")?;

    let ProfiledDataset { data, profiles } = profile_dataset(&config.input, config.profiler)?;
    let output = pipeline.run(&data, &profiles);

    let report = match &config.output {
        Some(target) => {
            let mut writer = ReportWriter::new(target.format, target.path.clone(), target.mode)
                .with_context(|| format!("configure report {}", target.path.display()))?;
            write_records(&mut writer, &output.records)?;
            Some(target.path.clone())
        }
        None => None,
    };

    info!(
        input = %config.input.display(),
        records = output.records.len(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunResult {
        input: config.input.clone(),
        dataset_id: config.pipeline.dataset_id.clone(),
        rows: data.height(),
        columns: data.width(),
        profiles,
        output,
        report,
    })
}

/// Hands records to any sink, attaching the sink name to failures.
pub fn write_records<S: InsightSink>(sink: &mut S, records: &[InsightRecord]) -> Result<()> {
    let _span = info_span!("persist", sink = sink.name(), records = records.len()).entered();
    sink.write(records)
        .with_context(|| format!("write records to {} sink", sink.name()))?;
    Ok(())
}
