use std::path::PathBuf;

use anyhow::Result;
use insight_classify::{Classification, classify_columns};
use insight_cli::run::{OutputTarget, RunConfig, RunResult, profile_dataset, run_analysis};
use insight_ingest::ProfilerOptions;
use insight_model::{ColumnProfile, PipelineOptions};
use insight_report::{ReportFormat, WriteMode};
use tracing::info_span;

use crate::cli::{AnalyzeArgs, ClassifyArgs, ProfileArgs, ReportFormatArg};

/// Profiles and classification of one dataset, without pair tests.
pub struct ProfileResult {
    pub input: PathBuf,
    pub rows: usize,
    pub profiles: Vec<ColumnProfile>,
    pub classification: Classification,
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<RunResult> {
    let mut pipeline = pipeline_options(&args.classify)
        .with_siglvl(args.siglvl)
        .with_only_significant(args.only_significant);
    if let Some(id) = &args.dataset_id {
        pipeline = pipeline.with_dataset_id(id.clone());
    }
    if let Some(date) = &args.run_date {
        pipeline = pipeline.with_run_date(date.clone());
    }

    let output = args.output.clone().map(|path| {
        let mode = if args.append {
            WriteMode::Append
        } else {
            WriteMode::Replace
        };
        OutputTarget::new(path, args.format.map(report_format), mode)
    });

    let config = RunConfig {
        input: args.input.clone(),
        pipeline,
        profiler: profiler_options(&args.classify),
        output,
    };
    run_analysis(&config)
}

pub fn run_profile(args: &ProfileArgs) -> Result<ProfileResult> {
    let _span = info_span!("profile_command", input = %args.input.display()).entered();
    let dataset = profile_dataset(&args.input, profiler_options(&args.classify))?;
    let classification =
        classify_columns(&dataset.profiles, &pipeline_options(&args.classify).classifier());
    Ok(ProfileResult {
        input: args.input.clone(),
        rows: dataset.data.height(),
        profiles: dataset.profiles,
        classification,
    })
}

fn pipeline_options(args: &ClassifyArgs) -> PipelineOptions {
    PipelineOptions::default()
        .with_categorical_as_ints(args.categorical_as_ints)
        .with_min_samples(args.min_samples)
}

fn profiler_options(args: &ClassifyArgs) -> ProfilerOptions {
    ProfilerOptions::default().with_correlation_threshold(args.correlation_threshold)
}

fn report_format(arg: ReportFormatArg) -> ReportFormat {
    match arg {
        ReportFormatArg::Csv => ReportFormat::Csv,
        ReportFormatArg::Json => ReportFormat::Json,
    }
}
