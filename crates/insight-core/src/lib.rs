//! Insight discovery: candidate generation, test dispatch and the pipeline
//! that ties classification, testing and narratives together.
//!
//! No multiple-comparison correction is applied across the pairwise tests;
//! every p-value is reported as computed for its own pair.

pub mod analyzers;
pub mod candidates;
pub mod frame;
pub mod pipeline;
pub mod record;

pub use analyzers::{
    AnalyzerRegistry, PairAnalysis, PairAnalyzer, build_default_registry, default_registry,
};
pub use candidates::generate_candidates;
pub use pipeline::{InsightPipeline, PipelineOutput, SkippedPair};
pub use record::build_record;
