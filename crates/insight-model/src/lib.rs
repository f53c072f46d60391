pub mod analysis;
pub mod error;
pub mod insight;
pub mod options;
pub mod profile;
pub mod profiler;
pub mod semantic;

pub use analysis::{AnalysisKind, BinaryLabels, CandidateSet, PairCandidate, StatTest};
pub use error::{InsightError, Result};
pub use insight::InsightRecord;
pub use options::{ClassifierOptions, NarrativeOptions, PipelineOptions};
pub use profile::{ColumnProfile, Scalar, TypeCode, ValueCounts};
pub use profiler::{ColumnProfiler, InsightSink};
pub use semantic::{BucketMap, ColumnDecision, ExclusionReason, SemanticTag};
