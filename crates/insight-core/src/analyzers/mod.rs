//! One test procedure per analysis kind.

mod analyzer_trait;
pub mod bin_bin;
pub mod bin_cat;
pub mod bin_cont;
pub mod cat_cont;
pub mod cont_cont;

pub use analyzer_trait::{
    AnalyzerRegistry, PairAnalysis, PairAnalyzer, build_default_registry, default_registry,
};
pub use bin_bin::BinaryBinaryAnalyzer;
pub use bin_cat::BinaryCategoricalAnalyzer;
pub use bin_cont::BinaryContinuousAnalyzer;
pub use cat_cont::CategoricalContinuousAnalyzer;
pub use cont_cont::CorrelationAnalyzer;
