//! Natural-language findings for tested column pairs.
//!
//! Every function here is pure: it takes a contingency table or group
//! summaries already computed by the test dispatcher and renders sentences.
//! Sentences end with a trailing space so callers can concatenate them.

pub mod categories;
pub mod correlation;
pub mod crosstab;
pub mod frequency;
pub mod significance;
pub mod variability;

pub use categories::categorical_vs_continuous;
pub use correlation::{CorrelationStrength, continuous_vs_continuous};
pub use crosstab::binary_vs_categorical;
pub use frequency::{LabelBuckets, column_dominance};
pub use variability::{VariabilityLevel, binary_vs_continuous};
