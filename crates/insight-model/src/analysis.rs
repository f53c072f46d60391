//! Analysis kinds, pair candidates and binary group labels.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InsightError;

/// The pairwise analysis applied to a combination of semantic tags.
///
/// Variant order is the fixed iteration order of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AnalysisKind {
    /// Binary discriminator against a categorical column (chi-square).
    BinCat,
    /// Two binary columns (chi-square on a 2x2 table).
    BinBin,
    /// Binary discriminator against a continuous column (t-test).
    BinCont,
    /// Categorical discriminator against a continuous column (ANOVA).
    CatCont,
    /// Two continuous columns (Pearson correlation).
    ContCont,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 5] = [
        AnalysisKind::BinCat,
        AnalysisKind::BinBin,
        AnalysisKind::BinCont,
        AnalysisKind::CatCont,
        AnalysisKind::ContCont,
    ];

    /// Label written to the `analysis_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::BinCat => "bin X cat",
            AnalysisKind::BinBin => "bin X bin",
            AnalysisKind::BinCont => "bin X cont",
            AnalysisKind::CatCont => "cat X cont",
            AnalysisKind::ContCont => "cont X cont",
        }
    }

    /// Pairs of this kind are unordered combinations drawn from one bucket.
    pub fn is_symmetric(&self) -> bool {
        matches!(self, AnalysisKind::BinBin | AnalysisKind::ContCont)
    }

    /// The hypothesis test run for this kind.
    pub fn test(&self) -> StatTest {
        match self {
            AnalysisKind::BinCat | AnalysisKind::BinBin => StatTest::ChiSquare,
            AnalysisKind::BinCont => StatTest::TTest,
            AnalysisKind::CatCont => StatTest::Anova,
            AnalysisKind::ContCont => StatTest::Pearson,
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = InsightError;

    /// Accepts `bin X cat`, `bin×cat`, `bin_x_cat` and `BinCat` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .replace('×', "x")
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "binxcat" | "bincat" => Ok(AnalysisKind::BinCat),
            "binxbin" | "binbin" => Ok(AnalysisKind::BinBin),
            "binxcont" | "bincont" => Ok(AnalysisKind::BinCont),
            "catxcont" | "catcont" => Ok(AnalysisKind::CatCont),
            "contxcont" | "contcont" => Ok(AnalysisKind::ContCont),
            _ => Err(InsightError::config(format!("unknown analysis kind: {s}"))),
        }
    }
}

impl From<AnalysisKind> for String {
    fn from(kind: AnalysisKind) -> Self {
        kind.as_str().to_string()
    }
}

impl TryFrom<String> for AnalysisKind {
    type Error = InsightError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Hypothesis test family, written to the `analysis` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatTest {
    #[serde(rename = "Chi-square")]
    ChiSquare,
    #[serde(rename = "T-test")]
    TTest,
    #[serde(rename = "Anova")]
    Anova,
    #[serde(rename = "Pearson corr")]
    Pearson,
}

impl StatTest {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatTest::ChiSquare => "Chi-square",
            StatTest::TTest => "T-test",
            StatTest::Anova => "Anova",
            StatTest::Pearson => "Pearson corr",
        }
    }
}

impl fmt::Display for StatTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A column pair scheduled for one analysis.
///
/// For mixed kinds `first` is the discriminator and `second` the measured
/// column. For symmetric kinds `first` precedes `second` in bucket order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCandidate {
    pub kind: AnalysisKind,
    pub first: String,
    pub second: String,
}

impl PairCandidate {
    pub fn new(kind: AnalysisKind, first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            kind,
            first: first.into(),
            second: second.into(),
        }
    }
}

impl fmt::Display for PairCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.kind, self.first, self.second)
    }
}

/// Candidates grouped by analysis kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSet {
    by_kind: BTreeMap<AnalysisKind, Vec<PairCandidate>>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, candidate: PairCandidate) {
        self.by_kind.entry(candidate.kind).or_default().push(candidate);
    }

    /// Candidates of one kind; empty when none were generated.
    pub fn get(&self, kind: AnalysisKind) -> &[PairCandidate] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates all candidates in kind order, then generation order.
    pub fn iter(&self) -> impl Iterator<Item = &PairCandidate> {
        self.by_kind.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_kind.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Candidate counts per kind, including zero counts.
    pub fn counts(&self) -> Vec<(AnalysisKind, usize)> {
        AnalysisKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind).len()))
            .collect()
    }
}

/// Human-readable labels for the two groups of a binary column.
///
/// `negative` names the false/0 group and `positive` the true/1 group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryLabels {
    pub negative: String,
    pub positive: String,
}

impl BinaryLabels {
    /// Labels derived by negating the column name.
    pub fn for_column(column: &str) -> Self {
        Self {
            negative: format!("non-{column}"),
            positive: column.to_string(),
        }
    }

    /// Labels in table order: negative first.
    pub fn as_array(&self) -> [&str; 2] {
        [&self.negative, &self.positive]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_kind_accepts_common_spellings() {
        assert_eq!("bin X cat".parse::<AnalysisKind>().unwrap(), AnalysisKind::BinCat);
        assert_eq!("cont×cont".parse::<AnalysisKind>().unwrap(), AnalysisKind::ContCont);
        assert_eq!("cat_x_cont".parse::<AnalysisKind>().unwrap(), AnalysisKind::CatCont);
        let err = "cat X cat".parse::<AnalysisKind>().unwrap_err();
        assert!(matches!(err, InsightError::Config { .. }));
    }

    #[test]
    fn analysis_kind_order_is_pipeline_order() {
        let mut kinds = AnalysisKind::ALL.to_vec();
        kinds.sort();
        assert_eq!(kinds, AnalysisKind::ALL.to_vec());
    }

    #[test]
    fn candidate_set_iterates_by_kind() {
        let mut set = CandidateSet::new();
        set.push(PairCandidate::new(AnalysisKind::ContCont, "a", "b"));
        set.push(PairCandidate::new(AnalysisKind::BinCat, "flag", "group"));
        let kinds: Vec<AnalysisKind> = set.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![AnalysisKind::BinCat, AnalysisKind::ContCont]);
        assert_eq!(set.len(), 2);
        assert!(set.get(AnalysisKind::BinBin).is_empty());
    }

    #[test]
    fn binary_labels_negate_column_name() {
        let labels = BinaryLabels::for_column("active");
        assert_eq!(labels.as_array(), ["non-active", "active"]);
    }
}
