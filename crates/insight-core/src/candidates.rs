//! Candidate pair generation.
//!
//! Maps the bucket map to the typed column pairs worth testing:
//!
//! | Kind        | Pairs                                   |
//! |-------------|-----------------------------------------|
//! | `bin X cat` | binary × categorical                    |
//! | `bin X bin` | 2-combinations of binary                |
//! | `bin X cont`| binary × continuous                     |
//! | `cat X cont`| categorical × continuous                |
//! | `cont X cont`| 2-combinations of continuous           |
//!
//! Mixed kinds are ordered (discriminator first). Combination kinds never
//! pair a column with itself and never emit both `(a, b)` and `(b, a)`.

use insight_model::{AnalysisKind, BucketMap, CandidateSet, PairCandidate, SemanticTag};

/// Builds every candidate pair from the bucket map.
///
/// Output order is deterministic: kinds follow [`AnalysisKind::ALL`] and pairs
/// follow bucket insertion order.
pub fn generate_candidates(buckets: &BucketMap) -> CandidateSet {
    let mut candidates = CandidateSet::new();
    for kind in AnalysisKind::ALL {
        match kind {
            AnalysisKind::BinCat => cross(
                &mut candidates,
                kind,
                buckets.get(SemanticTag::Binary),
                buckets.get(SemanticTag::Categorical),
            ),
            AnalysisKind::BinBin => combinations(&mut candidates, kind, buckets.get(SemanticTag::Binary)),
            AnalysisKind::BinCont => cross(
                &mut candidates,
                kind,
                buckets.get(SemanticTag::Binary),
                buckets.get(SemanticTag::Continuous),
            ),
            AnalysisKind::CatCont => cross(
                &mut candidates,
                kind,
                buckets.get(SemanticTag::Categorical),
                buckets.get(SemanticTag::Continuous),
            ),
            AnalysisKind::ContCont => {
                combinations(&mut candidates, kind, buckets.get(SemanticTag::Continuous))
            }
        }
    }
    candidates
}

fn cross(candidates: &mut CandidateSet, kind: AnalysisKind, left: &[String], right: &[String]) {
    for first in left {
        for second in right {
            candidates.push(PairCandidate::new(kind, first, second));
        }
    }
}

fn combinations(candidates: &mut CandidateSet, kind: AnalysisKind, columns: &[String]) {
    for (idx, first) in columns.iter().enumerate() {
        for second in &columns[idx + 1..] {
            candidates.push(PairCandidate::new(kind, first, second));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets() -> BucketMap {
        let mut buckets = BucketMap::new();
        buckets.insert(SemanticTag::Binary, "active");
        buckets.insert(SemanticTag::Binary, "nice_person");
        buckets.insert(SemanticTag::Categorical, "group");
        buckets.insert(SemanticTag::Continuous, "visits");
        buckets.insert(SemanticTag::Continuous, "spend");
        buckets.insert(SemanticTag::Continuous, "age");
        buckets
    }

    #[test]
    fn counts_per_kind() {
        let candidates = generate_candidates(&buckets());
        assert_eq!(candidates.get(AnalysisKind::BinCat).len(), 2);
        assert_eq!(candidates.get(AnalysisKind::BinBin).len(), 1);
        assert_eq!(candidates.get(AnalysisKind::BinCont).len(), 6);
        assert_eq!(candidates.get(AnalysisKind::CatCont).len(), 3);
        assert_eq!(candidates.get(AnalysisKind::ContCont).len(), 3);
        assert_eq!(candidates.len(), 15);
    }

    #[test]
    fn pairs_follow_bucket_order() {
        let candidates = generate_candidates(&buckets());
        let cont: Vec<(&str, &str)> = candidates
            .get(AnalysisKind::ContCont)
            .iter()
            .map(|p| (p.first.as_str(), p.second.as_str()))
            .collect();
        assert_eq!(cont, vec![("visits", "spend"), ("visits", "age"), ("spend", "age")]);

        let first = candidates.iter().next().unwrap();
        assert_eq!(first, &PairCandidate::new(AnalysisKind::BinCat, "active", "group"));
    }

    #[test]
    fn singleton_buckets_yield_no_combinations() {
        let mut buckets = BucketMap::new();
        buckets.insert(SemanticTag::Continuous, "visits");
        buckets.insert(SemanticTag::Binary, "active");
        let candidates = generate_candidates(&buckets);
        assert!(candidates.get(AnalysisKind::ContCont).is_empty());
        assert!(candidates.get(AnalysisKind::BinBin).is_empty());
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn empty_buckets_yield_nothing() {
        assert!(generate_candidates(&BucketMap::new()).is_empty());
    }
}
