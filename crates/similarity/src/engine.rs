use scoutrank_common::{Result, ScoutError};

use crate::metric::{weighted_euclidean_distance, CosineQuery};
use crate::types::{MatchResult, MetricKind, RankedResultList, TruncationMode};

/// Rank every candidate against `query` and keep the best `top_n`
///
/// Candidate identifiers are positions in `candidates`. Ties are broken by
/// ascending identifier. Under cosine similarity, zero-magnitude candidates
/// are left out and a zero-magnitude query yields an empty list.
///
/// # Errors
/// `InvalidInput` when `top_n` is zero, when any vector (or the weights)
/// differs in dimension from `query`, when a weight is negative, or when any
/// value is not finite. Nothing is scored in that case.
pub fn rank<V: AsRef<[f64]>>(
    query: &[f64],
    candidates: &[V],
    metric: MetricKind,
    weights: Option<&[f64]>,
    top_n: usize,
) -> Result<RankedResultList> {
    rank_with_mode(query, candidates, metric, weights, top_n, TruncationMode::Exact)
}

/// [`rank`] with an explicit truncation mode
///
/// With [`TruncationMode::IncludeSelf`] up to `top_n + 1` entries are kept so
/// that a query taken from the candidate set still leaves `top_n` neighbours
/// once the caller drops the self-match.
pub fn rank_with_mode<V: AsRef<[f64]>>(
    query: &[f64],
    candidates: &[V],
    metric: MetricKind,
    weights: Option<&[f64]>,
    top_n: usize,
    mode: TruncationMode,
) -> Result<RankedResultList> {
    validate_inputs(query, candidates, weights, top_n)?;

    let mut results = Vec::with_capacity(candidates.len());

    match metric {
        MetricKind::CosineSimilarity => {
            let Some(query) = CosineQuery::new(query) else {
                return Ok(results);
            };

            for (index, candidate) in candidates.iter().enumerate() {
                if let Some(score) = query.similarity(candidate.as_ref()) {
                    results.push(MatchResult::new(index, score));
                }
            }
        }
        MetricKind::WeightedEuclideanDistance => {
            for (index, candidate) in candidates.iter().enumerate() {
                let score = weighted_euclidean_distance(query, candidate.as_ref(), weights);
                results.push(MatchResult::new(index, score));
            }
        }
    }

    debug_assert!(results.iter().all(|r| r.score.is_finite()));

    sort_results(&mut results, metric);
    results.truncate(mode.limit(top_n));

    Ok(results)
}

/// Best score first, ties by ascending index
fn sort_results(results: &mut [MatchResult], metric: MetricKind) {
    results.sort_unstable_by(|a, b| {
        metric
            .compare_scores(a.score, b.score)
            .then_with(|| a.index.cmp(&b.index))
    });
}

fn validate_inputs<V: AsRef<[f64]>>(
    query: &[f64],
    candidates: &[V],
    weights: Option<&[f64]>,
    top_n: usize,
) -> Result<()> {
    if top_n == 0 {
        return Err(ScoutError::invalid_input("top_n must be at least 1"));
    }

    let dim = query.len();
    if let Some(j) = non_finite_position(query) {
        return Err(ScoutError::invalid_input(format!(
            "query has a non-finite value at dimension {}",
            j
        )));
    }

    if let Some(weights) = weights {
        if weights.len() != dim {
            return Err(ScoutError::invalid_input(format!(
                "weight dimension {} does not match query dimension {}",
                weights.len(),
                dim
            )));
        }
        if let Some((j, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(ScoutError::invalid_input(format!(
                "weight {} is {}, weights must be finite and non-negative",
                j, w
            )));
        }
    }

    for (index, candidate) in candidates.iter().enumerate() {
        let candidate = candidate.as_ref();
        if candidate.len() != dim {
            return Err(ScoutError::invalid_input(format!(
                "candidate {} has dimension {}, expected {}",
                index,
                candidate.len(),
                dim
            )));
        }
        if let Some(j) = non_finite_position(candidate) {
            return Err(ScoutError::invalid_input(format!(
                "candidate {} has a non-finite value at dimension {}",
                index, j
            )));
        }
    }

    Ok(())
}

fn non_finite_position(v: &[f64]) -> Option<usize> {
    v.iter().position(|x| !x.is_finite())
}
