use scoutrank_common::{canonical_metric_name, ScoutError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Feature vector of one entity
pub type FeatureVector = Vec<f64>;

/// Ranked matches, best first
pub type RankedResultList = Vec<MatchResult>;

/// Similarity metric used to score candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// `dot(q, c) / (|q| * |c|)`, higher is more similar
    #[serde(rename = "cosine")]
    CosineSimilarity,

    /// `sqrt(sum(w * (q - c)^2))`, lower is more similar
    #[serde(rename = "weighted_euclidean")]
    WeightedEuclideanDistance,
}

impl MetricKind {
    /// Configuration name of the metric
    pub fn name(&self) -> &'static str {
        match self {
            Self::CosineSimilarity => "cosine",
            Self::WeightedEuclideanDistance => "weighted_euclidean",
        }
    }

    /// Whether a larger score means a better match
    pub fn higher_is_better(&self) -> bool {
        matches!(self, Self::CosineSimilarity)
    }

    /// Compare two scores so that the better one sorts first
    ///
    /// Exactly equal scores compare as `Equal`; callers break the tie.
    pub fn compare_scores(&self, a: f64, b: f64) -> Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        if self.higher_is_better() {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_metric_name(s) {
            Some("cosine") => Ok(Self::CosineSimilarity),
            Some(_) => Ok(Self::WeightedEuclideanDistance),
            None => Err(ScoutError::config(format!("Unknown metric: {}", s.trim()))),
        }
    }
}

/// How many entries survive truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncationMode {
    /// Keep at most `top_n` entries
    #[default]
    Exact,

    /// Keep at most `top_n + 1` entries
    ///
    /// The query is expected to equal one of the candidates; the caller drops
    /// that self-match and is left with `top_n` real neighbours.
    IncludeSelf,
}

impl TruncationMode {
    /// Result bound for a requested `top_n`
    pub fn limit(&self, top_n: usize) -> usize {
        match self {
            Self::Exact => top_n,
            Self::IncludeSelf => top_n.saturating_add(1),
        }
    }
}

/// Ranked candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Position of the candidate in the candidate set
    pub index: usize,

    /// Metric score (distance or similarity, see [`MetricKind`])
    pub score: f64,
}

impl MatchResult {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }
}
