use scoutrank_similarity::MetricKind;
use serde::{Deserialize, Serialize};

/// One neighbour of the scouted player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarPlayer {
    /// Candidate id (roster position)
    pub index: usize,

    /// Player name
    pub name: String,

    /// Team, if known
    pub team: Option<String>,

    /// Raw metric score
    pub score: f64,

    /// Human readable similarity in percent, one decimal
    pub similarity: f64,
}

/// Result of a scouting request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoutingReport {
    /// Name of the scouted player, or `None` for a free-form query vector
    pub target: Option<String>,

    /// Metric used for ranking
    pub metric: MetricKind,

    /// Neighbours, best first
    pub matches: Vec<SimilarPlayer>,
}

impl ScoutingReport {
    pub fn to_json(&self) -> scoutrank_common::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Convert a raw score into a similarity percentage
///
/// Distances lose `distance_scale` points per unit and floor at zero;
/// cosine scores are scaled to percent.
pub fn similarity_percent(metric: MetricKind, score: f64, distance_scale: f64) -> f64 {
    let percent = match metric {
        MetricKind::WeightedEuclideanDistance => (100.0 - score * distance_scale).max(0.0),
        MetricKind::CosineSimilarity => score * 100.0,
    };
    (percent * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_percent_distance() {
        let metric = MetricKind::WeightedEuclideanDistance;
        assert_eq!(similarity_percent(metric, 0.0, 20.0), 100.0);
        assert_eq!(similarity_percent(metric, 0.5, 20.0), 90.0);
        assert_eq!(similarity_percent(metric, 0.123, 20.0), 97.5);
        assert_eq!(similarity_percent(metric, 7.0, 20.0), 0.0);
    }

    #[test]
    fn test_similarity_percent_cosine() {
        let metric = MetricKind::CosineSimilarity;
        assert_eq!(similarity_percent(metric, 1.0, 20.0), 100.0);
        assert_eq!(similarity_percent(metric, std::f64::consts::FRAC_1_SQRT_2, 20.0), 70.7);
        assert_eq!(similarity_percent(metric, -0.5, 20.0), -50.0);
    }

    #[test]
    fn test_report_json() {
        let report = ScoutingReport {
            target: Some("Lautaro Martínez".to_string()),
            metric: MetricKind::WeightedEuclideanDistance,
            matches: vec![],
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("\"metric\": \"weighted_euclidean\""));
        let back: ScoutingReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
