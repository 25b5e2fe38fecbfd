use scoutrank_common::{Result, ScoutConfig, ScoutError};
use scoutrank_similarity::{rank_with_mode, MetricKind, RankedResultList, TruncationMode};
use tracing::{debug, info};

use crate::report::{similarity_percent, ScoutingReport, SimilarPlayer};
use crate::roster::Roster;

/// Player scouting on top of the ranking engine
///
/// Holds configuration only; the roster is passed per call, so one service
/// can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct ScoutingService {
    metric: MetricKind,
    weights: Option<Vec<f64>>,
    default_top_n: usize,
    distance_scale: f64,
}

impl ScoutingService {
    /// Create new scouting service
    pub fn new(config: &ScoutConfig) -> Result<Self> {
        config.validate()?;
        let metric: MetricKind = config.metric.parse()?;

        info!(
            "Scouting service initialized - metric={}, default_top_n={}, weighted={}",
            metric,
            config.default_top_n,
            config.weights.is_some()
        );

        Ok(Self {
            metric,
            weights: config.weights.clone(),
            default_top_n: config.default_top_n,
            distance_scale: config.distance_scale,
        })
    }

    /// Use a different metric than the configured one
    pub fn with_metric(mut self, metric: MetricKind) -> Self {
        self.metric = metric;
        self
    }

    pub fn metric(&self) -> MetricKind {
        self.metric
    }

    /// Find the players most similar to `player_name`
    ///
    /// The scouted player is never part of the matches.
    pub fn find_similar(
        &self,
        roster: &Roster,
        player_name: &str,
        top_n: Option<usize>,
    ) -> Result<ScoutingReport> {
        let top_n = top_n.unwrap_or(self.default_top_n);
        debug!(
            "Scouting for: {} (top_n={}, metric={})",
            player_name, top_n, self.metric
        );

        let target_idx = roster.find(player_name)?;
        let target = roster
            .get(target_idx)
            .ok_or_else(|| ScoutError::internal(format!("Roster index {} vanished", target_idx)))?;

        let ranked = self.rank(roster, &target.features, top_n, TruncationMode::IncludeSelf)?;

        let mut matches = self.to_players(roster, ranked, Some(target_idx))?;
        matches.truncate(top_n);

        info!(
            "Scouting completed for '{}' - {} matches (from {} candidates)",
            target.name,
            matches.len(),
            roster.len()
        );

        Ok(ScoutingReport {
            target: Some(target.name.clone()),
            metric: self.metric,
            matches,
        })
    }

    /// Rank the roster against an arbitrary feature vector
    pub fn find_similar_to_vector(
        &self,
        roster: &Roster,
        query: &[f64],
        top_n: Option<usize>,
    ) -> Result<ScoutingReport> {
        let top_n = top_n.unwrap_or(self.default_top_n);
        debug!("Scouting for free-form vector (top_n={}, metric={})", top_n, self.metric);

        let ranked = self.rank(roster, query, top_n, TruncationMode::Exact)?;
        let matches = self.to_players(roster, ranked, None)?;

        info!(
            "Scouting completed - {} matches (from {} candidates)",
            matches.len(),
            roster.len()
        );

        Ok(ScoutingReport {
            target: None,
            metric: self.metric,
            matches,
        })
    }

    fn rank(
        &self,
        roster: &Roster,
        query: &[f64],
        top_n: usize,
        mode: TruncationMode,
    ) -> Result<RankedResultList> {
        let candidates = roster.features();
        rank_with_mode(
            query,
            &candidates,
            self.metric,
            self.weights.as_deref(),
            top_n,
            mode,
        )
    }

    fn to_players(
        &self,
        roster: &Roster,
        ranked: RankedResultList,
        skip: Option<usize>,
    ) -> Result<Vec<SimilarPlayer>> {
        ranked
            .into_iter()
            .filter(|m| Some(m.index) != skip)
            .map(|m| {
                let player = roster.get(m.index).ok_or_else(|| {
                    ScoutError::internal(format!("Ranked index {} outside roster", m.index))
                })?;
                Ok(SimilarPlayer {
                    index: m.index,
                    name: player.name.clone(),
                    team: player.team.clone(),
                    score: m.score,
                    similarity: similarity_percent(self.metric, m.score, self.distance_scale),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::PlayerProfile;

    fn roster() -> Roster {
        Roster::new(vec![
            PlayerProfile::new("Lautaro Martínez", Some("Inter".into()), vec![0.9, 0.8, 0.9, 0.7]),
            PlayerProfile::new("Christian Pulisic", Some("Milan".into()), vec![0.5, 0.7, 0.4, 0.5]),
            PlayerProfile::new("Dušan Vlahović", Some("Juventus".into()), vec![0.8, 0.3, 0.9, 0.8]),
            PlayerProfile::new("Rafael Leão", Some("Milan".into()), vec![0.5, 0.6, 0.5, 0.4]),
            PlayerProfile::new("Marcus Thuram", Some("Inter".into()), vec![0.7, 0.6, 0.8, 0.6]),
        ])
    }

    fn service(metric: &str) -> ScoutingService {
        let config = ScoutConfig {
            metric: metric.to_string(),
            weights: Some(vec![0.5, 0.5, 1.5, 1.0]),
            ..ScoutConfig::default()
        };
        ScoutingService::new(&config).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ScoutConfig {
            default_top_n: 0,
            ..ScoutConfig::default()
        };
        assert!(ScoutingService::new(&config).is_err());
    }

    #[test]
    fn test_find_similar_excludes_target() {
        let report = service("weighted_euclidean")
            .find_similar(&roster(), "lautaro martinez", Some(2))
            .unwrap();

        assert_eq!(report.target.as_deref(), Some("Lautaro Martínez"));
        assert_eq!(report.matches.len(), 2);
        assert!(report.matches.iter().all(|m| m.index != 0));
        assert_eq!(report.matches[0].name, "Marcus Thuram");
        assert!(report.matches[0].score <= report.matches[1].score);
    }

    #[test]
    fn test_find_similar_uses_default_top_n() {
        let report = service("weighted_euclidean")
            .find_similar(&roster(), "Pulisic", None)
            .unwrap();
        // five players minus the target
        assert_eq!(report.matches.len(), 4);
    }

    #[test]
    fn test_find_similar_percentages() {
        let report = service("weighted_euclidean")
            .find_similar(&roster(), "Rafael Leao", Some(1))
            .unwrap();
        let best = &report.matches[0];
        assert_eq!(best.name, "Christian Pulisic");
        let expected = ((100.0 - best.score * 20.0) * 10.0).round() / 10.0;
        assert_eq!(best.similarity, expected);
    }

    #[test]
    fn test_find_similar_cosine() {
        let report = service("cosine")
            .find_similar(&roster(), "Thuram", Some(3))
            .unwrap();
        assert_eq!(report.metric, MetricKind::CosineSimilarity);
        assert_eq!(report.matches.len(), 3);
        for pair in report.matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_unknown_player() {
        let err = service("cosine")
            .find_similar(&roster(), "Osimhen", Some(3))
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_weight_dimension_mismatch_propagates() {
        let config = ScoutConfig {
            weights: Some(vec![1.0, 1.0]),
            ..ScoutConfig::default()
        };
        let err = ScoutingService::new(&config)
            .unwrap()
            .find_similar(&roster(), "Leao", Some(2))
            .unwrap_err();
        assert!(matches!(err, ScoutError::InvalidInput(_)));
    }

    #[test]
    fn test_find_similar_to_vector_keeps_exact_match() {
        let report = service("weighted_euclidean")
            .find_similar_to_vector(&roster(), &[0.8, 0.3, 0.9, 0.8], Some(2))
            .unwrap();
        assert!(report.target.is_none());
        assert_eq!(report.matches[0].name, "Dušan Vlahović");
        assert_eq!(report.matches[0].similarity, 100.0);
        assert_eq!(report.matches.len(), 2);
    }

    #[test]
    fn test_with_metric_override() {
        let svc = service("weighted_euclidean").with_metric(MetricKind::CosineSimilarity);
        assert_eq!(svc.metric(), MetricKind::CosineSimilarity);
    }
}
