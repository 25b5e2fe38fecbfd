use crate::error::ScoutError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canonical metric names
pub const METRIC_NAMES: [&str; 2] = ["weighted_euclidean", "cosine"];

/// Map a metric name or alias to its canonical name
///
/// Case and surrounding whitespace are ignored.
pub fn canonical_metric_name(name: &str) -> Option<&'static str> {
    match name.trim().to_lowercase().as_str() {
        "weighted_euclidean" | "euclidean" | "weighted_euclidean_distance" => {
            Some("weighted_euclidean")
        }
        "cosine" | "cosine_similarity" => Some("cosine"),
        _ => None,
    }
}

/// scoutrank configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Number of matches returned when the caller does not ask for a count
    pub default_top_n: usize,

    /// Similarity metric name (`weighted_euclidean` or `cosine`)
    pub metric: String,

    /// Per-feature weights; `None` means every feature counts once
    pub weights: Option<Vec<f64>>,

    /// Multiplier turning a distance into a percentage penalty
    pub distance_scale: f64,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            default_top_n: 5,
            metric: "weighted_euclidean".to_string(),
            weights: None,
            distance_scale: 20.0,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl ScoutConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, ScoutError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// Missing variables fall back to the defaults; present but malformed
    /// values are reported as configuration errors.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ScoutError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_top_n = match lookup("SCOUT_TOP_N") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ScoutError::config(format!("SCOUT_TOP_N is not a positive integer: {}", raw))
            })?,
            None => defaults.default_top_n,
        };

        let distance_scale = match lookup("SCOUT_DISTANCE_SCALE") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ScoutError::config(format!("SCOUT_DISTANCE_SCALE is not a number: {}", raw))
            })?,
            None => defaults.distance_scale,
        };

        let weights = match lookup("SCOUT_WEIGHTS") {
            Some(raw) if !raw.trim().is_empty() => Some(parse_weights(&raw)?),
            _ => None,
        };

        let config = Self {
            default_top_n,
            metric: lookup("SCOUT_METRIC")
                .map(|m| {
                    canonical_metric_name(&m)
                        .map(str::to_string)
                        .unwrap_or_else(|| m.trim().to_lowercase())
                })
                .unwrap_or(defaults.metric),
            weights,
            distance_scale,
            log_dir: lookup("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.log_dir),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ScoutError> {
        if self.default_top_n == 0 {
            return Err(ScoutError::config("Default top_n must be at least 1"));
        }

        if canonical_metric_name(&self.metric).is_none() {
            return Err(ScoutError::config(format!(
                "Unknown metric '{}', expected one of {:?}",
                self.metric, METRIC_NAMES
            )));
        }

        if let Some(weights) = &self.weights {
            if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
                return Err(ScoutError::config(format!(
                    "Weights must be finite and non-negative, got {}",
                    bad
                )));
            }
        }

        if !self.distance_scale.is_finite() || self.distance_scale <= 0.0 {
            return Err(ScoutError::config("Distance scale must be a positive number"));
        }

        if self.log_level.trim().is_empty() {
            return Err(ScoutError::config("Log level cannot be empty"));
        }

        Ok(())
    }
}

/// Parse a comma-separated weight list such as `0.5, 0.5, 1.5, 1.0`
pub fn parse_weights(raw: &str) -> Result<Vec<f64>, ScoutError> {
    raw.split(',')
        .map(|part| {
            part.trim().parse::<f64>().map_err(|_| {
                ScoutError::config(format!("Invalid weight '{}' in '{}'", part.trim(), raw))
            })
        })
        .collect()
}
