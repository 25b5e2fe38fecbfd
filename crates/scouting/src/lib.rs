//! scoutrank player scouting
//!
//! Maps player names to roster positions, runs the similarity engine and
//! turns positional results back into named, human readable matches.

mod report;
mod roster;
mod service;

pub use report::{similarity_percent, ScoutingReport, SimilarPlayer};
pub use roster::{fold_name, PlayerProfile, Roster};
pub use service::ScoutingService;

// Re-export engine types callers need alongside the service
pub use scoutrank_similarity::{MatchResult, MetricKind};
