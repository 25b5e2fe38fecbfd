//! scoutrank similarity ranking engine
//!
//! Ranks a fixed candidate set against a query feature vector under cosine
//! similarity or weighted Euclidean distance. Pure and stateless: every call
//! reads its inputs, scores every candidate and returns positional ids only.

mod engine;
pub mod metric;
mod types;

pub use engine::{rank, rank_with_mode};
pub use types::{FeatureVector, MatchResult, MetricKind, RankedResultList, TruncationMode};
