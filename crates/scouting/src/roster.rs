use scoutrank_common::{Result, ScoutError};
use serde::{Deserialize, Serialize};
use tracing::warn;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// One player of the roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Display name
    pub name: String,

    /// Team the player mostly played for
    #[serde(default)]
    pub team: Option<String>,

    /// Already-engineered feature vector
    pub features: Vec<f64>,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, team: Option<String>, features: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            team,
            features,
        }
    }
}

/// Ordered player collection; a player's position is its candidate id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<PlayerProfile>,

    #[serde(skip)]
    folded_names: Vec<String>,
}

impl Roster {
    /// Create roster, keeping the given order
    pub fn new(players: Vec<PlayerProfile>) -> Self {
        let folded_names = players.iter().map(|p| fold_name(&p.name)).collect();
        Self {
            players,
            folded_names,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get player by candidate id
    pub fn get(&self, index: usize) -> Option<&PlayerProfile> {
        self.players.get(index)
    }

    pub fn players(&self) -> &[PlayerProfile] {
        &self.players
    }

    /// Borrowed candidate matrix in roster order
    pub fn features(&self) -> Vec<&[f64]> {
        self.players.iter().map(|p| p.features.as_slice()).collect()
    }

    /// Resolve a player name to its candidate id
    ///
    /// Matching ignores accents, case and surrounding whitespace. An exact
    /// match wins; otherwise the first player, in roster order, whose name
    /// contains the query.
    pub fn find(&self, name: &str) -> Result<usize> {
        let needle = fold_name(name);
        if needle.is_empty() {
            return Err(ScoutError::invalid_input("Player name cannot be empty"));
        }

        let folded = self.folded();

        if let Some(idx) = folded.iter().position(|n| *n == needle) {
            return Ok(idx);
        }

        match folded.iter().position(|n| n.contains(&needle)) {
            Some(idx) => {
                warn!(
                    "No exact match for '{}', using '{}'",
                    name, self.players[idx].name
                );
                Ok(idx)
            }
            None => Err(ScoutError::not_found(format!("Player '{}' not in roster", name))),
        }
    }

    // Deserialized rosters carry no folded names yet
    fn folded(&self) -> std::borrow::Cow<'_, [String]> {
        if self.folded_names.len() == self.players.len() {
            std::borrow::Cow::Borrowed(&self.folded_names[..])
        } else {
            std::borrow::Cow::Owned(self.players.iter().map(|p| fold_name(&p.name)).collect())
        }
    }
}

impl From<Vec<PlayerProfile>> for Roster {
    fn from(players: Vec<PlayerProfile>) -> Self {
        Self::new(players)
    }
}

/// Strip accents, lowercase and trim a player name
pub fn fold_name(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}
