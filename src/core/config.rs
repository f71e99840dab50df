//! Game configuration.
//!
//! A `GameConfig` names the players in turn order and sets the target
//! score. Everything else is optional:
//!
//! - `max_rerolls`: hard cap on rerolls per turn, for non-interactive play
//! - `seed`: dice seed, entropy when absent

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::SetupError;
use super::player::{PlayerMap, Roster, MAX_PLAYERS};

/// Score needed to win when none is given.
pub const DEFAULT_TARGET_SCORE: u32 = 50;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display names in turn order.
    pub players: Vec<String>,

    /// First cumulative score at or above this wins.
    pub target_score: u32,

    /// Maximum rerolls per turn. `None` for unlimited.
    pub max_rerolls: Option<u32>,

    /// Dice seed. `None` to seed from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with the default target score.
    pub fn new<S: Into<String>>(players: impl IntoIterator<Item = S>) -> Self {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            target_score: DEFAULT_TARGET_SCORE,
            max_rerolls: None,
            seed: None,
        }
    }

    /// Set the target score.
    #[must_use]
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    /// Cap rerolls per turn.
    #[must_use]
    pub fn with_max_rerolls(mut self, max: u32) -> Self {
        self.max_rerolls = Some(max);
        self
    }

    /// Fix the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check the configuration and build the seat roster.
    ///
    /// Names are trimmed. Duplicate names are allowed (each seat keeps its
    /// own score) but are reported in the log.
    pub fn validate(&self) -> Result<Roster, SetupError> {
        match self.players.len() {
            0 => return Err(SetupError::NoPlayers),
            n if n > MAX_PLAYERS => return Err(SetupError::TooManyPlayers(n)),
            _ => {}
        }
        if self.target_score == 0 {
            return Err(SetupError::ZeroTarget);
        }
        if self.max_rerolls == Some(0) {
            return Err(SetupError::ZeroRerollCap);
        }

        let mut seen = FxHashSet::default();
        let mut names = Vec::with_capacity(self.players.len());
        for (seat, name) in self.players.iter().enumerate() {
            let name = name.trim();
            if name.is_empty() {
                return Err(SetupError::EmptyName { seat: seat + 1 });
            }
            if !seen.insert(name) {
                log::warn!("duplicate player name {:?}; seats are scored separately", name);
            }
            names.push(name.to_string());
        }
        PlayerMap::from_vec(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(["Alice", "Bob"]);
        assert_eq!(config.target_score, 50);
        assert_eq!(config.max_rerolls, None);
        assert_eq!(config.seed, None);
        assert_eq!(config.player_count(), 2);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(["Alice"])
            .with_target_score(10)
            .with_max_rerolls(3)
            .with_seed(9);

        assert_eq!(config.target_score, 10);
        assert_eq!(config.max_rerolls, Some(3));
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_builds_trimmed_roster() {
        let roster = GameConfig::new([" Alice ", "Bob"]).validate().unwrap();
        assert_eq!(roster.player_count(), 2);
        assert_eq!(roster.name(PlayerId::new(0)), "Alice");
    }

    #[test]
    fn test_validate_rejects_bad_setup() {
        let none: [&str; 0] = [];
        assert_eq!(GameConfig::new(none).validate(), Err(SetupError::NoPlayers));
        assert_eq!(
            GameConfig::new(["Alice", "  "]).validate(),
            Err(SetupError::EmptyName { seat: 2 })
        );
        assert_eq!(
            GameConfig::new(["Alice"]).with_target_score(0).validate(),
            Err(SetupError::ZeroTarget)
        );
        assert_eq!(
            GameConfig::new(["Alice"]).with_max_rerolls(0).validate(),
            Err(SetupError::ZeroRerollCap)
        );
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let roster = GameConfig::new(["Sam", "Sam"]).validate().unwrap();
        assert_eq!(roster.player_count(), 2);
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(["Alice", "Bob"]).with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
