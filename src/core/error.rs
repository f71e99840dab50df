//! Setup errors.
//!
//! Everything that can go wrong happens before the first roll. Turn
//! resolution itself is infallible.

use thiserror::Error;

/// Rejected game setup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("player count must be a positive integer, got {0:?}")]
    InvalidPlayerCount(String),

    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    #[error("player {seat} has an empty name")]
    EmptyName { seat: usize },

    #[error("target score must be positive")]
    ZeroTarget,

    #[error("reroll cap must be positive when set")]
    ZeroRerollCap,
}

/// Parse a typed player count.
///
/// ```
/// use tuple_out::core::error::{parse_player_count, SetupError};
///
/// assert_eq!(parse_player_count(" 3 "), Ok(3));
/// assert_eq!(parse_player_count("0"), Err(SetupError::NoPlayers));
/// assert!(parse_player_count("three").is_err());
/// ```
pub fn parse_player_count(input: &str) -> Result<usize, SetupError> {
    let trimmed = input.trim();
    let count = trimmed
        .parse::<usize>()
        .map_err(|_| SetupError::InvalidPlayerCount(trimmed.to_string()))?;
    match count {
        0 => Err(SetupError::NoPlayers),
        n if n > super::player::MAX_PLAYERS => Err(SetupError::TooManyPlayers(n)),
        n => Ok(n),
    }
}
