//! Core game types: players, dice, randomness, configuration, history, state.
//!
//! Everything here is independent of how the game is presented. The console
//! front end and the reports only read from these types.

pub mod player;
pub mod dice;
pub mod rng;
pub mod config;
pub mod error;
pub mod history;
pub mod state;

pub use player::{PlayerId, PlayerMap, Roster, MAX_PLAYERS};
pub use dice::{DiceRoll, Face, Hold, Pattern, DICE_COUNT, FACES};
pub use rng::{DiceSource, GameRng, GameRngState, ScriptedDice};
pub use config::{GameConfig, DEFAULT_TARGET_SCORE};
pub use error::{parse_player_count, SetupError};
pub use history::{History, HistoryRecord};
pub use state::{GameState, Phase, TurnReport};
