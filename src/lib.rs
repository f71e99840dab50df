//! # tuple-out
//!
//! The Tuple Out dice game: roll three dice, hold a pair, reroll the rest,
//! and race to a target score. Three of a kind on the opening roll is a
//! "Tuple Out" and the turn scores nothing.
//!
//! ## Design Principles
//!
//! 1. **Injected chance**: dice come from a `DiceSource`, so every game can
//!    be replayed from a seed or a scripted sequence.
//!
//! 2. **Injected choice**: whether to reroll is asked of a `RerollDecider`.
//!    The terminal is just one decider among several.
//!
//! 3. **History as data**: every turn becomes an append-only
//!    `HistoryRecord`; reports are pure functions over the history.
//!
//! ## Modules
//!
//! - `core`: players, dice, randomness, configuration, history, game state
//! - `rules`: single-turn resolution and reroll deciders
//! - `report`: summary table and score chart
//! - `console`: terminal prompts and narration (feature `cli`)

pub mod core;
pub mod rules;
pub mod report;

#[cfg(feature = "cli")]
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Roster,
    DiceRoll, Face, Hold, Pattern,
    DiceSource, GameRng, GameRngState, ScriptedDice,
    GameConfig, SetupError,
    History, HistoryRecord,
    GameState, Phase, TurnReport,
};

pub use crate::rules::{
    RerollContext, RerollDecider, TurnEngine, TurnOutcome,
    ScriptedDecider, Stand, RerollBelow, parse_reroll_answer,
};

pub use crate::report::{PlayerSummary, ScoreSeries, summarize, score_series};
