//! Game state: scores, rotation, win detection and history.
//!
//! ## Turn loop
//!
//! `GameState` is a two-state machine. While *awaiting turn* it plays the
//! current seat ([`GameState::take_turn`]), checks for a winner, and either
//! moves to *game over* or passes the turn on ([`GameState::advance_turn`]).
//! [`GameState::run_game`] drives that loop to the end.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::SetupError;
use super::history::{History, HistoryRecord};
use super::player::{PlayerId, PlayerMap, Roster};
use super::rng::DiceSource;
use crate::rules::{RerollDecider, TurnEngine, TurnOutcome};

/// Where the turn loop stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The current seat is next to roll.
    AwaitingTurn,
    /// This seat reached the target score.
    GameOver { winner: PlayerId },
}

/// The result of one step of the turn loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// How the turn played out.
    pub outcome: TurnOutcome,
    /// The history entry it produced.
    pub record: HistoryRecord,
    /// Set when this turn ended the game.
    pub winner: Option<PlayerId>,
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    roster: Roster,
    scores: PlayerMap<u32>,
    current: PlayerId,
    target_score: u32,
    phase: Phase,
    history: History,
    engine: TurnEngine,
}

impl GameState {
    /// Start a game from a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self, SetupError> {
        let roster = config.validate()?;
        let scores = PlayerMap::with_value(roster.player_count(), 0)?;
        let engine = match config.max_rerolls {
            Some(max) => TurnEngine::with_max_rerolls(max),
            None => TurnEngine::new(),
        };
        log::info!(
            "new game: {} players, target {}",
            roster.player_count(),
            config.target_score
        );
        Ok(Self {
            roster,
            scores,
            current: PlayerId::new(0),
            target_score: config.target_score,
            phase: Phase::AwaitingTurn,
            history: History::new(),
            engine,
        })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.player_count()
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Display name for a seat.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        self.roster.name(player)
    }

    /// Cumulative score for a seat.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// Seat whose turn is next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Play one turn for `player` and record it.
    ///
    /// The turn's score is added to the player's total and the resulting
    /// record is appended to the history.
    pub fn take_turn<S, R>(
        &mut self,
        player: PlayerId,
        dice: &mut S,
        decider: &mut R,
    ) -> (TurnOutcome, HistoryRecord)
    where
        S: DiceSource + ?Sized,
        R: RerollDecider + ?Sized,
    {
        let outcome = self.engine.resolve(player, dice, decider);
        let turn_score = outcome.turn_score();
        self.scores[player] += turn_score;

        let record = HistoryRecord {
            player,
            turn_score,
            cumulative_score: self.scores[player],
            tuple_out: outcome.is_tuple_out(),
            dice: outcome.dice,
            rerolls: outcome.rerolls,
        };
        log::info!(
            "turn {}: {} scored {} (total {}){}",
            self.history.len() + 1,
            self.roster.name(player),
            record.turn_score,
            record.cumulative_score,
            if record.tuple_out { ", tuple out" } else { "" }
        );
        self.history.push(record.clone());
        (outcome, record)
    }

    /// First seat, in seat order, at or above the target score.
    #[must_use]
    pub fn check_winner(&self) -> Option<PlayerId> {
        self.scores
            .iter()
            .find(|(_, score)| **score >= self.target_score)
            .map(|(player, _)| player)
    }

    /// Pass the turn to the next seat, wrapping around.
    pub fn advance_turn(&mut self) {
        self.current = self.current.next(self.player_count());
    }

    /// One step of the turn loop for the current seat.
    ///
    /// Returns `None` once the game is over.
    pub fn play_turn<S, R>(&mut self, dice: &mut S, decider: &mut R) -> Option<TurnReport>
    where
        S: DiceSource + ?Sized,
        R: RerollDecider + ?Sized,
    {
        if self.is_over() {
            return None;
        }
        let (outcome, record) = self.take_turn(self.current, dice, decider);
        let winner = self.check_winner();
        match winner {
            Some(winner) => {
                log::info!(
                    "{} wins with {} points",
                    self.roster.name(winner),
                    self.scores[winner]
                );
                self.phase = Phase::GameOver { winner };
            }
            None => self.advance_turn(),
        }
        Some(TurnReport {
            outcome,
            record,
            winner,
        })
    }

    /// Play turns until someone reaches the target score.
    ///
    /// Terminates only when a winner is found; pair with a capped engine or
    /// a decider that eventually stands when running unattended.
    pub fn run_game<S, R>(&mut self, dice: &mut S, decider: &mut R) -> PlayerId
    where
        S: DiceSource + ?Sized,
        R: RerollDecider + ?Sized,
    {
        loop {
            if let Phase::GameOver { winner } = self.phase {
                return winner;
            }
            self.play_turn(dice, decider);
        }
    }
}
