//! Append-only turn history.
//!
//! One [`HistoryRecord`] per resolved turn, in play order. The turn number
//! of a record is its position plus one, counted across all players.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::dice::DiceRoll;
use super::player::PlayerId;

/// The result of one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Who played the turn.
    pub player: PlayerId,
    /// Points scored this turn; 0 on a Tuple Out.
    pub turn_score: u32,
    /// The player's running total after this turn.
    pub cumulative_score: u32,
    /// Whether the initial roll was a triple.
    pub tuple_out: bool,
    /// Dice at the end of the turn.
    pub dice: DiceRoll,
    /// Rerolls performed.
    pub rerolls: u32,
}

/// Play-ordered turn records.
///
/// Backed by `im::Vector` so snapshots handed to reporting are O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vector<HistoryRecord>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. There is no way to edit or remove one.
    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push_back(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }

    /// Records in play order.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    /// `(turn number, record)` pairs; turn numbers start at 1.
    pub fn turns(&self) -> impl Iterator<Item = (usize, &HistoryRecord)> {
        self.records.iter().enumerate().map(|(i, r)| (i + 1, r))
    }

    /// Records for one seat, in play order.
    pub fn for_player(&self, player: PlayerId) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter().filter(move |r| r.player == player)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryRecord;
    type IntoIter = im::vector::Iter<'a, HistoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
