//! Per-player game statistics.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::core::{History, PlayerId, Roster};

/// Statistics for one seat over a game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// Seat.
    pub player: PlayerId,

    /// Display name.
    pub name: String,

    /// Turns the player took.
    pub turns_played: u32,

    /// Highest cumulative score reached (the final total).
    pub total_score: u32,

    /// Sum of turn scores, Tuple Outs included as 0.
    pub points: u32,

    /// Turns that ended in a Tuple Out.
    pub tuple_outs: u32,
}

impl PlayerSummary {
    /// Mean points per turn.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.turns_played == 0 {
            0.0
        } else {
            self.points as f64 / self.turns_played as f64
        }
    }
}

/// Summarize a history, one row per seat in seat order.
///
/// Seats that never took a turn are left out.
#[must_use]
pub fn summarize(history: &History, roster: &Roster) -> Vec<PlayerSummary> {
    let mut rows: Vec<PlayerSummary> = roster
        .iter()
        .map(|(player, name)| PlayerSummary {
            player,
            name: name.clone(),
            ..PlayerSummary::default()
        })
        .collect();

    for record in history {
        let row = &mut rows[record.player.index()];
        row.turns_played += 1;
        row.points += record.turn_score;
        row.total_score = row.total_score.max(record.cumulative_score);
        if record.tuple_out {
            row.tuple_outs += 1;
        }
    }

    rows.retain(|row| row.turns_played > 0);
    rows
}

/// Render summaries as a fixed-width table.
#[must_use]
pub fn render_table(rows: &[PlayerSummary]) -> String {
    let width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("Player".len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}  {:>12}  {:>11}  {:>13}  {:>10}",
        "Player", "Turns Played", "Total Score", "Average Score", "Tuple Outs"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<width$}  {:>12}  {:>11}  {:>13.2}  {:>10}",
            row.name,
            row.turns_played,
            row.total_score,
            row.average_score(),
            row.tuple_outs
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DiceRoll, HistoryRecord};

    fn push(history: &mut History, player: u8, turn_score: u32, cumulative_score: u32) {
        history.push(HistoryRecord {
            player: PlayerId::new(player),
            turn_score,
            cumulative_score,
            tuple_out: turn_score == 0,
            dice: DiceRoll::from_values([2, 2, 2]).unwrap(),
            rerolls: 0,
        });
    }

    #[test]
    fn test_average_score_empty() {
        assert_eq!(PlayerSummary::default().average_score(), 0.0);
    }

    #[test]
    fn test_summarize() {
        let roster = Roster::from_vec(vec!["Alice".into(), "Bob".into(), "Cy".into()]).unwrap();
        let mut history = History::new();
        push(&mut history, 0, 0, 0);
        push(&mut history, 1, 12, 12);
        push(&mut history, 0, 9, 9);
        push(&mut history, 1, 0, 12);

        let rows = summarize(&history, &roster);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Alice");
        assert_eq!(rows[0].turns_played, 2);
        assert_eq!(rows[0].total_score, 9);
        assert_eq!(rows[0].average_score(), 4.5);
        assert_eq!(rows[0].tuple_outs, 1);
        assert_eq!(rows[1].total_score, 12);
        assert_eq!(rows[1].tuple_outs, 1);
    }

    #[test]
    fn test_render_table() {
        let rows = vec![PlayerSummary {
            player: PlayerId::new(0),
            name: "Alice".into(),
            turns_played: 2,
            total_score: 9,
            points: 9,
            tuple_outs: 1,
        }];

        let table = render_table(&rows);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Player"));
        assert!(lines[1].starts_with("Alice "));
        assert!(lines[1].contains("4.50"));
    }
}
