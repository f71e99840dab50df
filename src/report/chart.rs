//! Cumulative score over turns.
//!
//! [`score_series`] turns a history into one series per seat of
//! `(turn number, cumulative score)` points. [`render_chart`] draws those
//! series as a text plot: turn numbers run left to right, scores bottom to
//! top, and each seat is marked with its own symbol.

use serde::{Deserialize, Serialize};

use crate::core::{History, PlayerId, Roster};

/// Symbols used to mark seats, cycled for large tables.
const MARKERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Marker for cells where several seats land.
const OVERLAP: char = '*';

/// A single plotted point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePoint {
    /// Game-wide turn number, starting at 1.
    pub turn: usize,
    /// Cumulative score after that turn.
    pub score: u32,
}

/// One seat's line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSeries {
    pub player: PlayerId,
    pub name: String,
    pub points: Vec<ScorePoint>,
}

/// Build one series per seat, in seat order.
#[must_use]
pub fn score_series(history: &History, roster: &Roster) -> Vec<ScoreSeries> {
    let mut points: Vec<Vec<ScorePoint>> = vec![Vec::new(); roster.player_count()];
    for (turn, record) in history.turns() {
        points[record.player.index()].push(ScorePoint {
            turn,
            score: record.cumulative_score,
        });
    }
    roster
        .iter()
        .zip(points)
        .map(|((player, name), points)| ScoreSeries {
            player,
            name: name.clone(),
            points,
        })
        .collect()
}

/// Marker character for a seat.
#[must_use]
pub fn marker(player: PlayerId) -> char {
    MARKERS[player.index() % MARKERS.len()] as char
}

/// Draw series as a text chart `height` rows tall.
///
/// Each turn takes three columns. Returns an empty string when there is
/// nothing to plot.
#[must_use]
pub fn render_chart(series: &[ScoreSeries], height: usize) -> String {
    let turns = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.turn))
        .max()
        .unwrap_or(0);
    if turns == 0 || height == 0 {
        return String::new();
    }
    let top = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.score))
        .max()
        .unwrap_or(0)
        .max(1);

    let mut grid = vec![vec![' '; turns * 3]; height];
    for s in series {
        let mark = marker(s.player);
        for p in &s.points {
            let row = height - 1 - scale(p.score, top, height);
            let col = (p.turn - 1) * 3 + 1;
            let cell = &mut grid[row][col];
            *cell = if *cell == ' ' { mark } else { OVERLAP };
        }
    }

    let label_width = top.to_string().len();
    let mut out = String::from("Player Scores Over Turns\n");
    for (i, row) in grid.iter().enumerate() {
        let label = match i {
            0 => top.to_string(),
            i if i == height - 1 => "0".to_string(),
            _ => String::new(),
        };
        let line: String = row.iter().collect();
        out.push_str(&format!("{:>label_width$} |{}\n", label, line.trim_end()));
    }
    out.push_str(&format!("{:>label_width$} +{}\n", "", "-".repeat(turns * 3)));
    let axis: String = (1..=turns).map(|t| format!("{:^3}", t % 100)).collect();
    out.push_str(&format!("{:>label_width$}  {}\n", "", axis.trim_end()));

    let legend: Vec<String> = series
        .iter()
        .map(|s| format!("{} = {}", marker(s.player), s.name))
        .collect();
    out.push_str(&format!("Turn Number; {}\n", legend.join(", ")));
    out
}

fn scale(score: u32, top: u32, height: usize) -> usize {
    let rows = (height - 1) as u64;
    ((u64::from(score) * rows + u64::from(top) / 2) / u64::from(top)) as usize
}
