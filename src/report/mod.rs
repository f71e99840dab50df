//! Reports over a finished (or running) game's history.
//!
//! Both reports are pure functions of the history and roster, with no access
//! to the engine or game state:
//! - `summary`: per-player statistics table
//! - `chart`: cumulative score series and a text line chart

pub mod chart;
pub mod summary;

pub use chart::{marker, render_chart, score_series, ScorePoint, ScoreSeries};
pub use summary::{render_table, summarize, PlayerSummary};
