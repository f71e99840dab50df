//! Summary and chart over real game histories.

use tuple_out::core::{GameConfig, GameRng, GameState, ScriptedDice};
use tuple_out::report::{render_chart, render_table, score_series, summarize};
use tuple_out::rules::Stand;

/// Summary of a scripted game matches the turns played.
#[test]
fn test_summary_of_scripted_game() {
    let config = GameConfig::new(["Alice", "Bob"]).with_target_score(20);
    let mut state = GameState::new(&config).unwrap();
    // Alice 4,4,4 tuple out; Bob 6,5,4 = 15; Alice 3,2,1 = 6; Bob 2,2,1 = 5 -> 20
    let mut dice = ScriptedDice::new([4, 4, 4, 6, 5, 4, 3, 2, 1, 2, 2, 1]);

    state.run_game(&mut dice, &mut Stand);
    let rows = summarize(state.history(), state.roster());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Alice");
    assert_eq!(rows[0].turns_played, 2);
    assert_eq!(rows[0].total_score, 6);
    assert_eq!(rows[0].tuple_outs, 1);
    assert_eq!(rows[0].average_score(), 3.0);
    assert_eq!(rows[1].turns_played, 2);
    assert_eq!(rows[1].total_score, 20);
    assert_eq!(rows[1].average_score(), 10.0);

    let table = render_table(&rows);
    assert_eq!(table.lines().count(), 3);
    assert!(table.contains("Tuple Outs"));
}

/// Chart series line up with the history's turn numbers.
#[test]
fn test_chart_covers_every_turn() {
    let config = GameConfig::new(["A", "B", "C"]).with_target_score(40);
    let mut state = GameState::new(&config).unwrap();
    let mut rng = GameRng::new(21);

    state.run_game(&mut rng, &mut Stand);
    let series = score_series(state.history(), state.roster());

    let plotted: usize = series.iter().map(|s| s.points.len()).sum();
    assert_eq!(plotted, state.history().len());
    for s in &series {
        assert!(s.points.windows(2).all(|w| w[0].turn < w[1].turn && w[0].score <= w[1].score));
    }

    let chart = render_chart(&series, 10);
    assert!(chart.starts_with("Player Scores Over Turns"));
    assert!(chart.contains("A = A, B = B, C = C"));
}
