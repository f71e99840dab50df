//! Interactive terminal front end.
//!
//! Setup prompts, the per-turn reroll question, and the turn narration.
//! Prompts go through `dialoguer`; narration is plain stdout.

use dialoguer::Input;
use thiserror::Error;

use crate::core::{parse_player_count, GameState, SetupError, TurnReport};
use crate::rules::{parse_reroll_answer, RerollContext, RerollDecider};

/// Failure while talking to the terminal.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("terminal error: {0}")]
    Terminal(#[from] dialoguer::Error),

    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// Ask for the player count, then one name per player.
///
/// A count that is not a positive integer is fatal; names must be
/// non-empty and are re-asked until they are.
pub fn prompt_players() -> Result<Vec<String>, ConsoleError> {
    let count: String = Input::new()
        .with_prompt("Enter the number of players")
        .interact_text()?;
    let count = parse_player_count(&count)?;

    (1..=count)
        .map(|seat| {
            Input::<String>::new()
                .with_prompt(format!("Enter name for Player {}", seat))
                .validate_with(|name: &String| -> Result<(), &str> {
                    match name.trim().is_empty() {
                        true => Err("Name cannot be empty"),
                        false => Ok(()),
                    }
                })
                .interact_text()
                .map(|name| name.trim().to_string())
                .map_err(ConsoleError::from)
        })
        .collect()
}

/// Asks the player at the keyboard whether to reroll.
///
/// Shows the dice before each question. Only an explicit "no" stops; see
/// [`parse_reroll_answer`]. If the terminal goes away the turn stops so the
/// game cannot spin on a closed input.
#[derive(Debug, Default)]
pub struct ConsoleDecider;

impl RerollDecider for ConsoleDecider {
    fn reroll(&mut self, ctx: &RerollContext<'_>) -> bool {
        if ctx.rerolls == 0 {
            println!("Initial roll: {}", ctx.dice);
            match ctx.hold.face {
                Some(face) => println!("Fixed dice values: [{}]", face),
                None => println!("No fixed dice values."),
            }
        } else {
            println!("Re-rolled dice: {}", ctx.dice);
        }

        let answer = Input::<String>::new()
            .with_prompt("Do you want to reroll? (yes/no)")
            .allow_empty(true)
            .report(false)
            .interact_text();
        match answer {
            Ok(answer) => parse_reroll_answer(&answer),
            Err(e) => {
                log::warn!("reroll prompt failed, standing: {}", e);
                false
            }
        }
    }
}

/// Opening line.
pub fn announce_game(state: &GameState) {
    println!(
        "Welcome to Tuple Out! First to {} points wins.",
        state.target_score()
    );
}

/// Header printed before the current seat rolls.
pub fn announce_turn(state: &GameState) {
    println!("\n{}'s turn!", state.name(state.current_player()));
}

/// Narrate a finished turn.
pub fn report_turn(state: &GameState, report: &TurnReport) {
    let name = state.name(report.record.player);
    if report.outcome.is_tuple_out() {
        println!("Initial roll: {}", report.outcome.initial);
        println!("Tuple Out! No points this turn.");
    } else {
        if report.outcome.rerolls > 0 {
            println!("Final dice: {}", report.outcome.dice);
        }
        if report.outcome.capped {
            println!("Reroll limit reached.");
        }
        println!(
            "{} scores {} points this turn! (Cumulative: {})",
            name, report.record.turn_score, report.record.cumulative_score
        );
    }
    if let Some(winner) = report.winner {
        println!(
            "\nCongratulations, {} wins with {} points!",
            state.name(winner),
            state.score(winner)
        );
    }
}
