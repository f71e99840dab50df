//! Turn rules.
//!
//! `TurnEngine` resolves a single turn against an injected dice source and
//! an injected `RerollDecider`:
//! - The engine owns the dice rules (Tuple Out, holding a pair, rerolls)
//! - The decider owns the choice to keep rolling
//!
//! `GameState` calls into the engine but never looks at dice itself.

pub mod decider;
pub mod engine;

pub use decider::{parse_reroll_answer, RerollBelow, ScriptedDecider, Stand, STOP_ANSWER};
pub use engine::{RerollContext, RerollDecider, TurnEngine, TurnOutcome};
