//! Reroll deciders that need no terminal.
//!
//! The interactive one lives in the console front end and shares
//! [`parse_reroll_answer`] with these.

use std::collections::VecDeque;

use super::engine::{RerollContext, RerollDecider};

/// The one answer that stops rerolling.
pub const STOP_ANSWER: &str = "no";

/// Interpret a typed answer to "reroll? (yes/no)".
///
/// The answer is trimmed and lowercased. Only an exact `no` stops; anything
/// else, including an empty line or a typo, means reroll again.
///
/// ```
/// use tuple_out::rules::parse_reroll_answer;
///
/// assert!(!parse_reroll_answer(" No "));
/// assert!(parse_reroll_answer("yes"));
/// assert!(parse_reroll_answer("n"));
/// assert!(parse_reroll_answer(""));
/// ```
#[must_use]
pub fn parse_reroll_answer(input: &str) -> bool {
    input.trim().to_lowercase() != STOP_ANSWER
}

/// Never rerolls.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stand;

impl RerollDecider for Stand {
    fn reroll(&mut self, _ctx: &RerollContext<'_>) -> bool {
        false
    }
}

/// Plays back a fixed list of decisions, then stands.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecider {
    answers: VecDeque<bool>,
    asked: usize,
}

impl ScriptedDecider {
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: 0,
        }
    }

    /// Script from typed answers, interpreted like console input.
    #[must_use]
    pub fn from_answers<'a>(answers: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(answers.into_iter().map(parse_reroll_answer))
    }

    /// Times this decider was consulted.
    #[must_use]
    pub fn asked(&self) -> usize {
        self.asked
    }

    /// Decisions not yet used.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl RerollDecider for ScriptedDecider {
    fn reroll(&mut self, _ctx: &RerollContext<'_>) -> bool {
        self.asked += 1;
        self.answers.pop_front().unwrap_or(false)
    }
}

/// Rerolls while the dice total is below a threshold.
///
/// A simple automatic player for simulations and seat fill-ins. A held pair
/// of ones never totals more than 8, so thresholds above 8 need a reroll
/// cap on the engine to be sure of ending.
#[derive(Clone, Copy, Debug)]
pub struct RerollBelow(pub u32);

impl RerollDecider for RerollBelow {
    fn reroll(&mut self, ctx: &RerollContext<'_>) -> bool {
        ctx.dice.total() < self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::{DiceRoll, Hold};
    use crate::core::PlayerId;

    fn ctx_for<'a>(hold: &'a Hold, values: [u8; 3]) -> RerollContext<'a> {
        RerollContext {
            player: PlayerId::new(0),
            dice: DiceRoll::from_values(values).unwrap(),
            hold,
            rerolls: 0,
        }
    }

    #[test]
    fn test_parse_reroll_answer_quirk() {
        assert!(!parse_reroll_answer("no"));
        assert!(!parse_reroll_answer("NO"));
        assert!(!parse_reroll_answer("  no\n"));

        assert!(parse_reroll_answer("yes"));
        assert!(parse_reroll_answer("nope"));
        assert!(parse_reroll_answer("n o"));
        assert!(parse_reroll_answer("maybe"));
        assert!(parse_reroll_answer(""));
    }

    #[test]
    fn test_scripted_decider_stands_when_exhausted() {
        let hold = Hold::default();
        let ctx = ctx_for(&hold, [1, 2, 3]);
        let mut decider = ScriptedDecider::new([true, false]);

        assert!(decider.reroll(&ctx));
        assert!(!decider.reroll(&ctx));
        assert!(!decider.reroll(&ctx));
        assert_eq!(decider.asked(), 3);
        assert_eq!(decider.remaining(), 0);
    }

    #[test]
    fn test_scripted_decider_from_answers() {
        let hold = Hold::default();
        let ctx = ctx_for(&hold, [1, 2, 3]);
        let mut decider = ScriptedDecider::from_answers(["yes", "", "No"]);

        assert!(decider.reroll(&ctx));
        assert!(decider.reroll(&ctx));
        assert!(!decider.reroll(&ctx));
    }

    #[test]
    fn test_reroll_below() {
        let hold = Hold::default();
        let mut decider = RerollBelow(12);

        assert!(decider.reroll(&ctx_for(&hold, [1, 2, 3])));
        assert!(!decider.reroll(&ctx_for(&hold, [6, 5, 1])));
        assert!(!Stand.reroll(&ctx_for(&hold, [1, 2, 3])));
    }
}
