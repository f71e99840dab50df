//! Turn resolution.
//!
//! One turn goes:
//!
//! 1. Roll three dice.
//! 2. All three equal: Tuple Out, the turn scores 0 and ends.
//! 3. Otherwise lock the pair if there is one; every other die is free.
//! 4. Ask the decider whether to reroll. On yes, reroll the free dice and ask
//!    again; on no (or when the reroll cap is hit), stop.
//! 5. The turn scores the sum of the final dice.
//!
//! The locked positions are decided once, from the initial roll.

use crate::core::dice::{DiceRoll, Hold};
use crate::core::player::PlayerId;
use crate::core::rng::DiceSource;

/// What a decider sees each time it is asked.
#[derive(Clone, Copy, Debug)]
pub struct RerollContext<'a> {
    /// Who is rolling.
    pub player: PlayerId,
    /// Dice as they stand now.
    pub dice: DiceRoll,
    /// Positions that will not be rerolled.
    pub hold: &'a Hold,
    /// Rerolls already performed this turn.
    pub rerolls: u32,
}

/// Decides whether to keep rerolling.
///
/// Closures `FnMut(&RerollContext) -> bool` are deciders.
pub trait RerollDecider {
    /// `true` to reroll the free dice, `false` to stop and score.
    fn reroll(&mut self, ctx: &RerollContext<'_>) -> bool;
}

impl<F> RerollDecider for F
where
    F: FnMut(&RerollContext<'_>) -> bool,
{
    fn reroll(&mut self, ctx: &RerollContext<'_>) -> bool {
        self(ctx)
    }
}

/// A resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The first roll of the turn.
    pub initial: DiceRoll,
    /// Dice when the turn ended.
    pub dice: DiceRoll,
    /// Positions locked for the turn.
    pub hold: Hold,
    /// Rerolls performed.
    pub rerolls: u32,
    /// The initial roll was a triple.
    pub tuple_out: bool,
    /// Rerolling stopped because the cap was reached.
    pub capped: bool,
}

impl TurnOutcome {
    /// Points for the turn.
    #[must_use]
    pub fn turn_score(&self) -> u32 {
        if self.tuple_out {
            0
        } else {
            self.dice.total()
        }
    }

    #[must_use]
    pub fn is_tuple_out(&self) -> bool {
        self.tuple_out
    }
}

/// Resolves single turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnEngine {
    max_rerolls: Option<u32>,
}

impl TurnEngine {
    /// Engine with no reroll cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine that stops rerolling after `max` rerolls.
    #[must_use]
    pub fn with_max_rerolls(max: u32) -> Self {
        Self {
            max_rerolls: Some(max),
        }
    }

    #[must_use]
    pub fn max_rerolls(&self) -> Option<u32> {
        self.max_rerolls
    }

    /// Play one turn for `player`.
    pub fn resolve<S, R>(&self, player: PlayerId, dice: &mut S, decider: &mut R) -> TurnOutcome
    where
        S: DiceSource + ?Sized,
        R: RerollDecider + ?Sized,
    {
        let initial = dice.roll_three();
        log::debug!("{} rolls {}", player, initial);

        if initial.pattern().is_tuple_out() {
            log::debug!("{} tuples out", player);
            return TurnOutcome {
                initial,
                dice: initial,
                hold: Hold::default(),
                rerolls: 0,
                tuple_out: true,
                capped: false,
            };
        }

        let hold = initial.hold();
        log::debug!("{} holds {:?}", player, hold.face.map(|f| f.value()));

        let mut current = initial;
        let mut rerolls = 0u32;
        let mut capped = false;
        loop {
            if self.max_rerolls.is_some_and(|max| rerolls >= max) {
                log::warn!("{} hit the reroll cap of {}", player, rerolls);
                capped = true;
                break;
            }
            let ctx = RerollContext {
                player,
                dice: current,
                hold: &hold,
                rerolls,
            };
            if !decider.reroll(&ctx) {
                break;
            }
            for position in hold.free() {
                current.set(position, dice.roll());
            }
            rerolls += 1;
            log::debug!("{} rerolls to {}", player, current);
        }

        log::debug!("{} scores {} after {} rerolls", player, current.total(), rerolls);
        TurnOutcome {
            initial,
            dice: current,
            hold,
            rerolls,
            tuple_out: false,
            capped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedDice;

    const P: PlayerId = PlayerId::new(0);

    fn stand(_: &RerollContext<'_>) -> bool {
        false
    }

    #[test]
    fn test_tuple_out_skips_decider() {
        let mut dice = ScriptedDice::new([4, 4, 4]);
        let mut asked = 0;
        let mut decider = |_: &RerollContext<'_>| {
            asked += 1;
            true
        };

        let outcome = TurnEngine::new().resolve(P, &mut dice, &mut decider);

        assert!(outcome.is_tuple_out());
        assert_eq!(outcome.turn_score(), 0);
        assert_eq!(outcome.rerolls, 0);
        assert_eq!(asked, 0);
    }

    #[test]
    fn test_stand_scores_sum() {
        let mut dice = ScriptedDice::new([5, 2, 3]);
        let outcome = TurnEngine::new().resolve(P, &mut dice, &mut stand);

        assert!(!outcome.is_tuple_out());
        assert_eq!(outcome.turn_score(), 10);
        assert_eq!(outcome.dice, outcome.initial);
    }

    #[test]
    fn test_reroll_only_free_die() {
        // pair of 2s at positions 0 and 2, then two rerolls of position 1
        let mut dice = ScriptedDice::new([2, 5, 2, 1, 6]);
        let mut answers = vec![true, true, false].into_iter();
        let mut decider = |_: &RerollContext<'_>| answers.next().unwrap_or(false);

        let outcome = TurnEngine::new().resolve(P, &mut dice, &mut decider);

        assert_eq!(outcome.rerolls, 2);
        assert_eq!(outcome.dice.values(), [2, 6, 2]);
        assert_eq!(outcome.turn_score(), 10);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_hold_does_not_grow() {
        // free die lands on the held face, then is rerolled again anyway
        let mut dice = ScriptedDice::new([3, 3, 1, 3, 5]);
        let mut answers = vec![true, true, false].into_iter();
        let mut decider = |_: &RerollContext<'_>| answers.next().unwrap_or(false);

        let outcome = TurnEngine::new().resolve(P, &mut dice, &mut decider);

        assert_eq!(outcome.hold.locked.as_slice(), &[0, 1]);
        assert_eq!(outcome.dice.values(), [3, 3, 5]);
    }

    #[test]
    fn test_rerolled_triple_scores() {
        let mut dice = ScriptedDice::new([3, 3, 1, 3]);
        let mut answers = vec![true, false].into_iter();
        let mut decider = |_: &RerollContext<'_>| answers.next().unwrap_or(false);

        let outcome = TurnEngine::new().resolve(P, &mut dice, &mut decider);

        assert!(!outcome.is_tuple_out());
        assert_eq!(outcome.turn_score(), 9);
    }

    #[test]
    fn test_distinct_rerolls_all_three() {
        let mut dice = ScriptedDice::new([1, 2, 3, 6, 5, 4]);
        let mut answers = vec![true, false].into_iter();
        let mut decider = |_: &RerollContext<'_>| answers.next().unwrap_or(false);

        let outcome = TurnEngine::new().resolve(P, &mut dice, &mut decider);

        assert_eq!(outcome.dice.values(), [6, 5, 4]);
        assert_eq!(outcome.hold.free().count(), 3);
    }

    #[test]
    fn test_reroll_cap() {
        let mut dice = ScriptedDice::new([1, 1, 2, 3, 4, 5]);
        let mut always = |_: &RerollContext<'_>| true;

        let outcome = TurnEngine::with_max_rerolls(3).resolve(P, &mut dice, &mut always);

        assert!(outcome.capped);
        assert_eq!(outcome.rerolls, 3);
        assert_eq!(outcome.dice.values(), [1, 1, 5]);
    }

    #[test]
    fn test_context_reports_progress() {
        let mut dice = ScriptedDice::new([6, 1, 6, 2]);
        let mut seen = Vec::new();
        let mut decider = |ctx: &RerollContext<'_>| {
            seen.push((ctx.rerolls, ctx.dice.values(), ctx.hold.face.map(|f| f.value())));
            ctx.rerolls == 0
        };

        TurnEngine::new().resolve(P, &mut dice, &mut decider);

        assert_eq!(
            seen,
            vec![(0, [6, 1, 6], Some(6)), (1, [6, 2, 6], Some(6))]
        );
    }
}
