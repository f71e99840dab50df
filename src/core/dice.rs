//! Dice: faces, three-dice rolls, and pair/triple analysis.
//!
//! A roll is always exactly three faces. With three dice there is at most
//! one pair, so the analysis of a roll is one of:
//!
//! - **Tuple Out**: all three faces equal
//! - **Pair**: two faces equal, those two positions are held
//! - **Distinct**: nothing held, every die is free

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of dice in a roll.
pub const DICE_COUNT: usize = 3;

/// Number of faces on each die.
pub const FACES: u8 = 6;

/// A single die face in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Face(u8);

impl Face {
    /// Create a face, or `None` outside `1..=6`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= FACES {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Pip count.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Three dice in roll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll([Face; DICE_COUNT]);

impl DiceRoll {
    #[must_use]
    pub const fn new(faces: [Face; DICE_COUNT]) -> Self {
        Self(faces)
    }

    /// Build from raw pip values, `None` if any is out of range.
    ///
    /// ```
    /// use tuple_out::core::DiceRoll;
    ///
    /// assert!(DiceRoll::from_values([5, 2, 3]).is_some());
    /// assert!(DiceRoll::from_values([0, 2, 3]).is_none());
    /// ```
    #[must_use]
    pub fn from_values(values: [u8; DICE_COUNT]) -> Option<Self> {
        Some(Self([
            Face::new(values[0])?,
            Face::new(values[1])?,
            Face::new(values[2])?,
        ]))
    }

    #[must_use]
    pub fn faces(&self) -> &[Face; DICE_COUNT] {
        &self.0
    }

    #[must_use]
    pub fn values(&self) -> [u8; DICE_COUNT] {
        self.0.map(Face::value)
    }

    /// Sum of pips.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().map(|f| u32::from(f.value())).sum()
    }

    /// How many dice show each face; index 0 is unused.
    #[must_use]
    pub fn multiplicities(&self) -> [u8; FACES as usize + 1] {
        let mut counts = [0u8; FACES as usize + 1];
        for face in &self.0 {
            counts[face.value() as usize] += 1;
        }
        counts
    }

    /// Classify the roll.
    #[must_use]
    pub fn pattern(&self) -> Pattern {
        let counts = self.multiplicities();
        if let Some(v) = counts.iter().position(|&c| c as usize == DICE_COUNT) {
            return Pattern::TupleOut(Face(v as u8));
        }
        match counts.iter().position(|&c| c == 2) {
            Some(v) => Pattern::Pair(Face(v as u8)),
            None => Pattern::Distinct,
        }
    }

    /// Positions to lock for the rest of the turn.
    #[must_use]
    pub fn hold(&self) -> Hold {
        match self.pattern() {
            Pattern::Pair(face) => Hold {
                face: Some(face),
                locked: self
                    .0
                    .iter()
                    .enumerate()
                    .filter(|(_, f)| **f == face)
                    .map(|(i, _)| i)
                    .collect(),
            },
            Pattern::TupleOut(_) | Pattern::Distinct => Hold::default(),
        }
    }

    /// Replace the die at `position`.
    pub fn set(&mut self, position: usize, face: Face) {
        self.0[position] = face;
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// What a roll looks like before any reroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// All three dice show this face.
    TupleOut(Face),
    /// Exactly two dice show this face.
    Pair(Face),
    /// Three different faces.
    Distinct,
}

impl Pattern {
    #[must_use]
    pub fn is_tuple_out(self) -> bool {
        matches!(self, Pattern::TupleOut(_))
    }
}

/// Locked dice positions for one turn.
///
/// Fixed at the initial roll and never changed by rerolls, even if a free
/// die later lands on the held face.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hold {
    /// The paired face, if any.
    pub face: Option<Face>,
    /// Positions showing the paired face.
    pub locked: SmallVec<[usize; DICE_COUNT]>,
}

impl Hold {
    #[must_use]
    pub fn is_locked(&self, position: usize) -> bool {
        self.locked.contains(&position)
    }

    /// Positions that get rerolled.
    pub fn free(&self) -> impl Iterator<Item = usize> + '_ {
        (0..DICE_COUNT).filter(move |p| !self.is_locked(*p))
    }
}
