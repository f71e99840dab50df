//! Dice randomness.
//!
//! Turn resolution never touches a global generator. It pulls faces from a
//! [`DiceSource`], which is either:
//!
//! - [`GameRng`]: seeded ChaCha8, reproducible from its seed and serializable
//! - [`ScriptedDice`]: a fixed face sequence for tests and replays
//!
//! ```
//! use tuple_out::core::{DiceSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll(), b.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::dice::{DiceRoll, Face, DICE_COUNT, FACES};

/// Produces independent, uniform die faces.
pub trait DiceSource {
    /// Next face in `1..=6`.
    fn roll(&mut self) -> Face;

    /// Three fresh dice.
    fn roll_three(&mut self) -> DiceRoll {
        let faces: [Face; DICE_COUNT] = std::array::from_fn(|_| self.roll());
        DiceRoll::new(faces)
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> Face {
        (**self).roll()
    }
}

/// Deterministic dice generator.
///
/// Uses ChaCha8 for speed while keeping the sequence reproducible from the
/// seed alone.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> Face {
        let value = self.inner.gen_range(1..=FACES);
        Face::new(value).unwrap_or_else(|| unreachable!("gen_range(1..=6) produced {value}"))
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position so capture is O(1) however many dice have
/// been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of faces.
///
/// Panics when the script runs out: a test that rolls more dice than it
/// scripted is a broken test.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: VecDeque<Face>,
    rolled: usize,
}

impl ScriptedDice {
    /// Script from raw pip values.
    ///
    /// # Panics
    ///
    /// If any value is outside `1..=6`.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        let faces = values
            .into_iter()
            .map(|v| Face::new(v).unwrap_or_else(|| panic!("scripted face {v} is not in 1..=6")))
            .collect();
        Self { faces, rolled: 0 }
    }

    /// Faces not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }

    /// Faces consumed so far.
    #[must_use]
    pub fn rolled(&self) -> usize {
        self.rolled
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> Face {
        self.rolled += 1;
        match self.faces.pop_front() {
            Some(face) => face,
            None => panic!("dice script exhausted after {} rolls", self.rolled - 1),
        }
    }
}
