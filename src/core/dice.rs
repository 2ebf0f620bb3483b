//! Dice values and deterministic dice rolling.
//!
//! The engine never rolls dice on its own. Hosts produce a [`DiceRoll`]
//! however they like (usually via [`DiceRng`]) and feed it in through
//! the game's roll operation. Keeping the roll external makes every
//! engine operation a pure function of its inputs.

use crate::core::color::LaneColor;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// The six dice faces visible during a turn.
///
/// Two white dice plus one die per lane color. Faces are 1-6 once
/// rolled; a zeroed roll stands for "not rolled yet" in stored state.
///
/// ## Example
///
/// ```
/// use qwixx_engine::core::{DiceRoll, LaneColor};
///
/// let roll = DiceRoll::new(3, 4, 1, 6, 2, 5);
/// assert_eq!(roll.white_sum(), 7);
/// assert_eq!(roll.colored(LaneColor::Yellow), 6);
/// assert_eq!(roll.colored_sums(LaneColor::Yellow), (9, 10));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub white1: u8,
    pub white2: u8,
    pub red: u8,
    pub yellow: u8,
    pub green: u8,
    pub blue: u8,
}

impl DiceRoll {
    /// Create a roll from individual faces.
    #[must_use]
    pub const fn new(white1: u8, white2: u8, red: u8, yellow: u8, green: u8, blue: u8) -> Self {
        Self {
            white1,
            white2,
            red,
            yellow,
            green,
            blue,
        }
    }

    /// Create a roll from faces in storage order:
    /// white1, white2, red, yellow, green, blue.
    #[must_use]
    pub const fn from_array(faces: [u8; 6]) -> Self {
        Self::new(faces[0], faces[1], faces[2], faces[3], faces[4], faces[5])
    }

    /// Faces in storage order: white1, white2, red, yellow, green, blue.
    #[must_use]
    pub const fn as_array(self) -> [u8; 6] {
        [
            self.white1,
            self.white2,
            self.red,
            self.yellow,
            self.green,
            self.blue,
        ]
    }

    /// Sum of the two white dice. Any player may mark this number.
    #[must_use]
    pub const fn white_sum(self) -> u8 {
        self.white1 + self.white2
    }

    /// Face of the colored die for a lane.
    #[must_use]
    pub const fn colored(self, color: LaneColor) -> u8 {
        match color {
            LaneColor::Red => self.red,
            LaneColor::Yellow => self.yellow,
            LaneColor::Green => self.green,
            LaneColor::Blue => self.blue,
        }
    }

    /// The two sums the active player may mark in a lane:
    /// white1 + colored and white2 + colored, in that order.
    #[must_use]
    pub const fn colored_sums(self, color: LaneColor) -> (u8, u8) {
        let face = self.colored(color);
        (self.white1 + face, self.white2 + face)
    }

    /// Check that every face is in 1-6.
    ///
    /// A default (zeroed) roll is not valid; it only appears in stored
    /// state for turns where the dice have not been rolled.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.as_array().iter().all(|&face| (1..=6).contains(&face))
    }
}

/// Deterministic dice roller.
///
/// Uses ChaCha8 so the same seed always produces the same sequence of
/// rolls. Tests and replays seed explicitly; live hosts can use
/// [`DiceRng::from_entropy`].
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
}

impl DiceRng {
    /// Create a roller with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a roller seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Roll a single die face in 1-6.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Roll all six dice.
    pub fn roll(&mut self) -> DiceRoll {
        DiceRoll {
            white1: self.roll_die(),
            white2: self.roll_die(),
            red: self.roll_die(),
            yellow: self.roll_die(),
            green: self.roll_die(),
            blue: self.roll_die(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_sum() {
        let roll = DiceRoll::new(2, 6, 1, 1, 1, 1);
        assert_eq!(roll.white_sum(), 8);
    }

    #[test]
    fn test_colored_sums_order() {
        let roll = DiceRoll::new(1, 4, 3, 2, 6, 5);

        assert_eq!(roll.colored_sums(LaneColor::Red), (4, 7));
        assert_eq!(roll.colored_sums(LaneColor::Yellow), (3, 6));
        assert_eq!(roll.colored_sums(LaneColor::Green), (7, 10));
        assert_eq!(roll.colored_sums(LaneColor::Blue), (6, 9));
    }

    #[test]
    fn test_array_roundtrip() {
        let roll = DiceRoll::new(1, 2, 3, 4, 5, 6);
        assert_eq!(roll.as_array(), [1, 2, 3, 4, 5, 6]);
        assert_eq!(DiceRoll::from_array([1, 2, 3, 4, 5, 6]), roll);
    }

    #[test]
    fn test_validity() {
        assert!(DiceRoll::new(1, 6, 3, 4, 2, 5).is_valid());
        assert!(!DiceRoll::default().is_valid());
        assert!(!DiceRoll::new(0, 6, 3, 4, 2, 5).is_valid());
        assert!(!DiceRoll::new(1, 7, 3, 4, 2, 5).is_valid());
    }

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = DiceRng::new(42);
        let mut rng2 = DiceRng::new(42);

        for _ in 0..50 {
            assert_eq!(rng1.roll(), rng2.roll());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = DiceRng::new(1);
        let mut rng2 = DiceRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.roll()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.roll()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_rng_faces_in_range() {
        let mut rng = DiceRng::new(7);

        for _ in 0..200 {
            assert!(rng.roll().is_valid());
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let roll = DiceRoll::new(3, 4, 1, 6, 2, 5);
        let json = serde_json::to_string(&roll).unwrap();
        let back: DiceRoll = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roll);
    }
}
