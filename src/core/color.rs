//! Lane colors and their sequence direction.
//!
//! Qwixx has exactly four lanes. Colors are a closed enum rather than
//! strings: every dispatch on color is exhaustive, and iteration order is
//! fixed by `LaneColor::ALL` so derived move lists are deterministic.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction a lane's number sequence runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneDirection {
    /// Numbers run 2 up to 12 (red, yellow).
    Ascending,
    /// Numbers run 12 down to 2 (green, blue).
    Descending,
}

/// One of the four lane colors.
///
/// ## Example
///
/// ```
/// use qwixx_engine::core::{LaneColor, LaneDirection};
///
/// assert_eq!(LaneColor::ALL.len(), 4);
/// assert_eq!(LaneColor::Red.direction(), LaneDirection::Ascending);
/// assert_eq!(LaneColor::Blue.direction(), LaneDirection::Descending);
/// assert_eq!("green".parse::<LaneColor>(), Ok(LaneColor::Green));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneColor {
    Red,
    Yellow,
    Green,
    Blue,
}

impl LaneColor {
    /// Every color in canonical order: Red, Yellow, Green, Blue.
    ///
    /// All code that walks the lanes iterates this array, which keeps
    /// enumeration output deterministic for a given input.
    pub const ALL: [LaneColor; 4] = [
        LaneColor::Red,
        LaneColor::Yellow,
        LaneColor::Green,
        LaneColor::Blue,
    ];

    /// Number of lanes.
    pub const COUNT: usize = 4;

    /// Position of this color in canonical order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Color at a canonical-order index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<LaneColor> {
        match index {
            0 => Some(LaneColor::Red),
            1 => Some(LaneColor::Yellow),
            2 => Some(LaneColor::Green),
            3 => Some(LaneColor::Blue),
            _ => None,
        }
    }

    /// Direction this color's sequence runs in.
    ///
    /// Red and yellow ascend 2..=12; green and blue descend 12..=2.
    #[must_use]
    pub const fn direction(self) -> LaneDirection {
        match self {
            LaneColor::Red | LaneColor::Yellow => LaneDirection::Ascending,
            LaneColor::Green | LaneColor::Blue => LaneDirection::Descending,
        }
    }

    /// Lowercase name, matching what hosts store and render.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LaneColor::Red => "red",
            LaneColor::Yellow => "yellow",
            LaneColor::Green => "green",
            LaneColor::Blue => "blue",
        }
    }
}

impl std::fmt::Display for LaneColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a color name the engine does not recognize.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown lane color: {0:?}")]
pub struct UnknownColor(pub String);

impl FromStr for LaneColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(LaneColor::Red),
            "yellow" => Ok(LaneColor::Yellow),
            "green" => Ok(LaneColor::Green),
            "blue" => Ok(LaneColor::Blue),
            other => Err(UnknownColor(other.to_string())),
        }
    }
}
