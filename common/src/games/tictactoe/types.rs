use std::fmt;

use serde::{Deserialize, Serialize};

pub const GRID_SIZE: usize = 3;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Cell contents. `X` is the human player, `O` the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub const PLAYER: Mark = Mark::X;
    pub const OPPONENT: Mark = Mark::O;

    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Self {
        Self {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        }
    }

    pub fn to_index(&self) -> usize {
        self.row * GRID_SIZE + self.col
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    OpponentWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    GoFirst,
    GoSecond,
    CoinToss,
}

/// Probability that the opponent plays the optimal move instead of a random one.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Difficulty(f64);

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(0.0);
    pub const MAX: Difficulty = Difficulty(1.0);

    pub fn new(value: f64) -> Result<Self, String> {
        if !(0.0..=1.0).contains(&value) {
            return Err(format!("Difficulty must be between 0 and 1, got {}", value));
        }
        Ok(Self(value))
    }

    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(0.5)
    }
}

impl TryFrom<f64> for Difficulty {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for f64 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_conversion() {
        for index in 0..CELL_COUNT {
            assert_eq!(Position::from_index(index).to_index(), index);
        }
        assert_eq!(Position::from_index(5), Position::new(1, 2));
    }

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_difficulty_rejects_out_of_range() {
        assert!(Difficulty::new(-0.1).is_err());
        assert!(Difficulty::new(1.5).is_err());
        assert!(Difficulty::new(f64::NAN).is_err());
        assert_eq!(Difficulty::new(0.25).unwrap().value(), 0.25);
    }

    #[test]
    fn test_difficulty_clamped() {
        assert_eq!(Difficulty::clamped(2.0), Difficulty::MAX);
        assert_eq!(Difficulty::clamped(-3.0), Difficulty::MIN);
        assert_eq!(Difficulty::clamped(f64::NAN), Difficulty::MIN);
        assert_eq!(Difficulty::clamped(0.75).value(), 0.75);
    }
}
