//! Common error types for the m,n,k engine, the text driver and the replay
//! harness.

use alloc::string::String;

/// Errors returned by `Board::place` and `GameEngine::play`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates fall outside the grid. Wide enough to hold any `isize`
    /// or `usize` coordinate as passed in.
    OutOfBounds { x: i128, y: i128 },
    /// Target cell already holds a mark.
    CellOccupied { row: usize, col: usize },
    /// The game already has a result; the board is read-only.
    GameOver,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Position out of bounds: column={}, row={}", x, y)
            }
            BoardError::CellOccupied { row, col } => {
                write!(f, "Cell already occupied: row={}, col={}", row, col)
            }
            BoardError::GameOver => write!(f, "Game is already over"),
        }
    }
}

/// Malformed `row,col` input from a text driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Line did not split into exactly two comma-separated tokens.
    WrongArity(usize),
    /// A token was not a non-negative decimal integer.
    NotANumber(String),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::WrongArity(n) => write!(f, "Expected 2 values, got {}", n),
            InputError::NotANumber(token) => write!(f, "Not a number: '{}'", token),
        }
    }
}

/// Failures while replaying a recorded game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The game was already over before the move at `step`.
    EndedEarly { step: usize },
    /// Position at `step` does not map onto the board.
    InvalidPosition { step: usize, position: usize },
    /// The engine refused the move at `step`.
    Rejected { step: usize, error: BoardError },
    /// All moves were played but the game has no result.
    Unfinished,
}

impl core::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReplayError::EndedEarly { step } => {
                write!(f, "Game ended before move {}", step)
            }
            ReplayError::InvalidPosition { step, position } => {
                write!(f, "Move {}: position {} is not on the board", step, position)
            }
            ReplayError::Rejected { step, error } => {
                write!(f, "Move {} rejected: {}", step, error)
            }
            ReplayError::Unfinished => write!(f, "Game still in progress after the last move"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
#[cfg(feature = "std")]
impl std::error::Error for ReplayError {}
