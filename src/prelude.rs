//! Commonly used types and utilities for ease of import.

pub use crate::{Board, BoardError, GameConfig, GameEngine, GameStatus, Mark, Outcome, WinRule};

pub use crate::cases::{replay, CANONICAL_CASES};

#[cfg(feature = "std")]
pub use crate::cli::{parse_move, run_interactive};
