//! Replays games recorded as 1-indexed board positions.
//!
//! Positions are numbered row by row starting at 1, so on a 3×3 board:
//!
//! ```text
//! 1|2|3
//! -----
//! 4|5|6
//! -----
//! 7|8|9
//! ```

use alloc::vec::Vec;

use crate::{
    board::{Mark, Outcome},
    common::ReplayError,
    config::GameConfig,
    game::GameEngine,
};

/// A recorded game with alternating X, O moves and its expected outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayCase {
    pub name: &'static str,
    pub positions: &'static [usize],
    pub expected: Outcome,
}

/// Standard tic-tac-toe games from the Wikipedia article.
pub const CANONICAL_CASES: [ReplayCase; 3] = [
    ReplayCase {
        name: "full board draw",
        positions: &[1, 5, 9, 2, 8, 7, 3, 6, 4],
        expected: Outcome::Draw,
    },
    ReplayCase {
        name: "blocked corners draw",
        positions: &[1, 5, 3, 2, 8, 4, 6, 9, 7],
        expected: Outcome::Draw,
    },
    ReplayCase {
        name: "left column win",
        positions: &[1, 5, 9, 3, 7, 6, 4],
        expected: Outcome::Winner(Mark::X),
    },
];

/// Map a 1-indexed position to (row, col) on a board `width` cells wide.
pub fn position_to_coord(position: usize, width: usize) -> Option<(usize, usize)> {
    if position == 0 || width == 0 {
        return None;
    }
    let idx = position - 1;
    Some((idx / width, idx % width))
}

/// Play `positions` in order on a fresh board. Every move must be accepted
/// while the game is still open, and the last one must finish the game.
pub fn replay(config: GameConfig, positions: &[usize]) -> Result<Outcome, ReplayError> {
    let mut engine = GameEngine::new(config);
    for (step, &position) in positions.iter().enumerate() {
        if !engine.can_continue() {
            return Err(ReplayError::EndedEarly { step });
        }
        let (row, col) = position_to_coord(position, config.width)
            .filter(|&(row, _)| row < config.height)
            .ok_or(ReplayError::InvalidPosition { step, position })?;
        engine
            .play(row, col)
            .map_err(|error| ReplayError::Rejected { step, error })?;
    }
    if engine.can_continue() {
        return Err(ReplayError::Unfinished);
    }
    engine.result().ok_or(ReplayError::Unfinished)
}

/// Outcome of checking one [`ReplayCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub index: usize,
    pub name: &'static str,
    pub expected: Outcome,
    pub actual: Result<Outcome, ReplayError>,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.actual.as_ref() == Ok(&self.expected)
    }
}

/// Replay each case on a standard board.
pub fn run_cases(cases: &[ReplayCase]) -> Vec<CaseReport> {
    cases
        .iter()
        .enumerate()
        .map(|(index, case)| CaseReport {
            index,
            name: case.name,
            expected: case.expected,
            actual: replay(GameConfig::standard(), case.positions),
        })
        .collect()
}
