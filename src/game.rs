use alloc::vec::Vec;

use crate::{
    board::{Board, Mark, Outcome},
    common::BoardError,
    config::GameConfig,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl From<Option<Outcome>> for GameStatus {
    fn from(result: Option<Outcome>) -> Self {
        match result {
            None => GameStatus::InProgress,
            Some(Outcome::Winner(mark)) => GameStatus::Won(mark),
            Some(Outcome::Draw) => GameStatus::Draw,
        }
    }
}

/// Core game logic: a board plus turn order and move history.
///
/// `X` moves first. The turn only passes to the other mark after an accepted
/// move that did not end the game.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    turn: usize,
    history: Vec<(usize, usize)>,
}

impl GameEngine {
    /// Create a new engine with an empty board.
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::from_config(&config),
            turn: 0,
            history: Vec::new(),
        }
    }

    /// Engine for the standard 3,3,3 game.
    pub fn standard() -> Self {
        Self::new(GameConfig::standard())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of turn changes so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Mark whose move it is.
    pub fn current_mark(&self) -> Mark {
        if self.turn % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Accepted moves as (row, col), oldest first.
    pub fn history(&self) -> &[(usize, usize)] {
        &self.history
    }

    pub fn result(&self) -> Option<Outcome> {
        self.board.result()
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        GameStatus::from(self.board.result())
    }

    /// See [`Board::can_continue`].
    pub fn can_continue(&mut self) -> bool {
        self.board.can_continue()
    }

    /// Place the current mark at (`row`, `col`).
    pub fn play(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let mark = self.current_mark();
        let placed = if self.board.result().is_some() {
            Err(BoardError::GameOver)
        } else if row >= self.board.height() || col >= self.board.width() {
            Err(BoardError::OutOfBounds {
                x: col as i128,
                y: row as i128,
            })
        } else {
            // in bounds, so both fit in isize
            self.board.place(col as isize, row as isize, mark)
        };
        if let Err(e) = placed {
            log::debug!("rejected {} at row={}, col={}: {}", mark, row, col, e);
            return Err(e);
        }
        self.history.push((row, col));
        if self.board.result().is_none() {
            self.turn += 1;
        }
        Ok(())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::standard()
    }
}
