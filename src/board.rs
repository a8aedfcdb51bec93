//! Game board state: the grid, the move count and the write-once result.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::iter;

use crate::common::BoardError;
use crate::config::{GameConfig, WinRule, CELL_SEPARATOR, EMPTY_SYMBOL, ROW_RULE};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Mark held by the cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn symbol(self) -> char {
        self.mark().map_or(EMPTY_SYMBOL, Mark::symbol)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Winner(Mark),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins.", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// A line direction through a cell, made of two opposite unit steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    MainDiagonal,
    AntiDiagonal,
}

impl Axis {
    /// Evaluation order used by win detection. The first winning axis in this
    /// order decides.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::MainDiagonal,
        Axis::AntiDiagonal,
    ];

    /// The two opposite `(drow, dcol)` steps along this axis.
    pub const fn steps(self) -> [(isize, isize); 2] {
        match self {
            Axis::Horizontal => [(0, -1), (0, 1)],
            Axis::Vertical => [(-1, 0), (1, 0)],
            Axis::MainDiagonal => [(-1, -1), (1, 1)],
            Axis::AntiDiagonal => [(-1, 1), (1, -1)],
        }
    }
}

/// An m,n,k board: `height` rows of `width` cells, won by `k` in a row.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    k: usize,
    win_rule: WinRule,
    cells: Vec<Cell>,
    move_count: usize,
    result: Option<Outcome>,
}

impl Board {
    /// Create an empty board using the `Exact` win rule. `k` is not checked
    /// against the dimensions; an unreachable `k` only ever yields draws.
    pub fn new(width: usize, height: usize, k: usize) -> Self {
        Self::from_config(&GameConfig::new(width, height, k))
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Board {
            width: config.width,
            height: config.height,
            k: config.k,
            win_rule: config.win_rule,
            cells: vec![Cell::Empty; config.cells()],
            move_count: 0,
            result: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn win_rule(&self) -> WinRule {
        self.win_rule
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// `None` while the game is ongoing.
    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    /// Cell at (`row`, `col`), or `None` when off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Returns `true` once every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.move_count >= self.width * self.height
    }

    /// Empty cells as (row, col), in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(i, _)| (i / width, i % width))
    }

    /// Whether another move may be made. Finalizes a full board without a
    /// result as a draw.
    pub fn can_continue(&mut self) -> bool {
        if self.result.is_some() {
            return false;
        }
        if self.is_full() {
            log::debug!("board full after {} moves, recording draw", self.move_count);
            self.result = Some(Outcome::Draw);
            return false;
        }
        true
    }

    /// Place `mark` at column `x`, row `y`, then check whether it ends the
    /// game. Nothing changes when an error is returned.
    pub fn place(&mut self, x: isize, y: isize, mark: Mark) -> Result<(), BoardError> {
        if self.result.is_some() {
            return Err(BoardError::GameOver);
        }
        let idx = self.index(x, y).ok_or(BoardError::OutOfBounds {
            x: x as i128,
            y: y as i128,
        })?;
        let (row, col) = (idx / self.width, idx % self.width);
        if !self.cells[idx].is_empty() {
            return Err(BoardError::CellOccupied { row, col });
        }

        self.cells[idx] = mark.into();
        self.move_count += 1;
        log::trace!("{} placed at row={}, col={}", mark, row, col);

        if let Some(winner) = self.find_winner(row, col) {
            log::debug!("{} wins after {} moves", winner, self.move_count);
            self.result = Some(Outcome::Winner(winner));
        } else if self.is_full() {
            log::debug!("draw after {} moves", self.move_count);
            self.result = Some(Outcome::Draw);
        }
        Ok(())
    }

    /// Length of the line through (`row`, `col`) along `axis`, counting the
    /// cell itself. Zero for an empty or off-board cell.
    pub fn line_length(&self, row: usize, col: usize, axis: Axis) -> usize {
        match self.cell(row, col) {
            Some(cell) if !cell.is_empty() => {
                let [a, b] = axis.steps();
                1 + self.ray_length(row, col, a) + self.ray_length(row, col, b)
            }
            _ => 0,
        }
    }

    /// Number of consecutive cells matching (`row`, `col`) walking outward by
    /// `step` = (drow, dcol), not counting the starting cell.
    pub fn ray_length(&self, row: usize, col: usize, step: (isize, isize)) -> usize {
        let target = match self.cell(row, col) {
            Some(cell) if !cell.is_empty() => cell,
            _ => return 0,
        };
        let (drow, dcol) = step;
        let mut count = 0;
        let mut multiplier: isize = 1;
        loop {
            let r = row as isize + drow * multiplier;
            let c = col as isize + dcol * multiplier;
            match self.index(c, r) {
                Some(i) if self.cells[i] == target => {
                    count += 1;
                    multiplier += 1;
                }
                _ => break,
            }
        }
        count
    }

    /// Multi-line text view: cells joined by `|`, rows separated by a rule of
    /// `width * 2 - 1` dashes.
    pub fn render(&self) -> String {
        let rule_len = (self.width * 2).saturating_sub(1);
        let mut out = String::new();
        for row in 0..self.height {
            if row > 0 {
                out.push('\n');
                out.extend(iter::repeat(ROW_RULE).take(rule_len));
                out.push('\n');
            }
            for col in 0..self.width {
                if col > 0 {
                    out.push(CELL_SEPARATOR);
                }
                out.push(self.cells[row * self.width + col].symbol());
            }
        }
        out
    }

    // Mark just placed at (row, col) wins if any axis, in `Axis::ALL` order,
    // satisfies the win rule.
    fn find_winner(&self, row: usize, col: usize) -> Option<Mark> {
        let mark = self.cell(row, col)?.mark()?;
        Axis::ALL.into_iter().find_map(|axis| {
            let length = self.line_length(row, col, axis);
            if self.win_rule.is_win(length, self.k) {
                log::trace!("{:?} line of {} through row={}, col={}", axis, length, row, col);
                Some(mark)
            } else {
                None
            }
        })
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (col, row) = (x as usize, y as usize);
        if col < self.width && row < self.height {
            Some(row * self.width + col)
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ width: {}, height: {}, k: {}, rule: {:?}, moves: {}, result: {:?} }}",
            self.width, self.height, self.k, self.win_rule, self.move_count, self.result
        )
    }
}
