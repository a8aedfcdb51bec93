//! Board dimensions, win length and the win rule.

/// Width of the standard tic-tac-toe board.
pub const DEFAULT_WIDTH: usize = 3;
/// Height of the standard tic-tac-toe board.
pub const DEFAULT_HEIGHT: usize = 3;
/// Run length needed to win the standard game.
pub const DEFAULT_K: usize = 3;

/// Character shown for an empty cell.
pub const EMPTY_SYMBOL: char = ' ';
/// Separator between cells of a rendered row.
pub const CELL_SEPARATOR: char = '|';
/// Character used for the rule between rendered rows.
pub const ROW_RULE: char = '-';

/// How a line through the last placed mark is compared against `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum WinRule {
    /// Only a line of exactly `k` marks wins. A move that joins two runs into
    /// one longer than `k` does not.
    #[default]
    Exact,
    /// Any line of `k` or more marks wins.
    AtLeast,
}

impl WinRule {
    /// Whether a line of `length` marks wins for run length `k`.
    pub fn is_win(self, length: usize, k: usize) -> bool {
        match self {
            WinRule::Exact => length == k,
            WinRule::AtLeast => length >= k,
        }
    }
}

/// Parameters fixed when a board is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub k: usize,
    pub win_rule: WinRule,
}

impl GameConfig {
    /// Configuration with the default (`Exact`) win rule.
    pub const fn new(width: usize, height: usize, k: usize) -> Self {
        Self {
            width,
            height,
            k,
            win_rule: WinRule::Exact,
        }
    }

    /// The 3,3,3 game.
    pub const fn standard() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_K)
    }

    pub const fn with_win_rule(mut self, win_rule: WinRule) -> Self {
        self.win_rule = win_rule;
        self
    }

    /// Number of cells on the board.
    pub const fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Returns `false` when no line on the board can reach `k` marks, so every
    /// game ends in a draw. Nothing is rejected because of this.
    pub fn is_winnable(&self) -> bool {
        self.k <= self.width.max(self.height)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}
