//! The 3x3 board: cell marks, move validation, and win/draw detection.
//!
//! A [`Board`] is a plain value. Copying it is cheap and produces a fully
//! independent board, which is how the search explores hypothetical moves.
//! Whose turn it is is never stored; [`Board::current_player`] derives it
//! from the mark counts.

use std::fmt;

use crate::constants::{CELLS, LINES, N};
use crate::error::BoardError;

/// A cell on the board as `(row, col)`.
pub type Point = (usize, usize);

/// The contents of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
    #[default]
    Empty,
}

impl Mark {
    /// The opposing mark. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Display symbol used by front ends: `"X"`, `"O"` or `"-"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "-",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Result of a game as seen from a board. Always recomputed, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
    InProgress,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::XWins => "x_wins",
            Outcome::OWins => "o_wins",
            Outcome::Draw => "draw",
            Outcome::InProgress => "in_progress",
        };
        f.write_str(s)
    }
}

/// A 3x3 grid of marks stored in row-major order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a board from a picture of nine cells in row-major order.
    ///
    /// `X`/`x` and `O`/`o` are marks, `-` and `.` are empty cells.
    /// Whitespace and `|` separators are ignored, so both `"XO-/-X-/--O"`
    /// style strings (with `/` as row separator) and multi-line pictures work.
    pub fn from_rows(picture: &str) -> Result<Self, BoardError> {
        let mut cells = Vec::with_capacity(CELLS);
        for ch in picture.chars() {
            let mark = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '-' | '.' => Mark::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(BoardError::BadPicture(format!("unexpected character {c:?}"))),
            };
            cells.push(mark);
        }
        let cells: [Mark; CELLS] = cells.try_into().map_err(|v: Vec<Mark>| {
            BoardError::BadPicture(format!("expected {CELLS} cells, got {}", v.len()))
        })?;
        Ok(Self { cells })
    }

    #[inline]
    fn idx(row: usize, col: usize) -> usize {
        row * N + col
    }

    #[inline]
    fn in_range(row: usize, col: usize) -> bool {
        row < N && col < N
    }

    /// Read the mark at a cell.
    ///
    /// Out-of-range indices are a caller bug and are reported.
    pub fn cell(&self, row: usize, col: usize) -> Result<Mark, BoardError> {
        if !Self::in_range(row, col) {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(self.cells[Self::idx(row, col)])
    }

    /// True iff both indices are on the board and the cell is empty.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        Self::in_range(row, col) && self.cells[Self::idx(row, col)] == Mark::Empty
    }

    /// Write `mark` into a cell if the move is valid.
    ///
    /// Invalid placements are ignored. Returns whether the board changed.
    pub fn place_mark(&mut self, mark: Mark, row: usize, col: usize) -> bool {
        if !self.is_valid_move(row, col) {
            return false;
        }
        self.cells[Self::idx(row, col)] = mark;
        true
    }

    /// Force a cell back to empty. Out-of-range indices are ignored.
    ///
    /// Returns whether the cell held a mark before the call.
    pub fn set_empty(&mut self, row: usize, col: usize) -> bool {
        if !Self::in_range(row, col) {
            return false;
        }
        let i = Self::idx(row, col);
        let was_marked = self.cells[i] != Mark::Empty;
        self.cells[i] = Mark::Empty;
        was_marked
    }

    /// An independent copy of this board.
    pub fn copy_board(&self) -> Board {
        *self
    }

    /// Whose turn it is: X when both sides have the same number of marks.
    pub fn current_player(&self) -> Mark {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        if x == o { Mark::X } else { Mark::O }
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    /// True iff any line is filled with `mark`.
    fn has_line(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| self.cells[Self::idx(r, c)] == mark))
    }

    pub fn is_x_winner(&self) -> bool {
        self.has_line(Mark::X)
    }

    pub fn is_o_winner(&self) -> bool {
        self.has_line(Mark::O)
    }

    pub fn is_winner(&self) -> bool {
        self.is_x_winner() || self.is_o_winner()
    }

    pub fn has_empty_cells(&self) -> bool {
        self.cells.contains(&Mark::Empty)
    }

    /// True iff the board is full and nobody has a line.
    pub fn is_draw(&self) -> bool {
        !self.has_empty_cells() && !self.is_winner()
    }

    /// Classify the board. X's line takes priority if both sides somehow have one.
    pub fn outcome(&self) -> Outcome {
        if self.is_x_winner() {
            Outcome::XWins
        } else if self.is_o_winner() {
            Outcome::OWins
        } else if !self.has_empty_cells() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Mark::Empty)
            .map(|(i, _)| (i / N, i % N))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            for col in 0..N {
                if col > 0 {
                    f.write_str("|")?;
                }
                write!(f, "{}", self.cells[Self::idx(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
