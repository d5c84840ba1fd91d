//! Game controller: the narrow interface a front end drives.
//!
//! The controller owns the single live [`Board`]. Turn order is derived from
//! the board, so there is no separate "current player" field to drift out of
//! sync. Moves after the game is decided are ignored, like repeated clicks on
//! an occupied cell.

use tracing::{Level, debug, enabled, instrument};

use crate::board::{Board, Mark, Outcome, Point};
use crate::error::BoardError;
use crate::minimax::{Move, best_move, evaluate_moves};

/// A Tic-Tac-Toe game between any mix of humans and the engine.
#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Start a game on an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a game from an existing position.
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the live board with a fresh empty one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        debug!("board cleared");
    }

    /// Replace the live board with `board`.
    pub fn load(&mut self, board: Board) {
        self.board = board;
    }

    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        self.board.is_valid_move(row, col)
    }

    pub fn is_winner(&self) -> bool {
        self.board.is_winner()
    }

    pub fn is_draw(&self) -> bool {
        self.board.is_draw()
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.outcome() != Outcome::InProgress
    }

    /// The side to move.
    pub fn current_player(&self) -> Mark {
        self.board.current_player()
    }

    /// `"X"`, `"O"` or `"-"` for a cell.
    pub fn cell_symbol(&self, row: usize, col: usize) -> Result<&'static str, BoardError> {
        self.board.cell(row, col).map(Mark::symbol)
    }

    /// Place the current player's mark. Returns whether the move was applied.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, row: usize, col: usize) -> bool {
        if self.is_over() {
            debug!("game is over, move ignored");
            return false;
        }
        let mover = self.current_player();
        if !self.board.place_mark(mover, row, col) {
            debug!("invalid move ignored");
            return false;
        }
        debug!(%mover, "move applied");
        self.log_next_hint();
        true
    }

    /// Compute and apply the engine's move for the side to move.
    ///
    /// Returns `None` once the game is decided.
    #[instrument(skip(self))]
    pub fn ai_move(&mut self) -> Option<Point> {
        if self.is_over() {
            return None;
        }
        let mover = self.current_player();
        let mv = best_move(&self.board);
        let (row, col) = mv.cell?;
        self.board.place_mark(mover, row, col);
        debug!(%mover, row, col, score = mv.score, "engine move applied");
        self.log_next_hint();
        Some((row, col))
    }

    /// The optimal cell for the side to move, without playing it.
    pub fn provide_hint(&self) -> Option<Point> {
        self.evaluate().cell
    }

    /// The optimal move for the side to move, with its score.
    pub fn evaluate(&self) -> Move {
        best_move(&self.board)
    }

    /// Every legal move for the side to move with its minimax score.
    pub fn analyze(&self) -> Vec<Move> {
        evaluate_moves(&self.board)
    }

    fn log_next_hint(&self) {
        if !enabled!(Level::DEBUG) || self.is_over() {
            return;
        }
        if let Some((row, col)) = self.provide_hint() {
            debug!(player = %self.current_player(), row, col, "best reply");
        }
    }
}
