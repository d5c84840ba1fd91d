//! Exhaustive minimax search over the Tic-Tac-Toe game tree.
//!
//! X maximizes and O minimizes a shared score. Only three leaf values exist:
//! [`SCORE_X_WIN`], [`SCORE_O_WIN`] and [`SCORE_DRAW`]; the search does not
//! prefer faster wins. There is no pruning and no transposition table, so
//! every call recomputes the whole subtree below the given board.
//!
//! Candidates are generated in row-major order and each one is explored on
//! its own copy of the board. Among candidates with the same best score the
//! first one encountered wins.

use tracing::trace;

use crate::board::{Board, Mark, Point};
use crate::constants::{SCORE_DRAW, SCORE_O_WIN, SCORE_X_WIN};

/// A scored move.
///
/// `cell` is `None` for terminal positions, where there is nothing to play
/// and only the score is meaningful.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub cell: Option<Point>,
    pub score: i8,
}

impl Move {
    fn leaf(score: i8) -> Self {
        Self { cell: None, score }
    }

    fn at(cell: Point, score: i8) -> Self {
        Self {
            cell: Some(cell),
            score,
        }
    }
}

/// Counters collected during one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including the root.
    pub nodes: u64,
    /// Terminal positions reached.
    pub leaves: u64,
}

/// Score of a terminal board, or `None` if play can continue.
///
/// An X line is checked before an O line, which is checked before a full board.
pub fn terminal_score(board: &Board) -> Option<i8> {
    if board.is_x_winner() {
        Some(SCORE_X_WIN)
    } else if board.is_o_winner() {
        Some(SCORE_O_WIN)
    } else if !board.has_empty_cells() {
        Some(SCORE_DRAW)
    } else {
        None
    }
}

/// Find the optimal move for the side to move on `board`.
///
/// On a terminal board the returned move has no cell and carries the
/// terminal score; callers must check `cell` before applying it.
pub fn best_move(board: &Board) -> Move {
    best_move_with_stats(board).0
}

/// Like [`best_move`], also returning search counters.
pub fn best_move_with_stats(board: &Board) -> (Move, SearchStats) {
    let mut stats = SearchStats::default();
    let mv = search(board, board.current_player(), &mut stats);
    trace!(
        nodes = stats.nodes,
        leaves = stats.leaves,
        cell = ?mv.cell,
        score = mv.score,
        "minimax search finished"
    );
    (mv, stats)
}

/// Score every legal move for the side to move, in row-major order.
///
/// Returns an empty list on a terminal board.
pub fn evaluate_moves(board: &Board) -> Vec<Move> {
    if terminal_score(board).is_some() {
        return Vec::new();
    }
    let mut stats = SearchStats::default();
    candidates(board, board.current_player(), &mut stats)
}

fn search(board: &Board, mover: Mark, stats: &mut SearchStats) -> Move {
    stats.nodes += 1;
    if let Some(score) = terminal_score(board) {
        stats.leaves += 1;
        return Move::leaf(score);
    }
    let moves = candidates(board, mover, stats);
    select(&moves, mover)
}

/// Expand every empty cell on a fresh copy and back up the child's score.
fn candidates(board: &Board, mover: Mark, stats: &mut SearchStats) -> Vec<Move> {
    board
        .empty_cells()
        .map(|(row, col)| {
            let mut child = board.copy_board();
            child.place_mark(mover, row, col);
            let reply = search(&child, mover.opponent(), stats);
            Move::at((row, col), reply.score)
        })
        .collect()
}

/// Pick the strictly best score for `mover`, keeping the first on ties.
fn select(moves: &[Move], mover: Mark) -> Move {
    let maximizing = mover == Mark::X;
    let mut best: Option<Move> = None;
    for &mv in moves {
        let better = match best {
            None => true,
            Some(b) if maximizing => mv.score > b.score,
            Some(b) => mv.score < b.score,
        };
        if better {
            best = Some(mv);
        }
    }
    // `moves` is never empty: `search` only expands boards with an empty cell.
    best.unwrap_or(Move::leaf(SCORE_DRAW))
}
