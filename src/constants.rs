//! Board geometry, leaf scores, and front-end timing defaults.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Only 3x3 is supported.
pub const N: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// The eight winning lines: three rows, three columns, then both diagonals.
pub const LINES: [[(usize, usize); N]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

// =============================================================================
// Minimax Leaf Scores
// =============================================================================

/// Score of a position where X has a completed line.
pub const SCORE_X_WIN: i8 = 1;

/// Score of a position where O has a completed line.
pub const SCORE_O_WIN: i8 = -1;

/// Score of a full board with no winner.
pub const SCORE_DRAW: i8 = 0;

// =============================================================================
// Front End
// =============================================================================

/// Pause before the engine replies in interactive play, in milliseconds.
pub const AI_DELAY_MS: u64 = 1000;
