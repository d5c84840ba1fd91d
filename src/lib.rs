//! Tic-Tac-Toe with an exhaustive minimax engine.
//!
//! The crate is split into a small core and a thin driving layer:
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, winning lines, leaf scores
//! - [`board`] - Board state, move validation, win/draw detection
//! - [`minimax`] - Full game-tree search returning a scored move
//! - [`game`] - Controller exposing the move/query interface to front ends
//! - [`protocol`] - Line-based text protocol over a [`game::Game`]
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use tictactoe_minimax::game::Game;
//! use tictactoe_minimax::minimax::best_move;
//!
//! let mut game = Game::new();
//! game.make_move(1, 1);
//!
//! // Ask the engine for O's reply without playing it
//! let hint = best_move(game.board());
//! assert_eq!(hint.score, 0);
//!
//! // Let the engine play it
//! let played = game.ai_move();
//! assert_eq!(played, hint.cell);
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod minimax;
pub mod protocol;
