//! Integration tests for tictactoe-minimax
//!
//! These tests use only the public API. Randomised games are driven by
//! seeded `fastrand` generators so failures are reproducible.

use tictactoe_minimax::board::{Board, Mark, Outcome, Point};
use tictactoe_minimax::constants::{LINES, SCORE_DRAW, SCORE_O_WIN, SCORE_X_WIN};
use tictactoe_minimax::game::Game;
use tictactoe_minimax::minimax::{best_move, evaluate_moves};

// =============================================================================
// Helper functions
// =============================================================================

fn board(picture: &str) -> Board {
    Board::from_rows(picture).unwrap()
}

/// Play random legal moves until the game ends, collecting every position.
fn random_game(rng: &mut fastrand::Rng) -> Vec<Board> {
    let mut b = Board::new();
    let mut seen = vec![b];
    while b.outcome() == Outcome::InProgress {
        let empty: Vec<Point> = b.empty_cells().collect();
        let (row, col) = empty[rng.usize(..empty.len())];
        assert!(b.place_mark(b.current_player(), row, col));
        seen.push(b);
    }
    seen
}

/// Play the engine as `engine` against a random opponent.
fn engine_vs_random(engine: Mark, seed: u64) -> Outcome {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut game = Game::new();
    while !game.is_over() {
        if game.current_player() == engine {
            assert!(game.ai_move().is_some());
        } else {
            let empty: Vec<Point> = game.board().empty_cells().collect();
            let (row, col) = empty[rng.usize(..empty.len())];
            assert!(game.make_move(row, col));
        }
    }
    game.outcome()
}

// =============================================================================
// Win and draw detection
// =============================================================================

#[test]
fn test_every_line_wins_for_both_marks() {
    for line in LINES {
        for mark in [Mark::X, Mark::O] {
            let mut b = Board::new();
            for &(row, col) in &line {
                b.place_mark(mark, row, col);
            }
            assert!(b.is_winner(), "{mark} line {line:?} not detected");
            assert_eq!(b.is_x_winner(), mark == Mark::X);
            assert_eq!(b.is_o_winner(), mark == Mark::O);
        }
    }
}

#[test]
fn test_full_boards_without_lines_are_draws() {
    for picture in ["XOX/XOO/OXX", "XXO/OOX/XOX", "OXO/XXO/XOX"] {
        let b = board(picture);
        assert!(b.is_draw(), "{picture} should be a draw");
        assert!(!b.is_winner());
        assert_eq!(b.outcome(), Outcome::Draw);
    }
}

#[test]
fn test_outcome_matches_predicates_in_random_games() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..200 {
        for b in random_game(&mut rng) {
            let expected = if b.is_x_winner() {
                Outcome::XWins
            } else if b.is_o_winner() {
                Outcome::OWins
            } else if b.is_draw() {
                Outcome::Draw
            } else {
                Outcome::InProgress
            };
            assert_eq!(b.outcome(), expected, "\n{b}");
            // Alternating play never produces two winners.
            assert!(!(b.is_x_winner() && b.is_o_winner()), "\n{b}");
        }
    }
}

// =============================================================================
// Turn order and copies
// =============================================================================

#[test]
fn test_current_player_alternates() {
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..50 {
        let positions = random_game(&mut rng);
        assert_eq!(positions[0].current_player(), Mark::X);
        for pair in positions.windows(2) {
            assert_eq!(pair[1].current_player(), pair[0].current_player().opponent());
        }
    }
}

#[test]
fn test_copy_is_not_aliased() {
    let original = board("X-O/-X-/---");
    let mut copy = original.copy_board();
    for (row, col) in original.empty_cells() {
        copy.place_mark(Mark::O, row, col);
    }
    copy.set_empty(0, 0);
    assert_eq!(original, board("X-O/-X-/---"));
    assert_ne!(copy, original);
}

// =============================================================================
// Minimax search
// =============================================================================

#[test]
fn test_empty_board_draws_with_perfect_play() {
    assert_eq!(best_move(&Board::new()).score, SCORE_DRAW);
}

#[test]
fn test_x_takes_the_open_line() {
    let cases = [
        ("XX-/OO-/---", (0, 2)),
        ("-OO/X--/X--", (0, 0)),
        ("O--/-O-/XX-", (2, 2)),
    ];
    for (picture, expected) in cases {
        let mv = best_move(&board(picture));
        assert_eq!(mv.cell, Some(expected), "{picture}");
        assert_eq!(mv.score, SCORE_X_WIN, "{picture}");
    }
}

#[test]
fn test_o_blocks_or_wins() {
    // O wins immediately rather than blocking.
    let mv = best_move(&board("XX-/OO-/X--"));
    assert_eq!(mv.cell, Some((1, 2)));
    assert_eq!(mv.score, SCORE_O_WIN);

    // O must block the diagonal to survive.
    let mv = best_move(&board("X-O/-X-/---"));
    assert_eq!(mv.cell, Some((2, 2)));
    assert_eq!(mv.score, SCORE_DRAW);
}

#[test]
fn test_last_empty_cell_is_played() {
    let mv = best_move(&board("XOX/XOO/OX-"));
    assert_eq!(mv.cell, Some((2, 2)));
    assert_eq!(mv.score, SCORE_DRAW);
}

#[test]
fn test_best_move_is_first_optimal_candidate() {
    let mut rng = fastrand::Rng::with_seed(23);
    for _ in 0..30 {
        // Skip the opening positions to keep the test quick.
        for b in random_game(&mut rng).into_iter().skip(2) {
            let moves = evaluate_moves(&b);
            let mv = best_move(&b);
            if b.outcome() != Outcome::InProgress {
                assert!(moves.is_empty());
                assert_eq!(mv.cell, None);
                continue;
            }
            let scores = moves.iter().map(|m| m.score);
            let target = if b.current_player() == Mark::X {
                scores.max()
            } else {
                scores.min()
            };
            let first = moves.iter().find(|m| Some(m.score) == target).copied();
            assert_eq!(Some(mv), first, "\n{b}");
        }
    }
}

// =============================================================================
// Game controller
// =============================================================================

#[test]
fn test_engine_never_loses_to_random_play() {
    for seed in 0..6 {
        let outcome = engine_vs_random(Mark::X, seed);
        assert_ne!(outcome, Outcome::OWins, "engine as X lost with seed {seed}");
        let outcome = engine_vs_random(Mark::O, seed);
        assert_ne!(outcome, Outcome::XWins, "engine as O lost with seed {seed}");
    }
}

#[test]
fn test_engine_self_play_draws() {
    let mut game = Game::new();
    let mut moves = 0;
    while game.ai_move().is_some() {
        moves += 1;
    }
    assert_eq!(moves, 9);
    assert!(game.is_draw());
}

#[test]
fn test_cell_symbols() {
    let mut game = Game::new();
    game.make_move(0, 0);
    game.make_move(2, 2);
    assert_eq!(game.cell_symbol(0, 0).unwrap(), "X");
    assert_eq!(game.cell_symbol(2, 2).unwrap(), "O");
    assert_eq!(game.cell_symbol(1, 1).unwrap(), "-");
    assert!(game.cell_symbol(3, 0).is_err());
}
