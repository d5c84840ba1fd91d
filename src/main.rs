//! Tic-Tac-Toe against an exhaustive minimax engine.
//!
//! ## Usage
//!
//! - `tictactoe-minimax` - Watch the engine play itself
//! - `tictactoe-minimax play` - Play in the terminal against the engine
//! - `tictactoe-minimax protocol` - Serve the text protocol on stdin/stdout

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe_minimax::board::{Mark, Outcome};
use tictactoe_minimax::constants::AI_DELAY_MS;
use tictactoe_minimax::game::Game;
use tictactoe_minimax::protocol::ProtocolEngine;

/// Tic-Tac-Toe with an exhaustive minimax engine
#[derive(Parser)]
#[command(name = "tictactoe-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine in the terminal
    Play {
        /// The side you play
        #[arg(long, value_enum, default_value_t = Side::X)]
        human: Side,
        /// Pause before each engine move, in milliseconds
        #[arg(long, default_value_t = AI_DELAY_MS)]
        ai_delay_ms: u64,
        /// Do not print the suggested move before your turn
        #[arg(long)]
        no_hints: bool,
    },
    /// Serve the line-based text protocol on stdin/stdout
    Protocol,
    /// Let the engine play both sides from an empty board
    Demo,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Play {
            human,
            ai_delay_ms,
            no_hints,
        }) => run_play(human.into(), Duration::from_millis(ai_delay_ms), !no_hints),
        Some(Commands::Protocol) => ProtocolEngine::new().run(),
        Some(Commands::Demo) | None => run_demo(),
    }
}

/// Log to stderr so protocol responses on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn status_line(game: &Game) -> String {
    match game.outcome() {
        Outcome::XWins => "X wins!".to_string(),
        Outcome::OWins => "O wins!".to_string(),
        Outcome::Draw => "It's a draw!".to_string(),
        Outcome::InProgress => format!("Player {}'s turn", game.current_player()),
    }
}

fn run_demo() -> Result<()> {
    println!("Tic-Tac-Toe: engine vs engine\n");

    let mut game = Game::new();
    println!("{}", game.board());
    while let Some((row, col)) = game.ai_move() {
        let mover = game.current_player().opponent();
        println!("{mover} plays ({row}, {col})");
        println!("{}", game.board());
    }
    println!("{}", status_line(&game));
    info!(outcome = %game.outcome(), "demo finished");
    Ok(())
}

fn run_play(human: Mark, delay: Duration, hints: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut game = Game::new();

    println!("Enter moves as `row col` (0-2). Commands: hint, restart, quit.\n");
    loop {
        println!("{}", game.board());
        println!("{}", status_line(&game));

        if game.is_over() {
            print!("Play again? [y/N] ");
            stdout.flush().context("failed to flush stdout")?;
            match read_line(&mut input)? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {
                    game.restart();
                    continue;
                }
                _ => return Ok(()),
            }
        }

        if game.current_player() != human {
            // Presentation-only pause; the search result does not depend on it.
            thread::sleep(delay);
            if let Some((row, col)) = game.ai_move() {
                println!("Engine plays ({row}, {col})\n");
            }
            continue;
        }

        if hints {
            if let Some((row, col)) = game.provide_hint() {
                println!("Hint: ({row}, {col})");
            }
        }
        print!("> ");
        stdout.flush().context("failed to flush stdout")?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };
        match line.as_str() {
            "quit" | "q" => return Ok(()),
            "restart" => game.restart(),
            "hint" => match game.provide_hint() {
                Some((row, col)) => println!("Best move: ({row}, {col})\n"),
                None => println!("No moves left\n"),
            },
            _ => match parse_move(&line) {
                Some((row, col)) if game.make_move(row, col) => println!(),
                Some(_) => println!("That cell is not available\n"),
                None => println!("Expected `row col`, e.g. `1 1`\n"),
            },
        }
    }
}

/// Read one trimmed line, or `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("failed to read from stdin")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some((row, col))
}
