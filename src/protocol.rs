//! Line-oriented text protocol for driving a game from a front end.
//!
//! The framing follows the Go Text Protocol: each request is a single line
//! with an optional numeric id, and each response starts with `=` on success
//! or `?` on failure, echoes the id, and ends with a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version` - Engine identification
//! - `list_commands`, `known_command <cmd>` - Command discovery
//! - `quit` - Exit the loop
//! - `clear_board` - Restart with an empty board
//! - `play <row> <col>` - Play the side to move at a cell
//! - `genmove` - Let the engine play for the side to move
//! - `hint` - Suggest the best cell without playing it
//! - `analyze` - List every legal move with its minimax score
//! - `showboard` - Print the board
//! - `cell <row> <col>` - Symbol at a cell (`X`, `O` or `-`)
//! - `valid <row> <col>` - Whether a move is legal
//! - `current_player` - Side to move
//! - `status` - `x_wins`, `o_wins`, `draw` or `in_progress`
//! - `setboard <cells>` - Load a position such as `XO-/-X-/--O`
//!
//! ## Example
//!
//! ```ignore
//! use tictactoe_minimax::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::board::{Board, Point};
use crate::game::Game;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "analyze",
    "cell",
    "clear_board",
    "current_player",
    "genmove",
    "hint",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "setboard",
    "showboard",
    "status",
    "valid",
    "version",
];

/// Protocol engine state.
#[derive(Default)]
pub struct ProtocolEngine {
    game: Game,
}

impl ProtocolEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The game being driven.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop on stdin and stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("failed to read command")?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();
            debug!(%command, ?args, "request");

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n").context("failed to write response")?;
            output.flush().context("failed to flush response")?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Parse `<row> <col>` arguments.
    fn parse_point(args: &[&str]) -> Result<Point, String> {
        let [row, col, ..] = args else {
            return Err("missing arguments".to_string());
        };
        let row = row.parse::<usize>().map_err(|_| format!("invalid row: {row}"))?;
        let col = col.parse::<usize>().map_err(|_| format!("invalid column: {col}"))?;
        Ok((row, col))
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "clear_board" => {
                self.game.restart();
                (true, String::new())
            }

            "play" => {
                let (row, col) = match Self::parse_point(args) {
                    Ok(p) => p,
                    Err(e) => return (false, e),
                };
                if self.game.is_over() {
                    return (false, "game is over".to_string());
                }
                if self.game.make_move(row, col) {
                    (true, String::new())
                } else {
                    (false, "illegal move".to_string())
                }
            }

            "genmove" => match self.game.ai_move() {
                Some((row, col)) => (true, format!("{row} {col}")),
                None => (false, "game is over".to_string()),
            },

            "hint" => match self.game.provide_hint() {
                Some((row, col)) => (true, format!("{row} {col}")),
                None => (false, "game is over".to_string()),
            },

            "analyze" => {
                let lines: Vec<String> = self
                    .game
                    .analyze()
                    .iter()
                    .filter_map(|m| m.cell.map(|(r, c)| format!("{r} {c} {}", m.score)))
                    .collect();
                (true, lines.join("\n"))
            }

            "showboard" => (true, format!("\n{}", self.game.board()).trim_end().to_string()),

            "cell" => match Self::parse_point(args) {
                Ok((row, col)) => match self.game.cell_symbol(row, col) {
                    Ok(symbol) => (true, symbol.to_string()),
                    Err(e) => (false, e.to_string()),
                },
                Err(e) => (false, e),
            },

            "valid" => match Self::parse_point(args) {
                Ok((row, col)) => (true, self.game.is_valid_move(row, col).to_string()),
                Err(e) => (false, e),
            },

            "current_player" => (true, self.game.current_player().to_string()),

            "status" => (true, self.game.outcome().to_string()),

            "setboard" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match Board::from_rows(&args.concat()) {
                    Ok(board) => {
                        self.game.load(board);
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
