//! Checkmate: tells whether a lone king is in check.
//!
//! ## Usage
//!
//! - `checkmate` - Show a demo
//! - `checkmate check [BOARD]` - Analyse a board given inline, via `--file`, or on stdin
//! - `checkmate demo` - Analyse a few random boards

use std::ffi::OsString;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use checkmate::demo::BoardGenerator;
use checkmate::{BoardInput, analyze, report};

/// Checkmate: is the lone king in check?
#[derive(Parser)]
#[command(name = "checkmate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print Success, Fail or Error for one board
    Check {
        /// Board text, rows separated by newlines
        board: Option<OsString>,
        /// Read the board from a file instead
        #[arg(short, long, conflicts_with = "board")]
        file: Option<PathBuf>,
    },
    /// Generate random boards and analyse them
    Demo {
        /// Seed for the board generator
        #[arg(long, default_value_t = 2024)]
        seed: u64,
        /// Board side; random when omitted
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
        size: Option<u8>,
        /// Number of boards
        #[arg(long, default_value_t = 3)]
        count: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check { board, file }) => {
            let input = read_input(board, file)?;
            report(&input, &mut io::stdout().lock())?;
        }
        Some(Commands::Demo { seed, size, count }) => run_demo(seed, size, count),
        None => run_demo(2024, None, 3),
    }
    Ok(())
}

fn read_input(board: Option<OsString>, file: Option<PathBuf>) -> Result<BoardInput> {
    if let Some(board) = board {
        return Ok(BoardInput::from(board));
    }
    let bytes = match file {
        Some(path) => std::fs::read(&path)
            .with_context(|| format!("failed to read board from {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read board from stdin")?;
            buf
        }
    };
    Ok(BoardInput::from(bytes))
}

fn run_demo(seed: u64, size: Option<u8>, count: usize) {
    println!("Checkmate: lone king check detection\n");

    let mut generator = BoardGenerator::with_seed(seed);
    for i in 1..=count {
        let text = match size {
            Some(size) => generator.board(usize::from(size)),
            None => generator.any_board(),
        };
        println!("=== Board {i} ===");
        println!("{text}");
        println!("-> {}\n", analyze(&BoardInput::from(text.as_str())));
    }
}
