//! Mastermind CLI
//!
//! Interactive command-line game on top of the Mastermind board.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use mastermind::random::{secure_source, seeded_source};
use mastermind::repl::{describe, execute, Command, Outcome};
use mastermind::{
    BoardConfig, MastermindBoard, DEFAULT_GUESS_COUNT, DEFAULT_PIN_COLOR_COUNT, DEFAULT_PIN_COUNT,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const HELP_TEXT: &str = include_str!("text/help.txt");

/// Play Mastermind on the command line.
#[derive(Parser)]
#[command(name = "mastermind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of pins in the secret.
    #[arg(long, env = "MASTERMIND_PINS", default_value_t = DEFAULT_PIN_COUNT)]
    pins: usize,

    /// Number of pin colors in play (at most 12).
    #[arg(long, env = "MASTERMIND_COLORS", default_value_t = DEFAULT_PIN_COLOR_COUNT)]
    colors: usize,

    /// Maximum number of guesses.
    #[arg(long, env = "MASTERMIND_GUESSES", default_value_t = DEFAULT_GUESS_COUNT)]
    guesses: usize,

    /// Seed for a reproducible secret instead of the secure system source.
    #[arg(long)]
    seed: Option<u64>,
}

fn run_interactive(board: &mut MastermindBoard) -> io::Result<()> {
    println!("{}", BANNER_TEXT);
    println!("Type 'help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        println!("{}", board);
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let result = Command::parse(&line).and_then(|command| {
            debug!(?command, "executing command");
            execute(board, command)
        });

        match result {
            Ok(Outcome::Quit) => {
                println!("bye bye!");
                break;
            }
            Ok(Outcome::Help) => println!("{}", HELP_TEXT),
            Ok(outcome) => {
                if let Some(message) = describe(&outcome) {
                    println!("{}", message);
                }
            }
            Err(err) => {
                println!("Invalid command: {}", err);
                println!("Type 'help' for available commands.");
            }
        }
        println!();
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = BoardConfig::new(cli.pins, cli.colors, cli.guesses);
    let source = match cli.seed {
        Some(seed) => seeded_source(seed),
        None => secure_source(),
    };

    let mut board = match MastermindBoard::with_source(source, config) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };

    match run_interactive(&mut board) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "console I/O failed");
            ExitCode::FAILURE
        }
    }
}
