use std::time::Duration;

use clap::{Parser, Subcommand};
use kociemba::error::Error;
use kociemba::solver::{analyze, solve};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "solves the cube using the two-phase algorithm")]
    Solve {
        /// 54-character facelet string, U9 R9 F9 D9 L9 B9
        facelets: String,

        #[arg(long, default_value_t = 24)]
        max_depth: usize,

        /// Time budget in milliseconds.
        #[arg(long, default_value_t = 5000)]
        timeout: u64,
    },
}

fn run_solve(facelets: &str, max_depth: usize, timeout_ms: u64) -> Result<(), Error> {
    let timeout = Duration::from_millis(timeout_ms);
    let solution = solve(facelets, max_depth, timeout)?;
    let moves = kociemba::scramble::scramble_from_str(solution.trim())?;
    let stats = analyze(&moves);
    println!("Solution: {solution}");
    println!(
        "Moves: {} (face-turn metric), {} (quarter-turn metric)",
        stats.face_turn_metric, stats.quarter_turn_metric
    );
    Ok(())
}

fn main() {
    let program = Cli::parse();

    let result = match &program.command {
        Some(Commands::Solve {
            facelets,
            max_depth,
            timeout,
        }) => run_solve(facelets, *max_depth, *timeout),
        None => Ok(()),
    };

    if let Err(error) = result {
        match error.code() {
            Some(code) => println!("Error {code}"),
            None => println!("Error: {error}"),
        }
        std::process::exit(1);
    }
}
