//! Delve: dig a linear dungeon and print it.

use std::process::ExitCode;

use clap::Parser;

use delve_core::generator::{DiggingGenerator, LinearDigger};

/// Dig a dungeon of corridor-connected rooms and print it as ASCII.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of rooms to dig.
    #[arg(long, default_value_t = 6)]
    rooms: usize,

    /// Generator seed; drawn from entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut digger = match args.seed {
        Some(seed) => LinearDigger::with_seed(seed),
        None => LinearDigger::new(),
    };
    let seed = digger.seed();

    match digger.generate(args.rooms) {
        Ok(dungeon) => {
            print!("{}", dungeon.render());
            println!("seed: {seed}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("generation failed (seed {seed}): {err}");
            ExitCode::FAILURE
        }
    }
}
