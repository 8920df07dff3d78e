//! Example demonstrating solving a puzzle from the command line.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- \
//!     530070000600195000098000060800060003400803001700020006060000280000419005000080079
//! ```
//!
//! Enable solver diagnostics via `env_logger`:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example solve_puzzle -- <PUZZLE>
//! ```

use std::process;

use bruteku_solver::BacktrackSolver;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character puzzle string, row major, `0` for blank cells.
    puzzle: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut solver = BacktrackSolver::new();
    match solver.solve_with_stats(&args.puzzle) {
        Ok((solution, stats)) => {
            println!("Problem:");
            println!("  {}", args.puzzle);
            println!();
            println!("Solution:");
            print!("  ");
            for value in solution {
                print!("{value}");
            }
            println!();
            println!();
            println!("Stats:");
            println!("  assignments: {}", stats.assignment_count());
            println!("  backtracks: {}", stats.backtrack_count());
        }
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    }
}
