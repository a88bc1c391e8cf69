//! gridmind CLI - search and adversarial planning for grid-world games
//!
//! This CLI provides a unified interface for:
//! - Solving mazes with DFS, BFS, uniform-cost, or A* search
//! - Playing pursuit games with minimax, alpha-beta, expectimax, or reflex agents

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gridmind")]
#[command(version, about = "Search and adversarial planning for grid-world games", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path through a maze with a graph-search strategy
    Solve(gridmind::cli::solve::SolveArgs),

    /// Play a pursuit game with an adversarial search agent
    Play(gridmind::cli::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => gridmind::cli::solve::execute(args),
        Commands::Play(args) => gridmind::cli::play::execute(args),
    }
}
