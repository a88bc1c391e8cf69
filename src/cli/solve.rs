//! `solve` command: run a graph-search strategy over a maze file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use crate::{
    cli::output,
    maze::{Maze, MazeProblem, euclidean_heuristic, manhattan_heuristic},
    search::{
        SearchOutcome, astar_search, breadth_first_search, depth_first_search, null_heuristic,
        uniform_cost_search,
    },
};

/// Which frontier strategy to search with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Depth-first search
    Dfs,
    /// Breadth-first search
    Bfs,
    /// Uniform-cost search
    Ucs,
    /// A* search with a heuristic
    Astar,
}

/// Heuristic used by A*; ignored by the other strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Heuristic {
    /// The zero heuristic (reduces A* to uniform-cost search)
    Null,
    /// Manhattan distance to the goal
    Manhattan,
    /// Straight-line distance to the goal
    Euclidean,
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Path to the ASCII maze file ('#' wall, 'S' start, 'G' goal)
    pub maze: PathBuf,

    /// Search strategy
    #[arg(long, value_enum, default_value = "astar")]
    pub strategy: Strategy,

    /// Heuristic for A*
    #[arg(long, value_enum, default_value = "manhattan")]
    pub heuristic: Heuristic,

    /// Emit the outcome as JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let maze = Maze::from_file(&args.maze)
        .with_context(|| format!("failed to load maze from {}", args.maze.display()))?;
    let problem = MazeProblem::new(maze);

    let spinner = output::create_spinner("searching...");
    let outcome = match args.strategy {
        Strategy::Dfs => depth_first_search(&problem),
        Strategy::Bfs => breadth_first_search(&problem),
        Strategy::Ucs => uniform_cost_search(&problem),
        Strategy::Astar => match args.heuristic {
            Heuristic::Null => astar_search(&problem, null_heuristic),
            Heuristic::Manhattan => astar_search(&problem, manhattan_heuristic),
            Heuristic::Euclidean => astar_search(&problem, euclidean_heuristic),
        },
    };
    spinner.finish_and_clear();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        SearchOutcome::Solved(plan) => {
            output::print_section("Solution");
            output::print_kv("actions", &plan.len().to_string());
            output::print_kv("cost", &format!("{:.1}", plan.cost));
            let path: Vec<String> = plan.actions.iter().map(|a| a.to_string()).collect();
            output::print_kv("path", &path.join(" "));
        }
        SearchOutcome::Unreachable => {
            output::print_section("No solution");
            println!("  The goal is unreachable from the start state.");
        }
    }

    Ok(())
}
