//! `play` command: run a pursuit game with an adversarial search agent.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::{
    adversarial::{AlphaBetaAgent, ExpectimaxAgent, MinimaxAgent, ReflexAgent},
    cli::output,
    game::GameState,
    pursuit::{PursuitState, score_evaluation},
};

/// Which decision procedure drives the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    /// Depth-limited minimax
    Minimax,
    /// Minimax with alpha-beta pruning
    AlphaBeta,
    /// Expectimax with uniform chance adversaries
    Expectimax,
    /// Immediate-successor evaluation without lookahead
    Reflex,
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Path to the ASCII board file ('#' wall, 'P' player, 'C' chaser, '.' pellet)
    pub map: PathBuf,

    /// Decision procedure for the player
    #[arg(long, value_enum, default_value = "alpha-beta")]
    pub agent: AgentKind,

    /// Search depth in full plies
    #[arg(long, default_value_t = 2)]
    pub depth: usize,

    /// Seed for chaser moves and reflex tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Abort the game after this many player turns
    #[arg(long, default_value_t = 200)]
    pub max_turns: usize,

    /// Print the board after every turn
    #[arg(long)]
    pub verbose: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let text = fs::read_to_string(&args.map)
        .with_context(|| format!("failed to read board from {}", args.map.display()))?;
    let mut state: PursuitState = text
        .parse()
        .with_context(|| format!("failed to parse board from {}", args.map.display()))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut reflex = match args.seed {
        Some(seed) => ReflexAgent::with_seed(score_evaluation, seed),
        None => ReflexAgent::new(score_evaluation),
    };

    output::print_section("Pursuit");
    print!("{state}");

    let mut turn = 0;
    while !state.is_over() {
        if turn == args.max_turns {
            bail!("game did not finish within {} turns", args.max_turns);
        }
        turn += 1;

        let action = match args.agent {
            AgentKind::Minimax => {
                MinimaxAgent::new(args.depth, score_evaluation).choose_action(&state)?
            }
            AgentKind::AlphaBeta => {
                AlphaBetaAgent::new(args.depth, score_evaluation).choose_action(&state)?
            }
            AgentKind::Expectimax => {
                ExpectimaxAgent::new(args.depth, score_evaluation).choose_action(&state)?
            }
            AgentKind::Reflex => reflex.choose_action(&state)?,
        };
        state = state.successor(0, &action);

        // Chasers play uniformly at random, matching the expectimax model.
        for chaser in 1..state.num_agents() {
            if state.is_over() {
                break;
            }
            let moves = state.legal_actions(chaser);
            if let Some(action) = moves.choose(&mut rng) {
                state = state.successor(chaser, action);
            }
        }

        if args.verbose {
            println!("turn {turn}: {action}, score {:.0}", state.score());
            print!("{state}");
        }
    }

    output::print_section("Result");
    output::print_kv("outcome", if state.is_win() { "won" } else { "lost" });
    output::print_kv("turns", &turn.to_string());
    output::print_kv("score", &format!("{:.0}", state.score()));
    output::print_kv("pellets left", &state.pellets_remaining().to_string());

    Ok(())
}
