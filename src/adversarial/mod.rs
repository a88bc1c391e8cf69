//! Depth-limited adversarial tree search.
//!
//! Each agent here picks one action per call from the controlled agent's
//! point of view, under a different model of the adversaries:
//!
//! - [`MinimaxAgent`]: adversaries play worst-case.
//! - [`AlphaBetaAgent`]: worst-case with alpha-beta pruning; always returns
//!   the same action and value as plain minimax, visiting fewer nodes.
//! - [`ExpectimaxAgent`]: adversaries pick uniformly at random among their
//!   legal moves.
//! - [`ReflexAgent`]: no lookahead at all, evaluates immediate successors.
//!
//! All of them take the evaluation function as a plain closure over the game
//! state; there is no trait hierarchy to implement for leaf scoring.

use crate::game::GameState;

pub mod alpha_beta;
pub mod expectimax;
pub mod minimax;
pub mod reflex;

pub use alpha_beta::AlphaBetaAgent;
pub use expectimax::ExpectimaxAgent;
pub use minimax::MinimaxAgent;
pub use reflex::ReflexAgent;

/// Whether the node is a leaf for evaluation purposes.
///
/// Depth is measured in full plies and advances only after the last agent
/// of a ply has acted. The comparison is `>=` so that a limit of zero cuts
/// off at the root's immediate successors instead of recursing past it.
/// A non-terminal state in which the agent to move has no legal actions is
/// treated as a leaf too.
fn is_cutoff<G: GameState>(state: &G, depth: usize, max_depth: usize, actions: &[G::Action]) -> bool {
    depth >= max_depth || state.is_win() || state.is_lose() || actions.is_empty()
}

/// The `(agent, depth)` pair for the node below the given one. Depth
/// advances only when the last agent of the ply has moved.
fn next_turn<G: GameState>(state: &G, depth: usize, agent: usize) -> (usize, usize) {
    if agent + 1 == state.num_agents() {
        (0, depth + 1)
    } else {
        (agent + 1, depth)
    }
}
