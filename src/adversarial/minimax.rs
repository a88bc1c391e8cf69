//! Minimax: adversaries are assumed to play worst-case.

use super::{is_cutoff, next_turn};
use crate::{Error, Result, game::GameState};

/// Depth-limited minimax agent.
///
/// Agent 0 maximizes the evaluation; every other agent minimizes it. The
/// search depth counts full plies (one move per agent), and leaves are
/// scored by the supplied evaluation function.
#[derive(Debug, Clone)]
pub struct MinimaxAgent<E> {
    depth: usize,
    evaluate: E,
}

impl<E> MinimaxAgent<E> {
    /// Create an agent searching `depth` full plies deep.
    pub fn new(depth: usize, evaluate: E) -> Self {
        MinimaxAgent { depth, evaluate }
    }

    /// The configured search depth in plies.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Choose the minimax action for agent 0 in the given state.
    ///
    /// Ties break on the first action reaching the best value, in the
    /// game's legal-action order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalActions`] if agent 0 has no legal actions.
    pub fn choose_action<G>(&self, state: &G) -> Result<G::Action>
    where
        G: GameState,
        E: Fn(&G) -> f64,
    {
        let (next_agent, next_depth) = next_turn(state, 0, 0);
        let mut best: Option<(f64, G::Action)> = None;

        for action in state.legal_actions(0) {
            let value = self.value(&state.successor(0, &action), next_depth, next_agent);
            if best.as_ref().is_none_or(|(best_value, _)| value > *best_value) {
                best = Some((value, action));
            }
        }

        best.map(|(_, action)| action)
            .ok_or(Error::NoLegalActions { agent: 0 })
    }

    fn value<G>(&self, state: &G, depth: usize, agent: usize) -> f64
    where
        G: GameState,
        E: Fn(&G) -> f64,
    {
        let actions = state.legal_actions(agent);
        if is_cutoff(state, depth, self.depth, &actions) {
            return (self.evaluate)(state);
        }

        let (next_agent, next_depth) = next_turn(state, depth, agent);
        let mut value = if agent == 0 {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for action in &actions {
            let child = self.value(&state.successor(agent, action), next_depth, next_agent);
            value = if agent == 0 {
                value.max(child)
            } else {
                value.min(child)
            };
        }

        value
    }
}
