//! Expectimax: adversaries are modeled as uniform chance agents.

use super::{is_cutoff, next_turn};
use crate::{Error, Result, game::GameState};

/// Depth-limited expectimax agent.
///
/// Agent 0 maximizes as in minimax, but every other agent contributes the
/// arithmetic mean of its children's values, modeling an adversary that
/// picks uniformly at random among its legal moves.
#[derive(Debug, Clone)]
pub struct ExpectimaxAgent<E> {
    depth: usize,
    evaluate: E,
}

impl<E> ExpectimaxAgent<E> {
    /// Create an agent searching `depth` full plies deep.
    pub fn new(depth: usize, evaluate: E) -> Self {
        ExpectimaxAgent { depth, evaluate }
    }

    /// The configured search depth in plies.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Choose the expectimax action for agent 0 in the given state.
    ///
    /// Ties break on the first action reaching the best expected value.
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
        let children = actions
            .iter()
            .map(|action| self.value(&state.successor(agent, action), next_depth, next_agent));

        if agent == 0 {
            children.fold(f64::NEG_INFINITY, f64::max)
        } else {
            // actions is non-empty here, otherwise the cutoff check returned.
            children.sum::<f64>() / actions.len() as f64
        }
    }
}
