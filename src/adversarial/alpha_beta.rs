//! Minimax with alpha-beta pruning.

use super::{is_cutoff, next_turn};
use crate::{Error, Result, game::GameState};

/// Depth-limited minimax agent with alpha-beta pruning.
///
/// `alpha` is the best value the maximizer can already guarantee on the
/// current path, `beta` the best the minimizers can. A branch is abandoned
/// as soon as its provisional value strictly violates the bound held by an
/// ancestor (`v > beta` at a max node, `v < alpha` at a min node). Pruning
/// on strict violation only keeps the returned value and chosen action
/// identical to plain minimax; only the number of visited nodes changes.
#[derive(Debug, Clone)]
pub struct AlphaBetaAgent<E> {
    depth: usize,
    evaluate: E,
}

impl<E> AlphaBetaAgent<E> {
    /// Create an agent searching `depth` full plies deep.
    pub fn new(depth: usize, evaluate: E) -> Self {
        AlphaBetaAgent { depth, evaluate }
    }

    /// The configured search depth in plies.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Choose the minimax action for agent 0 in the given state.
    ///
    /// Ties break on the first action reaching the best value, matching
    /// [`MinimaxAgent::choose_action`](super::MinimaxAgent::choose_action).
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
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best: Option<(f64, G::Action)> = None;

        for action in state.legal_actions(0) {
            let value = self.value(
                &state.successor(0, &action),
                next_depth,
                next_agent,
                alpha,
                beta,
            );
            if best.as_ref().is_none_or(|(best_value, _)| value > *best_value) {
                best = Some((value, action));
            }
            alpha = alpha.max(value);
        }

        best.map(|(_, action)| action)
            .ok_or(Error::NoLegalActions { agent: 0 })
    }

    fn value<G>(&self, state: &G, depth: usize, agent: usize, mut alpha: f64, mut beta: f64) -> f64
    where
        G: GameState,
        E: Fn(&G) -> f64,
    {
        let actions = state.legal_actions(agent);
        if is_cutoff(state, depth, self.depth, &actions) {
            return (self.evaluate)(state);
        }

        let (next_agent, next_depth) = next_turn(state, depth, agent);

        if agent == 0 {
            let mut value = f64::NEG_INFINITY;
            for action in &actions {
                value = value.max(self.value(
                    &state.successor(agent, action),
                    next_depth,
                    next_agent,
                    alpha,
                    beta,
                ));
                if value > beta {
                    return value;
                }
                alpha = alpha.max(value);
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for action in &actions {
                value = value.min(self.value(
                    &state.successor(agent, action),
                    next_depth,
                    next_agent,
                    alpha,
                    beta,
                ));
                if value < alpha {
                    return value;
                }
                beta = beta.min(value);
            }
            value
        }
    }
}
