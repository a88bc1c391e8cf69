//! Reflex agent: no lookahead, just immediate successor evaluation.

use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use crate::{Error, Result, game::GameState};

/// An agent that scores each immediate successor with its evaluation
/// function and plays an argmax action.
///
/// When several actions tie for the best score, one of them is picked
/// uniformly at random, so the agent does not get stuck oscillating between
/// equally rated moves. Seed the generator for reproducible runs.
pub struct ReflexAgent<E> {
    evaluate: E,
    rng: StdRng,
}

impl<E> ReflexAgent<E> {
    /// Create an agent with an OS-seeded tie-break generator.
    pub fn new(evaluate: E) -> Self {
        ReflexAgent {
            evaluate,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an agent with a fixed tie-break seed.
    pub fn with_seed(evaluate: E, seed: u64) -> Self {
        ReflexAgent {
            evaluate,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Reseed the tie-break generator. `None` reseeds from the OS.
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
    }

    /// Choose an action for agent 0 by evaluating each immediate successor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalActions`] if agent 0 has no legal actions.
    pub fn choose_action<G>(&mut self, state: &G) -> Result<G::Action>
    where
        G: GameState,
        E: Fn(&G) -> f64,
    {
        let actions = state.legal_actions(0);
        if actions.is_empty() {
            return Err(Error::NoLegalActions { agent: 0 });
        }

        let scores: Vec<f64> = actions
            .iter()
            .map(|action| (self.evaluate)(&state.successor(0, action)))
            .collect();
        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let best_actions: Vec<G::Action> = actions
            .into_iter()
            .zip(&scores)
            .filter(|(_, score)| **score == best)
            .map(|(action, _)| action)
            .collect();

        best_actions
            .choose(&mut self.rng)
            .cloned()
            .ok_or(Error::NoLegalActions { agent: 0 })
    }
}

impl<E> std::fmt::Debug for ReflexAgent<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReflexAgent").finish_non_exhaustive()
    }
}
