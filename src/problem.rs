//! Search problem abstraction consumed by the graph-search engines.

use std::hash::Hash;

use crate::{Error, Result};

/// A successor of a state: where you end up, the action that takes you
/// there, and the non-negative step cost of that action.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: f64,
}

impl<S, A> Successor<S, A> {
    /// Create a successor with the given step cost.
    pub fn new(state: S, action: A, cost: f64) -> Self {
        Successor {
            state,
            action,
            cost,
        }
    }

    /// Create a successor with unit step cost.
    pub fn unit(state: S, action: A) -> Self {
        Successor {
            state,
            action,
            cost: 1.0,
        }
    }
}

/// An implicit state graph to search over.
///
/// States are opaque to the engines: they are compared, hashed, cloned, and
/// handed back to `successors`, nothing more. Implementations must return
/// successors in a deterministic order for reproducible tie-breaks, and must
/// never return negative step costs; the engines do not validate costs beyond
/// debug assertions.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;
    type Action: Clone;

    /// The state the search begins from.
    fn start_state(&self) -> Self::State;

    /// Whether the state satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All `(state, action, cost)` successors of the given state.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;
}

/// Validate an externally supplied cost or priority value.
///
/// # Errors
///
/// Returns [`Error::InvalidCost`] if the value is NaN, infinite, or negative.
pub fn validate_cost(value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidCost { value })
    }
}
