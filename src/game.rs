//! Game abstraction consumed by the adversarial tree-search agents.

/// A turn-based, multi-agent game state.
///
/// Agent 0 is the controlled (maximizing) agent; agents `1..num_agents()` are
/// adversaries or chance agents. `successor` must return a new state and
/// never mutate the receiver: the search engines hold on to previously seen
/// states while they recurse.
pub trait GameState: Clone {
    type Action: Clone;

    /// Total number of agents in the game, at least 1.
    fn num_agents(&self) -> usize;

    /// Legal actions for the given agent in this state, in a deterministic
    /// order. Terminal states report no legal actions for any agent.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    /// The state after the given agent takes the given action.
    fn successor(&self, agent: usize, action: &Self::Action) -> Self;

    /// Whether this state is a win for the controlled agent.
    fn is_win(&self) -> bool;

    /// Whether this state is a loss for the controlled agent.
    fn is_lose(&self) -> bool;
}
