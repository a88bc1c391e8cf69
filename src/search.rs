//! Graph-search engines over implicit state graphs.
//!
//! Four interchangeable frontier strategies share two cores: depth-first and
//! breadth-first search run [`uninformed_search`] over a [`Frontier`]
//! discipline, while uniform-cost and A* search run [`cost_aware_search`]
//! over a [`MinPriorityQueue`] with a pluggable priority key (`g` for
//! uniform-cost, `g + h` for A*).
//!
//! All variants perform graph search: a state is expanded at most once, so
//! cycles in the underlying state graph terminate. A goal is recognized when
//! it is *popped*, not when it is generated; for the cost-aware variants this
//! is what makes the returned path optimal.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{
    frontier::{Frontier, MinPriorityQueue, Queue, Stack},
    problem::SearchProblem,
};

/// A plan from the start state to a goal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan<A> {
    /// Actions to execute, in order.
    pub actions: Vec<A>,
    /// Total cost of the path, summed over step costs.
    pub cost: f64,
}

impl<A> Plan<A> {
    /// Number of actions in the plan.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the plan is empty (the start state was already a goal).
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// The result of a graph search.
///
/// Exhausting the frontier without reaching a goal is a normal, reportable
/// outcome, not an error: it is represented by
/// [`SearchOutcome::Unreachable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome<A> {
    /// A path to a goal was found.
    Solved(Plan<A>),
    /// No reachable state satisfies the goal predicate.
    Unreachable,
}

impl<A> SearchOutcome<A> {
    /// The plan, if one was found.
    pub fn plan(self) -> Option<Plan<A>> {
        match self {
            SearchOutcome::Solved(plan) => Some(plan),
            SearchOutcome::Unreachable => None,
        }
    }

    /// Whether the goal was unreachable.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, SearchOutcome::Unreachable)
    }
}

/// Predecessor record for every state ever added to the frontier. The start
/// state maps to `None`; every other state maps to the state, action, and
/// step cost that produced it.
type ParentMap<P> = HashMap<
    <P as SearchProblem>::State,
    Option<(
        <P as SearchProblem>::State,
        <P as SearchProblem>::Action,
        f64,
    )>,
>;

/// Search the deepest discovered states first.
///
/// Finds *a* path, not necessarily a cheapest or shortest one.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    uninformed_search(problem, Stack::new())
}

/// Search the shallowest discovered states first.
///
/// Returns a path with the fewest actions. It is cost-optimal only when all
/// step costs are equal.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    uninformed_search(problem, Queue::new())
}

/// Search the cheapest discovered states first.
///
/// Returns a minimum-cost path whenever all step costs are non-negative.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> SearchOutcome<P::Action> {
    cost_aware_search(problem, |_, g| g)
}

/// Search states with the lowest `g + heuristic` first.
///
/// With [`null_heuristic`] this is exactly uniform-cost search. The returned
/// path is cost-optimal when the heuristic is admissible (never
/// overestimates the true remaining cost); the engine does not validate
/// admissibility.
pub fn astar_search<P, H>(problem: &P, heuristic: H) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    H: Fn(&P::State, &P) -> f64,
{
    cost_aware_search(problem, |state, g| g + heuristic(state, problem))
}

/// The trivial heuristic: always zero.
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> f64 {
    0.0
}

/// Shared core of depth-first and breadth-first search, parameterized by the
/// frontier discipline.
fn uninformed_search<P, F>(problem: &P, mut frontier: F) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    F: Frontier<P::State>,
{
    let start = problem.start_state();
    let mut parent: ParentMap<P> = HashMap::new();
    parent.insert(start.clone(), None);
    frontier.push(start);

    let mut explored: HashSet<P::State> = HashSet::new();

    loop {
        let Ok(current) = frontier.pop() else {
            return SearchOutcome::Unreachable;
        };
        explored.insert(current.clone());

        if problem.is_goal(&current) {
            return SearchOutcome::Solved(reconstruct_path::<P>(&parent, current));
        }

        for successor in problem.successors(&current) {
            if explored.contains(&successor.state) || frontier.contains(&successor.state) {
                continue;
            }
            parent.insert(
                successor.state.clone(),
                Some((current.clone(), successor.action, successor.cost)),
            );
            frontier.push(successor.state);
        }
    }
}

/// Shared core of uniform-cost and A* search. `key` maps a state and its
/// accumulated path cost `g` to the frontier priority.
fn cost_aware_search<P, K>(problem: &P, key: K) -> SearchOutcome<P::Action>
where
    P: SearchProblem,
    K: Fn(&P::State, f64) -> f64,
{
    let start = problem.start_state();
    let mut frontier = MinPriorityQueue::new();
    let mut parent: ParentMap<P> = HashMap::new();
    let mut g_cost: HashMap<P::State, f64> = HashMap::new();

    parent.insert(start.clone(), None);
    g_cost.insert(start.clone(), 0.0);
    frontier.insert(start.clone(), key(&start, 0.0));

    let mut explored: HashSet<P::State> = HashSet::new();

    loop {
        let Ok(current) = frontier.pop_min() else {
            return SearchOutcome::Unreachable;
        };
        explored.insert(current.clone());

        if problem.is_goal(&current) {
            return SearchOutcome::Solved(reconstruct_path::<P>(&parent, current));
        }

        let g_current = *g_cost
            .get(&current)
            .expect("every state in the frontier has a recorded g-cost");

        for successor in problem.successors(&current) {
            debug_assert!(
                successor.cost >= 0.0,
                "cost-aware search requires non-negative step costs"
            );
            if explored.contains(&successor.state) {
                continue;
            }

            let g_new = g_current + successor.cost;
            let improves = g_cost
                .get(&successor.state)
                .is_none_or(|&known| g_new < known);
            if improves {
                g_cost.insert(successor.state.clone(), g_new);
                parent.insert(
                    successor.state.clone(),
                    Some((current.clone(), successor.action, successor.cost)),
                );
                // Subsumes the frontier membership test: a worse priority for
                // a pending state is silently dropped.
                frontier.update(successor.state.clone(), key(&successor.state, g_new));
            }
        }
    }
}

/// Walk the parent map from the goal back to the start, collecting actions.
///
/// Iterative on purpose: paths can be long and the chain is guaranteed to
/// terminate at the start state, whose parent entry is `None`.
fn reconstruct_path<P: SearchProblem>(
    parent: &ParentMap<P>,
    goal: P::State,
) -> Plan<P::Action> {
    let mut actions = Vec::new();
    let mut cost = 0.0;
    let mut current = goal;

    while let Some((predecessor, action, step_cost)) =
        parent.get(&current).and_then(|entry| entry.as_ref())
    {
        actions.push(action.clone());
        cost += step_cost;
        current = predecessor.clone();
    }

    actions.reverse();
    Plan { actions, cost }
}
