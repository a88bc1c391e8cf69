//! Search and adversarial planning engines for grid-world game agents
//!
//! This crate provides:
//! - A generic graph-search engine with four frontier strategies (DFS, BFS,
//!   uniform-cost, A*) over a [`SearchProblem`] abstraction
//! - A lazy-deletion min-priority queue with safe priority-decrease updates
//! - Depth-limited adversarial tree search (minimax, alpha-beta, expectimax)
//!   over a [`GameState`] abstraction, plus a reflex baseline
//! - Concrete grid-world collaborators: ASCII mazes and a pellet-chase game

pub mod adversarial;
pub mod cli;
pub mod error;
pub mod frontier;
pub mod game;
pub mod maze;
pub mod problem;
pub mod pursuit;
pub mod search;

pub use adversarial::{AlphaBetaAgent, ExpectimaxAgent, MinimaxAgent, ReflexAgent};
pub use error::{Error, Result};
pub use frontier::{Frontier, MinPriorityQueue, Queue, Stack};
pub use game::GameState;
pub use problem::{SearchProblem, Successor, validate_cost};
pub use search::{
    Plan, SearchOutcome, astar_search, breadth_first_search, depth_first_search, null_heuristic,
    uniform_cost_search,
};
