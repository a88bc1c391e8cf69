//! CLI infrastructure for the gridmind toolkit
//!
//! This module provides the command-line interface for solving mazes with
//! the graph-search engines and playing pursuit games with the adversarial
//! agents.

pub mod output;
pub mod play;
pub mod solve;
