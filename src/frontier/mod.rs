//! Frontier disciplines for graph search.
//!
//! Depth-first and breadth-first search differ only in which pending state
//! they expand next. The [`Frontier`] trait captures that choice so the
//! uninformed search core can be written once; [`Stack`] and [`Queue`] are the
//! LIFO and FIFO disciplines. Cost-aware search uses [`MinPriorityQueue`]
//! directly because priority updates do not fit the plain push/pop interface.

use std::{
    collections::{HashSet, VecDeque},
    hash::Hash,
};

use crate::{Error, Result};

pub mod priority;

pub use priority::MinPriorityQueue;

/// A container of discovered-but-not-yet-expanded states.
///
/// `contains` must be O(1) amortized: the uninformed search variants consult
/// it for every generated successor to avoid duplicate pending entries.
pub trait Frontier<T> {
    /// Add an item to the frontier.
    fn push(&mut self, item: T);

    /// Remove and return the next item to expand.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the frontier is empty. Callers
    /// are expected to check [`Frontier::is_empty`] first; popping an empty
    /// frontier is a contract violation by the caller.
    fn pop(&mut self) -> Result<T>;

    /// Whether no items remain.
    fn is_empty(&self) -> bool;

    /// Whether the item is currently pending in the frontier.
    fn contains(&self, item: &T) -> bool;
}

/// LIFO frontier: expands the most recently discovered state first.
#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    items: Vec<T>,
    pending: HashSet<T>,
}

impl<T: Clone + Eq + Hash> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Stack {
            items: Vec::new(),
            pending: HashSet::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.pending.insert(item.clone());
        self.items.push(item);
    }

    fn pop(&mut self) -> Result<T> {
        let item = self.items.pop().ok_or(Error::EmptyContainer)?;
        self.pending.remove(&item);
        Ok(item)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn contains(&self, item: &T) -> bool {
        self.pending.contains(item)
    }
}

/// FIFO frontier: expands the least recently discovered state first.
#[derive(Debug, Clone, Default)]
pub struct Queue<T> {
    items: VecDeque<T>,
    pending: HashSet<T>,
}

impl<T: Clone + Eq + Hash> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
            pending: HashSet::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.pending.insert(item.clone());
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Result<T> {
        let item = self.items.pop_front().ok_or(Error::EmptyContainer)?;
        self.pending.remove(&item);
        Ok(item)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn contains(&self, item: &T) -> bool {
        self.pending.contains(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_pops_in_lifo_order() {
        let mut stack = Stack::new();
        stack.push("a");
        stack.push("b");
        stack.push("c");

        assert_eq!(stack.pop().unwrap(), "c");
        assert_eq!(stack.pop().unwrap(), "b");
        assert_eq!(stack.pop().unwrap(), "a");
        assert!(stack.is_empty());
    }

    #[test]
    fn queue_pops_in_fifo_order() {
        let mut queue = Queue::new();
        queue.push("a");
        queue.push("b");
        queue.push("c");

        assert_eq!(queue.pop().unwrap(), "a");
        assert_eq!(queue.pop().unwrap(), "b");
        assert_eq!(queue.pop().unwrap(), "c");
        assert!(queue.is_empty());
    }

    #[test]
    fn membership_tracks_pending_items_only() {
        let mut queue = Queue::new();
        queue.push(1);
        queue.push(2);
        assert!(queue.contains(&1));

        queue.pop().unwrap();
        assert!(!queue.contains(&1), "popped items are no longer pending");
        assert!(queue.contains(&2));
    }

    #[test]
    fn popping_empty_frontier_is_an_error() {
        let mut stack: Stack<u32> = Stack::new();
        assert!(matches!(stack.pop(), Err(Error::EmptyContainer)));

        let mut queue: Queue<u32> = Queue::new();
        assert!(matches!(queue.pop(), Err(Error::EmptyContainer)));
    }
}
