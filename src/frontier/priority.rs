//! Lazy-deletion min-priority queue.
//!
//! Uniform-cost and heuristic search need to lower the priority of a pending
//! state when a cheaper path to it is found. `std::collections::BinaryHeap`
//! has no decrease-key, so this queue invalidates the old entry instead:
//! every pushed entry carries a sequence stamp, a side index records the
//! stamp of the one live entry per item, and stale entries are skipped at pop
//! time. Invalidated entries stay in the heap until they surface, which is
//! why emptiness is tracked by the live index and never by heap length.

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap},
    hash::Hash,
};

use crate::{Error, Result};

/// A heap entry. `seq` doubles as an insertion-order tie-break and as the
/// generation stamp checked against the live index at pop time.
#[derive(Debug, Clone)]
struct Entry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// The live entry for an item: which heap entry is current, at what priority.
#[derive(Debug, Clone, Copy)]
struct Slot {
    seq: u64,
    priority: f64,
}

/// A min-priority queue with lazy deletion and priority-decrease updates.
///
/// At most one *live* entry exists per item. [`MinPriorityQueue::update`]
/// never raises an item's priority, which realizes the "never push a worse
/// path" rule of uniform-cost search.
///
/// Ties in priority break by insertion order. That makes pop order
/// deterministic within a run, but it is not part of the contract.
///
/// # Examples
///
/// ```
/// use gridmind::frontier::MinPriorityQueue;
///
/// let mut queue = MinPriorityQueue::new();
/// queue.insert("x", 5.0);
/// queue.insert("y", 3.0);
/// queue.update("x", 1.0);
///
/// assert_eq!(queue.pop_min().unwrap(), "x");
/// assert_eq!(queue.pop_min().unwrap(), "y");
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    live: HashMap<T, Slot>,
    next_seq: u64,
}

impl<T: Clone + Eq + Hash> MinPriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            next_seq: 0,
        }
    }

    fn push_entry(&mut self, item: T, priority: f64) {
        debug_assert!(priority.is_finite(), "priorities must be finite");
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(item.clone(), Slot { seq, priority });
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            item,
        }));
    }

    /// Insert an item with the given priority.
    ///
    /// Returns `false` without modifying the queue if the item is already
    /// present; use [`MinPriorityQueue::update`] to change an existing item's
    /// priority. This preserves the at-most-one-live-entry-per-item invariant.
    pub fn insert(&mut self, item: T, priority: f64) -> bool {
        if self.live.contains_key(&item) {
            return false;
        }
        self.push_entry(item, priority);
        true
    }

    /// Insert the item, or lower its priority if it is already present.
    ///
    /// If the item is absent this behaves as [`MinPriorityQueue::insert`].
    /// If it is present with a priority less than or equal to `priority`, the
    /// call is a no-op: priorities are never raised. Otherwise the old entry
    /// is invalidated and a fresh entry is pushed at the new priority.
    pub fn update(&mut self, item: T, priority: f64) {
        match self.live.get(&item) {
            Some(slot) if priority >= slot.priority => {}
            // A fresh seq supersedes the old entry, which goes stale in place.
            _ => self.push_entry(item, priority),
        }
    }

    /// Remove and return the live item with the minimum priority.
    ///
    /// Invalidated entries encountered on the way are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if no live entry remains.
    pub fn pop_min(&mut self) -> Result<T> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            match self.live.get(&entry.item) {
                Some(slot) if slot.seq == entry.seq => {
                    self.live.remove(&entry.item);
                    return Ok(entry.item);
                }
                // Stale: superseded by an update, or its item already popped.
                _ => {}
            }
        }
        Err(Error::EmptyContainer)
    }

    /// Whether the item has a live entry in the queue.
    pub fn contains(&self, item: &T) -> bool {
        self.live.contains_key(item)
    }

    /// The priority of the item's live entry, if any.
    pub fn priority_of(&self, item: &T) -> Option<f64> {
        self.live.get(item).map(|slot| slot.priority)
    }

    /// Number of live entries. O(1).
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no live entries remain. O(1), independent of stale heap entries.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

impl<T: Clone + Eq + Hash> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
