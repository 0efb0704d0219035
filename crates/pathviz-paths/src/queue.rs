//! Stable min-priority queue.
//!
//! Items are stored in a min-heap keyed by `(key(item), insertion_order)`.
//! Smaller keys are popped first; ties are broken by insertion order (FIFO),
//! which keeps replays of a search bit-identical.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A heap slot. Ordering ignores the item itself.
#[derive(Debug)]
struct Slot<K, T> {
    key: K,
    /// Monotonically increasing push counter. Lower = pushed earlier.
    seq: u64,
    item: T,
}

impl<K: Ord, T> PartialEq for Slot<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<K: Ord, T> Eq for Slot<K, T> {}

impl<K: Ord, T> PartialOrd for Slot<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> Ord for Slot<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue ordered by a caller-supplied key function.
///
/// The key is computed once, at push time.
pub struct PriorityQueue<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    heap: BinaryHeap<Reverse<Slot<K, T>>>,
    seq: u64,
    key: F,
}

impl<T, K, F> PriorityQueue<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    /// Create an empty queue ordered by `key`.
    pub fn new(key: F) -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
            key,
        }
    }

    /// Insert an item.
    pub fn push(&mut self, item: T) {
        let key = (self.key)(&item);
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Slot { key, seq, item }));
    }

    /// Remove and return the item with the smallest key. Among equal keys the
    /// earliest pushed item comes out first. `None` when empty.
    pub fn pop_min(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(slot)| slot.item)
    }

    /// The item [`pop_min`](Self::pop_min) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(slot)| &slot.item)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drop every item. The insertion counter keeps running.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, K, F> std::fmt::Debug for PriorityQueue<T, K, F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.heap.len())
            .field("pushed", &self.seq)
            .finish()
    }
}
