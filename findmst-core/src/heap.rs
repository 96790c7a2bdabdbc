//! Array-backed binary min-heap of edges.
//!
//! Slot `i` has children `2i + 1` and `2i + 2`; every slot orders at or below
//! both children. Insertion sifts the new edge up from the next free slot and
//! extraction moves the last edge into the root before sifting it down.

use crate::edge::Edge;
use crate::error::{MstError, Result};

/// Fixed-capacity min-heap ordered by [`Edge`]'s `(weight, sequence)` key.
#[derive(Clone, Debug)]
pub struct MinHeap {
    slots: Vec<Edge>,
    capacity: usize,
}

impl MinHeap {
    /// Creates an empty heap holding at most `capacity` edges.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of edges in the heap.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when the heap holds no edges.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the configured capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the minimum edge without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Edge> {
        self.slots.first()
    }

    /// Inserts `edge`, restoring the heap property by sifting up.
    ///
    /// # Errors
    /// Returns [`MstError::CapacityExceeded`] when the heap is full.
    pub fn insert(&mut self, edge: Edge) -> Result<()> {
        if self.slots.len() >= self.capacity {
            return Err(MstError::CapacityExceeded {
                resource: "min-heap",
                capacity: self.capacity,
            });
        }
        self.slots.push(edge);
        self.sift_up(self.slots.len() - 1);
        Ok(())
    }

    /// Removes and returns the minimum edge, or `None` when empty.
    pub fn extract_min(&mut self) -> Option<Edge> {
        let last = self.slots.pop()?;
        let Some(root) = self.slots.first_mut() else {
            return Some(last);
        };
        let min = std::mem::replace(root, last);
        self.sift_down(0);
        Some(min)
    }

    /// Converts the heap into an iterator that extracts edges lazily in
    /// ascending order.
    #[must_use]
    pub const fn into_ascending(self) -> Ascending {
        Ascending { heap: self }
    }

    /// `true` when both slots are occupied and `slot` orders strictly before
    /// `other`.
    fn precedes(&self, slot: usize, other: usize) -> bool {
        match (self.slots.get(slot), self.slots.get(other)) {
            (Some(lhs), Some(rhs)) => lhs < rhs,
            _ => false,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = parent_of(index) {
            if !self.precedes(index, parent) {
                break;
            }
            self.slots.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let child = if self.precedes(right, left) { right } else { left };
            // A missing left child leaves `index` as a leaf.
            if !self.precedes(child, index) {
                break;
            }
            self.slots.swap(index, child);
            index = child;
        }
    }

    #[cfg(test)]
    fn satisfies_heap_property(&self) -> bool {
        (1..self.slots.len()).all(|slot| {
            parent_of(slot).is_some_and(|parent| !self.precedes(slot, parent))
        })
    }
}

const fn parent_of(slot: usize) -> Option<usize> {
    match slot {
        0 => None,
        _ => Some((slot - 1) >> 1),
    }
}

/// Draining iterator returned by [`MinHeap::into_ascending`].
#[derive(Clone, Debug)]
pub struct Ascending {
    heap: MinHeap,
}

impl Iterator for Ascending {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.extract_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl ExactSizeIterator for Ascending {}
