//! Weighted undirected edges and the capacity-bounded edge list.
//!
//! An [`EdgeList`] is built once by the graph-construction collaborator and
//! then only read. Both Kruskal strategies work on copies of its edges, so the
//! canonical insertion order is never disturbed.

use std::cmp::Ordering;

use crate::error::{MstError, Result};

/// Vertex identifier in `[0, vertex_count)`.
pub type Vertex = usize;

/// Edge weight.
pub type Weight = i64;

/// Upper bound on vertex ids used by the sample graph.
pub const MAX_VERTICES: usize = 100;

/// Default edge capacity, two edges per vertex slot.
pub const MAX_EDGES: usize = 2 * MAX_VERTICES;

/// A single weighted edge.
///
/// Edges order by `(weight, sequence)`. The sequence is the insertion index
/// assigned by [`EdgeList::insert_edge`], which makes equal weights resolve in
/// insertion order for every strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    start: Vertex,
    end: Vertex,
    weight: Weight,
    sequence: u64,
}

impl Edge {
    /// Creates an edge with an explicit tie-break sequence.
    #[must_use]
    pub const fn new(start: Vertex, end: Vertex, weight: Weight, sequence: u64) -> Self {
        Self {
            start,
            end,
            weight,
            sequence,
        }
    }

    /// Returns the first endpoint as supplied at insertion.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> Vertex { self.start }

    /// Returns the second endpoint as supplied at insertion.
    #[must_use]
    #[rustfmt::skip]
    pub const fn end(&self) -> Vertex { self.end }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns the insertion sequence used to break weight ties.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> u64 { self.sequence }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Unordered collection of edges over a fixed vertex range.
///
/// Vertex labels run from [`Self::first_label`] for [`Self::vertex_count`]
/// labels. Edges keep the labels they were inserted with; selection maps them
/// to zero-based slots internally.
///
/// # Examples
/// ```
/// use findmst_core::EdgeList;
///
/// let mut graph = EdgeList::new(3, 4);
/// graph.insert_edge(0, 1, 5)?;
/// graph.insert_edge(1, 2, 2)?;
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.edges()[1].sequence(), 1);
///
/// let mut one_based = EdgeList::with_first_label(1, 3, 4);
/// one_based.insert_edge(1, 3, 5)?;
/// assert!(one_based.insert_edge(0, 1, 5).is_err());
/// # Ok::<(), findmst_core::MstError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeList {
    first_label: Vertex,
    vertex_count: usize,
    capacity: usize,
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Creates an empty edge list over vertices `0..vertex_count` holding at
    /// most `capacity` edges.
    #[must_use]
    pub fn new(vertex_count: usize, capacity: usize) -> Self {
        Self::with_first_label(0, vertex_count, capacity)
    }

    /// Creates an empty edge list whose labels start at `first_label`, so
    /// valid endpoints are `first_label..first_label + vertex_count`.
    #[must_use]
    pub fn with_first_label(first_label: Vertex, vertex_count: usize, capacity: usize) -> Self {
        Self {
            first_label,
            vertex_count,
            capacity,
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Appends an edge and returns the copy that was stored.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] when an endpoint is not a valid
    /// label, and [`MstError::CapacityExceeded`] when the list already holds
    /// [`Self::capacity`] edges.
    pub fn insert_edge(&mut self, start: Vertex, end: Vertex, weight: Weight) -> Result<Edge> {
        self.slot(start)?;
        self.slot(end)?;
        if self.edges.len() >= self.capacity {
            return Err(MstError::CapacityExceeded {
                resource: "edge list",
                capacity: self.capacity,
            });
        }

        let sequence = u64::try_from(self.edges.len()).unwrap_or(u64::MAX);
        let edge = Edge::new(start, end, weight, sequence);
        self.edges.push(edge);
        Ok(edge)
    }

    /// Maps a vertex label to its zero-based slot.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] when `vertex` is not a label of
    /// this graph.
    pub(crate) fn slot(&self, vertex: Vertex) -> Result<usize> {
        vertex
            .checked_sub(self.first_label)
            .filter(|slot| *slot < self.vertex_count)
            .ok_or(MstError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
    }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the lowest valid vertex label.
    #[must_use]
    #[rustfmt::skip]
    pub const fn first_label(&self) -> Vertex { self.first_label }

    /// Returns the number of vertices the graph spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the maximum number of edges the list accepts.
    #[must_use]
    #[rustfmt::skip]
    pub const fn capacity(&self) -> usize { self.capacity }

    /// Returns the number of stored edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when no edges have been inserted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.edges.is_empty() }
}
