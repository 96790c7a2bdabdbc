//! Kruskal minimum spanning tree/forest selection.
//!
//! Two strategies feed one greedy selection loop. [`KruskalStrategy::Sort`]
//! sorts a copy of every edge up front; [`KruskalStrategy::Heap`] builds a
//! [`MinHeap`] and extracts edges on demand. Both order edges by
//! `(weight, sequence)`, so they accept the same edges in the same order.
//!
//! Each run owns a fresh [`DisjointSet`] and stops once `vertex_count - 1`
//! edges are accepted or the ordered edges run out. A disconnected input
//! therefore yields a spanning forest rather than an error.

use tracing::{debug, info, instrument};

use crate::disjoint_set::DisjointSet;
use crate::edge::{Edge, EdgeList, Weight};
use crate::error::Result;
use crate::heap::MinHeap;

/// Edge-ordering strategy used to feed the selection loop.
///
/// # Examples
/// ```
/// use findmst_core::{EdgeList, KruskalStrategy};
///
/// let mut graph = EdgeList::new(3, 3);
/// graph.insert_edge(0, 1, 4)?;
/// graph.insert_edge(1, 2, 1)?;
/// graph.insert_edge(0, 2, 2)?;
///
/// let forest = KruskalStrategy::Heap.run(&graph)?;
/// assert_eq!(forest.total_weight(), 3);
/// assert!(forest.is_tree());
/// # Ok::<(), findmst_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KruskalStrategy {
    /// Sort every edge by ascending weight before selecting.
    Sort,
    /// Extract edges from a binary min-heap as selection proceeds.
    Heap,
}

impl KruskalStrategy {
    /// Every strategy, in reference run order.
    pub const ALL: [Self; 2] = [Self::Sort, Self::Heap];

    /// Returns a stable lowercase identifier for logs and CLI values.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Heap => "heap",
        }
    }

    /// Returns the header line used when presenting a run.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Sort => "Sort Based Kruskal",
            Self::Heap => "MinHeap Based Kruskal",
        }
    }

    /// Computes a minimum spanning forest of `graph` with this strategy.
    ///
    /// # Errors
    /// Returns an error when an edge references a vertex outside the graph or
    /// the heap cannot hold every edge. Neither happens for an [`EdgeList`]
    /// built through [`EdgeList::insert_edge`].
    pub fn run(self, graph: &EdgeList) -> Result<MinimumSpanningForest> {
        match self {
            Self::Sort => sort_kruskal(graph),
            Self::Heap => heap_kruskal(graph),
        }
    }
}

/// The output of one Kruskal run.
///
/// Edges are kept in acceptance order. When the input graph is connected the
/// forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimumSpanningForest {
    strategy: KruskalStrategy,
    vertex_count: usize,
    edges: Vec<Edge>,
    component_count: usize,
}

impl MinimumSpanningForest {
    /// Returns the strategy that produced the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn strategy(&self) -> KruskalStrategy { self.strategy }

    /// Returns the number of vertices in the source graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of components remaining after selection.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the sum of accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Computes a minimum spanning forest by sorting every edge first.
///
/// # Errors
/// Returns [`crate::MstError::VertexOutOfRange`] when an edge endpoint is not
/// below `graph.vertex_count()`.
#[instrument(
    name = "kruskal.sort",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.len()),
)]
pub fn sort_kruskal(graph: &EdgeList) -> Result<MinimumSpanningForest> {
    if graph.vertex_count() == 0 {
        return Ok(empty_forest(KruskalStrategy::Sort));
    }

    let mut ordered = graph.edges().to_vec();
    ordered.sort_unstable();
    select(KruskalStrategy::Sort, graph, ordered)
}

/// Computes a minimum spanning forest by extracting edges from a min-heap.
///
/// # Errors
/// Returns [`crate::MstError::VertexOutOfRange`] when an edge endpoint is not
/// below `graph.vertex_count()`.
#[instrument(
    name = "kruskal.heap",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.len()),
)]
pub fn heap_kruskal(graph: &EdgeList) -> Result<MinimumSpanningForest> {
    if graph.vertex_count() == 0 {
        return Ok(empty_forest(KruskalStrategy::Heap));
    }

    let mut heap = MinHeap::with_capacity(graph.len());
    for edge in graph.edges() {
        heap.insert(*edge)?;
    }
    select(KruskalStrategy::Heap, graph, heap.into_ascending())
}

fn empty_forest(strategy: KruskalStrategy) -> MinimumSpanningForest {
    debug!(strategy = strategy.label(), "graph has no vertices; nothing to select");
    MinimumSpanningForest {
        strategy,
        vertex_count: 0,
        edges: Vec::new(),
        component_count: 0,
    }
}

/// Greedy selection shared by both strategies.
///
/// `ordered` must yield edges of `graph` in ascending `(weight, sequence)`
/// order. It is pulled lazily and never past the edge that completes the
/// tree, so a heap stops extracting as soon as `vertex_count - 1` edges are in.
fn select(
    strategy: KruskalStrategy,
    graph: &EdgeList,
    ordered: impl IntoIterator<Item = Edge>,
) -> Result<MinimumSpanningForest> {
    let vertex_count = graph.vertex_count();
    let target = vertex_count.saturating_sub(1);
    let mut sets = DisjointSet::new(vertex_count);
    let mut accepted = Vec::with_capacity(target);
    let mut pending = ordered.into_iter();

    while accepted.len() < target {
        let Some(edge) = pending.next() else {
            break;
        };
        let start_root = sets.find(graph.slot(edge.start())?)?;
        let end_root = sets.find(graph.slot(edge.end())?)?;
        if start_root == end_root {
            continue;
        }

        sets.union(start_root, end_root)?;
        accepted.push(edge);
        debug!(
            strategy = strategy.label(),
            start = edge.start(),
            end = edge.end(),
            weight = edge.weight(),
            accepted = accepted.len(),
            "edge accepted"
        );
    }

    let forest = MinimumSpanningForest {
        strategy,
        vertex_count,
        edges: accepted,
        component_count: sets.components(),
    };
    info!(
        strategy = strategy.label(),
        edges = forest.edges.len(),
        components = forest.component_count,
        total_weight = forest.total_weight(),
        "kruskal selection complete"
    );
    Ok(forest)
}


#[cfg(test)]
mod property;
