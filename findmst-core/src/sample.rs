//! The embedded example graph.
//!
//! Ten vertices labelled `1..=10` joined by twenty edges with weights between
//! 1 and 18. The graph is connected, so every run stops at the ninth accepted
//! edge, `(8, 10, 15)`, leaving the three heaviest edges unexamined.

use crate::edge::{EdgeList, MAX_EDGES, Vertex, Weight};
use crate::error::Result;

/// Lowest vertex label in the sample graph.
pub const SAMPLE_FIRST_LABEL: Vertex = 1;

/// Number of vertices in the sample graph (labels `1..=10`).
pub const SAMPLE_VERTEX_COUNT: usize = 10;

/// Sample edges as `(start, end, weight)` in insertion order.
pub const SAMPLE_EDGES: [(Vertex, Vertex, Weight); 20] = [
    (1, 7, 12),
    (7, 8, 13),
    (8, 10, 15),
    (10, 9, 10),
    (9, 5, 18),
    (5, 6, 9),
    (6, 1, 11),
    (1, 2, 3),
    (6, 2, 7),
    (2, 5, 1),
    (2, 7, 8),
    (2, 3, 5),
    (2, 4, 4),
    (3, 7, 6),
    (3, 8, 5),
    (3, 4, 2),
    (4, 8, 4),
    (4, 10, 16),
    (4, 5, 13),
    (5, 10, 17),
];

/// Builds the sample graph with the default [`MAX_EDGES`] capacity.
///
/// # Errors
/// Propagates [`EdgeList::insert_edge`] failures; none occur for the embedded
/// data.
///
/// # Examples
/// ```
/// use findmst_core::{KruskalStrategy, sample_graph};
///
/// let graph = sample_graph()?;
/// let forest = KruskalStrategy::Sort.run(&graph)?;
/// assert_eq!(forest.edges().len(), 9);
/// assert_eq!(forest.total_weight(), 52);
/// assert!(forest.is_tree());
/// # Ok::<(), findmst_core::MstError>(())
/// ```
pub fn sample_graph() -> Result<EdgeList> {
    let mut graph =
        EdgeList::with_first_label(SAMPLE_FIRST_LABEL, SAMPLE_VERTEX_COUNT, MAX_EDGES);
    for (start, end, weight) in SAMPLE_EDGES {
        graph.insert_edge(start, end, weight)?;
    }
    Ok(graph)
}
