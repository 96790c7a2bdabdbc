//! Minimum spanning trees with Kruskal's algorithm.
//!
//! The crate pairs a naive [`DisjointSet`] with two edge-ordering strategies:
//! a full sort ([`sort_kruskal`]) and a binary [`MinHeap`] drained on demand
//! ([`heap_kruskal`]). Both accept edges in the same `(weight, sequence)`
//! order, so they return identical forests for the same [`EdgeList`].
//!
//! # Tracing
//!
//! Each run opens a `kruskal.sort` or `kruskal.heap` span, emits one `DEBUG`
//! event per accepted edge (`strategy`, `start`, `end`, `weight`, `accepted`)
//! and an `INFO` summary once selection completes.

mod disjoint_set;
mod edge;
mod error;
mod heap;
mod kruskal;
mod sample;

pub use crate::{
    disjoint_set::DisjointSet,
    edge::{Edge, EdgeList, MAX_EDGES, MAX_VERTICES, Vertex, Weight},
    error::{MstError, MstErrorCode, Result},
    heap::{Ascending, MinHeap},
    kruskal::{KruskalStrategy, MinimumSpanningForest, heap_kruskal, sort_kruskal},
    sample::{SAMPLE_EDGES, SAMPLE_FIRST_LABEL, SAMPLE_VERTEX_COUNT, sample_graph},
};
