//! Naive union-find used for cycle detection during Kruskal selection.
//!
//! Roots carry no parent. `union` always hangs the first root under the
//! second and `find` walks parent links without compressing them, so lookups
//! cost the depth of the tree and `find` never mutates.

use crate::edge::Vertex;
use crate::error::{MstError, Result};

/// Disjoint-set forest over vertices `0..len`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<Option<Vertex>>,
    components: usize,
}

impl DisjointSet {
    /// Creates a forest where every vertex is its own root.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            parent: vec![None; vertex_count],
            components: vertex_count,
        }
    }

    /// Returns the number of vertices tracked.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the forest tracks no vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of disjoint components.
    #[must_use]
    pub const fn components(&self) -> usize {
        self.components
    }

    /// Returns the root of the component containing `vertex`.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] when `vertex >= self.len()`.
    pub fn find(&self, vertex: Vertex) -> Result<Vertex> {
        let mut current = vertex;
        while let Some(parent) = self.link(current)? {
            current = parent;
        }
        Ok(current)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// The root of `left` is placed under the root of `right`. Returns `false`
    /// without changing anything when both already share a root.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] when either vertex is out of
    /// range.
    pub fn union(&mut self, left: Vertex, right: Vertex) -> Result<bool> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let vertex_count = self.parent.len();
        let slot = self
            .parent
            .get_mut(left_root)
            .ok_or(MstError::VertexOutOfRange {
                vertex: left_root,
                vertex_count,
            })?;
        *slot = Some(right_root);
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a root.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] when either vertex is out of
    /// range.
    pub fn same(&self, left: Vertex, right: Vertex) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn link(&self, vertex: Vertex) -> Result<Option<Vertex>> {
        self.parent
            .get(vertex)
            .copied()
            .ok_or(MstError::VertexOutOfRange {
                vertex,
                vertex_count: self.parent.len(),
            })
    }
}
