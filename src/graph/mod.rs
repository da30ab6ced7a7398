//! Graph capabilities consumed by the traversal engine.
//!
//! The engine only needs two things from a graph: its node count and a way to
//! iterate the relationships leaving a node. Orientation (natural, reverse,
//! undirected) is resolved by the graph before targets reach the engine.
//!
//! [`CsrGraph`] is the in-crate implementation; any other storage can plug in
//! by implementing [`Graph`] and, optionally, [`IdMapping`].

pub mod csr;

pub use csr::CsrGraph;

use crate::error::Result;

/// Read-only adjacency access keyed by dense node ids in `[0, node_count)`.
pub trait Graph {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Calls `f` with the target of every relationship leaving `node`.
    ///
    /// Implementations must fail with [`Error::NodeOutOfRange`](crate::Error::NodeOutOfRange)
    /// when `node >= node_count()`; they must never silently skip.
    fn for_each_relationship<F>(&self, node: usize, f: F) -> Result<()>
    where
        F: FnMut(usize);

    /// Number of relationships leaving `node`.
    fn degree(&self, node: usize) -> Result<usize> {
        let mut degree = 0;
        self.for_each_relationship(node, |_| degree += 1)?;
        Ok(degree)
    }
}

/// Translation from internal dense ids to the ids of the originating store.
pub trait IdMapping {
    /// Returns the original id of internal node `node`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `node` is not below the graph's node count.
    fn to_original_node_id(&self, node: usize) -> u64 {
        node as u64
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    #[inline]
    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    #[inline]
    fn for_each_relationship<F>(&self, node: usize, f: F) -> Result<()>
    where
        F: FnMut(usize),
    {
        (**self).for_each_relationship(node, f)
    }
}

impl<M: IdMapping + ?Sized> IdMapping for &M {
    #[inline]
    fn to_original_node_id(&self, node: usize) -> u64 {
        (**self).to_original_node_id(node)
    }
}

/// How relationships of an edge list are projected into adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    /// `source -> target` only.
    #[default]
    Natural,
    /// `target -> source` only.
    Reverse,
    /// Both directions.
    Undirected,
}
