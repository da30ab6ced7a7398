//! A compact CSR (compressed sparse row) graph.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: contiguous `usize` targets for each row
//! - `original_ids`: optional `Vec<u64>` translating internal ids back to the source store

use crate::{
    error::{Error, Result},
    graph::{Graph, IdMapping, Orientation},
};

/// An immutable CSR graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_adjacency` | \(O(n + m)\) | Builds CSR from adjacency list |
/// | `from_edges` | \(O(n + m)\) | Counting sort over sources |
/// | `neighbors` | \(O(1)\) | Returns a slice of out-neighbors |
/// | `degree` | \(O(1)\) | Returns out-degree |
/// | `has_edge` | \(O(\text{out-degree})\) | Linear scan of neighbors |
#[derive(Debug, Clone)]
pub struct CsrGraph {
    offsets: Vec<usize>,
    targets: Vec<usize>,
    original_ids: Option<Vec<u64>>,
}

impl CsrGraph {
    /// Builds a CSR graph from an adjacency list.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self> {
        let n = adjacency.len();

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);

        let mut total = 0usize;
        for nbrs in adjacency {
            total = total.saturating_add(nbrs.len());
            offsets.push(total);
        }

        let mut targets = Vec::with_capacity(total);
        for nbrs in adjacency {
            for &v in nbrs {
                check_node(v, n)?;
                targets.push(v);
            }
        }

        Ok(Self {
            offsets,
            targets,
            original_ids: None,
        })
    }

    /// Builds a CSR graph directly from CSR parts.
    ///
    /// `offsets` must have length `n + 1`, be monotone and end at `targets.len()`.
    pub fn from_csr_parts(offsets: Vec<usize>, targets: Vec<usize>) -> Result<Self> {
        if offsets.first() != Some(&0) {
            return Err(Error::GraphAccess("offsets must start at 0".into()));
        }
        if offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::GraphAccess("offsets must be monotone".into()));
        }
        if offsets.last() != Some(&targets.len()) {
            return Err(Error::GraphAccess(
                "last offset must equal the number of targets".into(),
            ));
        }
        let n = offsets.len() - 1;
        for &v in &targets {
            check_node(v, n)?;
        }
        Ok(Self {
            offsets,
            targets,
            original_ids: None,
        })
    }

    /// Builds a CSR graph from `(source, target)` pairs projected with `orientation`.
    ///
    /// Within a row, targets keep the order in which their relationships appear.
    pub fn from_edges(
        node_count: usize,
        edges: &[(usize, usize)],
        orientation: Orientation,
    ) -> Result<Self> {
        let mut degrees = vec![0usize; node_count];
        for &(s, t) in edges {
            check_node(s, node_count)?;
            check_node(t, node_count)?;
            match orientation {
                Orientation::Natural => degrees[s] += 1,
                Orientation::Reverse => degrees[t] += 1,
                Orientation::Undirected => {
                    degrees[s] += 1;
                    degrees[t] += 1;
                }
            }
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        offsets.push(0);
        let mut total = 0usize;
        for d in &degrees {
            total += d;
            offsets.push(total);
        }

        let mut cursor: Vec<usize> = offsets[..node_count].to_vec();
        let mut targets = vec![0usize; total];
        let mut place = |from: usize, to: usize| {
            targets[cursor[from]] = to;
            cursor[from] += 1;
        };
        for &(s, t) in edges {
            match orientation {
                Orientation::Natural => place(s, t),
                Orientation::Reverse => place(t, s),
                Orientation::Undirected => {
                    place(s, t);
                    place(t, s);
                }
            }
        }

        Ok(Self {
            offsets,
            targets,
            original_ids: None,
        })
    }

    /// Attaches the ids nodes had in the originating store.
    pub fn with_original_ids(mut self, original_ids: Vec<u64>) -> Result<Self> {
        if original_ids.len() != self.node_count() {
            return Err(Error::GraphAccess(format!(
                "expected {} original ids, got {}",
                self.node_count(),
                original_ids.len()
            )));
        }
        self.original_ids = Some(original_ids);
        Ok(self)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len() - 1
    }

    /// Number of relationships.
    pub fn relationship_count(&self) -> usize {
        self.targets.len()
    }

    /// Returns the out-neighbors of `node`.
    pub fn neighbors(&self, node: usize) -> Result<&[usize]> {
        check_node(node, self.node_count())?;
        Ok(&self.targets[self.offsets[node]..self.offsets[node + 1]])
    }

    /// Checks if a relationship exists from `from` to `to`.
    pub fn has_edge(&self, from: usize, to: usize) -> Result<bool> {
        check_node(to, self.node_count())?;
        Ok(self.neighbors(from)?.contains(&to))
    }
}

impl Graph for CsrGraph {
    #[inline]
    fn node_count(&self) -> usize {
        CsrGraph::node_count(self)
    }

    #[inline]
    fn for_each_relationship<F>(&self, node: usize, f: F) -> Result<()>
    where
        F: FnMut(usize),
    {
        self.neighbors(node)?.iter().copied().for_each(f);
        Ok(())
    }

    #[inline]
    fn degree(&self, node: usize) -> Result<usize> {
        check_node(node, self.node_count())?;
        Ok(self.offsets[node + 1] - self.offsets[node])
    }
}

impl IdMapping for CsrGraph {
    /// Looks `node` up in the attached original ids, or returns it unchanged
    /// when none are attached.
    ///
    /// # Panics
    ///
    /// Panics if original ids are attached and `node >= node_count()`.
    fn to_original_node_id(&self, node: usize) -> u64 {
        match &self.original_ids {
            Some(ids) => ids[node],
            None => node as u64,
        }
    }
}

#[inline]
fn check_node(node: usize, node_count: usize) -> Result<()> {
    if node < node_count {
        Ok(())
    } else {
        Err(Error::NodeOutOfRange { node, node_count })
    }
}
