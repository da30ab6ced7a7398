//! Multi-source breadth-first search.
//!
//! A batch of sources is traversed in one synchronized, level-by-level sweep.
//! Every source owns one bit lane of a `u64`, so one pass over a node's
//! relationships serves all sources still expanding through that node.
//!
//! Per node the engine keeps three lane masks:
//! - `seen`: sources that reached the node at an earlier level
//! - `visit`: sources for which the node is on the current frontier
//! - `next`: sources that reach the node at the level being built
//!
//! Two kinds of events are reported to the consumer:
//! - [`BfsWithPredecessorConsumer::accept_predecessor`] for every relationship
//!   `predecessor -> node` that lies on a shortest path of at least one
//!   source, fired while the level is being expanded;
//! - [`BfsConsumer::accept`] once per `(node, level)` with the sources that
//!   discovered the node at that level, fired after the level is complete.
//!
//! Sources are visited at depth 0 with an `accept` event. A batch wider than
//! [`OMEGA`] is swept in consecutive passes of at most `OMEGA` sources.

mod batch;
mod sources;

pub use batch::BatchSelector;
pub use sources::BfsSources;

use crate::{
    error::{Error, Result},
    graph::Graph,
};

/// Number of sources traversed by one synchronized pass.
pub const OMEGA: usize = u64::BITS as usize;

/// Receives first-visit events.
pub trait BfsConsumer {
    /// `node` was reached for the first time by each of `sources`, at `depth`.
    fn accept(&mut self, node: usize, depth: u32, sources: BfsSources<'_>);
}

/// Receives predecessor-discovery events.
pub trait BfsWithPredecessorConsumer {
    /// `predecessor -> node` is a shortest-path relationship for each of
    /// `sources`, and `node` sits at `depth`.
    ///
    /// Fired once per qualifying predecessor, so the same `(source, node)` pair
    /// may be reported several times within one level.
    fn accept_predecessor(
        &mut self,
        node: usize,
        predecessor: usize,
        depth: u32,
        sources: BfsSources<'_>,
    );
}

/// Reusable scratch state of the traversal engine.
///
/// Sized once for a graph; every run resets only the nodes it touched.
#[derive(Debug)]
pub struct MultiSourceBfs {
    seen: Vec<u64>,
    visit: Vec<u64>,
    next: Vec<u64>,
    frontier: Vec<usize>,
    next_frontier: Vec<usize>,
    touched: Vec<usize>,
}

impl MultiSourceBfs {
    /// Allocates scratch state for graphs with `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            seen: vec![0; node_count],
            visit: vec![0; node_count],
            next: vec![0; node_count],
            frontier: Vec::new(),
            next_frontier: Vec::new(),
            touched: Vec::new(),
        }
    }

    /// Number of nodes the scratch state covers.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.seen.len()
    }

    /// Traverses `graph` from every node in `sources`, reporting to `consumer`.
    ///
    /// Fails on the first out-of-range source or relationship target and on
    /// any graph access failure; the consumer may then have received a partial
    /// sweep and must discard it.
    pub fn run<G, C>(&mut self, graph: &G, sources: &[usize], consumer: &mut C) -> Result<()>
    where
        G: Graph + ?Sized,
        C: BfsConsumer + BfsWithPredecessorConsumer,
    {
        if graph.node_count() != self.node_count() {
            return Err(Error::GraphAccess(format!(
                "traversal state sized for {} nodes, graph has {}",
                self.node_count(),
                graph.node_count()
            )));
        }
        for chunk in sources.chunks(OMEGA) {
            let outcome = self.sweep(graph, chunk, consumer);
            self.reset();
            outcome?;
        }
        Ok(())
    }

    fn sweep<G, C>(&mut self, graph: &G, sources: &[usize], consumer: &mut C) -> Result<()>
    where
        G: Graph + ?Sized,
        C: BfsConsumer + BfsWithPredecessorConsumer,
    {
        let node_count = self.node_count();
        let Self {
            seen,
            visit,
            next,
            frontier,
            next_frontier,
            touched,
        } = self;

        for (lane, &source) in sources.iter().enumerate() {
            if source >= node_count {
                return Err(Error::NodeOutOfRange {
                    node: source,
                    node_count,
                });
            }
            if visit[source] == 0 {
                frontier.push(source);
                touched.push(source);
            }
            let bit = 1u64 << lane;
            seen[source] |= bit;
            visit[source] |= bit;
        }
        for &source in frontier.iter() {
            consumer.accept(source, 0, BfsSources::new(visit[source], sources));
        }

        let mut depth = 0u32;
        while !frontier.is_empty() {
            depth += 1;

            for &node in frontier.iter() {
                let active = visit[node];
                let mut out_of_range = None;
                graph.for_each_relationship(node, |target| {
                    if target >= node_count {
                        out_of_range = Some(target);
                        return;
                    }
                    let discovered = active & !seen[target];
                    if discovered == 0 {
                        return;
                    }
                    if next[target] == 0 {
                        if seen[target] == 0 {
                            touched.push(target);
                        }
                        next_frontier.push(target);
                    }
                    next[target] |= discovered;
                    consumer.accept_predecessor(
                        target,
                        node,
                        depth,
                        BfsSources::new(discovered, sources),
                    );
                })?;
                if let Some(target) = out_of_range {
                    return Err(Error::NodeOutOfRange {
                        node: target,
                        node_count,
                    });
                }
            }

            for &node in frontier.iter() {
                visit[node] = 0;
            }
            for &node in next_frontier.iter() {
                let lanes = core::mem::take(&mut next[node]);
                seen[node] |= lanes;
                visit[node] = lanes;
                consumer.accept(node, depth, BfsSources::new(lanes, sources));
            }

            frontier.clear();
            core::mem::swap(frontier, next_frontier);
        }

        Ok(())
    }

    /// Clears every lane mask touched by the last sweep.
    fn reset(&mut self) {
        for &node in &self.touched {
            self.seen[node] = 0;
            self.visit[node] = 0;
            self.next[node] = 0;
        }
        self.touched.clear();
        self.frontier.clear();
        self.next_frontier.clear();
    }
}
