//! Shared fixtures: a petgraph adapter and a textbook Brandes implementation.

#![allow(dead_code)]

use std::collections::VecDeque;

use msbc::{Error, Graph, IdMapping, Result};
use petgraph::graph::{DiGraph, NodeIndex};

/// Exposes a `petgraph::DiGraph` through the `msbc::Graph` capability.
pub struct PetGraph<'a>(pub &'a DiGraph<u64, ()>);

impl Graph for PetGraph<'_> {
    fn node_count(&self) -> usize {
        self.0.node_count()
    }

    fn for_each_relationship<F>(&self, node: usize, f: F) -> Result<()>
    where
        F: FnMut(usize),
    {
        if node >= self.0.node_count() {
            return Err(Error::NodeOutOfRange {
                node,
                node_count: self.0.node_count(),
            });
        }
        self.0
            .neighbors(NodeIndex::new(node))
            .map(NodeIndex::index)
            .for_each(f);
        Ok(())
    }
}

impl IdMapping for PetGraph<'_> {
    fn to_original_node_id(&self, node: usize) -> u64 {
        self.0[NodeIndex::new(node)]
    }
}

/// Builds a petgraph graph; undirected edges are inserted in both directions.
pub fn petgraph_from_edges(
    node_count: usize,
    edges: &[(usize, usize)],
    undirected: bool,
) -> DiGraph<u64, ()> {
    let mut g = DiGraph::with_capacity(node_count, edges.len() * 2);
    for i in 0..node_count {
        g.add_node(1000 + i as u64);
    }
    for &(s, t) in edges {
        g.add_edge(NodeIndex::new(s), NodeIndex::new(t), ());
        if undirected {
            g.add_edge(NodeIndex::new(t), NodeIndex::new(s), ());
        }
    }
    g
}

/// One BFS per source, accumulating dependencies in reverse discovery order.
pub fn brandes(graph: &DiGraph<u64, ()>, divisor: f64) -> Vec<f64> {
    let n = graph.node_count();
    let mut centrality = vec![0.0; n];

    for s in 0..n {
        let mut stack = Vec::with_capacity(n);
        let mut pred: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0f64; n];
        let mut dist = vec![-1i64; n];
        let mut queue = VecDeque::new();

        sigma[s] = 1.0;
        dist[s] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for w in graph.neighbors(NodeIndex::new(v)).map(NodeIndex::index) {
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    pred[w].push(v);
                }
            }
        }

        let mut delta = vec![0.0f64; n];
        while let Some(w) = stack.pop() {
            for &v in &pred[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s {
                centrality[w] += delta[w] / divisor;
            }
        }
    }
    centrality
}

/// Asserts element-wise equality up to a relative tolerance.
pub fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let tolerance = 1e-9 * e.abs().max(1.0);
        assert!((a - e).abs() <= tolerance, "node {i}: {a} != {e}");
    }
}
