//! Read-only view over finished centrality scores.

use serde::Serialize;

use crate::{concurrency::atomic::AtomicDoubleArray, graph::IdMapping};

/// Centrality of one node, keyed by its original id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BetweennessResult {
    /// Id of the node in the originating store.
    pub node_id: u64,
    /// Accumulated betweenness centrality.
    pub centrality: f64,
}

/// Summary statistics over all scores.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CentralityStats {
    /// Smallest score.
    pub min: f64,
    /// Largest score.
    pub max: f64,
    /// Sum of all scores.
    pub sum: f64,
    /// Mean score.
    pub mean: f64,
}

/// Scores of a completed computation, indexed by internal node id.
#[derive(Debug)]
pub struct CentralityScores {
    scores: AtomicDoubleArray,
}

impl CentralityScores {
    pub(crate) fn new(scores: AtomicDoubleArray) -> Self {
        Self { scores }
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns `true` for an empty graph.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Score of internal node `node`.
    ///
    /// # Panics
    /// Panics if `node >= len()`.
    #[inline]
    pub fn get(&self, node: usize) -> f64 {
        self.scores.get(node)
    }

    /// The underlying atomic array.
    #[inline]
    pub fn as_array(&self) -> &AtomicDoubleArray {
        &self.scores
    }

    /// Copies the scores into a vector.
    pub fn to_vec(&self) -> Vec<f64> {
        self.scores.to_vec()
    }

    /// Consumes the scores into a vector.
    pub fn into_vec(self) -> Vec<f64> {
        self.scores.into_vec()
    }

    /// Streams one result per node, translating ids through `ids`.
    pub fn result_stream<'a, M>(&'a self, ids: &'a M) -> impl Iterator<Item = BetweennessResult> + 'a
    where
        M: IdMapping + ?Sized,
    {
        self.scores
            .iter()
            .enumerate()
            .map(move |(node, centrality)| BetweennessResult {
                node_id: ids.to_original_node_id(node),
                centrality,
            })
    }

    /// Min, max, sum and mean of all scores; all zero for an empty graph.
    pub fn stats(&self) -> CentralityStats {
        if self.is_empty() {
            return CentralityStats::default();
        }
        let (min, max, sum) = self.scores.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), v| (min.min(v), max.max(v), sum + v),
        );
        CentralityStats {
            min,
            max,
            sum,
            mean: sum / self.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offset(u64);

    impl IdMapping for Offset {
        fn to_original_node_id(&self, node: usize) -> u64 {
            self.0 + node as u64
        }
    }

    fn scores(values: &[f64]) -> CentralityScores {
        let array = AtomicDoubleArray::new(values.len());
        for (i, &v) in values.iter().enumerate() {
            array.add(i, v);
        }
        CentralityScores::new(array)
    }

    #[test]
    fn stats_summarize_scores() {
        let stats = scores(&[1.0, 3.0, 0.0, 4.0]).stats();
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.sum, 8.0);
        assert_eq!(stats.mean, 2.0);
    }

    #[test]
    fn empty_stats_are_zero() {
        assert_eq!(scores(&[]).stats(), CentralityStats::default());
    }

    #[test]
    fn result_stream_translates_ids() {
        let s = scores(&[0.5, 2.0]);
        let rows: Vec<_> = s.result_stream(&Offset(100)).collect();
        assert_eq!(
            rows,
            vec![
                BetweennessResult {
                    node_id: 100,
                    centrality: 0.5
                },
                BetweennessResult {
                    node_id: 101,
                    centrality: 2.0
                },
            ]
        );
        let json = serde_json::to_string(&rows[0]).unwrap();
        assert_eq!(json, r#"{"nodeId":100,"centrality":0.5}"#);
    }
}
