//! Per-batch shortest-path bookkeeping and dependency accumulation.

use core::num::NonZeroUsize;

use super::{LocalIds, Paths};
use crate::{
    concurrency::atomic::AtomicDoubleArray,
    error::{Error, Result},
    msbfs::{BfsConsumer, BfsSources, BfsWithPredecessorConsumer},
};

const UNVISITED: i32 = -1;

/// Shortest-path state of one source within a batch.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    distance: Vec<i32>,
    sigma: Vec<f64>,
    delta: Vec<f64>,
    stack: Vec<usize>,
    paths: Paths,
}

impl SourceRecord {
    /// Allocates an empty record for `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            distance: vec![UNVISITED; node_count],
            sigma: vec![0.0; node_count],
            delta: vec![0.0; node_count],
            stack: Vec::new(),
            paths: Paths::new(node_count),
        }
    }

    /// Distance of `node` from the source, `-1` while unreached.
    #[inline]
    pub fn distance(&self, node: usize) -> i32 {
        self.distance[node]
    }

    /// Number of shortest paths from the source to `node`.
    ///
    /// Held as `f64`: path counts grow exponentially with depth and overflow
    /// any integer width on long chains of parallel paths.
    #[inline]
    pub fn sigma(&self, node: usize) -> f64 {
        self.sigma[node]
    }

    /// Nodes in discovery order.
    #[inline]
    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    /// Shortest-path predecessors recorded so far.
    #[inline]
    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    fn start(&mut self, source: usize) {
        self.distance[source] = 0;
        self.sigma[source] = 1.0;
    }

    #[inline]
    fn visit(&mut self, node: usize) {
        self.stack.push(node);
    }

    #[inline]
    fn predecessor(&mut self, node: usize, predecessor: usize, depth: u32) {
        if self.distance[node] < 0 {
            self.distance[node] = depth as i32;
        }
        if self.distance[node] == self.distance[predecessor] + 1 {
            debug_assert!(
                self.sigma[predecessor] > 0.0,
                "predecessor {predecessor} of {node} has no shortest path"
            );
            self.sigma[node] += self.sigma[predecessor];
            self.paths.append(node, predecessor);
        }
    }

    /// Replays the stack backwards and folds dependencies into `centrality`.
    ///
    /// Every popped node is reset on the way, so the record is empty afterwards.
    fn accumulate(&mut self, source: usize, centrality: &AtomicDoubleArray, divisor: f64) {
        let Self {
            distance,
            sigma,
            delta,
            stack,
            paths,
        } = self;

        while let Some(node) = stack.pop() {
            if !paths.is_empty_at(node) {
                let sigma_node = sigma[node];
                assert!(
                    sigma_node > 0.0,
                    "node {node} has predecessors but no shortest path from {source}"
                );
                let dependency = delta[node] + 1.0;
                for predecessor in paths.predecessors(node) {
                    delta[predecessor] +=
                        sigma[predecessor] / sigma_node * dependency;
                }
            }
            if node != source && delta[node] != 0.0 {
                centrality.add(node, delta[node] / divisor);
            }

            distance[node] = UNVISITED;
            sigma[node] = 0.0;
            delta[node] = 0.0;
            paths.clear_node(node);
        }
        paths.release_links();
    }

    fn clear(&mut self) {
        self.distance.fill(UNVISITED);
        self.sigma.fill(0.0);
        self.delta.fill(0.0);
        self.stack.clear();
        self.paths.clear();
    }
}

/// Bookkeeping for every source of one batch.
///
/// Implements both traversal consumer traits; feed it to
/// [`MultiSourceBfs::run`](crate::msbfs::MultiSourceBfs::run) after
/// [`init`](Self::init), then call [`update_centrality`](Self::update_centrality).
///
/// A batch whose sweep failed leaves the state dirty; the next `init` then
/// performs a full reset instead of relying on the drained stacks.
#[derive(Debug)]
pub struct BatchState {
    local_ids: LocalIds,
    records: Vec<SourceRecord>,
    node_count: usize,
    divisor: f64,
    dirty: bool,
}

impl BatchState {
    /// Preallocates `width` source records over `node_count` nodes.
    pub fn new(width: usize, node_count: usize, divisor: f64) -> Result<Self> {
        let width = NonZeroUsize::new(width).ok_or(Error::InvalidBatchWidth(width))?;
        Ok(Self::with_width(width, node_count, divisor))
    }

    pub(crate) fn with_width(width: NonZeroUsize, node_count: usize, divisor: f64) -> Self {
        Self {
            local_ids: LocalIds::new(node_count),
            records: (0..width.get())
                .map(|_| SourceRecord::new(node_count))
                .collect(),
            node_count,
            divisor,
            dirty: false,
        }
    }

    /// Maximum number of sources per batch.
    #[inline]
    pub fn width(&self) -> usize {
        self.records.len()
    }

    /// Record of the source with local id `local`.
    #[inline]
    pub fn record(&self, local: usize) -> &SourceRecord {
        &self.records[local]
    }

    /// The source-to-local mapping of the current batch.
    #[inline]
    pub fn local_ids(&self) -> &LocalIds {
        &self.local_ids
    }

    /// Binds `sources` to local ids `0..sources.len()` and seeds their records.
    pub fn init(&mut self, sources: &[usize]) -> Result<()> {
        if sources.len() > self.width() {
            return Err(Error::InvalidBatchWidth(sources.len()));
        }
        if let Some(&node) = sources.iter().find(|&&s| s >= self.node_count) {
            return Err(Error::NodeOutOfRange {
                node,
                node_count: self.node_count,
            });
        }

        if self.dirty {
            self.records.iter_mut().for_each(SourceRecord::clear);
        }
        self.local_ids.clear();
        self.dirty = true;

        for &source in sources {
            let local = self
                .local_ids
                .push(source)
                .ok_or(Error::DuplicateSource(source))?;
            self.records[local].start(source);
        }
        Ok(())
    }

    /// Runs the dependency accumulation of every source of the batch.
    pub fn update_centrality(&mut self, centrality: &AtomicDoubleArray) {
        let divisor = self.divisor;
        for (source, local) in self.local_ids.iter() {
            self.records[local].accumulate(source, centrality, divisor);
        }
        self.dirty = false;
    }
}

impl BfsConsumer for BatchState {
    #[inline]
    fn accept(&mut self, node: usize, _depth: u32, sources: BfsSources<'_>) {
        for source in sources {
            let local = self.local_ids[source];
            self.records[local].visit(node);
        }
    }
}

impl BfsWithPredecessorConsumer for BatchState {
    #[inline]
    fn accept_predecessor(
        &mut self,
        node: usize,
        predecessor: usize,
        depth: u32,
        sources: BfsSources<'_>,
    ) {
        for source in sources {
            let local = self.local_ids[source];
            self.records[local].predecessor(node, predecessor, depth);
        }
    }
}
