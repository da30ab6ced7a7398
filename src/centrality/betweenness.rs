//! Batched Brandes betweenness centrality.

use core::{num::NonZeroUsize, ops::Range};
use std::time::Instant;

use tracing::{debug, info, warn};

use super::{BatchState, CentralityScores};
use crate::{
    concurrency::{atomic::AtomicDoubleArray, pool, TerminationFlag},
    config::BetweennessConfig,
    error::Result,
    graph::Graph,
    msbfs::{BatchSelector, MultiSourceBfs},
};

/// Betweenness centrality driven by multi-source BFS.
///
/// Node ids are split into contiguous batches of `batch_width` sources. Each
/// batch runs one forward sweep that records distances, path counts and
/// predecessors for all its sources, then one backward pass per source that
/// adds the Brandes dependencies into a shared atomic score array. Batches are
/// independent and run on `concurrency` workers.
///
/// ```
/// use msbc::{BetweennessConfig, CsrGraph, MsBetweennessCentrality, Orientation};
///
/// // 0 - 1 - 2
/// let graph = CsrGraph::from_edges(3, &[(0, 1), (1, 2)], Orientation::Undirected).unwrap();
/// let config = BetweennessConfig::default().with_undirected(true);
/// let scores = MsBetweennessCentrality::new(&graph, config).unwrap().compute().unwrap();
/// assert_eq!(scores.to_vec(), vec![0.0, 1.0, 0.0]);
/// ```
#[derive(Debug)]
pub struct MsBetweennessCentrality<'g, G: ?Sized> {
    graph: &'g G,
    config: BetweennessConfig,
    termination: TerminationFlag,
}

impl<'g, G> MsBetweennessCentrality<'g, G>
where
    G: Graph + Sync + ?Sized,
{
    /// Validates `config` and binds it to `graph`.
    pub fn new(graph: &'g G, config: BetweennessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            graph,
            config,
            termination: TerminationFlag::new(),
        })
    }

    /// Uses `flag` to observe cancellation requests between batches.
    #[must_use]
    pub fn with_termination_flag(mut self, flag: TerminationFlag) -> Self {
        self.termination = flag;
        self
    }

    /// The configuration in effect.
    #[inline]
    pub fn config(&self) -> &BetweennessConfig {
        &self.config
    }

    /// Runs every batch on the built-in scoped worker pool.
    ///
    /// The first failing batch aborts the computation; no partial scores are
    /// returned.
    #[tracing::instrument(
        name = "betweenness",
        skip_all,
        fields(
            node_count = self.graph.node_count(),
            batch_width = self.config.batch_width,
            concurrency = self.config.concurrency,
        )
    )]
    pub fn compute(self) -> Result<CentralityScores> {
        let plan = self.plan()?;
        let outcome = pool::run_indexed(
            self.config.concurrency,
            plan.selector.batch_count(),
            || self.worker(&plan),
            |worker, index| self.process(worker, &plan, index),
        );
        self.finish(plan, outcome)
    }

    /// Runs every batch on the global rayon pool.
    #[cfg(feature = "parallel")]
    #[tracing::instrument(
        name = "betweenness_rayon",
        skip_all,
        fields(node_count = self.graph.node_count(), batch_width = self.config.batch_width)
    )]
    pub fn compute_rayon(self) -> Result<CentralityScores> {
        use rayon::prelude::*;

        let plan = self.plan()?;
        let outcome = (0..plan.selector.batch_count())
            .into_par_iter()
            .try_for_each_init(
                || self.worker(&plan),
                |worker, index| self.process(worker, &plan, index),
            );
        self.finish(plan, outcome)
    }

    fn plan(&self) -> Result<Plan> {
        let node_count = self.graph.node_count();
        let selector = BatchSelector::new(node_count, self.config.batch_width)?;
        info!(
            node_count,
            batches = selector.batch_count(),
            undirected = self.config.undirected,
            "starting betweenness centrality"
        );
        // Never allocate more records than there are sources.
        let width = NonZeroUsize::new(self.config.batch_width.min(node_count))
            .unwrap_or(NonZeroUsize::MIN);
        Ok(Plan {
            width,
            selector,
            centrality: AtomicDoubleArray::new(node_count),
            started: Instant::now(),
        })
    }

    fn worker(&self, plan: &Plan) -> BatchWorker {
        let node_count = plan.centrality.len();
        BatchWorker {
            bfs: MultiSourceBfs::new(node_count),
            state: BatchState::with_width(plan.width, node_count, self.config.divisor()),
            sources: Vec::with_capacity(plan.width.get()),
        }
    }

    fn process(&self, worker: &mut BatchWorker, plan: &Plan, index: usize) -> Result<()> {
        self.termination.assert_running()?;
        match plan.selector.batch(index) {
            Some(batch) => worker.run(self.graph, batch, &plan.centrality),
            None => Ok(()),
        }
    }

    fn finish(&self, plan: Plan, outcome: Result<()>) -> Result<CentralityScores> {
        if let Err(err) = &outcome {
            warn!(error = %err, "betweenness centrality aborted");
        }
        outcome?;
        info!(
            elapsed_ms = plan.started.elapsed().as_millis() as u64,
            "finished betweenness centrality"
        );
        Ok(CentralityScores::new(plan.centrality))
    }
}

struct Plan {
    width: NonZeroUsize,
    selector: BatchSelector,
    centrality: AtomicDoubleArray,
    started: Instant,
}

/// Scratch memory owned by one worker for its whole lifetime.
struct BatchWorker {
    bfs: MultiSourceBfs,
    state: BatchState,
    sources: Vec<usize>,
}

impl BatchWorker {
    fn run<G>(
        &mut self,
        graph: &G,
        batch: Range<usize>,
        centrality: &AtomicDoubleArray,
    ) -> Result<()>
    where
        G: Graph + ?Sized,
    {
        let started = Instant::now();
        self.sources.clear();
        self.sources.extend(batch.clone());

        self.state.init(&self.sources)?;
        // forward
        self.bfs.run(graph, &self.sources, &mut self.state)?;
        // backward
        self.state.update_centrality(centrality);

        debug!(
            offset = batch.start,
            len = batch.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "batch done"
        );
        Ok(())
    }
}
