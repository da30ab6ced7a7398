//! # `msbc` - Multi-Source Betweenness Centrality
//!
//! Betweenness centrality computed with a batched generalization of Brandes'
//! algorithm: instead of one breadth-first search per source, a batch of
//! sources is traversed together in a single synchronized sweep that shares
//! the cost of walking each adjacency list, while shortest-path bookkeeping
//! (distance, path count, dependency) stays separate per source.
//!
//! ## Architecture
//!
//! 1. **Batch selection** ([`msbfs::BatchSelector`]): `[0, node_count)` is cut
//!    into contiguous batches of at most `batch_width` sources.
//! 2. **Traversal** ([`msbfs::MultiSourceBfs`]): one level-synchronous sweep per
//!    batch, with one `u64` bit lane per source. The engine reports
//!    first-visit and predecessor events through two narrow consumer traits.
//! 3. **Bookkeeping** ([`centrality::BatchState`]): per-source distance, sigma,
//!    delta, discovery stack and predecessor lists, fed by the events.
//! 4. **Accumulation**: each discovery stack is replayed in reverse and the
//!    Brandes dependencies are added into a shared [`AtomicDoubleArray`].
//! 5. **Orchestration** ([`MsBetweennessCentrality`]): batches run on a fixed
//!    pool of scoped workers (or rayon with the `parallel` feature); each worker
//!    owns its scratch state, and only the score array is shared.
//!
//! ## Invariants
//!
//! - **Level order**: all nodes at depth `d` are expanded before any node at
//!   depth `d + 1`, so distances are written once and path counts are final
//!   before they are propagated.
//! - **Atomic merge**: contributions reach the score array only through atomic
//!   additions; batches commute.
//! - **No partial commits**: a batch whose sweep fails contributes nothing.
//!
//! ## Example
//!
//! ```rust
//! use msbc::{BetweennessConfig, CsrGraph, MsBetweennessCentrality, Orientation};
//!
//! // 0 -> 1 -> 2 -> 3
//! let graph = CsrGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3)], Orientation::Natural)?;
//! let config = BetweennessConfig::default().with_batch_width(2);
//!
//! let scores = MsBetweennessCentrality::new(&graph, config)?.compute()?;
//! assert_eq!(scores.to_vec(), vec![0.0, 2.0, 2.0, 0.0]);
//! # Ok::<(), msbc::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod centrality;
pub mod concurrency;
pub mod config;
pub mod error;
pub mod graph;
pub mod msbfs;

pub use centrality::{BetweennessResult, CentralityScores, CentralityStats, MsBetweennessCentrality};
pub use concurrency::{atomic::AtomicDoubleArray, TerminationFlag};
pub use config::BetweennessConfig;
pub use error::{Error, Result};
pub use graph::{CsrGraph, Graph, IdMapping, Orientation};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // `AtomicF64` is `repr(transparent)` over `AtomicU64`.
    assert!(mem::size_of::<concurrency::atomic::AtomicF64>() == mem::size_of::<u64>());
    // One lane per source in a traversal pass.
    assert!(msbfs::OMEGA == 64);
};
