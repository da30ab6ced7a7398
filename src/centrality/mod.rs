//! Betweenness centrality on top of the multi-source BFS engine.
//!
//! - `local_ids`: global source id to batch slot mapping
//! - `paths`: compact predecessor lists
//! - `state`: per-source records and the batch consumer
//! - `betweenness`: batch orchestration across workers
//! - `result`: finished scores, result rows and summary stats

mod betweenness;
mod local_ids;
mod paths;
mod result;
mod state;

pub use betweenness::MsBetweennessCentrality;
pub use local_ids::LocalIds;
pub use paths::{Paths, Predecessors};
pub use result::{BetweennessResult, CentralityScores, CentralityStats};
pub use state::{BatchState, SourceRecord};
