//! Coarse-grained cancellation checked at batch boundaries.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::error::{Error, Result};

/// A shareable flag a caller raises to stop a running computation.
///
/// Workers observe it only between batches: a batch that has started its
/// forward sweep always runs to the end of its accumulation phase.
#[derive(Debug, Clone, Default)]
pub struct TerminationFlag {
    raised: Arc<AtomicBool>,
}

impl TerminationFlag {
    /// Creates a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests termination.
    pub fn terminate(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Returns `true` while no termination was requested.
    #[inline]
    pub fn running(&self) -> bool {
        !self.raised.load(Ordering::Acquire)
    }

    /// Fails with [`Error::Terminated`] once termination was requested.
    #[inline]
    pub fn assert_running(&self) -> Result<()> {
        if self.running() {
            Ok(())
        } else {
            Err(Error::Terminated)
        }
    }
}
