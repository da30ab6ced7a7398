//! A fixed pool of scoped worker threads pulling work items by index.
//!
//! Each worker builds its own state once (`init`) and reuses it for every item
//! it claims, so exclusive scratch memory never crosses threads. Items are
//! claimed from a shared cursor; the first error or panic stops every worker
//! from claiming further items and is returned to the caller.

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossbeam_utils::CachePadded;

use crate::error::{Error, Result};

/// Runs `work(&mut state, item)` for every `item` in `0..items` on `threads` workers.
///
/// With `threads == 1` the items run in order on the calling thread.
pub fn run_indexed<S, I, W>(threads: usize, items: usize, init: I, work: W) -> Result<()>
where
    I: Fn() -> S + Sync,
    W: Fn(&mut S, usize) -> Result<()> + Sync,
{
    if threads == 0 {
        return Err(Error::InvalidConcurrency(threads));
    }

    let threads = threads.min(items);
    if threads <= 1 {
        let mut state = init();
        return (0..items).try_for_each(|item| work(&mut state, item));
    }

    let cursor = CachePadded::new(AtomicUsize::new(0));
    let failed = CachePadded::new(AtomicBool::new(false));

    let outcomes: Vec<Result<()>> = std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads);
        for _ in 0..threads {
            let (cursor, failed, init, work) = (&cursor, &failed, &init, &work);
            handles.push(scope.spawn(move || -> Result<()> {
                let _guard = FailOnUnwind(&**failed);
                let mut state = init();
                while !failed.load(Ordering::Relaxed) {
                    let item = cursor.fetch_add(1, Ordering::Relaxed);
                    if item >= items {
                        break;
                    }
                    if let Err(err) = work(&mut state, item) {
                        failed.store(true, Ordering::Relaxed);
                        return Err(err);
                    }
                }
                Ok(())
            }));
        }
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or(Err(Error::WorkerPanicked)))
            .collect()
    });

    outcomes.into_iter().collect()
}

/// Raises the shared failure flag when its worker unwinds.
struct FailOnUnwind<'a>(&'a AtomicBool);

impl Drop for FailOnUnwind<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.store(true, Ordering::Relaxed);
        }
    }
}
