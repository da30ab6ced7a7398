//! Source sets carried by traversal events.

use core::iter::FusedIterator;

/// The subset of a sweep's sources an event applies to.
///
/// Each source of a sweep owns one lane of a `u64`; the iterator walks the set
/// lanes in ascending order and yields the corresponding source node ids.
#[derive(Debug, Clone, Copy)]
pub struct BfsSources<'a> {
    lanes: u64,
    sources: &'a [usize],
}

impl<'a> BfsSources<'a> {
    #[inline(always)]
    pub(crate) fn new(lanes: u64, sources: &'a [usize]) -> Self {
        debug_assert!(sources.len() >= 64 || lanes >> sources.len() == 0);
        Self { lanes, sources }
    }

    /// The raw lane mask of the remaining sources.
    #[inline]
    pub fn lanes(&self) -> u64 {
        self.lanes
    }

    /// Returns `true` if no source remains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lanes == 0
    }
}

impl Iterator for BfsSources<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.lanes == 0 {
            return None;
        }
        let lane = self.lanes.trailing_zeros() as usize;
        self.lanes &= self.lanes - 1;
        Some(self.sources[lane])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.lanes.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BfsSources<'_> {}
impl FusedIterator for BfsSources<'_> {}
