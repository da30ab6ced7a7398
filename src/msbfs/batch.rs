//! Partitioning of the node id space into source batches.

use core::{iter::FusedIterator, ops::Range};

use crate::error::{Error, Result};

/// Splits `[0, node_count)` into ascending, contiguous batches of at most `width` ids.
///
/// The selector is a plain iterator; cloning it restarts the partitioning from
/// wherever the clone was taken, and [`batch`](Self::batch) gives random access
/// for workers that claim batches by index.
///
/// ```
/// use msbc::msbfs::BatchSelector;
///
/// let batches: Vec<_> = BatchSelector::new(5, 2).unwrap().collect();
/// assert_eq!(batches, vec![0..2, 2..4, 4..5]);
/// ```
#[derive(Debug, Clone)]
pub struct BatchSelector {
    node_count: usize,
    width: usize,
    offset: usize,
}

impl BatchSelector {
    /// Creates a selector over `[0, node_count)`.
    pub fn new(node_count: usize, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidBatchWidth(width));
        }
        Ok(Self {
            node_count,
            width,
            offset: 0,
        })
    }

    /// Maximum batch width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of batches, independent of iteration progress.
    #[inline]
    pub fn batch_count(&self) -> usize {
        self.node_count.div_ceil(self.width)
    }

    /// Returns batch `index`, or `None` past the last batch.
    pub fn batch(&self, index: usize) -> Option<Range<usize>> {
        let start = index.checked_mul(self.width)?;
        (start < self.node_count).then(|| start..self.node_count.min(start.saturating_add(self.width)))
    }
}

impl Iterator for BatchSelector {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        if self.offset >= self.node_count {
            return None;
        }
        let limit = self.node_count.min(self.offset.saturating_add(self.width));
        let batch = self.offset..limit;
        self.offset = limit;
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.node_count - self.offset).div_ceil(self.width);
        (n, Some(n))
    }
}

impl ExactSizeIterator for BatchSelector {}
impl FusedIterator for BatchSelector {}
