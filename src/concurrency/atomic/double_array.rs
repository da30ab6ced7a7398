use core::sync::atomic::Ordering;

use super::AtomicF64;

/// A fixed-size arena of atomically updatable `f64` slots indexed by node id.
///
/// Writers only ever [`add`](Self::add); there is no public read-modify-write,
/// so concurrent batches can fold contributions into the same slot without
/// further coordination.
#[derive(Debug)]
pub struct AtomicDoubleArray {
    slots: Box<[AtomicF64]>,
}

impl AtomicDoubleArray {
    /// Creates `len` slots, all zero.
    pub fn new(len: usize) -> Self {
        let slots = (0..len).map(|_| AtomicF64::new(0.0)).collect();
        Self { slots }
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Atomically adds `value` to slot `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    #[inline]
    pub fn add(&self, index: usize, value: f64) {
        self.slots[index].fetch_add(value, Ordering::Relaxed);
    }

    /// Reads slot `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.slots[index].load(Ordering::Relaxed)
    }

    /// Iterates over a snapshot of every slot, in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.slots.iter().map(|s| s.load(Ordering::Relaxed))
    }

    /// Copies every slot into a plain vector.
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Consumes the array into a plain vector.
    pub fn into_vec(self) -> Vec<f64> {
        self.slots
            .into_vec()
            .into_iter()
            .map(AtomicF64::into_inner)
            .collect()
    }
}
