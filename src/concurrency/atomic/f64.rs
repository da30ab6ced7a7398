use core::sync::atomic::{AtomicU64, Ordering};

/// An `f64` stored as the bit pattern of an `AtomicU64`.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct AtomicF64 {
    bits: AtomicU64,
}

impl AtomicF64 {
    /// Creates a new atomic value.
    #[inline(always)]
    pub const fn new(value: f64) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
        }
    }

    /// Loads the current value.
    #[inline(always)]
    pub fn load(&self, order: Ordering) -> f64 {
        f64::from_bits(self.bits.load(order))
    }

    /// Stores a new value.
    #[inline(always)]
    pub fn store(&self, value: f64, order: Ordering) {
        self.bits.store(value.to_bits(), order);
    }

    /// Adds to the current value, returning the previous value.
    #[inline]
    pub fn fetch_add(&self, value: f64, order: Ordering) -> f64 {
        let mut current = self.bits.load(Ordering::Relaxed);
        loop {
            let next = (f64::from_bits(current) + value).to_bits();
            match self
                .bits
                .compare_exchange_weak(current, next, order, Ordering::Relaxed)
            {
                Ok(prev) => return f64::from_bits(prev),
                Err(actual) => current = actual,
            }
        }
    }

    /// Consumes the atomic and returns the contained value.
    #[inline]
    pub fn into_inner(self) -> f64 {
        f64::from_bits(self.bits.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_add_returns_previous() {
        let a = AtomicF64::new(1.5);
        assert_eq!(a.fetch_add(2.0, Ordering::Relaxed), 1.5);
        assert_eq!(a.load(Ordering::Relaxed), 3.5);
        a.store(-1.0, Ordering::Relaxed);
        assert_eq!(a.into_inner(), -1.0);
    }

    #[test]
    fn concurrent_adds_are_not_lost() {
        let a = AtomicF64::new(0.0);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..1000 {
                        a.fetch_add(0.5, Ordering::Relaxed);
                    }
                });
            }
        });
        // Halves are exact in binary floating point.
        assert_eq!(a.load(Ordering::Relaxed), 2000.0);
    }
}
