//! Lock-free numeric primitives backing the shared score array.
//!
//! Important:
//! - Floating-point addition is done with a compare-and-swap loop over the bit
//!   pattern; contention costs retries, never lost updates.
//! - Addition is commutative and associative up to rounding, so the final sums
//!   do not depend on the order in which workers commit.

/// Atomic `f64`.
pub mod f64;
/// Fixed-size array of atomic `f64` slots.
pub mod double_array;

pub use self::f64::AtomicF64;
pub use double_array::AtomicDoubleArray;
