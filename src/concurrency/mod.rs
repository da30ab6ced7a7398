//! Concurrency primitives used to run batches in parallel.
//!
//! Batches share nothing but the score array. Workers own their scratch state
//! and meet only at the atomic slots of [`atomic::AtomicDoubleArray`] and at
//! the claim cursor of [`pool::run_indexed`].

pub mod atomic;
pub mod pool;
pub mod termination;

pub use termination::TerminationFlag;
