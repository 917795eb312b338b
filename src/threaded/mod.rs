//! Row-parallel multiplication.
//!
//! The flat strategy: same triple loop as the sequential baseline, with
//! the outer row loop split into contiguous, disjoint chunks across a
//! scoped thread team. Each worker owns an exclusive sub-slice of C, so
//! no synchronization is needed beyond the join at scope exit.

pub mod row_parallel;
