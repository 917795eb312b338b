//! Cache-blocked (tiled) multiplication.
//!
//! Partitions the matrices into NEIB×NEIB tiles so each tile's working
//! set stays cache-resident, then sweeps block-rows sequentially while
//! spreading block-columns across a thread team per sweep step.

pub mod tiled;
