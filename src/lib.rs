//! Thread-scaling measurements for dense matrix multiplication.
//!
//! I wrote this to see how far cache blocking and plain row parallelism
//! actually get you before memory bandwidth takes over. Three strategies
//! compute the same C = A×B and get timed under a 1..16 thread sweep:
//!
//! - blocked (tiled): block-columns partitioned across threads
//! - standard: rows partitioned across threads
//! - sequential: the textbook triple loop, the baseline everything is
//!   measured against
//!
//! ## Usage
//!
//! ```
//! use matscale::harness::{Experiment, InitMode, Method};
//!
//! let mut exp = Experiment::new(64, 8, InitMode::Pattern).unwrap();
//! let result = exp.run_once(Method::Blocked, 4).unwrap();
//! assert_eq!(result.threads, 4);
//! ```
//!
//! For a full sweep plus the speedup/efficiency table:
//!
//! ```
//! use matscale::harness::{Experiment, InitMode, Method};
//! use matscale::report::ScalingReport;
//!
//! let mut exp = Experiment::new(32, 4, InitMode::Pattern).unwrap();
//! let records = exp.sweep(Method::Standard).unwrap();
//! println!("{}", ScalingReport::new(&records).render());
//! ```
//!
//! ## What's inside
//!
//! - Sequential i-j-k baseline
//! - Row-parallel multiply over scoped threads with disjoint row chunks
//! - Blocked multiply with a sequential block-row sweep and block-columns
//!   owned per thread
//! - A harness that resets the output grid between trials and a reporter
//!   that derives speedup and efficiency

pub mod blocked;
pub mod error;
pub mod harness;
pub mod matrix;
pub mod report;
pub mod threaded;

pub use error::ConfigError;
pub use matrix::sequential::matmul_sequential;

/// Outcome of one timed multiplication run.
///
/// `elapsed` is wall-clock seconds measured around the computation only
/// (no allocation or I/O inside the bracket). `threads` is the count the
/// strategy actually used after clamping, which is what efficiency is
/// computed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    pub elapsed: f64,
    pub threads: usize,
}
