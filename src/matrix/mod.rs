//! Matrix storage helpers and the sequential baseline.
//!
//! Matrices are flat row-major `Vec<f64>` buffers of length N×N. The
//! helpers here fill, reset, sample, and compare them; the sequential
//! multiply is the correctness and timing baseline for everything else.

pub mod init;
pub mod sequential;
