//! Scaling harness: owns the matrices and drives the thread sweep.

use crate::blocked::tiled::matmul_blocked;
use crate::error::ConfigError;
use crate::matrix::init::{fill_pattern, fill_random, reset};
use crate::matrix::sequential::matmul_sequential;
use crate::threaded::row_parallel::matmul_row_parallel;
use crate::RunResult;

/// Upper bound of the interactive thread sweep.
pub const MAX_THREADS: usize = 16;

/// Which multiplication strategy to run.
///
/// The numeric codes are the external selector contract: 1 = blocked,
/// 2 = standard (row-parallel), 3 = sequential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Blocked,
    Standard,
    Sequential,
}

impl Method {
    /// The selector code used on the CLI and in the batch CSV line.
    pub fn code(self) -> u32 {
        match self {
            Method::Blocked => 1,
            Method::Standard => 2,
            Method::Sequential => 3,
        }
    }
}

impl TryFrom<u32> for Method {
    type Error = ConfigError;

    fn try_from(code: u32) -> Result<Self, ConfigError> {
        match code {
            1 => Ok(Method::Blocked),
            2 => Ok(Method::Standard),
            3 => Ok(Method::Sequential),
            other => Err(ConfigError::UnknownMethod(other)),
        }
    }
}

/// How the input matrices get filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// Independent uniform draws over [0, 10).
    Random,
    /// Cell (i, j) = i + j + 1, for reproducible runs.
    Pattern,
}

/// One requested thread count paired with its timed result.
///
/// Records are appended in ascending requested order; the first one is
/// the speedup baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRecord {
    pub requested_threads: usize,
    pub result: RunResult,
}

/// One experiment configuration: the three matrices plus the sizes they
/// were built for.
///
/// A and B are filled once at construction and stay untouched for the
/// experiment's lifetime; C is zeroed before every run so no stale
/// partial sums leak between trials.
#[derive(Debug)]
pub struct Experiment {
    n: usize,
    neib: usize,
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
}

impl Experiment {
    pub fn new(n: usize, neib: usize, mode: InitMode) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::ZeroSize);
        }
        let mut a = vec![0.0; n * n];
        let mut b = vec![0.0; n * n];
        match mode {
            InitMode::Random => {
                fill_random(&mut a);
                fill_random(&mut b);
            }
            InitMode::Pattern => {
                fill_pattern(&mut a, n);
                fill_pattern(&mut b, n);
            }
        }
        Ok(Experiment {
            n,
            neib,
            a,
            b,
            c: vec![0.0; n * n],
        })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn matrix_a(&self) -> &[f64] {
        &self.a
    }

    pub fn matrix_b(&self) -> &[f64] {
        &self.b
    }

    /// The output of the most recent run.
    pub fn matrix_c(&self) -> &[f64] {
        &self.c
    }

    /// Check the blocked-method precondition without running anything.
    ///
    /// The CLI calls this at the boundary so a bad configuration is
    /// rejected before matrices are even worth showing.
    pub fn validate(&self, method: Method) -> Result<(), ConfigError> {
        if method == Method::Blocked {
            if self.neib == 0 {
                return Err(ConfigError::ZeroBlockSize);
            }
            if self.n % self.neib != 0 {
                return Err(ConfigError::BlockSize {
                    n: self.n,
                    neib: self.neib,
                });
            }
        }
        Ok(())
    }

    /// Zero C and execute one strategy call.
    pub fn run_once(&mut self, method: Method, threads: usize) -> Result<RunResult, ConfigError> {
        reset(&mut self.c);
        match method {
            Method::Sequential => Ok(matmul_sequential(&self.a, &self.b, &mut self.c, self.n)),
            Method::Standard => Ok(matmul_row_parallel(
                &self.a, &self.b, &mut self.c, self.n, threads,
            )),
            Method::Blocked => matmul_blocked(
                &self.a, &self.b, &mut self.c, self.n, self.neib, threads,
            ),
        }
    }

    /// Run the full thread sweep for one method.
    ///
    /// Parallel methods run once per thread count 1..=[`MAX_THREADS`],
    /// C zeroed before each trial. The sequential method has no thread
    /// knob, so it runs exactly once and its single record doubles as
    /// the baseline.
    pub fn sweep(&mut self, method: Method) -> Result<Vec<RunRecord>, ConfigError> {
        self.validate(method)?;

        if method == Method::Sequential {
            let result = self.run_once(method, 1)?;
            return Ok(vec![RunRecord {
                requested_threads: 1,
                result,
            }]);
        }

        let mut records = Vec::with_capacity(MAX_THREADS);
        for threads in 1..=MAX_THREADS {
            let result = self.run_once(method, threads)?;
            records.push(RunRecord {
                requested_threads: threads,
                result,
            });
        }
        Ok(records)
    }
}
