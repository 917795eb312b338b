//! Blocked multiply: sequential block-row sweep, block-columns per thread.

use crate::error::ConfigError;
use crate::threaded::row_parallel::chunk_bounds;
use crate::RunResult;
use std::thread;
use std::time::Instant;

/// Cache-blocked matrix multiplication.
///
/// Splits each dimension into `nb = n / neib` blocks of side `neib`.
/// The block-row index p advances sequentially; for each p, the
/// block-column indices q are split into contiguous disjoint ranges
/// across a scoped thread team, and every worker sweeps all
/// block-contraction indices r for its own q range before the team
/// joins. Ownership by block-column means two workers never touch the
/// same cell of C, and within one worker the r sweep accumulates in
/// ascending k order, so the output matches the sequential baseline
/// bit for bit.
///
/// Returns [`ConfigError::BlockSize`] before doing any work when `neib`
/// does not evenly divide `n`. A requested thread count of 0 is clamped
/// to 1, and counts above `nb` are clamped to `nb`; the clamped count is
/// what the result reports.
pub fn matmul_blocked(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    n: usize,
    neib: usize,
    num_threads: usize,
) -> Result<RunResult, ConfigError> {
    if neib == 0 {
        return Err(ConfigError::ZeroBlockSize);
    }
    if n % neib != 0 {
        return Err(ConfigError::BlockSize { n, neib });
    }

    let nb = n / neib;
    let threads = num_threads.max(1).min(nb);

    let c_out = OutPtr(c.as_mut_ptr());

    let start = Instant::now();

    for p in 0..nb {
        thread::scope(|s| {
            for tid in 0..threads {
                let (q_start, q_end) = chunk_bounds(nb, threads, tid);

                s.spawn(move || {
                    // Safety: for this p, a worker touches only cells with
                    // row in p*neib..(p+1)*neib and column inside its own q
                    // range, every write goes through a per-cell offset (no
                    // whole-grid slice is ever formed), and the scope joins
                    // before the next p starts.
                    unsafe {
                        multiply_block_columns(a, b, c_out, n, neib, nb, p, q_start, q_end);
                    }
                });
            }
        });
    }

    Ok(RunResult {
        elapsed: start.elapsed().as_secs_f64(),
        threads,
    })
}

/// Base pointer of C, sendable into the scoped workers.
///
/// Workers index it cell by cell; no `&mut` over the full grid ever
/// exists, so the exclusive regions never alias even formally.
#[derive(Clone, Copy)]
struct OutPtr(*mut f64);

unsafe impl Send for OutPtr {}

/// The tile loop for one worker: all (q, r) block pairs with q in
/// `q_start..q_end`, each expanding to a full neib³ multiply-accumulate.
///
/// The per-cell accumulation stays in ascending k order, matching the
/// sequential baseline exactly.
///
/// # Safety
///
/// `c` must point at an n×n matrix, and no other thread may write any
/// cell with a column inside `q_start * neib..q_end * neib` while this
/// runs.
#[allow(clippy::too_many_arguments)]
unsafe fn multiply_block_columns(
    a: &[f64],
    b: &[f64],
    c: OutPtr,
    n: usize,
    neib: usize,
    nb: usize,
    p: usize,
    q_start: usize,
    q_end: usize,
) {
    for q in q_start..q_end {
        for r in 0..nb {
            for i in p * neib..(p + 1) * neib {
                for j in q * neib..(q + 1) * neib {
                    let cell = unsafe { c.0.add(i * n + j) };
                    for k in r * neib..(r + 1) * neib {
                        unsafe {
                            *cell += a[i * n + k] * b[k * n + j];
                        }
                    }
                }
            }
        }
    }
}
