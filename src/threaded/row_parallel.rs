//! Flat-parallel multiply: rows partitioned across scoped threads.

use crate::RunResult;
use std::thread;
use std::time::Instant;

/// Row-parallel matrix multiplication.
///
/// Splits the n rows of C into balanced contiguous chunks, one per
/// worker, carved out with `split_at_mut` so every thread holds an
/// exclusive `&mut` over its own rows. A and B are shared read-only.
/// The scope joins all workers before the elapsed time is read.
///
/// A requested thread count of 0 is clamped to 1, and counts above n
/// are clamped to n (a thread with no rows would be pure overhead).
/// The clamped count is what the returned result reports.
pub fn matmul_row_parallel(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    n: usize,
    num_threads: usize,
) -> RunResult {
    let threads = num_threads.max(1).min(n);

    let start = Instant::now();

    thread::scope(|s| {
        let mut rest = &mut c[..];
        for tid in 0..threads {
            let (row_start, row_end) = chunk_bounds(n, threads, tid);
            let (mine, tail) =
                std::mem::take(&mut rest).split_at_mut((row_end - row_start) * n);
            rest = tail;

            s.spawn(move || {
                multiply_rows(a, b, mine, n, row_start, row_end);
            });
        }
        debug_assert!(rest.is_empty());
    });

    RunResult {
        elapsed: start.elapsed().as_secs_f64(),
        threads,
    }
}

/// i-j-k multiply over rows `row_start..row_end`, writing into `c_rows`,
/// which holds exactly those rows of C.
fn multiply_rows(
    a: &[f64],
    b: &[f64],
    c_rows: &mut [f64],
    n: usize,
    row_start: usize,
    row_end: usize,
) {
    for (local_i, i) in (row_start..row_end).enumerate() {
        for j in 0..n {
            for k in 0..n {
                c_rows[local_i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
}

/// Bounds of chunk `tid` when `items` are spread over `chunks` workers.
///
/// The first `items % chunks` workers get one extra item, so chunk sizes
/// never differ by more than one.
pub(crate) fn chunk_bounds(items: usize, chunks: usize, tid: usize) -> (usize, usize) {
    let base = items / chunks;
    let extra = items % chunks;
    let start = tid * base + tid.min(extra);
    let end = start + base + usize::from(tid < extra);
    (start, end)
}
