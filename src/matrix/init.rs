//! Matrix initialization, reset, and comparison helpers.

use rand::distributions::Uniform;
use rand::Rng;
use std::fmt::Write;

/// Fill a matrix with independent uniform draws over [0, 10).
///
/// Uses a fresh thread-local RNG per call, so no state leaks between
/// experiments.
pub fn fill_random(m: &mut [f64]) {
    let mut rng = rand::thread_rng();
    let dist = Uniform::new(0.0, 10.0);
    for cell in m.iter_mut() {
        *cell = rng.sample(dist);
    }
}

/// Fill cell (i, j) with i + j + 1.
///
/// Bit-reproducible, which is what the equivalence tests rely on.
pub fn fill_pattern(m: &mut [f64], n: usize) {
    for i in 0..n {
        for j in 0..n {
            m[i * n + j] = (i + j + 1) as f64;
        }
    }
}

/// Zero every cell. Runs single-threaded between trials so no stale
/// partial sums survive into the next timed region.
pub fn reset(m: &mut [f64]) {
    m.fill(0.0);
}

/// Render the top-left corner of a matrix for interactive display.
///
/// Shows at most `max_display` rows and columns (the interactive loop
/// uses 5), with ellipses when the matrix is larger.
pub fn sample(m: &[f64], n: usize, max_display: usize) -> String {
    let shown = n.min(max_display);
    let mut out = String::new();
    for i in 0..shown {
        out.push_str("   ");
        for j in 0..shown {
            let _ = write!(out, "{:8.3} ", m[i * n + j]);
        }
        if n > shown {
            out.push_str("...");
        }
        out.push('\n');
    }
    if n > shown {
        out.push_str("   ...\n");
    }
    out
}

/// Largest absolute elementwise difference between two equally sized
/// matrices. The equivalence tests check this against 1e-9.
pub fn max_abs_diff(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}
