use crate::RunResult;
use std::time::Instant;

/// Sequential matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple-loop implementation with no concurrency
/// at all. It is deliberately kept naive: every parallel strategy is
/// measured against it, and the equivalence tests compare against its
/// output. Always reports 1 thread.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into (C += A * B),
///   pre-zeroed by the caller
pub fn matmul_sequential(a: &[f64], b: &[f64], c: &mut [f64], n: usize) -> RunResult {
    let start = Instant::now();

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }

    RunResult {
        elapsed: start.elapsed().as_secs_f64(),
        threads: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2x2_known_product() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![5.0, 6.0, 7.0, 8.0];
        let mut c = vec![0.0; 4];

        let result = matmul_sequential(&a, &b, &mut c, 2);

        assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
        assert_eq!(result.threads, 1);
    }

    #[test]
    fn test_accumulates_into_nonzero_c() {
        let a = vec![1.0; 4];
        let b = vec![1.0; 4];
        let mut c = vec![5.0; 4];

        matmul_sequential(&a, &b, &mut c, 2);

        // C += A*B, so each cell is 5 + 2
        assert_eq!(c, vec![7.0; 4]);
    }
}
