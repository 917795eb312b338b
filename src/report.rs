//! Derived metrics and table rendering for a completed sweep.

use crate::harness::{Method, RunRecord};
use std::fmt::Write;

/// Speedup and efficiency for one sweep entry.
///
/// `None` marks a measurement anomaly: an elapsed time of zero cannot
/// produce a meaningful ratio, so it is reported as a sentinel instead
/// of letting infinity through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow {
    pub threads: usize,
    pub elapsed: f64,
    pub speedup: Option<f64>,
    pub efficiency: Option<f64>,
}

/// Read-only view over a finished scaling table.
///
/// The baseline is the first record's elapsed time — the 1-thread run
/// for parallel sweeps, or the lone sequential run.
pub struct ScalingReport<'a> {
    records: &'a [RunRecord],
    baseline: f64,
}

impl<'a> ScalingReport<'a> {
    pub fn new(records: &'a [RunRecord]) -> Self {
        let baseline = records.first().map_or(0.0, |r| r.result.elapsed);
        ScalingReport { records, baseline }
    }

    /// Derive speedup and efficiency for every record, in sweep order.
    pub fn rows(&self) -> Vec<ReportRow> {
        self.records
            .iter()
            .map(|record| {
                let elapsed = record.result.elapsed;
                let threads = record.result.threads;
                let speedup = if elapsed > 0.0 && self.baseline > 0.0 {
                    Some(self.baseline / elapsed)
                } else {
                    None
                };
                let efficiency = speedup.map(|s| s / threads as f64);
                ReportRow {
                    threads: record.requested_threads,
                    elapsed,
                    speedup,
                    efficiency,
                }
            })
            .collect()
    }

    /// Render the interactive results table.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("   Threads\tTime (sec)\tSpeedup\t\tEfficiency\n");
        out.push_str("   -------\t---------\t-------\t\t----------\n");
        for row in self.rows() {
            let _ = write!(out, "   {}\t\t{:.6}\t\t", row.threads, row.elapsed);
            match (row.speedup, row.efficiency) {
                (Some(s), Some(e)) => {
                    let _ = writeln!(out, "{:.2}\t\t{:.2}", s, e);
                }
                _ => {
                    out.push_str("n/a\t\tn/a\n");
                }
            }
        }
        out
    }
}

/// The single line batch mode prints to stdout.
///
/// Downstream scripts parse this, so the shape is frozen:
/// `method,threads,elapsed` with elapsed at 8 decimal places.
pub fn batch_line(method: Method, threads: usize, elapsed: f64) -> String {
    format!("{},{},{:.8}", method.code(), threads, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RunResult;
    use approx::assert_abs_diff_eq;

    fn record(threads: usize, elapsed: f64) -> RunRecord {
        RunRecord {
            requested_threads: threads,
            result: RunResult { elapsed, threads },
        }
    }

    #[test]
    fn test_baseline_has_unit_speedup_and_efficiency() {
        let records = vec![record(1, 2.0), record(2, 1.0), record(4, 0.5)];
        let rows = ScalingReport::new(&records).rows();

        assert_abs_diff_eq!(rows[0].speedup.unwrap(), 1.0);
        assert_abs_diff_eq!(rows[0].efficiency.unwrap(), 1.0);
        assert_abs_diff_eq!(rows[1].speedup.unwrap(), 2.0);
        assert_abs_diff_eq!(rows[1].efficiency.unwrap(), 1.0);
        assert_abs_diff_eq!(rows[2].speedup.unwrap(), 4.0);
        assert_abs_diff_eq!(rows[2].efficiency.unwrap(), 1.0);
    }

    #[test]
    fn test_zero_elapsed_yields_sentinel_not_infinity() {
        let records = vec![record(1, 1.0), record(2, 0.0)];
        let rows = ScalingReport::new(&records).rows();

        assert_eq!(rows[1].speedup, None);
        assert_eq!(rows[1].efficiency, None);

        let table = ScalingReport::new(&records).render();
        assert!(table.contains("n/a"));
        assert!(!table.contains("inf"));
        assert!(!table.contains("NaN"));
    }

    #[test]
    fn test_zero_baseline_yields_sentinel() {
        let records = vec![record(1, 0.0), record(2, 1.0)];
        let rows = ScalingReport::new(&records).rows();
        assert!(rows.iter().all(|r| r.speedup.is_none()));
    }

    #[test]
    fn test_efficiency_uses_actual_thread_count() {
        // requested 8 threads but only 2 were used after clamping
        let records = vec![
            record(1, 4.0),
            RunRecord {
                requested_threads: 8,
                result: RunResult {
                    elapsed: 2.0,
                    threads: 2,
                },
            },
        ];
        let rows = ScalingReport::new(&records).rows();

        assert_eq!(rows[1].threads, 8);
        assert_abs_diff_eq!(rows[1].speedup.unwrap(), 2.0);
        assert_abs_diff_eq!(rows[1].efficiency.unwrap(), 1.0);
    }

    #[test]
    fn test_batch_line_format() {
        let line = batch_line(Method::Blocked, 4, 0.12345678912);
        assert_eq!(line, "1,4,0.12345679");

        let line = batch_line(Method::Sequential, 1, 2.0);
        assert_eq!(line, "3,1,2.00000000");
    }
}
