//! CLI for the scaling experiments.
//!
//! Two modes, mirroring how the measurement scripts drive this:
//!
//! - no arguments: interactive prompt loop, full 1..16 thread sweep,
//!   rendered results table
//! - four positional arguments `N NEIB METHOD THREADS`: one run, one
//!   CSV line on stdout (`method,threads,elapsed`), exit 0

use clap::Parser;
use matscale::harness::{Experiment, InitMode, Method};
use matscale::matrix::init::sample;
use matscale::report::{batch_line, ScalingReport};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

const SAMPLE_SIZE: usize = 5;

#[derive(Parser)]
#[command(
    name = "matscale",
    about = "Thread-scaling measurements for blocked matrix multiplication"
)]
struct Opt {
    /// Matrix size N (supplying all four arguments selects batch mode)
    n: Option<usize>,
    /// Block size NEIB (must divide N for the blocked method)
    neib: Option<usize>,
    /// Method selector: 1 = blocked, 2 = standard, 3 = sequential
    method: Option<u32>,
    /// Exact thread count for the single batch run
    threads: Option<usize>,
}

fn main() -> ExitCode {
    let opt = Opt::parse();
    match (opt.n, opt.neib, opt.method, opt.threads) {
        (Some(n), Some(neib), Some(method), Some(threads)) => run_batch(n, neib, method, threads),
        (None, None, None, None) => run_interactive(),
        _ => {
            eprintln!("batch mode needs all four arguments: N NEIB METHOD THREADS");
            ExitCode::from(2)
        }
    }
}

/// One run, one CSV line. Configuration errors go to stderr with a
/// non-zero exit so the driving script sees the failure.
fn run_batch(n: usize, neib: usize, method_code: u32, threads: usize) -> ExitCode {
    let method = match Method::try_from(method_code) {
        Ok(method) => method,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut exp = match Experiment::new(n, neib, InitMode::Random) {
        Ok(exp) => exp,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = exp.validate(method) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    match exp.run_once(method, threads) {
        Ok(result) => {
            println!("{}", batch_line(method, threads, result.elapsed));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Prompt loop: configuration errors re-prompt instead of exiting.
/// Ends cleanly on EOF.
fn run_interactive() -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(n) = prompt(&mut lines, "   Matrix size (N): ") else {
            break;
        };
        let Some(neib) = prompt(&mut lines, "   Block size (NEIB): ") else {
            break;
        };
        let Some(code): Option<u32> = prompt(&mut lines, "   Method (1 - blocked, 2 - standard, 3 - sequential): ")
        else {
            break;
        };

        let method = match Method::try_from(code) {
            Ok(method) => method,
            Err(err) => {
                println!("   Error: {err}");
                continue;
            }
        };

        let mut exp = match Experiment::new(n, neib, InitMode::Random) {
            Ok(exp) => exp,
            Err(err) => {
                println!("   Error: {err}");
                continue;
            }
        };

        if let Err(err) = exp.validate(method) {
            println!("   Error: {err}");
            continue;
        }

        println!("\n   Sample of matrix A (top-left corner):");
        println!("{}", sample(exp.matrix_a(), n, SAMPLE_SIZE));
        println!("   Sample of matrix B (top-left corner):");
        println!("{}", sample(exp.matrix_b(), n, SAMPLE_SIZE));

        let records = match exp.sweep(method) {
            Ok(records) => records,
            Err(err) => {
                println!("   Error: {err}");
                continue;
            }
        };

        println!("\n   Results:");
        print!("{}", ScalingReport::new(&records).render());

        println!("   Sample of result matrix C (top-left corner):");
        println!("{}", sample(exp.matrix_c(), n, SAMPLE_SIZE));
    }

    ExitCode::SUCCESS
}

/// Read one value, re-prompting on anything unparsable. Returns `None`
/// on EOF or a read error.
fn prompt<T: FromStr>(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Option<T> {
    loop {
        print!("{label}");
        let _ = io::stdout().flush();
        let line = lines.next()?.ok()?;
        match line.trim().parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("   Please enter a positive number."),
        }
    }
}
