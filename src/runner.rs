// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generic timing wrapper around a workload.

use crate::macros::{log_debug, log_trace};
use std::fmt;
use std::hint::black_box;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// Timings collected by [`measure()`] for one workload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkReport {
    name: String,
    samples: Vec<Duration>,
}

impl BenchmarkReport {
    /// Label of the benchmarked workload.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of times the workload was run.
    pub fn runs(&self) -> usize {
        self.samples.len()
    }

    /// Elapsed time of each run, in order.
    pub fn samples(&self) -> &[Duration] {
        &self.samples
    }

    /// Mean elapsed time in whole microseconds.
    ///
    /// Each sample is truncated to microseconds, and the sum of samples is
    /// divided by the number of runs with integer division, so the mean is
    /// rounded down.
    pub fn mean_micros(&self) -> u128 {
        let total: u128 = self.samples.iter().map(Duration::as_micros).sum();
        total / self.samples.len() as u128
    }

    /// Mean elapsed time in seconds, derived from [`mean_micros()`](Self::mean_micros).
    pub fn mean_secs(&self) -> f64 {
        self.mean_micros() as f64 / 1e6
    }
}

/// Formats the summary line, e.g.
/// `BENCHMARK: sumList RUNS: 10 RESULT: 0.002514 secs`.
impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BENCHMARK: {} RUNS: {} RESULT: {} secs",
            self.name,
            self.runs(),
            self.mean_secs()
        )
    }
}

/// Runs `benchmark(arg)` `runs` times and records the elapsed wall-clock time
/// of each call.
///
/// The result of each call is passed through [`black_box()`] before the clock
/// is stopped, so the work can't be optimized away. The result is then
/// dropped outside of the timed region.
///
/// ```
/// # use listbench::runner::measure;
/// # use std::num::NonZeroUsize;
/// let runs = NonZeroUsize::try_from(3).unwrap();
/// let report = measure("square", runs, |x: u64| x * x, 12);
/// assert_eq!(report.runs(), 3);
/// ```
pub fn measure<T, R, F>(
    name: &str,
    runs: NonZeroUsize,
    mut benchmark: F,
    arg: T,
) -> BenchmarkReport
where
    T: Copy,
    F: FnMut(T) -> R,
{
    log_debug!("[{name}] Starting {runs} run(s).");

    let mut samples = Vec::with_capacity(runs.get());
    for _run in 0..runs.get() {
        let start = Instant::now();
        let result = black_box(benchmark(black_box(arg)));
        let elapsed = start.elapsed();

        drop(result);

        log_trace!("[{name}] Run #{_run} took {} us.", elapsed.as_micros());
        samples.push(elapsed);
    }

    BenchmarkReport {
        name: name.to_owned(),
        samples,
    }
}

/// Measures `benchmark(arg)` as in [`measure()`], then writes the summary
/// line to `out`.
pub fn run_benchmark<T, R, F, W>(
    name: &str,
    runs: NonZeroUsize,
    benchmark: F,
    arg: T,
    out: &mut W,
) -> io::Result<BenchmarkReport>
where
    T: Copy,
    F: FnMut(T) -> R,
    W: Write + ?Sized,
{
    let report = measure(name, runs, benchmark, arg);
    writeln!(out, "{report}")?;
    Ok(report)
}
