// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The full benchmark sequence: build the source list, run the four workloads
//! against it, then release it.

use crate::fixtures::{reverse_list, sum_list, sum_list_left_fold, sum_tco};
use crate::list::LinkedList;
use crate::macros::log_debug;
use crate::pinning::{pin_current_thread, CpuPinningPolicy};
use crate::runner::{run_benchmark, BenchmarkReport};
use std::io::{self, Write};
use std::num::NonZeroUsize;

/// Configuration of a benchmark suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuiteConfig {
    /// Number of runs of each workload.
    pub runs: NonZeroUsize,
    /// Upper bound (inclusive) of the `sumTCO` workload.
    pub sum_bound: i64,
    /// Argument of [`LinkedList::generate()`] for the source list, which
    /// therefore has `list_size + 1` nodes.
    pub list_size: i64,
    /// Policy to pin the measuring thread to a CPU.
    pub cpu_pinning: CpuPinningPolicy,
}

impl SuiteConfig {
    /// The compiled-in configuration that the `listbench` binary runs.
    pub const REFERENCE: Self = Self {
        runs: match NonZeroUsize::new(10) {
            Some(runs) => runs,
            None => unreachable!(),
        },
        sum_bound: 100_000_000,
        list_size: 1_000_000,
        cpu_pinning: CpuPinningPolicy::IfSupported,
    };
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Runs the `sumTCO`, `sumList`, `reverseList` and `sumListLeftFold`
/// benchmarks in that order, writing one summary line per benchmark to `out`.
///
/// ```
/// # use listbench::pinning::CpuPinningPolicy;
/// # use listbench::suite::{run_suite, SuiteConfig};
/// # use std::num::NonZeroUsize;
/// let config = SuiteConfig {
///     runs: NonZeroUsize::try_from(2).unwrap(),
///     sum_bound: 1_000,
///     list_size: 1_000,
///     cpu_pinning: CpuPinningPolicy::No,
/// };
/// let mut out = Vec::new();
/// let reports = run_suite(&config, &mut out).unwrap();
/// assert_eq!(reports.len(), 4);
/// assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
/// ```
pub fn run_suite<W: Write + ?Sized>(
    config: &SuiteConfig,
    out: &mut W,
) -> io::Result<Vec<BenchmarkReport>> {
    pin_current_thread(config.cpu_pinning);

    log_debug!("Generating a list of {} nodes.", config.list_size + 1);
    let list = LinkedList::generate(config.list_size);

    let runs = config.runs;
    let reports = vec![
        run_benchmark("sumTCO", runs, sum_tco, config.sum_bound, out)?,
        run_benchmark("sumList", runs, sum_list, &list, out)?,
        run_benchmark("reverseList", runs, reverse_list, &list, out)?,
        run_benchmark("sumListLeftFold", runs, sum_list_left_fold, &list, out)?,
    ];

    log_debug!("Releasing the list of {} nodes.", list.len());
    drop(list);

    Ok(reports)
}

#[cfg(test)]
mod test {
    use super::*;

    fn small_config(runs: usize, size: i64) -> SuiteConfig {
        SuiteConfig {
            runs: NonZeroUsize::try_from(runs).unwrap(),
            sum_bound: size,
            list_size: size,
            cpu_pinning: CpuPinningPolicy::No,
        }
    }

    #[test]
    fn reference_config() {
        let config = SuiteConfig::default();
        assert_eq!(config, SuiteConfig::REFERENCE);
        assert_eq!(config.runs.get(), 10);
        assert_eq!(config.sum_bound, 100_000_000);
        assert_eq!(config.list_size, 1_000_000);
    }

    #[test]
    fn runs_benchmarks_in_order() {
        let mut out = Vec::new();
        let reports = run_suite(&small_config(3, 100), &mut out).unwrap();

        let names = reports.iter().map(|r| r.name()).collect::<Vec<_>>();
        assert_eq!(
            names,
            ["sumTCO", "sumList", "reverseList", "sumListLeftFold"]
        );
        for report in &reports {
            assert_eq!(report.runs(), 3);
        }

        let output = String::from_utf8(out).unwrap();
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        for (line, report) in lines.iter().zip(&reports) {
            assert_eq!(*line, report.to_string());
        }
    }

    #[test]
    fn output_line_shape() {
        let mut out = Vec::new();
        run_suite(&small_config(1, 5), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        for (line, name) in output
            .lines()
            .zip(["sumTCO", "sumList", "reverseList", "sumListLeftFold"])
        {
            let fields = line.split(' ').collect::<Vec<_>>();
            assert_eq!(fields.len(), 7, "unexpected line: {line}");
            assert_eq!(fields[0], "BENCHMARK:");
            assert_eq!(fields[1], name);
            assert_eq!(fields[2], "RUNS:");
            assert_eq!(fields[3], "1");
            assert_eq!(fields[4], "RESULT:");
            let secs = fields[5].parse::<f64>().unwrap();
            assert!(secs >= 0.0);
            assert_eq!(fields[6], "secs");
        }
    }

    #[test]
    fn end_to_end_small_scenario() {
        let list = LinkedList::generate(5);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
        assert_eq!(sum_list(&list), 15);
        assert_eq!(sum_list_left_fold(&list), 15);
        assert_eq!(sum_tco(5), 15);
        assert_eq!(
            reverse_list(&list).iter().copied().collect::<Vec<_>>(),
            [5, 4, 3, 2, 1, 0]
        );

        let mut out = Vec::new();
        let reports = run_suite(&small_config(1, 5), &mut out).unwrap();
        assert!(reports.iter().all(|report| report.runs() == 1));
    }

    #[test]
    fn empty_list() {
        let mut out = Vec::new();
        let reports = run_suite(&small_config(2, -1), &mut out).unwrap();
        assert_eq!(reports.len(), 4);
    }
}
