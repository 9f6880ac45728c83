//! Search benchmark harness.
//!
//! Runs `keys × iterations_per_key` searches against any [`CourseIndex`] and
//! reports wall-clock totals. The timed region contains only the search loop:
//! no allocation, logging or I/O happens between the two clock reads.
//!
//! Every search result is folded into an accumulator that is passed through
//! [`std::hint::black_box`] and then conditionally written, so the optimizer
//! cannot discard the searches as dead.

use crate::course::Course;
use crate::index::CourseIndex;
use std::fmt;
use std::hint::black_box;
use std::io::{self, Write};
use std::ptr;
use std::time::Instant;

/// Outcome of one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkReport {
    /// Caller-supplied label, e.g. "AVL"
    pub label: String,
    /// Searches performed
    pub total_ops: usize,
    /// Wall-clock time of the search loop
    pub total_micros: u128,
    /// Searches that found a course
    pub hits: usize,
}

impl BenchmarkReport {
    /// Mean time per search in microseconds.
    #[must_use]
    pub fn mean_micros(&self) -> f64 {
        if self.total_ops == 0 {
            return 0.0;
        }
        self.total_micros as f64 / self.total_ops as f64
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Benchmark Results", self.label)?;
        writeln!(f, "  Total searches: {}", self.total_ops)?;
        writeln!(f, "  Total time (us): {}", self.total_micros)?;
        write!(f, "  Avg time per search (us): {:.3}", self.mean_micros())
    }
}

/// Search every key `iterations_per_key` times and write the report to `out`.
///
/// An empty key list writes a diagnostic and returns `Ok(None)` without
/// timing anything. An iteration count of zero is treated as one.
pub fn run_search_benchmark<I, W>(
    index: &I,
    keys: &[String],
    iterations_per_key: usize,
    label: &str,
    out: &mut W,
) -> io::Result<Option<BenchmarkReport>>
where
    I: CourseIndex + ?Sized,
    W: Write,
{
    if keys.is_empty() {
        tracing::warn!(label, "benchmark requested with no keys");
        writeln!(out, "Benchmark: no course IDs loaded.")?;
        return Ok(None);
    }

    let iterations = iterations_per_key.max(1);
    tracing::debug!(
        label,
        keys = keys.len(),
        iterations,
        index_len = index.len(),
        "running search benchmark"
    );

    let mut sink: usize = 0;
    let mut hits: usize = 0;
    let mut total_ops: usize = 0;

    let start = Instant::now();
    for key in keys {
        for _ in 0..iterations {
            let found: Option<&Course> = black_box(index.search(key));
            sink ^= found.map_or(0, |course| ptr::from_ref(course).addr());
            hits += usize::from(found.is_some());
            total_ops += 1;
        }
    }
    let elapsed = start.elapsed();

    let report = BenchmarkReport {
        label: label.to_string(),
        total_ops,
        total_micros: elapsed.as_micros(),
        hits,
    };

    writeln!(out)?;
    writeln!(out, "{report}")?;

    if black_box(sink) == usize::MAX {
        write!(out, "")?;
    }

    Ok(Some(report))
}
