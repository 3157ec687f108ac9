//! Benchmark registry.
//!
//! Named benchmark callables register into a process-wide table; [`run`]
//! selects entries by glob pattern, times each with geometric iteration
//! scaling until a minimum measurement window is covered, and prints one
//! report line per benchmark.

use glob::Pattern;
use log::debug;
use parking_lot::Mutex;
use std::time::{Duration, Instant};

/// Wall-clock window a measurement must cover before it is reported.
const MIN_MEASURE_TIME: Duration = Duration::from_millis(200);

/// Iteration ceiling for operations too fast to fill the window.
const MAX_ITERS: u64 = 1_000_000_000;

struct Benchmark {
    name: String,
    func: Box<dyn Fn(u64) + Send>,
}

static REGISTRY: Mutex<Vec<Benchmark>> = Mutex::new(Vec::new());

/// Add a named benchmark.
///
/// `func` receives an iteration count and must perform exactly that many
/// repetitions of the measured operation. Registration order is report order.
pub fn register(name: impl Into<String>, func: impl Fn(u64) + Send + 'static) {
    REGISTRY.lock().push(Benchmark {
        name: name.into(),
        func: Box::new(func),
    });
}

/// Remove every registered benchmark.
pub fn clear() {
    REGISTRY.lock().clear();
}

/// Run every benchmark whose name matches `pattern` and report to stdout.
///
/// The literal `"all"` selects everything; otherwise `pattern` is a glob
/// (`"map_*"`, `"*cycle*"`). Side effect only — selection misses and invalid
/// patterns are reported, never raised.
pub fn run(pattern: &str) {
    let registry = REGISTRY.lock();

    let matcher = if pattern == "all" {
        None
    } else {
        match Pattern::new(pattern) {
            Ok(p) => Some(p),
            Err(e) => {
                log::error!("invalid benchmark pattern {pattern:?}: {e}");
                return;
            }
        }
    };

    let selected: Vec<&Benchmark> = registry
        .iter()
        .filter(|b| matcher.as_ref().map_or(true, |m| m.matches(&b.name)))
        .collect();

    if selected.is_empty() {
        println!("no benchmarks match pattern {pattern:?}");
        return;
    }

    println!("{:<32} {:>12} {:>15}", "benchmark", "iterations", "ns/iter");
    for bench in selected {
        let (iters, elapsed) = measure(bench);
        let ns_per_iter = elapsed.as_nanos() as f64 / iters as f64;
        println!("{:<32} {:>12} {:>15.1}", bench.name, iters, ns_per_iter);
    }
}

/// Grow the iteration count until the run covers the measurement window.
fn measure(bench: &Benchmark) -> (u64, Duration) {
    let mut iters = 1u64;
    loop {
        debug!("running {} for {} iterations", bench.name, iters);
        let start = Instant::now();
        (bench.func)(iters);
        let elapsed = start.elapsed();

        if elapsed >= MIN_MEASURE_TIME || iters >= MAX_ITERS {
            return (iters, elapsed);
        }
        iters = iters.saturating_mul(10).min(MAX_ITERS);
    }
}
