//! blobmap-bench - Mapping Benchmark Driver
//!
//! Times memory-mapped access to a binary artifact through the host file
//! system, with glob-pattern benchmark selection and runtime hint flags.

use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

use blobmap::bench;
use blobmap::config::{PerfHint, PowerPolicy, PriorityHint, RuntimeConfig};
use blobmap::fs::{host_file_system, FileSystem, ReadOnlyMemoryRegion};

fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = Command::new("blobmap-bench")
        .version(blobmap::VERSION)
        .about("Benchmark memory-mapped access to a binary artifact")
        .long_about(
            "blobmap-bench maps the given artifact through the platform file system \
             and times the mapping operations selected by --pattern.",
        )
        .arg(
            Arg::new("file")
                .help("Path to the artifact to map")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("pattern")
                .long("pattern")
                .help("Glob pattern selecting benchmarks to run, e.g. map_*")
                .default_value("all"),
        )
        .arg(
            Arg::new("perf-hint")
                .long("perf-hint")
                .help("Accelerator performance hint: default/low/normal/high")
                .default_value("high"),
        )
        .arg(
            Arg::new("priority-hint")
                .long("priority-hint")
                .help("Accelerator priority hint: default/low/normal/high")
                .default_value("high"),
        )
        .arg(
            Arg::new("threads")
                .long("threads")
                .help("Worker thread count for the concurrent-mapping benchmark")
                .default_value("1"),
        )
        .arg(
            Arg::new("power")
                .long("power")
                .help("CPU power policy: default/high_performance/battery_save")
                .default_value("default"),
        )
        .get_matches();

    let file_path = PathBuf::from(
        matches
            .get_one::<String>("file")
            .expect("file argument is required"),
    );

    if !file_path.exists() {
        anyhow::bail!("File does not exist: {}", file_path.display());
    }
    if !file_path.is_file() {
        anyhow::bail!("Path is not a regular file: {}", file_path.display());
    }

    // config runtime
    let mut config = RuntimeConfig::new();
    config
        .set_perf_hint(parse_flag::<PerfHint>(&matches, "perf-hint")?)
        .set_priority_hint(parse_flag::<PriorityHint>(&matches, "priority-hint")?)
        .set_num_threads(
            matches
                .get_one::<String>("threads")
                .expect("threads has a default")
                .parse()?,
        )
        .set_power(parse_flag::<PowerPolicy>(&matches, "power")?);
    log::debug!("runtime config: {config:?}");

    let fs = host_file_system();
    register_mapping_benchmarks(fs, file_path, &config);

    bench::run(
        matches
            .get_one::<String>("pattern")
            .expect("pattern has a default"),
    );

    Ok(())
}

fn parse_flag<T>(matches: &clap::ArgMatches, name: &str) -> Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    matches
        .get_one::<String>(name)
        .expect("flag has a default")
        .parse::<T>()
        .map_err(anyhow::Error::msg)
}

fn register_mapping_benchmarks(fs: &'static dyn FileSystem, path: PathBuf, config: &RuntimeConfig) {
    {
        let path = path.clone();
        bench::register("map_release_cycle", move |iters| {
            for _ in 0..iters {
                let region = fs
                    .new_read_only_memory_region_from_file(&path)
                    .expect("mapping failed");
                std::hint::black_box(region.length());
            }
        });
    }

    {
        let path = path.clone();
        bench::register("map_read_through", move |iters| {
            for _ in 0..iters {
                let region = fs
                    .new_read_only_memory_region_from_file(&path)
                    .expect("mapping failed");
                let mut sum = 0u64;
                for &byte in region.as_bytes() {
                    sum = sum.wrapping_add(u64::from(byte));
                }
                std::hint::black_box(sum);
            }
        });
    }

    // Each iteration maps the artifact once from every worker thread.
    let threads = config.num_threads();
    if threads > 1 {
        bench::register("map_concurrent", move |iters| {
            for _ in 0..iters {
                std::thread::scope(|scope| {
                    for _ in 0..threads {
                        scope.spawn(|| {
                            let region = fs
                                .new_read_only_memory_region_from_file(&path)
                                .expect("mapping failed");
                            std::hint::black_box(region.length());
                        });
                    }
                });
            }
        });
    }
}
