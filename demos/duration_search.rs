//! Runs a full duration search and prints every qualifying set.
//!
//! Usage: `cargo run --example duration_search --features serde [config.json]`
//!
//! Without an argument the default settings are used. Set `DURATION_SEARCH_LOG`
//! to `debug` or `trace` for progress output on stderr.

use std::error::Error;

use duration_pools::{DurationSearch, SearchConfig};
use log::{LevelFilter, Log, Metadata, Record};

/// Minimal stderr logger for the demo.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging() {
    let level = std::env::var("DURATION_SEARCH_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn load_config() -> Result<SearchConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(SearchConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let config = load_config()?;
    let search = DurationSearch::new(config)?;

    println!("Duration Search Results:");
    println!("========================");

    let mut rng = rand::thread_rng();
    let mut records = search.records();
    for record in records.by_ref() {
        println!();
        println!("{}", record);
        for bucket in &record.pools {
            if let Some(pool) = bucket.choose(&mut rng) {
                println!("  random draw (sum {}): {}", bucket.sum(), pool);
            }
        }
    }

    println!();
    println!("Done: {}", records.stats());
    Ok(())
}
