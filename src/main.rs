//! rabbitmq_stats: print the RabbitMQ overview and node statistics as graphite metric lines.
//!
//! The lines are written to stdout, so they can be piped into a metrics pipeline.
//! Logging goes to stderr, and is set with RUST_LOG.
//!
use std::{collections::HashMap, io, path::Path, process};
use chrono::Local;
use clap::Parser;
use dotenv::dotenv;
use log::*;
use anyhow::{Context, Result};
use rabbitmq_stats::config::{self, Opts, Settings};
use rabbitmq_stats::fetcher::HttpFetcher;
use rabbitmq_stats::collector;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{:?}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // one timestamp for every line of this run.
    let timestamp = Local::now().timestamp();

    let options = Opts::parse();
    dotenv().ok();

    let mut changed_options = HashMap::new();
    let settings = Settings::from_opts(&options, &mut changed_options)?;
    config::dotenv_writer(options.write_dotenv, changed_options, Path::new(".env"))?;

    let fetcher = HttpFetcher::new(settings.api.clone())?;
    let stdout = io::stdout();
    collector::collect(&fetcher, &settings.prefix, timestamp, &mut stdout.lock())
        .with_context(|| format!("Collecting statistics from {} failed", settings.api.base_url()))?;

    Ok(())
}
