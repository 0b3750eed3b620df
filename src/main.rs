mod config;
mod manager;
mod stats;
mod time;

use crate::config::Config;
use crate::manager::Manager;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML file with a `times` array of time expressions.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Time expressions (`4,701`, `4.701` or `4:41.67`); override the config.
    times: Vec<String>,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let cfg = if !args.times.is_empty() {
        if let Some(config) = &args.config {
            log::warn!("ignoring {config:?}, times given as arguments");
        }
        Config::from_times(args.times).context("failed to construct cfg")?
    } else if let Some(config) = args.config {
        Config::from_file(&config).with_context(|| format!("failed to load {config:?}"))?
    } else {
        Config::default()
    };
    log::info!("{cfg:#?}");

    let report = Manager::new(cfg)
        .compute_report()
        .context("failed to compute report")?;

    println!("{report}");

    Ok(())
}
