//! Solarboard CLI
//!
//! Fetches the current World Solar Challenge positions once and prints the
//! standings table to stdout.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use solarboard_core::{PositionsClient, Standings, StandingsConfig, build_rows, render_table};
use tracing_subscriber::EnvFilter;

/// Solarboard - World Solar Challenge standings
#[derive(Parser, Debug)]
#[command(name = "solarboard")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Telemetry endpoint, overriding the configuration
    #[arg(long)]
    url: Option<String>,

    /// Width of the stage progress bar
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    bar_length: Option<u16>,

    /// Only show teams in this class (e.g. "Challenger")
    #[arg(long)]
    class: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Write the rendered table, surfacing errors such as a closed pipe.
fn write_table<W: Write>(out: &mut W, table: &str) -> io::Result<()> {
    out.write_all(table.as_bytes())?;
    out.flush()
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "solarboard=debug,solarboard_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = StandingsConfig::load(args.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(url) = args.url {
        config.endpoint = url;
    }
    if let Some(bar_length) = args.bar_length {
        config.bar_length = usize::from(bar_length);
    }

    let route = config.route().context("invalid route")?;
    let mut options = config.row_options();
    options.class = args.class;

    let client = PositionsClient::new(&config.endpoint)?;
    let positions = client
        .fetch_positions()
        .await
        .with_context(|| format!("failed to fetch positions from {}", client.url()))?;

    let rows = build_rows(&positions.items, &route, &options)?;
    let standings = Standings::rank(rows);
    tracing::info!(teams = standings.len(), "Standings ready");

    let table = render_table(&standings, &route);
    write_table(&mut io::stdout().lock(), &table).context("failed to write standings")?;
    Ok(())
}
