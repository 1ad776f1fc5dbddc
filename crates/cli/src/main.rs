//! `pharmadesk`: purchase tallies and stock health reports from JSON files.
//!
//! Usage:
//!   pharmadesk totals <lines.json>
//!   pharmadesk stock <inventory.json> [--as-of YYYY-MM-DD]
//!   pharmadesk --format json ...

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use pharmadesk_cli::config::{Config, OutputFormat};
use pharmadesk_cli::input;
use pharmadesk_cli::report::{StockReport, TotalsReport};
use pharmadesk_inventory::parse_reference;

#[derive(Parser)]
#[command(name = "pharmadesk")]
#[command(version)]
#[command(about = "Purchase order tallies and inventory stock health", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (defaults to PHARMADESK_OUTPUT, then table)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a purchase order: per-line breakdown and order totals
    Totals {
        /// JSON array of line items (quantity, unit_price, discount_percent, tax_percent)
        file: PathBuf,
    },

    /// Classify inventory rows by stock band and expiry
    Stock {
        /// JSON array of inventory rows
        file: PathBuf,

        /// Reference date or RFC 3339 timestamp (defaults to now, UTC)
        #[arg(long)]
        as_of: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("invalid configuration")?;
    pharmadesk_observability::init(config.log_format);

    let format = cli.format.unwrap_or(config.output);

    let rendered = match cli.command {
        Commands::Totals { file } => {
            tracing::info!(file = %file.display(), "pricing purchase order");
            let items = input::load_line_items(&file)
                .with_context(|| format!("loading line items from {}", file.display()))?;
            tracing::info!(lines = items.len(), "line items loaded");

            let report = TotalsReport::build(&items).inspect_err(|err| {
                tracing::warn!(error = %err, "purchase order rejected");
            })?;
            report.render(format, config.display_scale)?
        }
        Commands::Stock { file, as_of } => {
            let as_of = match as_of {
                Some(raw) => parse_reference(&raw)?,
                None => chrono::Utc::now().naive_utc(),
            };
            tracing::info!(file = %file.display(), %as_of, "classifying inventory");
            let items = input::load_inventory(&file)
                .inspect_err(|err| tracing::warn!(error = %err, "inventory rejected"))
                .with_context(|| format!("loading inventory from {}", file.display()))?;
            tracing::info!(items = items.len(), "inventory loaded");

            StockReport::build(&items, as_of).render(format)?
        }
    };

    print!("{rendered}");
    Ok(())
}
