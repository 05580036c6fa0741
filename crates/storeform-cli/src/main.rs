use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod preview;
mod products;

#[derive(Debug, Parser)]
#[command(name = "storeform")]
#[command(about = "Add-product form engine: price derivation, variant rows and the product store")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Derive selling price from MRP and offer, or offer from a selling price
    Price {
        #[arg(long)]
        mrp: f64,
        /// Offer percentage
        #[arg(long, default_value_t = 0.0)]
        offer: f64,
        /// Selling price typed in by hand; re-derives the offer
        #[arg(long)]
        selling: Option<f64>,
    },
    /// Expand variant options into priced combination rows
    Variants {
        /// Option and its values as NAME=V1,V2 (e.g. "Size US=8,9"); repeat per option
        #[arg(long = "option", value_name = "NAME=VALUES", required = true)]
        options: Vec<String>,
        /// Base MRP copied into new rows
        #[arg(long, default_value_t = 0.0)]
        mrp: f64,
        /// Base offer percentage copied into new rows
        #[arg(long, default_value_t = 0.0)]
        offer: f64,
        /// Base weight copied into new rows
        #[arg(long, default_value_t = 0.0)]
        weight: f64,
        /// JSON file with previously edited rows to carry over
        #[arg(long)]
        existing: Option<PathBuf>,
    },
    /// Validate a product draft (JSON or YAML) and save it
    Submit {
        path: PathBuf,
        /// Validate and print the record without saving it
        #[arg(long)]
        dry_run: bool,
    },
    /// List saved products
    List,
    /// Show categories, warranties, weight units and other fixed choices
    Catalog,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storeform_core::load_app_config_from_env()?;
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Price {
            mrp,
            offer,
            selling,
        }) => preview::run_price(&config, mrp, offer, selling),
        Some(Commands::Variants {
            options,
            mrp,
            offer,
            weight,
            existing,
        }) => preview::run_variants(&config, &options, mrp, offer, weight, existing.as_deref()),
        Some(Commands::Submit { path, dry_run }) => products::run_submit(&config, &path, dry_run),
        Some(Commands::List) => products::run_list(&config),
        Some(Commands::Catalog) => {
            preview::run_catalog();
            Ok(())
        }
        None => {
            println!("storeform ready; run `storeform --help` for commands");
            Ok(())
        }
    }
}
