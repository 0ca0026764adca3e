//! Flight Network Snapshot CLI
//!
//! Generates a synthetic flight network snapshot and writes it to JSON.
//!
//! Usage:
//!   generate-flights --output flight_data.json --seed 42

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use flight_catalog::Catalog;
use flight_generator::{generate, GeneratorConfig, DEFAULT_SEED};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "generate-flights",
    about = "Generate a synthetic flight network snapshot"
)]
struct Args {
    /// Output JSON file
    #[arg(short, long, default_value = "flight_data.json")]
    output: PathBuf,

    /// RNG seed; identical seeds reproduce identical snapshots
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Override the sampled airline count
    #[arg(long)]
    airlines: Option<usize>,

    /// Override the sampled airport count
    #[arg(long)]
    airports: Option<usize>,

    /// Override the popular-routes table size
    #[arg(long)]
    popular_routes: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("{}", "=".repeat(60));
    info!("Synthetic Flight Network Generator");
    info!("{}", "=".repeat(60));

    let catalog = Catalog::builtin();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut config = GeneratorConfig::sampled(&mut rng);
    if let Some(n) = args.airlines {
        config.num_airlines = n;
    }
    if let Some(n) = args.airports {
        config.num_airports = n;
    }
    if let Some(n) = args.popular_routes {
        config.popular_routes = n;
    }

    info!(
        "Sampling {} airlines and {} airports (seed {})",
        config.num_airlines, config.num_airports, args.seed
    );

    let collection_date = Local::now().date_naive();
    let data = generate(&catalog, &config, &mut rng, collection_date)?;

    info!("Writing output to {:?}", args.output);
    let file = File::create(&args.output)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &data)?;

    let total_routes: usize = data.airlines.iter().map(|a| a.routes.len()).sum();

    info!("{}", "=".repeat(60));
    info!("SUMMARY");
    info!("{}", "=".repeat(60));
    info!("  {} airlines", data.airlines.len());
    info!("  {} airports", data.airports.len());
    info!("  {} airline routes", total_routes);
    info!("  {} popular routes", data.popular_routes.len());

    Ok(())
}
