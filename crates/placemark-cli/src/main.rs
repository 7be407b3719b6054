//! placemark-cli: command-line interface for placemark-core
//!
//! Pulls point coordinates out of KMZ archives and keeps them in a small
//! snapshot-backed point store.
//!
//! Usage examples
//! --------------
//!
//! - Print the points of an archive (lat, lon per line, or JSON)
//!   $ placemark extract signs.kmz
//!   $ placemark extract --json --top-level-only signs.kmz
//!
//! - Show placemark / folder / skip counts
//!   $ placemark stats signs.kmz
//!
//! - Seed the blocked_signs table once, then inspect it
//!   $ placemark --store signs.bin seed signs.kmz
//!   $ placemark --store signs.bin list
//!   $ placemark --store signs.bin show 3
//!   $ placemark --store signs.bin delete 3
//!
//! Configuration
//! -------------
//!
//! `PLACEMARK_STORE` and `PLACEMARK_TABLE` fill in `--store` and `--table`
//! and are also read from a `.env` file in the working directory.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use placemark_core::{
    seed_points, CollectMode, ExtractOptions, Extractor, LatLong, PointRecord, PointStore,
    SeedOutcome, SnapshotStore,
};

fn main() -> anyhow::Result<()> {
    // Missing .env is fine; clap falls back to the real environment and defaults.
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let table = args.table.as_str();
    log::debug!("store {} table {table}", args.store.display());

    match args.command {
        Commands::Extract {
            archive,
            top_level_only,
            max_depth,
            json,
        } => {
            let mut options = ExtractOptions::default();
            if top_level_only {
                options.mode = CollectMode::TopLevel;
            }
            if let Some(depth) = max_depth {
                options.max_depth = depth;
            }

            let extraction = Extractor::new(options)
                .extract_path(&archive)
                .with_context(|| format!("extracting {}", archive.display()))?;

            if json {
                print_points_json(&extraction.points)?;
            } else {
                for p in &extraction.points {
                    println!("{}, {}", p.latitude, p.longitude);
                }
            }
        }

        Commands::Stats { archive } => {
            let stats = Extractor::default()
                .extract_path(&archive)
                .with_context(|| format!("extracting {}", archive.display()))?
                .stats;
            println!("Archive statistics:");
            println!("  Placemarks: {}", stats.placemarks);
            println!("  Folders: {}", stats.folders);
            println!("  Points: {}", stats.points);
            println!("  Skipped: {}", stats.skipped);
        }

        Commands::Seed { archive } => {
            let mut store = open_store(&args.store)?;
            match seed_points(&mut store, table, &archive, &Extractor::default())? {
                SeedOutcome::AlreadySeeded { existing } => {
                    println!("{table} already holds {existing} records; nothing to do");
                }
                SeedOutcome::Seeded { inserted, stats } => {
                    println!(
                        "Seeded {inserted} records into {table} ({} placemarks skipped)",
                        stats.skipped
                    );
                }
            }
        }

        Commands::List => {
            let store = open_store(&args.store)?;
            print_records(&store.records(table)?)?;
        }

        Commands::Show { id } => {
            let store = open_store(&args.store)?;
            match store.record(table, id)? {
                Some(r) => {
                    println!("Record: {}", r.id);
                    println!("Latitude: {}", r.latitude);
                    println!("Longitude: {}", r.longitude);
                }
                None => eprintln!("No record {id} in {table}"),
            }
        }

        Commands::Delete { id } => {
            let mut store = open_store(&args.store)?;
            if store.delete(table, id)? {
                println!("Deleted record {id} from {table}");
            } else {
                eprintln!("No record {id} in {table}");
            }
        }
    }

    Ok(())
}

fn open_store(path: &std::path::Path) -> anyhow::Result<SnapshotStore> {
    SnapshotStore::open(path).with_context(|| format!("opening store {}", path.display()))
}

#[cfg(feature = "json")]
fn print_points_json(points: &[LatLong]) -> anyhow::Result<()> {
    println!("{}", placemark_core::points_to_json(points)?);
    Ok(())
}

#[cfg(not(feature = "json"))]
fn print_points_json(_points: &[LatLong]) -> anyhow::Result<()> {
    anyhow::bail!("JSON output needs the `json` feature")
}

#[cfg(feature = "json")]
fn print_records(records: &[PointRecord]) -> anyhow::Result<()> {
    println!("{}", placemark_core::records_to_json(records)?);
    Ok(())
}

#[cfg(not(feature = "json"))]
fn print_records(records: &[PointRecord]) -> anyhow::Result<()> {
    for r in records {
        println!("{}: {}, {}", r.id, r.latitude, r.longitude);
    }
    Ok(())
}
