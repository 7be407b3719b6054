// crates/placemark-core/src/seed.rs

//! # Seeding
//!
//! Loads a KMZ archive into a [`PointStore`] table exactly once: if the table
//! already has rows nothing is read or written. The archive path is how the
//! blocked-sign locations get in; [`BLOCKED_SIGNS_TABLE`] is the usual target.

use crate::common::ExtractStats;
use crate::error::Result;
use crate::extract::Extractor;
use crate::store::PointStore;
use std::path::Path;

/// Table holding the "no public light buses" sign locations.
pub const BLOCKED_SIGNS_TABLE: &str = "blocked_signs";
/// Table holding bus station locations. Stations come from the route-stop
/// feed, not from a KMZ archive, so nothing in this module seeds it.
pub const STATIONS_TABLE: &str = "stations";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table had rows already; the archive was not opened.
    AlreadySeeded { existing: usize },
    Seeded { inserted: usize, stats: ExtractStats },
}

/// Seed `table` from the KMZ archive at `archive` unless it already has rows.
///
/// Extraction runs completely before anything is written, and the points go
/// in as one [`PointStore::insert_points`] batch, so a failure at any stage
/// leaves the table empty.
///
/// # Errors
///
/// Any extraction error (see [`Extractor::extract`]) or store error.
pub fn seed_points<S: PointStore + ?Sized>(
    store: &mut S,
    table: &str,
    archive: impl AsRef<Path>,
    extractor: &Extractor,
) -> Result<SeedOutcome> {
    let existing = store.count(table)?;
    if existing > 0 {
        log::info!("{table} table already seeded ({existing} rows)");
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    let archive = archive.as_ref();
    log::info!("seeding {table} from {}", archive.display());

    let extraction = extractor.extract_with_stats(archive)?;
    if extraction.stats.skipped > 0 {
        log::info!(
            "{} of {} placemarks had unusable coordinates and were skipped",
            extraction.stats.skipped,
            extraction.stats.placemarks
        );
    }

    log::info!("inserting records into {table} table...");
    let inserted = store.insert_points(table, &extraction.points)?;
    log::info!("seeded {inserted} records into {table} table");

    Ok(SeedOutcome::Seeded {
        inserted,
        stats: extraction.stats,
    })
}
