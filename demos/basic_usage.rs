//! Basic usage example for placemark-rs
//!
//! This example demonstrates how to:
//! - Extract points from a KMZ archive
//! - Read the extraction counters
//! - Seed a table once and see the second run skip
//!
//! Run with a real archive, or without arguments to use a generated one:
//!
//! ```text
//! cargo run --example basic_usage -- No_public_light_buses_labels.kmz
//! ```

use placemark_rs::prelude::*;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use zip::write::SimpleFileOptions;

type DemoResult<T> = std::result::Result<T, Box<dyn Error>>;

const SAMPLE_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Sample signs</name>
    <Placemark><name>A</name><Point><coordinates>114.1694,22.3193,0</coordinates></Point></Placemark>
    <Placemark><name>no location</name><Point><coordinates></coordinates></Point></Placemark>
    <Folder>
      <name>Kowloon</name>
      <Placemark><name>B</name><Point><coordinates> 114.1722 , 22.2988 </coordinates></Point></Placemark>
      <Folder>
        <Placemark><name>C</name><Point><coordinates>114.1747,22.3027,0</coordinates></Point></Placemark>
      </Folder>
    </Folder>
  </Document>
</kml>"#;

fn write_sample() -> DemoResult<PathBuf> {
    let path = std::env::temp_dir().join("placemark_sample.kmz");
    let mut zip = zip::ZipWriter::new(std::fs::File::create(&path)?);
    zip.start_file("doc.kml", SimpleFileOptions::default())?;
    zip.write_all(SAMPLE_KML.as_bytes())?;
    zip.finish()?;
    Ok(path)
}

fn main() -> DemoResult<()> {
    println!("=== placemark-rs Basic Usage Example ===\n");

    let archive = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => write_sample()?,
    };
    println!("Archive: {}\n", archive.display());

    // Example 1: plain extraction
    println!("--- Example 1: Points in document order ---");
    let extraction = Extractor::default().extract_with_stats(&archive)?;
    for p in extraction.points.iter().take(10) {
        println!("  {:.5}, {:.5}", p.latitude, p.longitude);
    }
    if extraction.points.len() > 10 {
        println!("  ... {} more", extraction.points.len() - 10);
    }
    println!();

    // Example 2: counters
    println!("--- Example 2: Extraction statistics ---");
    let stats = extraction.stats;
    println!("  Placemarks: {}", stats.placemarks);
    println!("  Folders: {}", stats.folders);
    println!("  Points: {}", stats.points);
    println!("  Skipped: {}", stats.skipped);
    println!();

    // Example 3: seeding is a no-op once the table has rows
    println!("--- Example 3: Seeding twice ---");
    let mut store = MemoryStore::new();
    for run in 1..=2 {
        match seed_points(&mut store, BLOCKED_SIGNS_TABLE, &archive, &Extractor::default())? {
            SeedOutcome::Seeded { inserted, .. } => println!("  run {run}: inserted {inserted}"),
            SeedOutcome::AlreadySeeded { existing } => {
                println!("  run {run}: already seeded ({existing} rows)")
            }
        }
    }
    println!("  rows: {}", store.count(BLOCKED_SIGNS_TABLE)?);

    Ok(())
}
