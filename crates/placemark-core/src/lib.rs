// crates/placemark-core/src/lib.rs

//! # placemark-core
//!
//! Pulls point coordinates out of KMZ archives (zipped KML) and seeds them
//! into point stores.
//!
//! ```no_run
//! let points = placemark_core::extract("No_public_light_buses_labels.kmz")?;
//! for p in &points {
//!     println!("{:.5}, {:.5}", p.latitude, p.longitude);
//! }
//! # Ok::<(), placemark_core::PlacemarkError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod archive;
pub mod common;
pub mod coords;
pub mod error;
pub mod export;
pub mod extract;
pub mod kml;
pub mod model;
pub mod seed;
pub mod store;

// Re-exports
pub use crate::archive::KmzArchive;
pub use crate::common::ExtractStats;
pub use crate::coords::{decode_coordinates, SkipReason};
pub use crate::error::{PlacemarkError, Result};
#[cfg(feature = "json")]
pub use crate::export::{points_to_json, records_to_json};
pub use crate::extract::{extract, ExtractOptions, Extraction, Extractor, DEFAULT_MAX_DEPTH};
pub use crate::kml::{CollectMode, Folder, KmlDocument, Placemark, Point};
pub use crate::model::{LatLong, PointRecord};
pub use crate::seed::{seed_points, SeedOutcome, BLOCKED_SIGNS_TABLE, STATIONS_TABLE};
pub use crate::store::{MemoryStore, PointStore, SnapshotStore};
