//! # placemark-rs
//!
//! Workspace facade over [`placemark_core`], used by the demos.
//!
//! ```no_run
//! use placemark_rs::prelude::*;
//!
//! let points = extract("No_public_light_buses_labels.kmz")?;
//! println!("{} points", points.len());
//! # Ok::<(), PlacemarkError>(())
//! ```

pub use placemark_core::*;

/// Everything needed to extract and seed in one import.
pub mod prelude {
    pub use placemark_core::{
        extract, seed_points, CollectMode, ExtractOptions, ExtractStats, Extraction, Extractor,
        LatLong, MemoryStore, PlacemarkError, PointRecord, PointStore, Result, SeedOutcome,
        SnapshotStore, BLOCKED_SIGNS_TABLE, STATIONS_TABLE,
    };
}
