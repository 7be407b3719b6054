// crates/placemark-core/src/export.rs
#![cfg(feature = "json")]

use crate::error::Result;
use crate::model::{LatLong, PointRecord};

/// Pretty-printed JSON array of `{"latitude": .., "longitude": ..}` objects.
pub fn points_to_json(points: &[LatLong]) -> Result<String> {
    Ok(serde_json::to_string_pretty(points)?)
}

/// Pretty-printed JSON array of `{"id": .., "latitude": .., "longitude": ..}`
/// objects, the shape the blocked-sign and station endpoints served.
pub fn records_to_json(records: &[PointRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
