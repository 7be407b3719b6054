// crates/placemark-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate counters for one extraction.
///
/// Returned inside [`crate::Extraction`]. `skipped` counts placemarks whose
/// coordinate text was empty or could not be decoded, so
/// `points + skipped == placemarks` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractStats {
    pub placemarks: usize,
    pub folders: usize,
    pub points: usize,
    pub skipped: usize,
}
