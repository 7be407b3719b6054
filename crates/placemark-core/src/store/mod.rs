// crates/placemark-core/src/store/mod.rs

//! # Point Stores
//!
//! Destinations for seeded points. A store holds named tables of
//! [`PointRecord`]s with ids assigned per table starting at 1.

use crate::error::{PlacemarkError, Result};
use crate::model::{LatLong, PointRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod snapshot;

pub use snapshot::SnapshotStore;

/// Storage interface consumed by [`crate::seed_points`].
pub trait PointStore {
    /// Rows currently in `table` (0 for a table never written).
    fn count(&self, table: &str) -> Result<usize>;

    /// Append all `points` to `table` as one batch: either every point is
    /// stored or none is. Returns the number of rows written.
    fn insert_points(&mut self, table: &str, points: &[LatLong]) -> Result<usize>;

    /// All rows of `table` in id order.
    fn records(&self, table: &str) -> Result<Vec<PointRecord>>;

    fn record(&self, table: &str, id: u32) -> Result<Option<PointRecord>>;

    /// Removes one row; `Ok(false)` if it did not exist.
    fn delete(&mut self, table: &str, id: u32) -> Result<bool>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Table {
    next_id: u32,
    rows: Vec<PointRecord>,
}

/// Plain in-process store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    tables: BTreeMap<String, Table>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all tables that were ever written.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

impl PointStore for MemoryStore {
    fn count(&self, table: &str) -> Result<usize> {
        Ok(self.tables.get(table).map_or(0, |t| t.rows.len()))
    }

    fn insert_points(&mut self, table: &str, points: &[LatLong]) -> Result<usize> {
        if table.is_empty() {
            return Err(PlacemarkError::InvalidData("table name must not be empty".into()));
        }
        if points.is_empty() {
            return Ok(0);
        }

        let current = self.tables.get(table).map_or(0, |t| t.next_id);
        let Some(last_id) = u32::try_from(points.len())
            .ok()
            .and_then(|n| current.checked_add(n))
        else {
            return Err(PlacemarkError::InvalidData(format!(
                "table {table} would exceed {} rows",
                u32::MAX
            )));
        };

        let entry = self.tables.entry(table.to_string()).or_default();
        entry.rows.reserve(points.len());
        // ids are current+1 ..= last_id; the range check above keeps them in u32
        entry
            .rows
            .extend(points.iter().enumerate().map(|(i, p)| PointRecord {
                id: current + i as u32 + 1,
                latitude: p.latitude,
                longitude: p.longitude,
            }));
        entry.next_id = last_id;

        Ok(points.len())
    }

    fn records(&self, table: &str) -> Result<Vec<PointRecord>> {
        Ok(self
            .tables
            .get(table)
            .map(|t| t.rows.clone())
            .unwrap_or_default())
    }

    fn record(&self, table: &str, id: u32) -> Result<Option<PointRecord>> {
        Ok(self
            .tables
            .get(table)
            .and_then(|t| t.rows.iter().find(|r| r.id == id))
            .copied())
    }

    fn delete(&mut self, table: &str, id: u32) -> Result<bool> {
        let Some(t) = self.tables.get_mut(table) else {
            return Ok(false);
        };
        let before = t.rows.len();
        t.rows.retain(|r| r.id != id);
        Ok(t.rows.len() != before)
    }
}
