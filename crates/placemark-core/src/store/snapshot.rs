// crates/placemark-core/src/store/snapshot.rs
use super::{MemoryStore, PointStore};
use crate::error::{PlacemarkError, Result};
use crate::model::{LatLong, PointRecord};
use bincode::Options;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// A [`MemoryStore`] persisted to a single bincode file.
///
/// With the `compact` feature the file is gzip-compressed. Every mutation
/// writes a sibling `<name>.tmp` file and renames it over the snapshot, so a
/// failed write leaves the previous snapshot (and the in-memory state)
/// untouched.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl SnapshotStore {
    /// Loads the snapshot at `path`, or starts empty if there is none yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = if path.exists() {
            read_snapshot(&path)?
        } else {
            log::debug!("no snapshot at {}, starting empty", path.display());
            MemoryStore::default()
        };
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_memory(&self) -> &MemoryStore {
        &self.inner
    }

    /// Applies `change` to a copy of the data, persists the copy, then swaps
    /// it in.
    fn commit<T>(&mut self, change: impl FnOnce(&mut MemoryStore) -> Result<T>) -> Result<T> {
        let mut next = self.inner.clone();
        let out = change(&mut next)?;
        write_snapshot(&self.path, &next)?;
        self.inner = next;
        Ok(out)
    }
}

impl PointStore for SnapshotStore {
    fn count(&self, table: &str) -> Result<usize> {
        self.inner.count(table)
    }

    fn insert_points(&mut self, table: &str, points: &[LatLong]) -> Result<usize> {
        self.commit(|store| store.insert_points(table, points))
    }

    fn records(&self, table: &str) -> Result<Vec<PointRecord>> {
        self.inner.records(table)
    }

    fn record(&self, table: &str, id: u32) -> Result<Option<PointRecord>> {
        self.inner.record(table, id)
    }

    fn delete(&mut self, table: &str, id: u32) -> Result<bool> {
        if self.inner.record(table, id)?.is_none() {
            return Ok(false);
        }
        self.commit(|store| store.delete(table, id))
    }
}

// Guards against corrupt snapshots claiming huge lengths.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn codec() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

fn temp_path(path: &Path) -> PathBuf {
    let filename = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot".to_string());
    path.with_file_name(format!("{filename}.tmp"))
}

fn read_snapshot(path: &Path) -> Result<MemoryStore> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    let reader: Box<dyn Read> = Box::new(GzDecoder::new(reader));
    #[cfg(not(feature = "compact"))]
    let reader: Box<dyn Read> = Box::new(reader);

    Ok(codec().deserialize_from(reader)?)
}

fn write_snapshot(path: &Path, store: &MemoryStore) -> Result<()> {
    let tmp = temp_path(path);
    if let Err(e) = write_file(&tmp, store) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    if path.exists() {
        log::warn!("replacing point snapshot {}", path.display());
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        PlacemarkError::Io(e)
    })
}

fn write_file(path: &Path, store: &MemoryStore) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    #[cfg(feature = "compact")]
    {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        codec().serialize_into(&mut encoder, store)?;
        encoder.finish()?.flush()?;
    }

    #[cfg(not(feature = "compact"))]
    {
        let mut writer = writer;
        codec().serialize_into(&mut writer, store)?;
        writer.flush()?;
    }

    Ok(())
}
