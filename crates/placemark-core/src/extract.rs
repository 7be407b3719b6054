// crates/placemark-core/src/extract.rs

//! # Extraction
//!
//! Archive lookup, KML parsing, placemark collection and coordinate decoding,
//! composed in that order. Structural failures (archive or document) abort
//! the whole call; a placemark with unusable coordinates is dropped and
//! counted, never fatal.

use crate::archive::KmzArchive;
use crate::common::ExtractStats;
use crate::coords::{decode_coordinates, SkipReason};
use crate::error::{PlacemarkError, Result};
use crate::kml::{collect_placemarks, parse_document, CollectMode};
use crate::model::LatLong;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Default cap on `<Folder>` nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tuning knobs for an [`Extractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub mode: CollectMode,
    /// Deepest folder nesting accepted before failing with
    /// [`PlacemarkError::NestingTooDeep`].
    pub max_depth: usize,
    /// Drop points outside -90..=90 / -180..=180 instead of keeping them.
    pub reject_out_of_range: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mode: CollectMode::Recursive,
            max_depth: DEFAULT_MAX_DEPTH,
            reject_out_of_range: false,
        }
    }
}

/// Points of one extraction plus counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub points: Vec<LatLong>,
    pub stats: ExtractStats,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract every point from the KMZ archive at `path`.
    ///
    /// # Errors
    ///
    /// - [`PlacemarkError::ArchiveOpen`] if the archive cannot be opened or read.
    /// - [`PlacemarkError::NoDocumentFound`] if it has no `.kml` member.
    /// - [`PlacemarkError::MalformedDocument`] / [`PlacemarkError::NestingTooDeep`]
    ///   if the document cannot be parsed.
    pub fn extract(&self, path: impl AsRef<Path>) -> Result<Vec<LatLong>> {
        self.extract_with_stats(path).map(|x| x.points)
    }

    /// Like [`Extractor::extract`], also returning [`ExtractStats`].
    pub fn extract_with_stats(&self, path: impl AsRef<Path>) -> Result<Extraction> {
        let mut archive = KmzArchive::open(path)?;
        archive.with_document(|stream| self.extract_reader(stream))
    }

    /// Run parsing, collection and decoding over a plain KML stream.
    pub fn extract_reader<R: BufRead>(&self, reader: R) -> Result<Extraction> {
        let doc = parse_document(reader, self.options.max_depth)?;
        let placemarks = collect_placemarks(&doc, self.options.mode);

        let mut stats = ExtractStats {
            placemarks: placemarks.len(),
            folders: match self.options.mode {
                CollectMode::Recursive => doc.folder_count(),
                CollectMode::TopLevel => 0,
            },
            ..ExtractStats::default()
        };

        let mut points = Vec::with_capacity(placemarks.len());
        for (index, placemark) in placemarks.iter().enumerate() {
            match self.decode(placemark.coordinates()) {
                Ok(point) => points.push(point),
                Err(reason) => {
                    stats.skipped += 1;
                    log::debug!("skipping placemark #{index}: {reason}");
                }
            }
        }
        stats.points = points.len();

        log::debug!(
            "extracted {} points from {} placemarks in {} folders ({} skipped)",
            stats.points,
            stats.placemarks,
            stats.folders,
            stats.skipped
        );

        Ok(Extraction { points, stats })
    }

    /// Extract from either a `.kml` file (read directly) or a KMZ archive
    /// (any other extension).
    pub fn extract_path(&self, path: impl AsRef<Path>) -> Result<Extraction> {
        let path = path.as_ref();
        let is_kml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("kml"));

        if !is_kml {
            return self.extract_with_stats(path);
        }

        let file = File::open(path).map_err(|e| PlacemarkError::archive_open(path, e))?;
        self.extract_reader(BufReader::new(file))
    }

    #[inline]
    fn decode(&self, raw: &str) -> std::result::Result<LatLong, SkipReason> {
        let point = decode_coordinates(raw)?;
        if self.options.reject_out_of_range && !point.is_in_range() {
            return Err(SkipReason::OutOfRange);
        }
        Ok(point)
    }
}

/// Extract every point from a KMZ archive with default options.
///
/// ```no_run
/// let points = placemark_core::extract("signs.kmz")?;
/// println!("{} points", points.len());
/// # Ok::<(), placemark_core::PlacemarkError>(())
/// ```
pub fn extract(path: impl AsRef<Path>) -> Result<Vec<LatLong>> {
    Extractor::default().extract(path)
}
