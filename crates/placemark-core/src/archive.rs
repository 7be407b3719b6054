// crates/placemark-core/src/archive.rs

//! # KMZ Archive Access
//!
//! A KMZ file is a zip container with one KML document (usually `doc.kml`)
//! plus optional icons and overlays. [`KmzArchive`] owns the open file; it is
//! closed when the value is dropped, whichever way the caller leaves.

use crate::error::{PlacemarkError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Suffix (compared case-insensitively) that marks the KML member.
pub const KML_SUFFIX: &str = ".kml";

pub struct KmzArchive {
    path: PathBuf,
    zip: ZipArchive<BufReader<File>>,
}

impl KmzArchive {
    /// Opens the archive and reads its central directory.
    ///
    /// # Errors
    ///
    /// [`PlacemarkError::ArchiveOpen`] if the file is missing, unreadable, or
    /// not a zip container.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PlacemarkError::archive_open(path, e))?;
        let zip = ZipArchive::new(BufReader::new(file))
            .map_err(|e| PlacemarkError::archive_open(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            zip,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of members, directories included.
    pub fn len(&self) -> usize {
        self.zip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zip.len() == 0
    }

    /// Index and name of the first member whose name ends in `.kml`, in
    /// central-directory order.
    ///
    /// # Errors
    ///
    /// [`PlacemarkError::NoDocumentFound`] if no member qualifies.
    pub fn find_document(&mut self) -> Result<(usize, String)> {
        for i in 0..self.zip.len() {
            let entry = self
                .zip
                .by_index_raw(i)
                .map_err(|e| PlacemarkError::archive_open(&self.path, e))?;
            if !entry.is_dir() && is_kml_name(entry.name()) {
                return Ok((i, entry.name().to_string()));
            }
        }

        Err(PlacemarkError::NoDocumentFound {
            path: self.path.clone(),
        })
    }

    /// Lends a buffered stream over the KML member to `read`.
    ///
    /// I/O failures while `read` consumes the stream (a corrupt deflate
    /// stream, a CRC mismatch) are reported as
    /// [`PlacemarkError::ArchiveOpen`].
    pub fn with_document<T>(
        &mut self,
        read: impl FnOnce(&mut dyn BufRead) -> Result<T>,
    ) -> Result<T> {
        let (index, name) = self.find_document()?;
        log::debug!("reading {name} from {}", self.path.display());

        let member = self
            .zip
            .by_index(index)
            .map_err(|e| PlacemarkError::archive_open(&self.path, format!("{name}: {e}")))?;
        let mut stream = BufReader::new(member);

        let out = read(&mut stream).map_err(|e| match e {
            PlacemarkError::Io(io) => {
                PlacemarkError::archive_open(&self.path, format!("failed to read {name}: {io}"))
            }
            other => other,
        })?;

        // The member checksum is only verified at end of stream; the parser
        // stops at `</kml>`, so read whatever trails it.
        io::copy(&mut stream, &mut io::sink()).map_err(|e| {
            PlacemarkError::archive_open(&self.path, format!("failed to read {name}: {e}"))
        })?;

        Ok(out)
    }
}

#[inline]
fn is_kml_name(name: &str) -> bool {
    name.len() >= KML_SUFFIX.len()
        && name.is_char_boundary(name.len() - KML_SUFFIX.len())
        && name[name.len() - KML_SUFFIX.len()..].eq_ignore_ascii_case(KML_SUFFIX)
}
