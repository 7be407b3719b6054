// crates/placemark-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of an extraction or seeding call.
///
/// Per-placemark decode problems are *not* errors; they are reported as
/// [`crate::SkipReason`] values and counted in [`crate::ExtractStats`].
#[derive(Debug, Error)]
pub enum PlacemarkError {
    /// The archive is missing, unreadable, or not a zip container.
    #[error("failed to open KMZ archive {}: {reason}", path.display())]
    ArchiveOpen { path: PathBuf, reason: String },

    /// The archive holds no member ending in `.kml`.
    #[error("no KML document found in KMZ archive {}", path.display())]
    NoDocumentFound { path: PathBuf },

    /// The KML stream is not well-formed XML or its root is not `<kml>`.
    #[error("malformed KML document: {0}")]
    MalformedDocument(String),

    /// Folder nesting exceeded the configured limit.
    #[error("KML folders nested deeper than {max} levels")]
    NestingTooDeep { max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl PlacemarkError {
    pub(crate) fn archive_open(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        PlacemarkError::ArchiveOpen {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlacemarkError>;
