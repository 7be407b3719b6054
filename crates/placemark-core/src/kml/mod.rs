// crates/placemark-core/src/kml/mod.rs

//! # KML Document Model
//!
//! Only the parts of KML that carry point locations are modelled:
//!
//! ```text
//! kml > Document > { Placemark*, Folder* }
//!              Folder > { Placemark*, Folder* }
//!           Placemark > Point > coordinates
//! ```
//!
//! Everything else in a document (styles, names, extended data, other
//! geometries) is skipped by the parser.

pub mod collect;
pub mod parse;

pub use collect::{collect_placemarks, CollectMode};
pub use parse::{parse_document, parse_str};

/// The root container (`<Document>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmlDocument {
    pub placemarks: Vec<Placemark>,
    pub folders: Vec<Folder>,
}

/// A `<Folder>`: placemarks plus nested folders, to any depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folder {
    pub placemarks: Vec<Placemark>,
    pub folders: Vec<Folder>,
}

/// A `<Placemark>` wrapping at most one `<Point>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placemark {
    pub point: Option<Point>,
}

/// A `<Point>` with its raw, undecoded `<coordinates>` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Point {
    pub coordinates: String,
}

impl Placemark {
    /// The raw coordinate text, or `""` for a placemark without a point.
    pub fn coordinates(&self) -> &str {
        self.point.as_ref().map(|p| p.coordinates.as_str()).unwrap_or("")
    }
}

impl KmlDocument {
    /// Number of folders at every depth.
    pub fn folder_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&Folder> = self.folders.iter().collect();
        while let Some(folder) = pending.pop() {
            count += 1;
            pending.extend(folder.folders.iter());
        }
        count
    }
}
