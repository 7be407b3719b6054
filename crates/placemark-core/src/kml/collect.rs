// crates/placemark-core/src/kml/collect.rs
use super::{Folder, KmlDocument, Placemark};

/// Which placemarks of a document take part in an extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollectMode {
    /// Root placemarks, then every folder at any depth (default).
    #[default]
    Recursive,
    /// Only the placemarks directly under `<Document>`; folders are ignored.
    TopLevel,
}

/// Collect placemarks in document order.
///
/// Root placemarks come first. Folders are then walked pre-order: a folder's
/// own placemarks precede those of its sub-folders, and siblings keep their
/// document order. Uses a worklist, so folder depth only costs heap.
pub fn collect_placemarks(doc: &KmlDocument, mode: CollectMode) -> Vec<&Placemark> {
    let mut out: Vec<&Placemark> = doc.placemarks.iter().collect();
    if mode == CollectMode::TopLevel {
        return out;
    }

    // Reversed so the first sibling is popped first.
    let mut pending: Vec<&Folder> = doc.folders.iter().rev().collect();
    while let Some(folder) = pending.pop() {
        out.extend(folder.placemarks.iter());
        pending.extend(folder.folders.iter().rev());
    }
    out
}
