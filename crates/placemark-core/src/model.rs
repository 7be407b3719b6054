// crates/placemark-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in WGS84 degrees.
///
/// KML writes coordinates as `longitude,latitude`; this type always names the
/// fields explicitly so the order cannot be mixed up downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLong {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLong {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `true` if latitude is within -90..=90 and longitude within -180..=180.
    #[inline]
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A stored point row, shaped like the JSON the HTTP API returned for
/// blocked signs and station points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub id: u32,
    pub latitude: f64,
    pub longitude: f64,
}

impl PointRecord {
    pub fn location(&self) -> LatLong {
        LatLong::new(self.latitude, self.longitude)
    }
}
