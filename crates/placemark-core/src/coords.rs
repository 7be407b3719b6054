// crates/placemark-core/src/coords.rs

//! Decoding of KML `<coordinates>` text into [`LatLong`] values.
//!
//! A bad coordinate string never fails an extraction. The decoder returns a
//! [`SkipReason`] instead and the caller drops the entry.

use crate::model::LatLong;
use std::fmt;

/// Why a placemark's coordinate text produced no point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Nothing but whitespace (an empty `<Point>`).
    Empty,
    /// Fewer than two comma-separated fields.
    MissingLatitude,
    InvalidLongitude,
    InvalidLatitude,
    /// A field parsed to NaN or infinity.
    NonFinite,
    /// Decoded fine but outside the WGS84 ranges (only with range checking on).
    OutOfRange,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            SkipReason::Empty => "empty coordinates",
            SkipReason::MissingLatitude => "fewer than two coordinate fields",
            SkipReason::InvalidLongitude => "longitude is not a number",
            SkipReason::InvalidLatitude => "latitude is not a number",
            SkipReason::NonFinite => "coordinate is not finite",
            SkipReason::OutOfRange => "coordinate out of range",
        };
        f.write_str(msg)
    }
}

/// Decode one `longitude,latitude[,altitude]` string.
///
/// Whitespace around the whole string and around each field is ignored, and
/// anything after the second field (altitude, stray tuples) is dropped.
///
/// ```
/// use placemark_core::{decode_coordinates, LatLong, SkipReason};
///
/// assert_eq!(decode_coordinates(" 114.2 , 22.4 "), Ok(LatLong::new(22.4, 114.2)));
/// assert_eq!(decode_coordinates("114.1"), Err(SkipReason::MissingLatitude));
/// ```
pub fn decode_coordinates(raw: &str) -> Result<LatLong, SkipReason> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SkipReason::Empty);
    }

    let mut fields = raw.split(',');
    let (Some(lon), Some(lat)) = (fields.next(), fields.next()) else {
        return Err(SkipReason::MissingLatitude);
    };

    let longitude = parse_field(lon, SkipReason::InvalidLongitude)?;
    let latitude = parse_field(lat, SkipReason::InvalidLatitude)?;

    Ok(LatLong {
        latitude,
        longitude,
    })
}

#[inline]
fn parse_field(field: &str, invalid: SkipReason) -> Result<f64, SkipReason> {
    let value: f64 = field.trim().parse().map_err(|_| invalid)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SkipReason::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_lon_lat_order() {
        assert_eq!(decode_coordinates("114.1,22.3"), Ok(LatLong::new(22.3, 114.1)));
    }

    #[test]
    fn ignores_altitude_and_extra_fields() {
        assert_eq!(decode_coordinates("114.1,22.3,0"), Ok(LatLong::new(22.3, 114.1)));
        assert_eq!(
            decode_coordinates("114.1,22.3,0,junk,more"),
            Ok(LatLong::new(22.3, 114.1))
        );
    }

    #[test]
    fn trims_whole_string_and_fields() {
        assert_eq!(
            decode_coordinates("\n\t  114.2 , 22.4  \n"),
            Ok(LatLong::new(22.4, 114.2))
        );
    }

    #[test]
    fn skips_empty_text() {
        assert_eq!(decode_coordinates(""), Err(SkipReason::Empty));
        assert_eq!(decode_coordinates("   \n "), Err(SkipReason::Empty));
    }

    #[test]
    fn skips_single_field() {
        assert_eq!(decode_coordinates("114.1"), Err(SkipReason::MissingLatitude));
    }

    #[test]
    fn skips_non_numeric_fields() {
        assert_eq!(decode_coordinates("east,22.3"), Err(SkipReason::InvalidLongitude));
        assert_eq!(decode_coordinates("114.1,north"), Err(SkipReason::InvalidLatitude));
        assert_eq!(decode_coordinates(",22.3"), Err(SkipReason::InvalidLongitude));
        assert_eq!(decode_coordinates("114.1,"), Err(SkipReason::InvalidLatitude));
    }

    #[test]
    fn skips_non_finite_values() {
        assert_eq!(decode_coordinates("NaN,22.3"), Err(SkipReason::NonFinite));
        assert_eq!(decode_coordinates("114.1,inf"), Err(SkipReason::NonFinite));
    }

    #[test]
    fn accepts_negative_and_exponent_forms() {
        assert_eq!(
            decode_coordinates("-122.0841,3.74e1"),
            Ok(LatLong::new(37.4, -122.0841))
        );
    }

    #[test]
    fn second_tuple_bleeds_into_third_field_only() {
        // A Point should carry one tuple; a second one ends up in the ignored
        // third field.
        assert_eq!(
            decode_coordinates("1.5,2.5,0 3.5,4.5,0"),
            Ok(LatLong::new(2.5, 1.5))
        );
    }
}
