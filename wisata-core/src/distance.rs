//! Geographic points and great-circle distance.
//!
//! Distances use the haversine formula on a spherical Earth with
//! R = 6371 km. Results are unrounded `f64` kilometres; presentation-time
//! rounding belongs to the caller.

use geo::Coord;
use thiserror::Error;

/// Mean Earth radius in kilometres used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A validated geographic point in degrees (WGS84).
///
/// # Examples
///
/// ```
/// use wisata_core::GeoPoint;
///
/// # fn main() -> Result<(), wisata_core::GeoPointError> {
/// let monas = GeoPoint::new(-6.1754, 106.8272)?;
/// assert_eq!(monas.latitude, -6.1754);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    /// Latitude in degrees, within `-90.0..=90.0`.
    pub latitude: f64,
    /// Longitude in degrees, within `-180.0..=180.0`.
    pub longitude: f64,
}

/// Errors returned by [`GeoPoint::new`].
#[derive(Debug, Error, PartialEq)]
pub enum GeoPointError {
    /// Latitude was not a finite value in `-90.0..=90.0`.
    #[error("latitude {latitude} must be a finite value between -90 and 90 degrees")]
    LatitudeOutOfRange {
        /// The rejected latitude.
        latitude: f64,
    },
    /// Longitude was not a finite value in `-180.0..=180.0`.
    #[error("longitude {longitude} must be a finite value between -180 and 180 degrees")]
    LongitudeOutOfRange {
        /// The rejected longitude.
        longitude: f64,
    },
}

impl GeoPoint {
    /// Validates and constructs a [`GeoPoint`].
    ///
    /// # Errors
    /// Returns [`GeoPointError`] when either coordinate is non-finite or
    /// outside its valid degree range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoPointError::LatitudeOutOfRange { latitude });
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoPointError::LongitudeOutOfRange { longitude });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build a point from a [`geo::Coord`] (`x` = longitude, `y` = latitude).
    ///
    /// # Errors
    /// Returns [`GeoPointError`] when the coordinate is outside the valid
    /// degree ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use geo::Coord;
    /// use wisata_core::GeoPoint;
    ///
    /// let point = GeoPoint::from_coord(Coord { x: 106.8272, y: -6.1754 }).unwrap();
    /// assert_eq!(point.longitude, 106.8272);
    /// ```
    pub fn from_coord(coord: Coord<f64>) -> Result<Self, GeoPointError> {
        Self::new(coord.y, coord.x)
    }

    /// Convert to a [`geo::Coord`] (`x` = longitude, `y` = latitude).
    #[must_use]
    pub const fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }
}

/// Great-circle distance between two points in kilometres.
///
/// Haversine formula with Earth radius [`EARTH_RADIUS_KM`]. Pure and
/// infallible; identical points yield exactly `0.0`.
///
/// # Examples
///
/// ```
/// use wisata_core::{GeoPoint, distance_km};
///
/// let berlin = GeoPoint::new(52.5200, 13.4050).unwrap();
/// let paris = GeoPoint::new(48.8566, 2.3522).unwrap();
/// let distance = distance_km(berlin, paris);
/// assert!((distance - 878.0).abs() < 10.0);
/// ```
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
