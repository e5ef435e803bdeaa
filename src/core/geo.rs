use crate::{GeoFrameError, Result};
use serde::{Deserialize, Serialize};

/// WGS-84 equatorial radius in meters, used for distance measurements
const EARTH_RADIUS: f64 = 6378137.0;

/// A geographical coordinate in degrees.
///
/// The reference frame (WGS-84 or GCJ-02) is not stored in the value;
/// callers track which frame a coordinate is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate without validation
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a coordinate, rejecting non-finite or out-of-range values
    pub fn try_new(lat: f64, lng: f64) -> Result<Self> {
        let coord = Self::new(lat, lng);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(GeoFrameError::InvalidCoordinates(format!(
                "({}, {}) is outside [-90, 90] x [-180, 180]",
                lat, lng
            )))
        }
    }

    /// Validates that the coordinates are within valid ranges.
    /// NaN fails every comparison and is therefore invalid.
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Calculates the distance to another LatLng using the Haversine formula
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

// geo-types is x/y ordered, so longitude goes first.
impl From<LatLng> for geo_types::Coord<f64> {
    fn from(value: LatLng) -> Self {
        geo_types::Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<geo_types::Coord<f64>> for LatLng {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

impl From<LatLng> for geo_types::Point<f64> {
    fn from(value: LatLng) -> Self {
        geo_types::Point::new(value.lng, value.lat)
    }
}

impl From<geo_types::Point<f64>> for LatLng {
    fn from(value: geo_types::Point<f64>) -> Self {
        Self::new(value.y(), value.x())
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub const fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub const fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Smallest bounds containing both points, in any order
    pub fn from_points(a: &LatLng, b: &LatLng) -> Self {
        let mut bounds = Self::new(*a, *a);
        bounds.extend(b);
        bounds
    }

    /// Checks if the bounds contain a point. Edges count as inside.
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Gets the span of the bounds
    pub fn span(&self) -> LatLng {
        LatLng::new(
            self.north_east.lat - self.south_west.lat,
            self.north_east.lng - self.south_west.lng,
        )
    }

    /// Checks if the bounds are valid (south <= north, west <= east)
    pub fn is_valid(&self) -> bool {
        self.south_west.lat <= self.north_east.lat && self.south_west.lng <= self.north_east.lng
    }
}
