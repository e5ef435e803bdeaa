//! Core constants of the GCJ-02 correction model and the China region.
//! Keeping them in a single place makes the magic numbers easy to audit.

use crate::core::geo::{LatLng, LatLngBounds};

/// Semi-major axis of the Krasovsky 1940 ellipsoid, in meters.
pub const KRASOVSKY_A: f64 = 6378245.0;

/// First eccentricity squared of the Krasovsky 1940 ellipsoid.
#[allow(clippy::excessive_precision)]
pub const KRASOVSKY_EE: f64 = 0.00669342162296594323;

/// Longitude the correction polynomials are centered on.
pub const OFFSET_ORIGIN_LNG: f64 = 105.0;

/// Latitude the correction polynomials are centered on.
pub const OFFSET_ORIGIN_LAT: f64 = 35.0;

/// Canonical China bounding box used for frame and provider decisions.
pub const CHINA_BOUNDS: LatLngBounds = LatLngBounds::from_coords(18.0, 73.5, 53.5, 135.0);

/// Wider box reaching down to the South China Sea (3.86°N).
/// Opt-in only, see `BoundaryPreset::Extended`.
pub const CHINA_BOUNDS_EXTENDED: LatLngBounds =
    LatLngBounds::from_coords(3.86, 73.66, 53.55, 135.05);

/// Camera target used before the first location fix (Beijing, WGS-84).
pub const DEFAULT_CAMERA_TARGET: LatLng = LatLng::new(39.9042, 116.4074);

/// Zoom used when the regional provider takes over the camera.
pub const REGIONAL_CAMERA_ZOOM: f64 = 17.0;

/// Zoom used when the primary provider takes over the camera.
pub const PRIMARY_CAMERA_ZOOM: f64 = 15.0;

/// Camera fly-to duration on first fix and on border crossings.
pub const CAMERA_ANIMATION_MS: u64 = 1000;

/// Center of the country-wide overview region.
pub const CHINA_OVERVIEW_CENTER: LatLng = LatLng::new(35.8617, 104.1954);

/// Span (degrees) of the country-wide overview region.
pub const CHINA_OVERVIEW_DELTA: f64 = 30.0;

/// Span (degrees) of a single-city region, also the floor for route regions.
pub const CITY_REGION_DELTA: f64 = 0.5;

/// Padding factor applied to a route's bounding span.
pub const ROUTE_REGION_PADDING: f64 = 1.5;
