//! WGS-84 <-> GCJ-02 conversion.
//!
//! GCJ-02 adds a deterministic, position-dependent offset to WGS-84. The
//! offset model was fitted for Chinese territory only, so both directions
//! are the identity outside the canonical region box. Operation order
//! matches the published reference formulas so results agree to the last
//! bit with other implementations.

use crate::core::boundary::is_in_region;
use crate::core::constants::{KRASOVSKY_A, KRASOVSKY_EE, OFFSET_ORIGIN_LAT, OFFSET_ORIGIN_LNG};
use crate::core::geo::LatLng;
use std::f64::consts::PI;

/// Converts a WGS-84 (GPS) coordinate to GCJ-02.
///
/// Returns the input unchanged outside the region.
pub fn wgs84_to_gcj02(lat: f64, lng: f64) -> LatLng {
    if !is_in_region(lat, lng) {
        return LatLng::new(lat, lng);
    }
    let (d_lat, d_lng) = gcj02_offset(lat, lng);
    LatLng::new(lat + d_lat, lng + d_lng)
}

/// Converts a GCJ-02 coordinate back to WGS-84.
///
/// This is the one-step inverse: the offset is evaluated at the GCJ-02
/// point rather than the unknown WGS-84 point, leaving a residual of a few
/// meters. Returns the input unchanged outside the region.
pub fn gcj02_to_wgs84(lat: f64, lng: f64) -> LatLng {
    if !is_in_region(lat, lng) {
        return LatLng::new(lat, lng);
    }
    let (d_lat, d_lng) = gcj02_offset(lat, lng);
    LatLng::new(lat - d_lat, lng - d_lng)
}

/// Offset in degrees `(d_lat, d_lng)` that GCJ-02 adds at the given point.
/// No region check.
pub(crate) fn gcj02_offset(lat: f64, lng: f64) -> (f64, f64) {
    let x = lng - OFFSET_ORIGIN_LNG;
    let y = lat - OFFSET_ORIGIN_LAT;

    let mut d_lat = transform_lat(x, y);
    let mut d_lng = transform_lng(x, y);

    // Scale meters on the Krasovsky ellipsoid back to degrees
    let rad_lat = lat / 180.0 * PI;
    let mut magic = rad_lat.sin();
    magic = 1.0 - KRASOVSKY_EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    d_lat = (d_lat * 180.0) / ((KRASOVSKY_A * (1.0 - KRASOVSKY_EE)) / (magic * sqrt_magic) * PI);
    d_lng = (d_lng * 180.0) / (KRASOVSKY_A / sqrt_magic * rad_lat.cos() * PI);

    (d_lat, d_lng)
}

/// Latitude correction polynomial. `x`, `y` are offsets from (105°E, 35°N).
pub(crate) fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret =
        -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Longitude correction polynomial. `x`, `y` are offsets from (105°E, 35°N).
pub(crate) fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}
