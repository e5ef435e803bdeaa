//! Region membership tests.
//!
//! The region is approximated by an axis-aligned box. Points in neighboring
//! countries that fall inside the box (parts of Mongolia, Kazakhstan or
//! Vietnam) are classified as inside. A polygon outline can be configured
//! when a tighter approximation is needed.

use crate::core::constants::{CHINA_BOUNDS, CHINA_BOUNDS_EXTENDED};
use crate::core::geo::{LatLng, LatLngBounds};
use crate::{GeoFrameError, Result};
use geo::{Area, Intersects, LineString, Polygon};

/// Returns true iff the point lies inside the canonical China box.
///
/// Bounds are inclusive. No validation is performed, so out-of-range input
/// simply yields a well-defined boolean and NaN yields `false`.
pub fn is_in_region(lat: f64, lng: f64) -> bool {
    CHINA_BOUNDS.contains(&LatLng::new(lat, lng))
}

/// Area inside which the regional provider and the GCJ-02 frame apply
#[derive(Debug, Clone, PartialEq)]
pub enum RegionBoundary {
    /// Axis-aligned box with inclusive edges
    Box(LatLngBounds),
    /// Closed outline; points on the outline count as inside
    Polygon(Polygon<f64>),
}

impl RegionBoundary {
    /// The canonical box, `[18.0, 53.5] x [73.5, 135.0]`
    pub fn canonical() -> Self {
        Self::Box(CHINA_BOUNDS)
    }

    /// The wider box reaching into the South China Sea
    pub fn extended() -> Self {
        Self::Box(CHINA_BOUNDS_EXTENDED)
    }

    /// Builds a box boundary, rejecting inverted or non-finite bounds
    pub fn from_bounds(bounds: LatLngBounds) -> Result<Self> {
        let finite = [bounds.south_west, bounds.north_east]
            .iter()
            .all(|c| c.lat.is_finite() && c.lng.is_finite());
        if !finite || !bounds.is_valid() {
            return Err(GeoFrameError::InvalidBoundary(format!(
                "bounds {:?} must be finite with south <= north and west <= east",
                bounds
            )));
        }
        Ok(Self::Box(bounds))
    }

    /// Builds a polygon boundary from its outline vertices.
    ///
    /// The ring is closed automatically. At least three distinct finite
    /// vertices are required and they must enclose a non-zero area.
    pub fn from_outline(vertices: &[LatLng]) -> Result<Self> {
        if let Some(bad) = vertices
            .iter()
            .find(|v| !v.lat.is_finite() || !v.lng.is_finite())
        {
            return Err(GeoFrameError::InvalidBoundary(format!(
                "outline vertex {:?} is not finite",
                bad
            )));
        }

        let mut distinct: Vec<LatLng> = Vec::with_capacity(vertices.len());
        for vertex in vertices {
            if !distinct.contains(vertex) {
                distinct.push(*vertex);
            }
        }
        if distinct.len() < 3 {
            return Err(GeoFrameError::InvalidBoundary(format!(
                "outline needs at least 3 distinct vertices, got {}",
                distinct.len()
            )));
        }

        let ring: LineString<f64> = vertices
            .iter()
            .map(|v| geo_types::Coord::<f64>::from(*v))
            .collect::<Vec<_>>()
            .into();
        let polygon = Polygon::new(ring, vec![]);
        if polygon.unsigned_area() == 0.0 {
            return Err(GeoFrameError::InvalidBoundary(
                "outline vertices are collinear and enclose no area".to_string(),
            ));
        }
        Ok(Self::Polygon(polygon))
    }

    /// Checks whether a point is inside the boundary
    pub fn contains(&self, point: &LatLng) -> bool {
        match self {
            Self::Box(bounds) => bounds.contains(point),
            Self::Polygon(polygon) => {
                if !point.lat.is_finite() || !point.lng.is_finite() {
                    return false;
                }
                polygon.intersects(&geo_types::Coord::<f64>::from(*point))
            }
        }
    }
}

impl Default for RegionBoundary {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_cities() {
        assert!(is_in_region(39.9042, 116.4074)); // Beijing
        assert!(is_in_region(31.2304, 121.4737)); // Shanghai
        assert!(!is_in_region(37.7749, -122.4194)); // San Francisco
        assert!(!is_in_region(40.7128, -74.0060)); // New York
    }

    #[test]
    fn test_edges_are_inclusive() {
        assert!(is_in_region(18.0, 100.0));
        assert!(is_in_region(53.5, 100.0));
        assert!(is_in_region(35.0, 73.5));
        assert!(is_in_region(35.0, 135.0));
        assert!(is_in_region(18.0, 73.5));
        assert!(is_in_region(53.5, 135.0));
    }

    #[test]
    fn test_just_outside_edges() {
        assert!(!is_in_region(17.9999, 100.0));
        assert!(!is_in_region(53.5001, 100.0));
        assert!(!is_in_region(35.0, 73.4999));
        assert!(!is_in_region(35.0, 135.0001));
    }

    #[test]
    fn test_box_approximation_overreaches() {
        // Ulaanbaatar sits inside the box
        assert!(is_in_region(47.8864, 106.9057));
    }

    #[test]
    fn test_nan_is_outside() {
        assert!(!is_in_region(f64::NAN, 116.0));
        assert!(!is_in_region(39.0, f64::NAN));
    }

    #[test]
    fn test_extended_box_reaches_further_south() {
        let spratly = LatLng::new(10.0, 112.0);
        assert!(!RegionBoundary::canonical().contains(&spratly));
        assert!(RegionBoundary::extended().contains(&spratly));
    }

    #[test]
    fn test_from_bounds_rejects_inverted() {
        let inverted = LatLngBounds::from_coords(50.0, 100.0, 20.0, 120.0);
        assert!(matches!(
            RegionBoundary::from_bounds(inverted),
            Err(GeoFrameError::InvalidBoundary(_))
        ));
        let nan = LatLngBounds::from_coords(f64::NAN, 100.0, 20.0, 120.0);
        assert!(RegionBoundary::from_bounds(nan).is_err());
    }

    #[test]
    fn test_polygon_includes_outline() {
        let square = [
            LatLng::new(20.0, 100.0),
            LatLng::new(20.0, 110.0),
            LatLng::new(30.0, 110.0),
            LatLng::new(30.0, 100.0),
        ];
        let boundary = RegionBoundary::from_outline(&square).unwrap();

        assert!(boundary.contains(&LatLng::new(25.0, 105.0)));
        assert!(boundary.contains(&LatLng::new(20.0, 105.0)));
        assert!(boundary.contains(&LatLng::new(30.0, 110.0)));
        assert!(!boundary.contains(&LatLng::new(31.0, 105.0)));
        assert!(!boundary.contains(&LatLng::new(f64::NAN, 105.0)));
    }

    #[test]
    fn test_polygon_needs_three_distinct_vertices() {
        let degenerate = [
            LatLng::new(20.0, 100.0),
            LatLng::new(30.0, 110.0),
            LatLng::new(20.0, 100.0),
        ];
        assert!(RegionBoundary::from_outline(&degenerate).is_err());
        assert!(RegionBoundary::from_outline(&[]).is_err());

        let with_infinity = [
            LatLng::new(20.0, 100.0),
            LatLng::new(30.0, f64::INFINITY),
            LatLng::new(30.0, 100.0),
        ];
        assert!(RegionBoundary::from_outline(&with_infinity).is_err());
    }

    #[test]
    fn test_polygon_rejects_collinear_outline() {
        let collinear = [
            LatLng::new(20.0, 100.0),
            LatLng::new(25.0, 105.0),
            LatLng::new(30.0, 110.0),
        ];
        assert!(matches!(
            RegionBoundary::from_outline(&collinear),
            Err(GeoFrameError::InvalidBoundary(_))
        ));

        let thin = [
            LatLng::new(20.0, 100.0),
            LatLng::new(25.0, 105.0),
            LatLng::new(30.0, 110.0),
            LatLng::new(30.0, 110.5),
        ];
        assert!(RegionBoundary::from_outline(&thin).is_ok());
    }
}
