//! Visible map regions and route markers for city-to-city trips.

use crate::core::constants::{
    CHINA_OVERVIEW_CENTER, CHINA_OVERVIEW_DELTA, CITY_REGION_DELTA, ROUTE_REGION_PADDING,
};
use crate::core::geo::{LatLng, LatLngBounds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: u32,
    pub name: String,
    pub name_zh: String,
    pub location: LatLng,
    pub country: String,
}

/// A center plus the visible span in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: LatLng,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn new(center: LatLng, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Visible area of the region
    pub fn bounds(&self) -> LatLngBounds {
        let half_lat = self.latitude_delta / 2.0;
        let half_lng = self.longitude_delta / 2.0;
        LatLngBounds::from_coords(
            self.center.lat - half_lat,
            self.center.lng - half_lng,
            self.center.lat + half_lat,
            self.center.lng + half_lng,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Origin,
    Destination,
    Station,
    Airport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: String,
    pub coordinate: LatLng,
    pub title: String,
    pub description: Option<String>,
    pub kind: MarkerKind,
}

/// Country-wide overview
pub fn china_region() -> MapRegion {
    MapRegion::new(
        CHINA_OVERVIEW_CENTER,
        CHINA_OVERVIEW_DELTA,
        CHINA_OVERVIEW_DELTA,
    )
}

pub fn city_region(city: &City) -> MapRegion {
    MapRegion::new(city.location, CITY_REGION_DELTA, CITY_REGION_DELTA)
}

/// Region framing both cities with padding, never narrower than a city view
pub fn route_region(origin: &City, destination: &City) -> MapRegion {
    let bounds = LatLngBounds::from_points(&origin.location, &destination.location);
    let span = bounds.span();

    MapRegion::new(
        bounds.center(),
        (span.lat * ROUTE_REGION_PADDING).max(CITY_REGION_DELTA),
        (span.lng * ROUTE_REGION_PADDING).max(CITY_REGION_DELTA),
    )
}

pub fn route_markers(origin: &City, destination: &City) -> [MapMarker; 2] {
    [
        MapMarker {
            id: format!("origin_{}", origin.id),
            coordinate: origin.location,
            title: origin.name.clone(),
            description: Some("Starting point".to_string()),
            kind: MarkerKind::Origin,
        },
        MapMarker {
            id: format!("destination_{}", destination.id),
            coordinate: destination.location,
            title: destination.name.clone(),
            description: Some("Destination".to_string()),
            kind: MarkerKind::Destination,
        },
    ]
}
