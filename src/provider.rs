//! Map provider routing.
//!
//! Callers never test the boundary themselves; they ask for a provider so
//! that changing the boundary changes provider selection everywhere.

use crate::core::boundary::{is_in_region, RegionBoundary};
use crate::core::config::ResolvedFrameConfig;
use crate::core::geo::LatLng;
use crate::data::conversion::CoordinateFrame;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two mapping backends a client can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapProvider {
    /// International provider (Mapbox-style), WGS-84 native
    Primary,
    /// Mainland provider (Amap-style), GCJ-02 native
    Regional,
}

impl MapProvider {
    pub fn native_frame(&self) -> CoordinateFrame {
        match self {
            Self::Primary => CoordinateFrame::Wgs84,
            Self::Regional => CoordinateFrame::Gcj02,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Regional => "regional",
        }
    }
}

impl fmt::Display for MapProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Regional` inside the canonical region, `Primary` everywhere else
pub fn select_provider(lat: f64, lng: f64) -> MapProvider {
    if is_in_region(lat, lng) {
        MapProvider::Regional
    } else {
        MapProvider::Primary
    }
}

/// Provider selection against a configured boundary
#[derive(Debug, Clone, Default)]
pub struct ProviderSelector {
    boundary: RegionBoundary,
}

impl ProviderSelector {
    pub fn new(boundary: RegionBoundary) -> Self {
        Self { boundary }
    }

    pub fn from_config(config: &ResolvedFrameConfig) -> Self {
        Self::new(config.boundary.clone())
    }

    pub fn is_in_region(&self, point: &LatLng) -> bool {
        self.boundary.contains(point)
    }

    pub fn select(&self, point: &LatLng) -> MapProvider {
        if self.is_in_region(point) {
            MapProvider::Regional
        } else {
            MapProvider::Primary
        }
    }
}
