use crate::core::boundary::RegionBoundary;
use crate::core::config::ResolvedFrameConfig;
use crate::core::geo::LatLng;
use crate::core::transform::gcj02_offset;
use crate::provider::MapProvider;
use serde::{Deserialize, Serialize};

/// Geodetic reference frames handled by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateFrame {
    /// World Geodetic System 1984, as reported by GPS
    Wgs84,
    /// Chinese national "Mars" frame used by mainland map providers
    Gcj02,
}

/// Converts coordinates between frames, guarded by a region boundary.
///
/// With the default boundary this behaves exactly like
/// [`wgs84_to_gcj02`](crate::core::transform::wgs84_to_gcj02) and
/// [`gcj02_to_wgs84`](crate::core::transform::gcj02_to_wgs84).
#[derive(Debug, Clone, Default)]
pub struct Converter {
    boundary: RegionBoundary,
}

impl Converter {
    pub fn new(boundary: RegionBoundary) -> Self {
        Self { boundary }
    }

    pub fn from_config(config: &ResolvedFrameConfig) -> Self {
        Self::new(config.boundary.clone())
    }

    pub fn boundary(&self) -> &RegionBoundary {
        &self.boundary
    }

    /// Converts a point between frames. Identity when the frames match or
    /// the point lies outside the boundary.
    pub fn convert(&self, point: LatLng, from: CoordinateFrame, to: CoordinateFrame) -> LatLng {
        if from == to || !self.boundary.contains(&point) {
            return point;
        }

        let (d_lat, d_lng) = gcj02_offset(point.lat, point.lng);
        match (from, to) {
            (CoordinateFrame::Wgs84, CoordinateFrame::Gcj02) => {
                LatLng::new(point.lat + d_lat, point.lng + d_lng)
            }
            (CoordinateFrame::Gcj02, CoordinateFrame::Wgs84) => {
                LatLng::new(point.lat - d_lat, point.lng - d_lng)
            }
            _ => point,
        }
    }

    /// Converts a batch of coordinates
    pub fn convert_batch(
        &self,
        points: &[LatLng],
        from: CoordinateFrame,
        to: CoordinateFrame,
    ) -> Vec<LatLng> {
        points.iter().map(|p| self.convert(*p, from, to)).collect()
    }

    /// Expresses a WGS-84 fix in the native frame of `provider`
    pub fn to_provider_frame(&self, wgs84: LatLng, provider: MapProvider) -> LatLng {
        self.convert(wgs84, CoordinateFrame::Wgs84, provider.native_frame())
    }

    /// Brings a point reported by `provider` (e.g. a tapped location) back to WGS-84
    pub fn from_provider_frame(&self, native: LatLng, provider: MapProvider) -> LatLng {
        self.convert(native, provider.native_frame(), CoordinateFrame::Wgs84)
    }
}
