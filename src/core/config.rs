//! Configuration for region detection and camera behavior
//!
//! Everything has a working default, so an empty JSON object is a valid
//! configuration. Presets are resolved into runtime values by `resolve`.

use crate::core::boundary::RegionBoundary;
use crate::core::constants::{
    CAMERA_ANIMATION_MS, DEFAULT_CAMERA_TARGET, PRIMARY_CAMERA_ZOOM, REGIONAL_CAMERA_ZOOM,
};
use crate::core::geo::{LatLng, LatLngBounds};
use crate::{GeoFrameError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which area counts as "in region"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BoundaryPreset {
    /// `[18.0, 53.5] x [73.5, 135.0]`
    Canonical,
    /// `[3.86, 53.55] x [73.66, 135.05]`
    Extended,
    Custom {
        bounds: LatLngBounds,
    },
    Outline {
        vertices: Vec<LatLng>,
    },
}

impl BoundaryPreset {
    pub fn resolve(&self) -> Result<RegionBoundary> {
        match self {
            Self::Canonical => Ok(RegionBoundary::canonical()),
            Self::Extended => Ok(RegionBoundary::extended()),
            Self::Custom { bounds } => RegionBoundary::from_bounds(*bounds),
            Self::Outline { vertices } => RegionBoundary::from_outline(vertices),
        }
    }
}

impl Default for BoundaryPreset {
    fn default() -> Self {
        Self::Canonical
    }
}

/// Camera targets and timings used on first fix and border crossings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub regional_zoom: f64,
    pub primary_zoom: f64,
    pub animation_ms: u64,
    /// WGS-84 target shown before any location fix arrives
    pub initial_target: LatLng,
}

impl CameraConfig {
    fn validate(&self) -> Result<()> {
        for (name, zoom) in [
            ("regional_zoom", self.regional_zoom),
            ("primary_zoom", self.primary_zoom),
        ] {
            if !(0.0..=22.0).contains(&zoom) {
                return Err(GeoFrameError::InvalidConfig(format!(
                    "{} must be within [0, 22], got {}",
                    name, zoom
                )));
            }
        }
        if !self.initial_target.is_valid() {
            return Err(GeoFrameError::InvalidConfig(format!(
                "initial_target {:?} is not a valid coordinate",
                self.initial_target
            )));
        }
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            regional_zoom: REGIONAL_CAMERA_ZOOM,
            primary_zoom: PRIMARY_CAMERA_ZOOM,
            animation_ms: CAMERA_ANIMATION_MS,
            initial_target: DEFAULT_CAMERA_TARGET,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub boundary: BoundaryPreset,
    pub camera: CameraConfig,
}

/// Validated runtime form of a `FrameConfig`
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFrameConfig {
    pub boundary: RegionBoundary,
    pub camera: CameraConfig,
}

impl FrameConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn resolve(&self) -> Result<ResolvedFrameConfig> {
        self.camera.validate()?;
        Ok(ResolvedFrameConfig {
            boundary: self.boundary.resolve()?,
            camera: self.camera.clone(),
        })
    }
}

impl Default for ResolvedFrameConfig {
    fn default() -> Self {
        Self {
            boundary: RegionBoundary::default(),
            camera: CameraConfig::default(),
        }
    }
}
