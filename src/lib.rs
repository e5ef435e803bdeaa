//! # geoframe
//!
//! Region detection, map provider routing and WGS-84 / GCJ-02 coordinate
//! conversion for map clients that switch between an international and a
//! mainland-China map provider.
//!
//! The core is four pure functions: [`is_in_region`], [`select_provider`],
//! [`wgs84_to_gcj02`] and [`gcj02_to_wgs84`]. Everything else layers
//! configuration and camera policy on top of them.

pub mod core;
pub mod data;
pub mod prelude;
pub mod provider;
pub mod rendering;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    boundary::{is_in_region, RegionBoundary},
    config::{BoundaryPreset, CameraConfig, FrameConfig, ResolvedFrameConfig},
    geo::{LatLng, LatLngBounds},
    transform::{gcj02_to_wgs84, wgs84_to_gcj02},
};

pub use crate::data::{
    conversion::{CoordinateFrame, Converter},
    region::{City, MapMarker, MapRegion, MarkerKind},
};

pub use crate::provider::{select_provider, MapProvider, ProviderSelector};

pub use crate::rendering::{
    camera::{follow, CameraDirector, CameraMove},
    renderer::{DualMap, MapRenderer},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, GeoFrameError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum GeoFrameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Renderer error: {0}")]
    Renderer(String),
}

/// Error type alias for convenience
pub type Error = GeoFrameError;
