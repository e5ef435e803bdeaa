//! Prelude module for common geoframe types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use geoframe::prelude::*;`

pub use crate::core::{
    boundary::{is_in_region, RegionBoundary},
    config::{BoundaryPreset, CameraConfig, FrameConfig, ResolvedFrameConfig},
    geo::{LatLng, LatLngBounds},
    transform::{gcj02_to_wgs84, wgs84_to_gcj02},
};

pub use crate::data::{
    conversion::{CoordinateFrame, Converter},
    region::{
        china_region, city_region, route_markers, route_region, City, MapMarker, MapRegion,
        MarkerKind,
    },
};

pub use crate::provider::{select_provider, MapProvider, ProviderSelector};

pub use crate::rendering::{
    camera::{follow, CameraDirector, CameraMove},
    renderer::{DualMap, MapRenderer},
};

pub use crate::{Error as GeoFrameError, Result};
