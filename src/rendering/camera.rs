//! Border-crossing camera policy.
//!
//! The camera follows the user only on the first location fix and when a
//! fix lands on the other side of the region boundary. In between the user
//! is free to pan; fixes produce no camera movement.

use crate::core::boundary::RegionBoundary;
use crate::core::config::{CameraConfig, ResolvedFrameConfig};
use crate::core::geo::LatLng;
use crate::data::conversion::Converter;
use crate::provider::{MapProvider, ProviderSelector};
use futures::{future, Stream, StreamExt};
use serde::{Deserialize, Serialize};

/// A camera instruction for one provider's map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraMove {
    pub provider: MapProvider,
    /// Target in the provider's native frame
    pub target: LatLng,
    pub zoom: f64,
    pub duration_ms: u64,
}

/// Turns a sequence of WGS-84 location fixes into camera moves
#[derive(Debug, Clone)]
pub struct CameraDirector {
    selector: ProviderSelector,
    converter: Converter,
    camera: CameraConfig,
    last_in_region: Option<bool>,
}

impl CameraDirector {
    pub fn new(boundary: RegionBoundary, camera: CameraConfig) -> Self {
        Self {
            selector: ProviderSelector::new(boundary.clone()),
            converter: Converter::new(boundary),
            camera,
            last_in_region: None,
        }
    }

    pub fn from_config(config: &ResolvedFrameConfig) -> Self {
        Self::new(config.boundary.clone(), config.camera.clone())
    }

    /// Provider chosen by the last camera move, `None` before the first fix
    pub fn active_provider(&self) -> Option<MapProvider> {
        self.last_in_region.map(|inside| {
            if inside {
                MapProvider::Regional
            } else {
                MapProvider::Primary
            }
        })
    }

    /// Where to put the camera before any fix has arrived. Not animated.
    pub fn initial_move(&self) -> CameraMove {
        let mut camera = self.move_to(self.camera.initial_target);
        camera.duration_ms = 0;
        camera
    }

    /// Feeds one WGS-84 fix; returns a move on the first fix and on crossings
    pub fn on_fix(&mut self, fix: LatLng) -> Option<CameraMove> {
        let camera = self.pending_move(fix)?;
        self.commit(&camera);
        Some(camera)
    }

    /// The move `fix` would trigger, without recording it.
    ///
    /// Pair with [`commit`](Self::commit) once the move has been applied, so
    /// a move that failed to apply is offered again on the next fix.
    pub fn pending_move(&self, fix: LatLng) -> Option<CameraMove> {
        let inside = self.selector.is_in_region(&fix);
        match self.last_in_region {
            Some(previous) if previous == inside => None,
            _ => Some(self.move_to(fix)),
        }
    }

    /// Records an applied move as the current side of the border
    pub fn commit(&mut self, camera: &CameraMove) {
        let inside = camera.provider == MapProvider::Regional;
        match self.last_in_region {
            Some(previous) if previous == inside => return,
            Some(_) => log::info!(
                "Border crossing: {} region, camera on {} at ({:.6}, {:.6})",
                if inside { "entered" } else { "left" },
                camera.provider,
                camera.target.lat,
                camera.target.lng
            ),
            None => log::debug!(
                "First location fix placed on {} at ({:.6}, {:.6})",
                camera.provider,
                camera.target.lat,
                camera.target.lng
            ),
        }
        self.last_in_region = Some(inside);
    }

    /// Forgets the previous fix so the next one recenters the camera
    pub fn reset(&mut self) {
        self.last_in_region = None;
    }

    fn move_to(&self, wgs84: LatLng) -> CameraMove {
        let provider = self.selector.select(&wgs84);
        let zoom = match provider {
            MapProvider::Regional => self.camera.regional_zoom,
            MapProvider::Primary => self.camera.primary_zoom,
        };
        CameraMove {
            provider,
            target: self.converter.to_provider_frame(wgs84, provider),
            zoom,
            duration_ms: self.camera.animation_ms,
        }
    }
}

impl Default for CameraDirector {
    fn default() -> Self {
        Self::new(RegionBoundary::default(), CameraConfig::default())
    }
}

/// Adapts a stream of WGS-84 fixes into the camera moves they trigger
pub fn follow<S>(director: CameraDirector, fixes: S) -> impl Stream<Item = CameraMove>
where
    S: Stream<Item = LatLng>,
{
    fixes
        .scan(director, |director, fix| {
            future::ready(Some(director.on_fix(fix)))
        })
        .filter_map(future::ready)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::wgs84_to_gcj02;
    use futures::{executor::block_on, stream};

    const BEIJING: LatLng = LatLng::new(39.9042, 116.4074);
    const HONG_KONG_BORDER: LatLng = LatLng::new(22.5, 114.1);
    const TOKYO: LatLng = LatLng::new(35.6762, 139.6503);

    #[test]
    fn test_first_fix_moves_camera() {
        let mut director = CameraDirector::default();
        assert_eq!(director.active_provider(), None);

        let camera = director.on_fix(BEIJING).unwrap();
        assert_eq!(camera.provider, MapProvider::Regional);
        assert_eq!(camera.target, wgs84_to_gcj02(BEIJING.lat, BEIJING.lng));
        assert_eq!(camera.zoom, 17.0);
        assert_eq!(camera.duration_ms, 1000);
        assert_eq!(director.active_provider(), Some(MapProvider::Regional));
    }

    #[test]
    fn test_fixes_on_same_side_do_not_move() {
        let mut director = CameraDirector::default();
        assert!(director.on_fix(BEIJING).is_some());
        assert!(director.on_fix(LatLng::new(39.91, 116.41)).is_none());
        assert!(director.on_fix(HONG_KONG_BORDER).is_none());
    }

    #[test]
    fn test_crossing_out_uses_primary_frame() {
        let mut director = CameraDirector::default();
        director.on_fix(BEIJING);

        let camera = director.on_fix(TOKYO).unwrap();
        assert_eq!(camera.provider, MapProvider::Primary);
        assert_eq!(camera.target, TOKYO);
        assert_eq!(camera.zoom, 15.0);
        assert_eq!(director.active_provider(), Some(MapProvider::Primary));

        let back = director.on_fix(BEIJING).unwrap();
        assert_eq!(back.provider, MapProvider::Regional);
    }

    #[test]
    fn test_pending_move_does_not_record() {
        let mut director = CameraDirector::default();
        let pending = director.pending_move(BEIJING).unwrap();
        assert_eq!(director.active_provider(), None);
        assert_eq!(director.pending_move(BEIJING), Some(pending));

        director.commit(&pending);
        assert_eq!(director.active_provider(), Some(MapProvider::Regional));
        assert!(director.pending_move(BEIJING).is_none());
        assert!(director.pending_move(TOKYO).is_some());
    }

    #[test]
    fn test_reset_recenters_on_next_fix() {
        let mut director = CameraDirector::default();
        director.on_fix(TOKYO);
        assert!(director.on_fix(TOKYO).is_none());

        director.reset();
        assert!(director.on_fix(TOKYO).is_some());
    }

    #[test]
    fn test_initial_move_targets_beijing() {
        let director = CameraDirector::default();
        let camera = director.initial_move();
        assert_eq!(camera.provider, MapProvider::Regional);
        assert_eq!(camera.target, wgs84_to_gcj02(39.9042, 116.4074));
        assert_eq!(camera.zoom, 17.0);
        assert_eq!(camera.duration_ms, 0);
    }

    #[test]
    fn test_custom_camera_config() {
        let camera_config = CameraConfig {
            regional_zoom: 14.0,
            primary_zoom: 11.0,
            animation_ms: 250,
            initial_target: TOKYO,
        };
        let mut director = CameraDirector::new(RegionBoundary::canonical(), camera_config);

        let initial = director.initial_move();
        assert_eq!(initial.provider, MapProvider::Primary);
        assert_eq!(initial.target, TOKYO);

        let camera = director.on_fix(BEIJING).unwrap();
        assert_eq!(camera.zoom, 14.0);
        assert_eq!(camera.duration_ms, 250);
    }

    #[test]
    fn test_follow_emits_only_transitions() {
        let fixes = stream::iter(vec![BEIJING, BEIJING, TOKYO, TOKYO, TOKYO, BEIJING]);
        let moves: Vec<CameraMove> =
            block_on(follow(CameraDirector::default(), fixes).collect());

        let providers: Vec<MapProvider> = moves.iter().map(|m| m.provider).collect();
        assert_eq!(
            providers,
            vec![
                MapProvider::Regional,
                MapProvider::Primary,
                MapProvider::Regional
            ]
        );
    }
}
