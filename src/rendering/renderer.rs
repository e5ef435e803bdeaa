use crate::core::geo::LatLng;
use crate::provider::MapProvider;
use crate::rendering::camera::{CameraDirector, CameraMove};
use crate::{GeoFrameError, Result};

/// A provider-specific map view (an SDK wrapper owned by the client).
///
/// Implementations receive targets already expressed in their native frame.
pub trait MapRenderer: Send {
    /// Which provider this renderer draws
    fn provider(&self) -> MapProvider;

    /// Animate or jump the camera
    fn move_camera(&mut self, camera: &CameraMove) -> Result<()>;

    /// Show or hide the view. Hidden views must not take input.
    fn set_visible(&mut self, _visible: bool) -> Result<()> {
        Ok(())
    }
}

/// Two stacked map views of which exactly one is shown at a time
pub struct DualMap<P, R> {
    primary: P,
    regional: R,
    director: CameraDirector,
    active: Option<MapProvider>,
}

impl<P: MapRenderer, R: MapRenderer> DualMap<P, R> {
    pub fn new(primary: P, regional: R, director: CameraDirector) -> Result<Self> {
        for (expected, actual) in [
            (MapProvider::Primary, primary.provider()),
            (MapProvider::Regional, regional.provider()),
        ] {
            if expected != actual {
                return Err(GeoFrameError::Renderer(format!(
                    "expected a {} renderer, got {}",
                    expected, actual
                )));
            }
        }

        Ok(Self {
            primary,
            regional,
            director,
            active: None,
        })
    }

    pub fn active(&self) -> Option<MapProvider> {
        self.active
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn regional(&self) -> &R {
        &self.regional
    }

    /// Places the camera before the first fix
    pub fn show_initial(&mut self) -> Result<CameraMove> {
        let camera = self.director.initial_move();
        self.apply(&camera)?;
        Ok(camera)
    }

    /// Feeds a WGS-84 fix; switches views and moves the camera when needed.
    ///
    /// The director only records the move once the renderer accepted it, so
    /// after an error the next fix retries the same transition.
    pub fn on_fix(&mut self, fix: LatLng) -> Result<Option<CameraMove>> {
        match self.director.pending_move(fix) {
            Some(camera) => {
                self.apply(&camera)?;
                self.director.commit(&camera);
                Ok(Some(camera))
            }
            None => Ok(None),
        }
    }

    fn apply(&mut self, camera: &CameraMove) -> Result<()> {
        if self.active != Some(camera.provider) {
            let regional = camera.provider == MapProvider::Regional;
            self.regional.set_visible(regional)?;
            self.primary.set_visible(!regional)?;
            self.active = Some(camera.provider);
        }

        match camera.provider {
            MapProvider::Primary => self.primary.move_camera(camera),
            MapProvider::Regional => self.regional.move_camera(camera),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transform::wgs84_to_gcj02;

    struct RecordingRenderer {
        provider: MapProvider,
        visible: bool,
        moves: Vec<CameraMove>,
        failures_left: usize,
    }

    impl RecordingRenderer {
        fn new(provider: MapProvider) -> Self {
            Self {
                provider,
                visible: false,
                moves: Vec::new(),
                failures_left: 0,
            }
        }
    }

    impl MapRenderer for RecordingRenderer {
        fn provider(&self) -> MapProvider {
            self.provider
        }

        fn move_camera(&mut self, camera: &CameraMove) -> Result<()> {
            if self.failures_left > 0 {
                self.failures_left -= 1;
                return Err(GeoFrameError::Renderer("camera unavailable".into()));
            }
            self.moves.push(*camera);
            Ok(())
        }

        fn set_visible(&mut self, visible: bool) -> Result<()> {
            self.visible = visible;
            Ok(())
        }
    }

    fn dual_map() -> DualMap<RecordingRenderer, RecordingRenderer> {
        DualMap::new(
            RecordingRenderer::new(MapProvider::Primary),
            RecordingRenderer::new(MapProvider::Regional),
            CameraDirector::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_swapped_renderers() {
        let result = DualMap::new(
            RecordingRenderer::new(MapProvider::Regional),
            RecordingRenderer::new(MapProvider::Primary),
            CameraDirector::default(),
        );
        assert!(matches!(result, Err(GeoFrameError::Renderer(_))));
    }

    #[test]
    fn test_routes_fixes_to_active_view() {
        let mut map = dual_map();
        assert_eq!(map.active(), None);

        let shanghai = LatLng::new(31.2304, 121.4737);
        map.on_fix(shanghai).unwrap();
        assert_eq!(map.active(), Some(MapProvider::Regional));
        assert!(map.regional().visible);
        assert!(!map.primary().visible);
        assert_eq!(
            map.regional().moves[0].target,
            wgs84_to_gcj02(31.2304, 121.4737)
        );

        // Same side of the border, no movement
        assert!(map.on_fix(LatLng::new(31.24, 121.48)).unwrap().is_none());

        // Seoul falls inside the box, so the regional view stays
        let seoul = LatLng::new(37.5665, 126.9780);
        assert!(map.on_fix(seoul).unwrap().is_none());
        assert_eq!(map.active(), Some(MapProvider::Regional));

        let tokyo = LatLng::new(35.6762, 139.6503);
        assert!(map.on_fix(tokyo).unwrap().is_some());
        assert_eq!(map.active(), Some(MapProvider::Primary));
        assert!(map.primary().visible);
        assert!(!map.regional().visible);
        assert_eq!(
            map.primary().moves,
            vec![CameraMove {
                provider: MapProvider::Primary,
                target: tokyo,
                zoom: 15.0,
                duration_ms: 1000,
            }]
        );
        assert_eq!(map.regional().moves.len(), 1);
    }

    #[test]
    fn test_show_initial_uses_regional_view() {
        let mut map = dual_map();
        let camera = map.show_initial().unwrap();
        assert_eq!(camera.provider, MapProvider::Regional);
        assert_eq!(map.active(), Some(MapProvider::Regional));
        assert_eq!(map.regional().moves.len(), 1);
    }

    #[test]
    fn test_renderer_errors_propagate() {
        let mut regional = RecordingRenderer::new(MapProvider::Regional);
        regional.failures_left = usize::MAX;
        let mut map = DualMap::new(
            RecordingRenderer::new(MapProvider::Primary),
            regional,
            CameraDirector::default(),
        )
        .unwrap();

        assert!(matches!(
            map.on_fix(LatLng::new(39.9042, 116.4074)),
            Err(GeoFrameError::Renderer(_))
        ));
        assert!(map.regional().moves.is_empty());
    }

    #[test]
    fn test_failed_move_is_retried_on_next_fix() {
        let mut regional = RecordingRenderer::new(MapProvider::Regional);
        regional.failures_left = 1;
        let mut map = DualMap::new(
            RecordingRenderer::new(MapProvider::Primary),
            regional,
            CameraDirector::default(),
        )
        .unwrap();

        assert!(map.on_fix(LatLng::new(39.9042, 116.4074)).is_err());

        let next = LatLng::new(39.9043, 116.4075);
        let camera = map.on_fix(next).unwrap().unwrap();
        assert_eq!(camera.provider, MapProvider::Regional);
        assert_eq!(camera.target, wgs84_to_gcj02(next.lat, next.lng));
        assert_eq!(map.active(), Some(MapProvider::Regional));
        assert!(map.regional().visible);
        assert_eq!(map.regional().moves, vec![camera]);

        // Recorded now, so the same side no longer moves the camera
        assert!(map.on_fix(next).unwrap().is_none());
    }
}
