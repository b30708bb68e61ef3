//! Geographic bounding box of a scene.

use espa_common::{GeoBounds, GeolocError, GeolocResult, ImgCoord};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::context::Geoloc;

/// Outer scene corners in decimal degrees, (lon, lat).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneCorners {
    pub ul: (f64, f64),
    pub ur: (f64, f64),
    pub ll: (f64, f64),
    pub lr: (f64, f64),
}

impl SceneCorners {
    /// True when the first line of the raster is the southern edge, as in
    /// ascending or some polar scenes.
    pub fn is_flipped(&self) -> bool {
        self.ul.1 < self.lr.1
    }
}

impl Geoloc {
    /// Min/max envelope of a `nlines` x `nsamps` raster, in degrees.
    ///
    /// The four edges are walked at the outer pixel extent, lines
    /// `0..=nlines` and samples `0..=nsamps`, so the envelope covers the
    /// far side of the last pixel. Any failed mapping aborts the walk.
    pub fn compute_bounds(&self, nlines: usize, nsamps: usize) -> GeolocResult<GeoBounds> {
        check_extent(nlines, nsamps)?;

        let (lines, samps) = (nlines as f64, nsamps as f64);
        let top = (0..=nsamps).map(|s| ImgCoord::new(0.0, s as f64));
        let bottom = (0..=nsamps).map(|s| ImgCoord::new(lines, s as f64));
        let left = (0..=nlines).map(|l| ImgCoord::new(l as f64, 0.0));
        let right = (0..=nlines).map(|l| ImgCoord::new(l as f64, samps));

        let mut bounds: Option<GeoBounds> = None;
        for img in top.chain(bottom).chain(left).chain(right) {
            let geo = self.from_space(&img).map_err(|e| {
                warn!(line = img.line, sample = img.sample, error = %e, "bounds walk aborted");
                e
            })?;
            let (lon, lat) = geo.to_degrees();
            bounds = Some(match bounds {
                Some(mut b) => {
                    b.extend(lon, lat);
                    b
                }
                None => GeoBounds::from_point(lon, lat),
            });
        }

        // The walk always visits at least the four corners
        bounds.ok_or_else(|| GeolocError::validation("empty bounds walk"))
    }

    /// The four outer corners of a `nlines` x `nsamps` raster.
    pub fn corners(&self, nlines: usize, nsamps: usize) -> GeolocResult<SceneCorners> {
        check_extent(nlines, nsamps)?;

        let (lines, samps) = (nlines as f64, nsamps as f64);
        let corner = |line: f64, sample: f64| -> GeolocResult<(f64, f64)> {
            Ok(self.from_space(&ImgCoord::new(line, sample))?.to_degrees())
        };

        Ok(SceneCorners {
            ul: corner(0.0, 0.0)?,
            ur: corner(0.0, samps)?,
            ll: corner(lines, 0.0)?,
            lr: corner(lines, samps)?,
        })
    }
}

fn check_extent(nlines: usize, nsamps: usize) -> GeolocResult<()> {
    if nlines == 0 || nsamps == 0 {
        return Err(GeolocError::validation(format!(
            "outer extent requested for a {} x {} raster",
            nlines, nsamps
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use espa_common::{ProjectionCode, SpaceDef};

    use super::*;

    #[test]
    fn test_geographic_grid_bounds() {
        let def = SpaceDef::new(ProjectionCode::Geographic, (-100.0, 40.0), (0.5, 0.5), 4, 6);
        let geoloc = Geoloc::setup(&def).unwrap();
        let bounds = geoloc.compute_bounds(4, 6).unwrap();
        assert!((bounds.min_lon + 100.0).abs() < 1e-9);
        assert!((bounds.max_lon + 97.0).abs() < 1e-9);
        assert!((bounds.min_lat - 38.0).abs() < 1e-9);
        assert!((bounds.max_lat - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_extent_rejected() {
        let def = SpaceDef::new(ProjectionCode::Geographic, (0.0, 0.0), (1.0, 1.0), 1, 1);
        let geoloc = Geoloc::setup(&def).unwrap();
        assert!(matches!(
            geoloc.compute_bounds(0, 5),
            Err(GeolocError::Validation(_))
        ));
    }

    #[test]
    fn test_corners_reject_zero_extent() {
        let def = SpaceDef::new(ProjectionCode::Geographic, (0.0, 0.0), (1.0, 1.0), 1, 1);
        let geoloc = Geoloc::setup(&def).unwrap();
        for (nlines, nsamps) in [(0, 3), (3, 0), (0, 0)] {
            assert!(matches!(
                geoloc.corners(nlines, nsamps),
                Err(GeolocError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_north_up_is_not_flipped() {
        let def = SpaceDef::new(ProjectionCode::Geographic, (10.0, 5.0), (1.0, 1.0), 3, 3);
        let corners = Geoloc::setup(&def).unwrap().corners(3, 3).unwrap();
        assert!(!corners.is_flipped());
        assert!((corners.lr.0 - 13.0).abs() < 1e-9);
        assert!((corners.lr.1 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_half_turn_is_flipped() {
        let def = SpaceDef::new(ProjectionCode::Geographic, (10.0, 5.0), (1.0, 1.0), 3, 3)
            .with_orientation(std::f64::consts::PI);
        let corners = Geoloc::setup(&def).unwrap().corners(3, 3).unwrap();
        assert!(corners.is_flipped());
    }
}
