//! Geographic (lat/lon) projection.
//!
//! Geographic products express map coordinates in decimal degrees, so the
//! "projection" is just a unit change between radians and degrees.

use crate::error::{ProjectionError, Result};
use crate::math::HALF_PI;

#[derive(Debug, Clone, Copy, Default)]
pub struct Geographic;

impl Geographic {
    /// (lon, lat) radians to (x, y) decimal degrees.
    pub fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        Ok((lon.to_degrees(), lat.to_degrees()))
    }

    /// (x, y) decimal degrees to (lon, lat) radians.
    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let lat = y.to_radians();
        if lat.abs() > HALF_PI + 1e-12 {
            return Err(ProjectionError::out_of_domain(format!(
                "latitude {} degrees",
                y
            )));
        }
        Ok((x.to_radians(), lat))
    }
}
