//! Sinusoidal projection on a sphere.
//!
//! Slot 0 carries the sphere radius; when it is zero the semimajor axis of
//! the spheroid is used. Slot 4 is the central meridian in packed DMS and
//! slots 6 and 7 are the false easting and northing.

use crate::dms::packed_dms_to_radians;
use crate::error::{ProjectionError, Result};
use crate::math::{adjust_lon, EPSLN, HALF_PI};
use crate::provider::ProjectionRequest;
use crate::spheroid::Ellipsoid;

#[derive(Debug, Clone)]
pub struct Sinusoidal {
    pub radius: f64,
    pub lon_center: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

impl Sinusoidal {
    pub fn from_request(request: &ProjectionRequest) -> Result<Self> {
        let p = &request.params;
        let radius = if p[0] > 0.0 {
            p[0]
        } else {
            Ellipsoid::from_code(request.spheroid, p)?.semi_major
        };
        Ok(Self {
            radius,
            lon_center: packed_dms_to_radians(p[4])?,
            false_easting: p[6],
            false_northing: p[7],
        })
    }

    pub fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        let delta_lon = adjust_lon(lon - self.lon_center);
        let x = self.radius * delta_lon * lat.cos() + self.false_easting;
        let y = self.radius * lat + self.false_northing;
        Ok((x, y))
    }

    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let x = x - self.false_easting;
        let y = y - self.false_northing;

        let lat = y / self.radius;
        if lat.abs() > HALF_PI {
            return Err(ProjectionError::out_of_domain(format!(
                "northing {} is beyond the pole",
                y
            )));
        }

        let lon = if (lat.abs() - HALF_PI).abs() > EPSLN {
            adjust_lon(self.lon_center + x / (self.radius * lat.cos()))
        } else {
            self.lon_center
        };
        Ok((lon, lat))
    }
}
