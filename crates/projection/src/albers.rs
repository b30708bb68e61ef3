//! Albers conical equal-area projection.
//!
//! Parameters (packed DMS): slot 2 first standard parallel, slot 3 second
//! standard parallel, slot 4 central meridian, slot 5 latitude of origin.
//! Slots 6 and 7 are the false easting and northing.

use crate::dms::packed_dms_to_radians;
use crate::error::{ProjectionError, Result};
use crate::math::{adjust_lon, msfnz, phi1z, qsfnz, EPSLN, HALF_PI};
use crate::provider::ProjectionRequest;
use crate::spheroid::Ellipsoid;

#[derive(Debug, Clone)]
pub struct AlbersEqualArea {
    pub r_major: f64,
    pub lon_center: f64,
    pub false_easting: f64,
    pub false_northing: f64,
    es: f64,
    e: f64,
    ns0: f64,
    c: f64,
    rh: f64,
}

impl AlbersEqualArea {
    pub fn from_request(request: &ProjectionRequest) -> Result<Self> {
        let ellipsoid = Ellipsoid::from_code(request.spheroid, &request.params)?;
        let p = &request.params;
        Self::new(
            ellipsoid,
            packed_dms_to_radians(p[2])?,
            packed_dms_to_radians(p[3])?,
            packed_dms_to_radians(p[4])?,
            packed_dms_to_radians(p[5])?,
            p[6],
            p[7],
        )
    }

    /// Angles in radians.
    pub fn new(
        ellipsoid: Ellipsoid,
        lat1: f64,
        lat2: f64,
        lon_center: f64,
        lat_origin: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Result<Self> {
        if (lat1 + lat2).abs() < EPSLN {
            return Err(ProjectionError::invalid_parameter(
                "standard parallels are equal and on opposite sides of the equator",
            ));
        }

        let es = ellipsoid.eccentricity_squared();
        let e = es.sqrt();

        let (sin1, cos1) = lat1.sin_cos();
        let ms1 = msfnz(e, sin1, cos1);
        let qs1 = qsfnz(e, sin1);

        let (sin2, cos2) = lat2.sin_cos();
        let ms2 = msfnz(e, sin2, cos2);
        let qs2 = qsfnz(e, sin2);

        let qs0 = qsfnz(e, lat_origin.sin());

        let ns0 = if (lat1 - lat2).abs() > EPSLN {
            (ms1 * ms1 - ms2 * ms2) / (qs2 - qs1)
        } else {
            sin1
        };
        let c = ms1 * ms1 + ns0 * qs1;
        let rh = ellipsoid.semi_major * (c - ns0 * qs0).sqrt() / ns0;

        Ok(Self {
            r_major: ellipsoid.semi_major,
            lon_center,
            false_easting,
            false_northing,
            es,
            e,
            ns0,
            c,
            rh,
        })
    }

    pub fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        let qs = qsfnz(self.e, lat.sin());
        let radicand = self.c - self.ns0 * qs;
        if radicand < 0.0 {
            return Err(ProjectionError::out_of_domain(format!(
                "latitude {} has no Albers radius",
                lat.to_degrees()
            )));
        }
        let rh1 = self.r_major * radicand.sqrt() / self.ns0;
        let theta = self.ns0 * adjust_lon(lon - self.lon_center);

        let x = rh1 * theta.sin() + self.false_easting;
        let y = self.rh - rh1 * theta.cos() + self.false_northing;
        Ok((x, y))
    }

    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let x = x - self.false_easting;
        let y = self.rh - y + self.false_northing;

        let (rh1, sign) = if self.ns0 >= 0.0 {
            (x.hypot(y), 1.0)
        } else {
            (-x.hypot(y), -1.0)
        };
        let theta = if rh1 != 0.0 {
            (sign * x).atan2(sign * y)
        } else {
            0.0
        };

        let con = rh1 * self.ns0 / self.r_major;
        let qs = (self.c - con * con) / self.ns0;

        let lat = if self.e >= 1e-10 {
            let pole_q =
                1.0 - 0.5 * (1.0 - self.es) * ((1.0 - self.e) / (1.0 + self.e)).ln() / self.e;
            if (pole_q.abs() - qs.abs()).abs() > 1e-10 {
                phi1z(self.e, qs)?
            } else if qs >= 0.0 {
                HALF_PI
            } else {
                -HALF_PI
            }
        } else {
            phi1z(self.e, qs)?
        };

        let lon = adjust_lon(theta / self.ns0 + self.lon_center);
        Ok((lon, lat))
    }
}
