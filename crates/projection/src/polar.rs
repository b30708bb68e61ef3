//! Polar stereographic projection.
//!
//! Parameters: slot 4 holds the longitude straight down from the pole and
//! slot 5 the latitude of true scale, both packed DMS. Slots 6 and 7 are
//! the false easting and northing. The hemisphere follows the sign of the
//! true-scale latitude.

use crate::dms::packed_dms_to_radians;
use crate::error::Result;
use crate::math::{adjust_lon, e4fn, msfnz, phi2z, tsfnz, EPSLN, HALF_PI};
use crate::provider::ProjectionRequest;
use crate::spheroid::Ellipsoid;

#[derive(Debug, Clone)]
pub struct PolarStereographic {
    pub r_major: f64,
    /// Longitude down from the pole (radians)
    pub lon_center: f64,
    /// Latitude of true scale (radians)
    pub lat_ts: f64,
    pub false_easting: f64,
    pub false_northing: f64,
    e: f64,
    e4: f64,
    /// +1 for the north polar aspect, -1 for the south
    fac: f64,
    /// Scale is true on a parallel other than the pole
    true_scale_off_pole: bool,
    mcs: f64,
    tcs: f64,
}

impl PolarStereographic {
    pub fn from_request(request: &ProjectionRequest) -> Result<Self> {
        let ellipsoid = Ellipsoid::from_code(request.spheroid, &request.params)?;
        let lon_center = packed_dms_to_radians(request.params[4])?;
        let lat_ts = packed_dms_to_radians(request.params[5])?;
        Ok(Self::new(
            ellipsoid,
            lon_center,
            lat_ts,
            request.params[6],
            request.params[7],
        ))
    }

    pub fn new(
        ellipsoid: Ellipsoid,
        lon_center: f64,
        lat_ts: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        let e = ellipsoid.eccentricity();
        let fac = if lat_ts < 0.0 { -1.0 } else { 1.0 };

        let true_scale_off_pole = (lat_ts.abs() - HALF_PI).abs() > EPSLN;
        let (mcs, tcs) = if true_scale_off_pole {
            let con = fac * lat_ts;
            let (sinphi, cosphi) = con.sin_cos();
            (msfnz(e, sinphi, cosphi), tsfnz(e, con, sinphi))
        } else {
            (0.0, 0.0)
        };

        Self {
            r_major: ellipsoid.semi_major,
            lon_center,
            lat_ts,
            false_easting,
            false_northing,
            e,
            e4: e4fn(e),
            fac,
            true_scale_off_pole,
            mcs,
            tcs,
        }
    }

    pub fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        let con1 = self.fac * adjust_lon(lon - self.lon_center);
        let con2 = self.fac * lat;
        let ts = tsfnz(self.e, con2, con2.sin());

        let rh = if self.true_scale_off_pole {
            self.r_major * self.mcs * ts / self.tcs
        } else {
            2.0 * self.r_major * ts / self.e4
        };

        let x = self.fac * rh * con1.sin() + self.false_easting;
        let y = -self.fac * rh * con1.cos() + self.false_northing;
        Ok((x, y))
    }

    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let x = (x - self.false_easting) * self.fac;
        let y = (y - self.false_northing) * self.fac;
        let rh = x.hypot(y);

        let ts = if self.true_scale_off_pole {
            rh * self.tcs / (self.r_major * self.mcs)
        } else {
            rh * self.e4 / (self.r_major * 2.0)
        };
        let lat = self.fac * phi2z(self.e, ts)?;

        let lon = if rh == 0.0 {
            self.fac * self.lon_center
        } else {
            adjust_lon(self.fac * x.atan2(-y) + self.lon_center)
        };
        Ok((lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use espa_common::NPROJ_PARAM;

    fn antarctic() -> PolarStereographic {
        let wgs84 = Ellipsoid::from_code(12, &[0.0; NPROJ_PARAM]).unwrap();
        PolarStereographic::new(wgs84, 0.0, (-71.0f64).to_radians(), 0.0, 0.0)
    }

    #[test]
    fn test_pole_maps_to_origin() {
        let proj = antarctic();
        let (x, y) = proj.forward(0.3, -HALF_PI).unwrap();
        assert!(x.abs() < 1e-6 && y.abs() < 1e-6, "({}, {})", x, y);
    }

    #[test]
    fn test_south_roundtrip() {
        let proj = antarctic();
        let lon = 45.0f64.to_radians();
        let lat = (-75.0f64).to_radians();
        let (x, y) = proj.forward(lon, lat).unwrap();
        let (lon2, lat2) = proj.inverse(x, y).unwrap();
        assert!((lon2 - lon).abs() < 1e-9);
        assert!((lat2 - lat).abs() < 1e-9);
    }

    #[test]
    fn test_north_pole_true_scale_roundtrip() {
        let wgs84 = Ellipsoid::from_code(12, &[0.0; NPROJ_PARAM]).unwrap();
        let proj = PolarStereographic::new(wgs84, (-45.0f64).to_radians(), HALF_PI, 2000.0, -500.0);
        let lon = (-100.0f64).to_radians();
        let lat = 65.0f64.to_radians();
        let (x, y) = proj.forward(lon, lat).unwrap();
        let (lon2, lat2) = proj.inverse(x, y).unwrap();
        assert!((lon2 - lon).abs() < 1e-9);
        assert!((lat2 - lat).abs() < 1e-9);
    }

    #[test]
    fn test_from_request_reads_packed_slots() {
        let mut params = [0.0; NPROJ_PARAM];
        params[4] = -45_000_000.0;
        params[5] = 70_000_000.0;
        params[6] = 100.0;
        let request = ProjectionRequest::new(espa_common::ProjectionCode::PolarStereographic, 0, params, 12);

        let proj = PolarStereographic::from_request(&request).unwrap();
        assert!((proj.lon_center - (-45.0f64).to_radians()).abs() < 1e-12);
        assert!((proj.lat_ts - 70.0f64.to_radians()).abs() < 1e-12);
        assert_eq!(proj.false_easting, 100.0);
    }
}
