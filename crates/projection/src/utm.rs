//! Universal Transverse Mercator projection.
//!
//! UTM is a transverse Mercator with a fixed scale factor of 0.9996, a
//! central meridian chosen by zone, and false easting/northing offsets.
//! Negative zone numbers denote the southern hemisphere.

use crate::error::{ProjectionError, Result};
use crate::math::{adjust_lon, asinz, e0fn, e1fn, e2fn, e3fn, mlfn, EPSLN, HALF_PI};
use crate::provider::ProjectionRequest;
use crate::spheroid::Ellipsoid;

const UTM_SCALE_FACTOR: f64 = 0.9996;
const UTM_FALSE_EASTING: f64 = 500_000.0;
const UTM_SOUTH_FALSE_NORTHING: f64 = 10_000_000.0;
const MAX_INVERSE_ITERATIONS: usize = 6;

/// Transverse Mercator parameters prepared for a UTM zone.
#[derive(Debug, Clone)]
pub struct TransverseMercator {
    /// UTM zone, negative in the southern hemisphere
    pub zone: i32,
    /// Semimajor axis (meters)
    pub r_major: f64,
    /// Scale factor at the central meridian
    pub scale_factor: f64,
    /// Central meridian (radians)
    pub lon_center: f64,
    /// Latitude of origin (radians)
    pub lat_origin: f64,
    pub false_easting: f64,
    pub false_northing: f64,
    es: f64,
    esp: f64,
    e0: f64,
    e1: f64,
    e2: f64,
    e3: f64,
    ml0: f64,
    is_sphere: bool,
}

impl TransverseMercator {
    pub fn from_request(request: &ProjectionRequest) -> Result<Self> {
        let ellipsoid = Ellipsoid::from_code(request.spheroid, &request.params)?;
        Self::utm(request.zone, ellipsoid)
    }

    /// Build the projection for a UTM zone on the given ellipsoid.
    pub fn utm(zone: i32, ellipsoid: Ellipsoid) -> Result<Self> {
        if !(1..=60).contains(&zone.abs()) {
            return Err(ProjectionError::IllegalZone(zone));
        }

        let lon_center = ((6 * zone.abs()) - 183) as f64;
        let false_northing = if zone < 0 {
            UTM_SOUTH_FALSE_NORTHING
        } else {
            0.0
        };

        let es = ellipsoid.eccentricity_squared();
        let (e0, e1, e2, e3) = (e0fn(es), e1fn(es), e2fn(es), e3fn(es));
        let lat_origin = 0.0;

        Ok(Self {
            zone,
            r_major: ellipsoid.semi_major,
            scale_factor: UTM_SCALE_FACTOR,
            lon_center: lon_center.to_radians(),
            lat_origin,
            false_easting: UTM_FALSE_EASTING,
            false_northing,
            es,
            esp: es / (1.0 - es),
            e0,
            e1,
            e2,
            e3,
            ml0: ellipsoid.semi_major * mlfn(e0, e1, e2, e3, lat_origin),
            is_sphere: es < 0.00001,
        })
    }

    /// (lon, lat) radians to (easting, northing) meters.
    pub fn forward(&self, lon: f64, lat: f64) -> Result<(f64, f64)> {
        let delta_lon = adjust_lon(lon - self.lon_center);
        let (sin_phi, cos_phi) = lat.sin_cos();
        let k_r = self.r_major * self.scale_factor;

        if self.is_sphere {
            let b = cos_phi * delta_lon.sin();
            if (b.abs() - 1.0).abs() < 1e-10 {
                return Err(ProjectionError::out_of_domain("point projects into infinity"));
            }
            let x = 0.5 * k_r * ((1.0 + b) / (1.0 - b)).ln();
            let mut con = (cos_phi * delta_lon.cos() / (1.0 - b * b).sqrt()).clamp(-1.0, 1.0).acos();
            if lat < 0.0 {
                con = -con;
            }
            let y = k_r * (con - self.lat_origin);
            return Ok((x + self.false_easting, y + self.false_northing));
        }

        let al = cos_phi * delta_lon;
        let als = al * al;
        let c = self.esp * cos_phi * cos_phi;
        let tq = lat.tan();
        let t = tq * tq;
        let con = 1.0 - self.es * sin_phi * sin_phi;
        let n = self.r_major / con.sqrt();
        let ml = self.r_major * mlfn(self.e0, self.e1, self.e2, self.e3, lat);

        let x = self.scale_factor
            * n
            * al
            * (1.0
                + als / 6.0
                    * (1.0 - t + c + als / 20.0 * (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * self.esp)))
            + self.false_easting;
        let y = self.scale_factor
            * (ml - self.ml0
                + n * tq
                    * (als
                        * (0.5
                            + als / 24.0
                                * (5.0 - t + 9.0 * c + 4.0 * c * c
                                    + als / 30.0
                                        * (61.0 - 58.0 * t + t * t + 600.0 * c
                                            - 330.0 * self.esp)))))
            + self.false_northing;

        Ok((x, y))
    }

    /// (easting, northing) meters to (lon, lat) radians.
    pub fn inverse(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let x = x - self.false_easting;
        let y = y - self.false_northing;

        if self.is_sphere {
            let k_r = self.r_major * self.scale_factor;
            let f = (x / k_r).exp();
            let g = 0.5 * (f - 1.0 / f);
            let temp = self.lat_origin + y / k_r;
            let h = temp.cos();
            let con = ((1.0 - h * h) / (1.0 + g * g)).sqrt();
            let mut lat = asinz(con);
            if temp < 0.0 {
                lat = -lat;
            }
            if g == 0.0 && h == 0.0 {
                return Ok((self.lon_center, lat));
            }
            return Ok((adjust_lon(g.atan2(h) + self.lon_center), lat));
        }

        let con = (self.ml0 + y / self.scale_factor) / self.r_major;
        let mut phi = con;
        let mut iterations = 0;
        loop {
            let delta_phi = (con + self.e1 * (2.0 * phi).sin() - self.e2 * (4.0 * phi).sin()
                + self.e3 * (6.0 * phi).sin())
                / self.e0
                - phi;
            phi += delta_phi;
            if delta_phi.abs() <= EPSLN {
                break;
            }
            if iterations >= MAX_INVERSE_ITERATIONS {
                return Err(ProjectionError::NoConvergence("transverse mercator latitude"));
            }
            iterations += 1;
        }

        if phi.abs() >= HALF_PI {
            let lat = if y < 0.0 { -HALF_PI } else { HALF_PI };
            return Ok((self.lon_center, lat));
        }

        let (sin_phi, cos_phi) = phi.sin_cos();
        let tan_phi = phi.tan();
        let c = self.esp * cos_phi * cos_phi;
        let cs = c * c;
        let t = tan_phi * tan_phi;
        let ts = t * t;
        let con = 1.0 - self.es * sin_phi * sin_phi;
        let n = self.r_major / con.sqrt();
        let r = n * (1.0 - self.es) / con;
        let d = x / (n * self.scale_factor);
        let ds = d * d;

        let lat = phi
            - (n * tan_phi * ds / r)
                * (0.5
                    - ds / 24.0
                        * (5.0 + 3.0 * t + 10.0 * c - 4.0 * cs - 9.0 * self.esp
                            - ds / 30.0
                                * (61.0 + 90.0 * t + 298.0 * c + 45.0 * ts
                                    - 252.0 * self.esp
                                    - 3.0 * cs)));
        let lon = adjust_lon(
            self.lon_center
                + (d * (1.0
                    - ds / 6.0
                        * (1.0 + 2.0 * t + c
                            - ds / 20.0
                                * (5.0 - 2.0 * c + 28.0 * t - 3.0 * cs + 8.0 * self.esp
                                    + 24.0 * ts)))
                    / cos_phi),
        );

        Ok((lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use espa_common::NPROJ_PARAM;

    fn wgs84() -> Ellipsoid {
        Ellipsoid::from_code(12, &[0.0; NPROJ_PARAM]).unwrap()
    }

    #[test]
    fn test_central_meridian_point() {
        // Zone 13 is centered on 105°W
        let proj = TransverseMercator::utm(13, wgs84()).unwrap();
        let (x, y) = proj
            .forward((-105.0f64).to_radians(), 40.0f64.to_radians())
            .unwrap();
        assert!((x - 500000.0).abs() < 1e-6, "x = {}", x);
        assert!((y - 4427757.2).abs() < 1.0, "y = {}", y);
    }

    #[test]
    fn test_roundtrip_north() {
        let proj = TransverseMercator::utm(13, wgs84()).unwrap();
        let lon = (-103.2f64).to_radians();
        let lat = 41.7f64.to_radians();
        let (x, y) = proj.forward(lon, lat).unwrap();
        let (lon2, lat2) = proj.inverse(x, y).unwrap();
        assert!((lon2 - lon).abs() < 1e-9);
        assert!((lat2 - lat).abs() < 1e-9);
    }

    #[test]
    fn test_southern_zone_false_northing() {
        let proj = TransverseMercator::utm(-56, wgs84()).unwrap();
        assert_eq!(proj.false_northing, 10_000_000.0);

        let lon = 151.2f64.to_radians();
        let lat = (-33.9f64).to_radians();
        let (x, y) = proj.forward(lon, lat).unwrap();
        assert!(y > 6_000_000.0 && y < 6_400_000.0, "y = {}", y);

        let (lon2, lat2) = proj.inverse(x, y).unwrap();
        assert!((lon2 - lon).abs() < 1e-9);
        assert!((lat2 - lat).abs() < 1e-9);
    }

    #[test]
    fn test_sphere_roundtrip() {
        let sphere = Ellipsoid::from_code(19, &[0.0; NPROJ_PARAM]).unwrap();
        let proj = TransverseMercator::utm(31, sphere).unwrap();
        let lon = 4.5f64.to_radians();
        let lat = 52.0f64.to_radians();
        let (x, y) = proj.forward(lon, lat).unwrap();
        let (lon2, lat2) = proj.inverse(x, y).unwrap();
        assert!((lon2 - lon).abs() < 1e-9);
        assert!((lat2 - lat).abs() < 1e-9);
    }

    #[test]
    fn test_illegal_zone() {
        assert!(matches!(
            TransverseMercator::utm(0, wgs84()),
            Err(ProjectionError::IllegalZone(0))
        ));
        assert!(TransverseMercator::utm(61, wgs84()).is_err());
    }
}
