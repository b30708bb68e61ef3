//! Reference ellipsoids addressed by GCTP spheroid code.

use espa_common::NPROJ_PARAM;

use crate::error::{ProjectionError, Result};

/// (name, semimajor axis, semiminor axis) in meters, indexed by spheroid code.
const SPHEROIDS: [(&str, f64, f64); 20] = [
    ("Clarke 1866", 6378206.4, 6356583.8),
    ("Clarke 1880", 6378249.145, 6356514.86955),
    ("Bessel", 6377397.155, 6356078.96284),
    ("International 1967", 6378157.5, 6356772.2),
    ("International 1909", 6378388.0, 6356911.94613),
    ("WGS 72", 6378135.0, 6356750.519915),
    ("Everest", 6377276.3452, 6356075.4133),
    ("WGS 66", 6378145.0, 6356759.769356),
    ("GRS 1980", 6378137.0, 6356752.31414),
    ("Airy", 6377563.396, 6356256.91),
    ("Modified Everest", 6377304.063, 6356103.039),
    ("Modified Airy", 6377340.189, 6356034.448),
    ("WGS 84", 6378137.0, 6356752.314245),
    ("Southeast Asia", 6378155.0, 6356773.3205),
    ("Australian National", 6378160.0, 6356774.719),
    ("Krassovsky", 6378245.0, 6356863.0188),
    ("Hough", 6378270.0, 6356794.343479),
    ("Mercury 1960", 6378166.0, 6356784.283666),
    ("Modified Mercury 1968", 6378150.0, 6356768.337303),
    ("Sphere of radius 6370997m", 6370997.0, 6370997.0),
];

/// Semimajor/semiminor axes of the reference surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub semi_major: f64,
    pub semi_minor: f64,
}

impl Ellipsoid {
    /// Resolve a spheroid code.
    ///
    /// Codes 0..=19 index the built-in table. A negative code reads the axes
    /// from the projection parameters: slot 0 is the semimajor axis, slot 1
    /// is zero for a sphere, the semiminor axis when greater than one, or the
    /// eccentricity squared otherwise.
    pub fn from_code(code: i32, params: &[f64; NPROJ_PARAM]) -> Result<Self> {
        if code < 0 {
            return Self::from_params(params);
        }
        SPHEROIDS
            .get(code as usize)
            .map(|&(_, semi_major, semi_minor)| Self {
                semi_major,
                semi_minor,
            })
            .ok_or_else(|| ProjectionError::IllegalSpheroid(format!("code {}", code)))
    }

    fn from_params(params: &[f64; NPROJ_PARAM]) -> Result<Self> {
        let semi_major = params[0];
        if semi_major <= 0.0 {
            return Err(ProjectionError::IllegalSpheroid(format!(
                "semimajor axis {} in parameter 0",
                semi_major
            )));
        }

        let second = params[1];
        let semi_minor = if second == 0.0 {
            semi_major
        } else if second > 1.0 {
            second
        } else if second > 0.0 {
            semi_major * (1.0 - second).sqrt()
        } else {
            return Err(ProjectionError::IllegalSpheroid(format!(
                "parameter 1 must not be negative: {}",
                second
            )));
        };

        Ok(Self {
            semi_major,
            semi_minor,
        })
    }

    /// Name of a table spheroid.
    pub fn name(code: i32) -> Option<&'static str> {
        usize::try_from(code)
            .ok()
            .and_then(|index| SPHEROIDS.get(index))
            .map(|&(name, _, _)| name)
    }

    pub fn eccentricity_squared(&self) -> f64 {
        let ratio = self.semi_minor / self.semi_major;
        1.0 - ratio * ratio
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    pub fn is_sphere(&self) -> bool {
        self.semi_major == self.semi_minor
    }
}
